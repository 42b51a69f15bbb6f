fn main() {
    println!("Run `cargo test -p games-file-compat` to execute games file compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use modshelf_games::{Game, GameId, GameModule, ModuleCatalog, NoModules};
    use modshelf_json_store::FsJsonStore;
    use modshelf_registry::{GameRegistry, RegistryConfig};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Copies a fixture into `dir` as `Games.json` and returns its path.
    fn stage_fixture(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join("Games.json");
        fs::copy(fixtures_dir().join(name), &path)
            .unwrap_or_else(|e| panic!("failed to stage fixture {name}: {e}"));
        path
    }

    fn read_games_file(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    struct Quake;

    impl GameModule for Quake {
        fn module_class(&self) -> &str {
            "quake.QuakeModule"
        }

        fn readable_name(&self) -> String {
            "Quake III Arena".into()
        }
    }

    #[test]
    fn recorded_uuids_match_derived_ids() {
        let fixture = load_fixture("games_recorded.json");
        for entry in fixture["games"].as_array().unwrap() {
            let game = Game::from_json(entry).unwrap();
            let recorded: GameId = entry["uuid"].as_str().unwrap().parse().unwrap();
            assert_eq!(game.id(), recorded, "uuid mismatch for {}", game.executable_path());
        }
    }

    #[test]
    fn recorded_file_loads_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = stage_fixture(dir.path(), "games_recorded.json");

        let mut registry = GameRegistry::new(FsJsonStore, &path);
        registry.load().unwrap();

        assert_eq!(registry.len(), 3);
        let skyrim = registry.all()[2].clone();
        assert_eq!(skyrim.mods_directory(), "C:\\Games\\Skyrim\\Data");
        assert_eq!(skyrim.module_class(), "");
    }

    #[test]
    fn recorded_file_survives_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = stage_fixture(dir.path(), "games_recorded.json");

        let mut registry = GameRegistry::new(FsJsonStore, &path);
        registry.load().unwrap();
        registry.save().unwrap();

        let saved = read_games_file(&path);
        let fixture = load_fixture("games_recorded.json");
        assert_eq!(saved["lastSelected"], fixture["lastSelected"]);
        assert_eq!(saved["window"], fixture["window"]);

        // The Skyrim entry was written without `moduleClass`; its projection
        // carries `"moduleClass": null`, differs, and gets appended once.
        let games = saved["games"].as_array().unwrap();
        assert_eq!(games.len(), 4);
        assert_eq!(games[..3], fixture["games"].as_array().unwrap()[..]);
        assert_eq!(games[3]["gameExe"], "C:\\Games\\Skyrim\\SkyrimSE.exe");
        assert!(games[3]["moduleClass"].is_null());
        assert_eq!(games[3]["modsFolder"], "C:\\Games\\Skyrim\\Data");
    }

    #[test]
    fn missing_array_is_added_and_other_keys_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = stage_fixture(dir.path(), "games_without_array.json");

        let mut registry = GameRegistry::open(&RegistryConfig::at(&path)).unwrap();
        registry.load().unwrap();
        assert!(registry.is_empty());

        let saved = read_games_file(&path);
        assert_eq!(saved["theme"], "dark");
        assert_eq!(saved["lastSelected"], "");
        assert_eq!(saved["games"], serde_json::json!([]));
    }

    #[test]
    fn display_names_from_recorded_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = stage_fixture(dir.path(), "games_recorded.json");
        let mut registry = GameRegistry::new(FsJsonStore, &path);
        registry.load().unwrap();

        let mut catalog = ModuleCatalog::new();
        catalog.register(Quake);

        let names: Vec<String> = registry
            .all()
            .iter()
            .map(|g| g.display_name(&catalog))
            .collect();
        assert_eq!(names, ["foo", "Quake III Arena", "SkyrimSE"]);

        let fallback: Vec<String> = registry
            .all()
            .iter()
            .map(|g| g.display_name(&NoModules))
            .collect();
        assert_eq!(fallback, ["foo", "Quake3", "SkyrimSE"]);
    }
}
