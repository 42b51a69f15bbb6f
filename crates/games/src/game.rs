//! The registered game entity and its JSON projection.

use std::hash::{Hash, Hasher};

use serde::Deserialize;
use tracing::debug;

use crate::id::GameId;
use crate::module::ModuleResolver;

/// A registered game: executable, mods directory and module class.
///
/// Immutable once constructed. Identity is derived from the executable
/// path on every call to [`Game::id`], so two games with the same path are
/// the same entity regardless of their other fields.
///
/// `mods_directory` and `module_class` are `None` only for games decoded
/// from entries that stored them as `null`; the projection writes them back
/// as `null` so a reloaded entry still matches its stored object.
#[derive(Debug, Clone)]
pub struct Game {
    executable_path: String,
    mods_directory: Option<String>,
    module_class: Option<String>,
}

/// One element of the persisted games array. The stored `uuid` is not
/// read back; identity is recomputed from `gameExe`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameRecord {
    game_exe: String,
    #[serde(default)]
    mods_folder: Option<String>,
    #[serde(default)]
    module_class: Option<String>,
}

impl Game {
    /// Creates a game. No validation is performed; the executable does not
    /// have to exist.
    pub fn new(
        executable_path: impl Into<String>,
        mods_directory: impl Into<String>,
        module_class: impl Into<String>,
    ) -> Self {
        Self {
            executable_path: executable_path.into(),
            mods_directory: Some(mods_directory.into()),
            module_class: Some(module_class.into()),
        }
    }

    pub fn executable_path(&self) -> &str {
        &self.executable_path
    }

    /// Mods directory; empty when stored as `null`.
    pub fn mods_directory(&self) -> &str {
        self.mods_directory.as_deref().unwrap_or_default()
    }

    /// Module class name; may be empty.
    pub fn module_class(&self) -> &str {
        self.module_class.as_deref().unwrap_or_default()
    }

    /// Returns the path-derived identifier.
    pub fn id(&self) -> GameId {
        GameId::from_executable(&self.executable_path)
    }

    /// Projects the game to the object stored in the games array.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "uuid": self.id().to_string(),
            "gameExe": self.executable_path,
            "modsFolder": self.mods_directory,
            "moduleClass": self.module_class,
        })
    }

    /// Decodes one games-array element.
    ///
    /// `gameExe` is required. A missing or null `modsFolder` / `moduleClass`
    /// reads as an empty string and projects back as `null`. The stored
    /// `uuid` is ignored.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let record = GameRecord::deserialize(value)?;
        Ok(Self {
            executable_path: record.game_exe,
            mods_directory: record.mods_folder,
            module_class: record.module_class,
        })
    }

    /// Human-readable name.
    ///
    /// Uses the module resolved for this game when there is one, otherwise
    /// the executable's file name cut before its first `.`.
    pub fn display_name(&self, resolver: &dyn ModuleResolver) -> String {
        match resolver.resolve_for_game(self) {
            Some(module) => module.readable_name(),
            None => {
                debug!(
                    exe = %self.executable_path,
                    module_class = self.module_class(),
                    "no module for game, using file name"
                );
                self.file_stem().to_string()
            }
        }
    }

    /// Last path component of the executable, truncated before the first
    /// `.`. Both `/` and `\` count as separators.
    pub fn file_stem(&self) -> &str {
        let name = self
            .executable_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();
        name.split('.').next().unwrap_or(name)
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
