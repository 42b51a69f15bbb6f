//! The games registry and its merge-write persistence.

use std::path::{Path, PathBuf};

use modshelf_games::{Game, GameId};
use modshelf_json_store::{FsJsonStore, JsonStore, StoreError, get_array};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::RegistryError;

/// Key of the games array in the backing document.
pub const GAMES_KEY: &str = "games";

/// Whether [`GameRegistry::load`] has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Loaded,
}

/// Ordered set of known games, backed by a JSON document.
///
/// Games are unique by [`GameId`] and kept in insertion order. The backing
/// document may hold keys owned by other writers; [`save`](Self::save)
/// re-reads it and merges into it instead of overwriting it.
///
/// Call [`load`](Self::load) once before adding games: loading appends to
/// whatever is already in memory.
#[derive(Debug)]
pub struct GameRegistry<S: JsonStore = FsJsonStore> {
    store: S,
    path: PathBuf,
    games: Vec<Game>,
    state: RegistryState,
}

impl GameRegistry<FsJsonStore> {
    /// Opens the registry described by `config` on the local filesystem.
    ///
    /// Creates the games file (and its directory) as `{}` when it does not
    /// exist yet. Nothing is loaded.
    pub fn open(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let store = FsJsonStore::new();
        if store.ensure_document(&config.games_file)? {
            info!(path = %config.games_file.display(), "created games file");
        }
        Ok(Self::new(store, config.games_file.clone()))
    }
}

impl<S: JsonStore> GameRegistry<S> {
    /// Creates an empty, unloaded registry over the document at `path`.
    pub fn new(store: S, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            games: Vec::new(),
            state: RegistryState::Uninitialized,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Appends `game` unless a game with the same id is already present.
    ///
    /// Returns `true` if the game was added.
    pub fn add(&mut self, game: Game) -> bool {
        let id = game.id();
        if self.games.iter().any(|g| g.id() == id) {
            debug!(uuid = %id, "game already registered");
            return false;
        }
        debug!(uuid = %id, exe = %game.executable_path(), "registered game");
        self.games.push(game);
        true
    }

    /// Returns the game with the given id.
    pub fn lookup(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id() == id)
    }

    /// All games in insertion order.
    pub fn all(&self) -> &[Game] {
        &self.games
    }

    /// Reads the backing document into memory.
    ///
    /// A document without a games array gets an empty one, written back
    /// immediately, and nothing is loaded. Otherwise every element is
    /// decoded and appended as-is, duplicates included. If any element
    /// fails to decode, nothing from this load is kept.
    pub fn load(&mut self) -> Result<(), RegistryError> {
        if self.state == RegistryState::Loaded {
            warn!(path = %self.path.display(), "games list loaded twice, entries will repeat");
        }

        let mut document = self.store.read_document(&self.path)?;
        let decoded = get_array(&document, GAMES_KEY)?
            .map(|items| decode_games(items))
            .transpose()?;

        match decoded {
            Some(games) => {
                debug!(path = %self.path.display(), count = games.len(), "loaded games list");
                self.games.extend(games);
            }
            None => {
                document.insert(GAMES_KEY.into(), Value::Array(Vec::new()));
                self.store.save_document(&self.path, &document)?;
                info!(path = %self.path.display(), "added empty games array");
            }
        }

        self.state = RegistryState::Loaded;
        Ok(())
    }

    /// Merges the in-memory games into the backing document.
    ///
    /// The document is re-read so keys written by others are kept. Each
    /// game's JSON projection is appended unless an equal object is already
    /// in the array. Equality is structural: a game whose mods folder or
    /// module class changed is appended again next to its stale entry.
    pub fn save(&self) -> Result<(), RegistryError> {
        info!(path = %self.path.display(), "writing games list to file");

        let mut document = self.store.read_document(&self.path)?;
        let array = match document
            .entry(GAMES_KEY)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => items,
            _ => return Err(StoreError::NotAnArray(GAMES_KEY.into()).into()),
        };

        let mut appended = 0usize;
        for game in &self.games {
            let object = game.to_json();
            if !array.contains(&object) {
                array.push(object);
                appended += 1;
            }
        }

        self.store.save_document(&self.path, &document)?;
        debug!(path = %self.path.display(), appended, "games list written");
        Ok(())
    }
}

fn decode_games(items: &[Value]) -> Result<Vec<Game>, RegistryError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Game::from_json(item).map_err(|source| RegistryError::MalformedEntry { index, source })
        })
        .collect()
}
