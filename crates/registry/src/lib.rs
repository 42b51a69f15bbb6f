//! Registry of known games, persisted to a JSON file shared with other
//! settings.
//!
//! # Persistence
//!
//! - **Load**: read the games array into memory, creating an empty array
//!   in the file when the key is missing
//! - **Save**: re-read the file and append every game whose JSON object is
//!   not already in the array; other keys are written back untouched
//!
//! The registry is an explicit value: callers own it and pass it where it
//! is needed. It is not synchronised; wrap it in a mutex before sharing it
//! between threads, so that the in-memory list and the read-merge-write
//! cycle of `save` are guarded together.

pub mod config;
pub mod error;
pub mod registry;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::{GAMES_KEY, GameRegistry, RegistryState};
