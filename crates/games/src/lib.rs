//! Registered games: identity, JSON projection and module lookup.
//!
//! A [`Game`] names an executable, the directory its mods live in and the
//! module class that handles it. Its [`GameId`] is derived from the
//! executable path alone, so equality, hashing and lookup all key on that
//! path string.
//!
//! # Modules
//!
//! Display names come from a [`ModuleResolver`]. [`ModuleCatalog`] is the
//! in-process implementation; [`NoModules`] resolves nothing, leaving every
//! game named after its executable.

pub mod game;
pub mod id;
pub mod module;

// Re-export primary types for convenience.
pub use game::Game;
pub use id::GameId;
pub use module::{GameModule, ModuleCatalog, ModuleResolver, NoModules};
