//! Module lookup used to name games.
//!
//! A module is a plugin that knows how to handle one game. The registry
//! never owns modules; it only asks a [`ModuleResolver`] for one when a
//! display name is needed.

use std::collections::HashMap;

use crate::game::Game;

/// A plugin associated with a game.
pub trait GameModule: Send + Sync {
    /// Class name a game refers to in its `moduleClass` field.
    fn module_class(&self) -> &str;

    /// Name shown to users for games handled by this module.
    fn readable_name(&self) -> String;
}

/// Finds the module responsible for a game.
///
/// Not finding one is an expected outcome and is reported as `None`.
pub trait ModuleResolver {
    fn resolve_for_game(&self, game: &Game) -> Option<&dyn GameModule>;
}

/// Resolver with no modules installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModules;

impl ModuleResolver for NoModules {
    fn resolve_for_game(&self, _game: &Game) -> Option<&dyn GameModule> {
        None
    }
}

/// Modules keyed by class name.
#[derive(Default)]
pub struct ModuleCatalog {
    modules: HashMap<String, Box<dyn GameModule>>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module under its class name, returning the module it
    /// replaced, if any.
    pub fn register<M: GameModule + 'static>(&mut self, module: M) -> Option<Box<dyn GameModule>> {
        let class = module.module_class().to_string();
        self.modules.insert(class, Box::new(module))
    }

    pub fn get(&self, module_class: &str) -> Option<&dyn GameModule> {
        self.modules.get(module_class).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleResolver for ModuleCatalog {
    fn resolve_for_game(&self, game: &Game) -> Option<&dyn GameModule> {
        if game.module_class().is_empty() {
            return None;
        }
        self.get(game.module_class())
    }
}

impl std::fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut classes: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        classes.sort_unstable();
        f.debug_struct("ModuleCatalog")
            .field("modules", &classes)
            .finish()
    }
}
