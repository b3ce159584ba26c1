use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use super::Command;
use crate::config::ProjectConfig;
use crate::generator::{Finder, FinderChain, Layout, StubSet};
use crate::modules::ModuleRegistry;

/// Builds a command instance
pub type CommandFactory = Rc<dyn Fn(&Container) -> Box<dyn Command>>;
/// Replaces or decorates a freshly built command instance
pub type CommandExtender = Rc<dyn Fn(Box<dyn Command>, &Container) -> Box<dyn Command>>;

/// Read-only services shared by every command of a process
#[derive(Debug, Clone)]
pub struct Services {
    /// Root of the Laravel application
    pub base_path: PathBuf,
    pub config: ProjectConfig,
    pub modules: ModuleRegistry,
    pub stubs: StubSet,
}

/// Command bindings, `extend` rules and the shared component finder
pub struct Container {
    services: Rc<Services>,
    bindings: HashMap<String, CommandFactory>,
    extenders: HashMap<String, Vec<CommandExtender>>,
    app_finder: Finder,
    finder: FinderChain,
}

impl Container {
    /// New container whose finder covers the application's own view directory.
    pub fn new(services: Services) -> Self {
        let layout = Layout::from_config(&services.config.livewire, &services.base_path);
        let mut finder = Finder::new();
        finder.add_location(layout.view_dir, layout.namespace);

        Self {
            services: Rc::new(services),
            bindings: HashMap::new(),
            extenders: HashMap::new(),
            finder: FinderChain::new(finder.clone()),
            app_finder: finder,
        }
    }

    pub fn services(&self) -> &Rc<Services> {
        &self.services
    }

    /// Register (or replace) the factory for `key`.
    pub fn bind(&mut self, key: &str, factory: CommandFactory) {
        self.bindings.insert(key.to_string(), factory);
    }

    /// Whether anything is bound under `key`
    pub fn bound(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Run `extender` on every instance built for `key` from now on.
    pub fn extend(&mut self, key: &str, extender: CommandExtender) {
        self.extenders
            .entry(key.to_string())
            .or_default()
            .push(extender);
    }

    /// Build the command bound to `key`, passing it through its extenders in
    /// registration order.
    pub fn make(&self, key: &str) -> Option<Box<dyn Command>> {
        let factory = self.bindings.get(key)?;
        let mut command = factory(self);
        if let Some(extenders) = self.extenders.get(key) {
            for extender in extenders {
                command = extender(command, self);
            }
        }
        Some(command)
    }

    /// Finder currently used to look components up
    pub fn finder(&self) -> &FinderChain {
        &self.finder
    }

    /// Put `scoped` in front of the application's finder.
    ///
    /// Replaces any earlier scope: one module is active per container.
    pub fn scope_finder(&mut self, scoped: Finder) {
        let mut chain = FinderChain::new(self.app_finder.clone());
        chain.prepend(scoped);
        self.finder = chain;
    }
}
