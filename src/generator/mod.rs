//! # Generator Module
//!
//! The generator module scaffolds Livewire components: a PHP class and a
//! Blade view, rendered from stubs, either in the application's own
//! directories or inside a module.
//!
//! ## Architecture
//!
//! ```text
//! dotted name → Layout::component (ComponentSpec) → ScaffoldWriter → class + view
//! ```
//!
//! 1. **Layout** - Where classes and views go (from config, or from a module)
//! 2. **ComponentSpec** - Class name, namespace, template id and both paths
//! 3. **ScaffoldWriter** - Creates directories, substitutes stub tokens, writes files
//!
//! Two [`Generator`] strategies share that pipeline:
//!
//! - **[`DefaultGenerator`]** - Uses the `livewire.*` configuration and refuses to
//!   overwrite an existing class unless forced
//! - **[`ModuleGenerator`]** - Derives its layout from a [`ModuleDescriptor`] and
//!   always overwrites
//!
//! ## Generated Structure
//!
//! Inside a module:
//!
//! ```text
//! app-modules/crm/
//! ├── src/Livewire/Users/ProfileCard.php
//! ├── resources/views/livewire/users/profile-card.blade.php
//! └── tests/Feature/Livewire/Users/ProfileCardTest.php   (with --test)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modular_livewire::generator::{Generator, ModuleGenerator, StubSet};
//! use modular_livewire::modules::ModuleDescriptor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let crm = ModuleDescriptor::new("crm", "/srv/app/app-modules/crm", "Modules\\Crm\\");
//! let written = ModuleGenerator::new(&crm).generate("users.profile-card", &StubSet::default())?;
//! println!("{}", written.message());
//! # Ok(())
//! # }
//! ```
//!
//! ## Stub Customization
//!
//! `stubs/livewire.stub` and `stubs/livewire.view.stub` in the application root
//! replace the built-in stubs. The class stub understands `[namespace]`,
//! `[class]` and `[view]`; the view stub is copied verbatim.

mod component;
mod finder;
mod naming;
mod scaffold;
mod stubs;
mod templates;

pub use component::{ComponentSpec, Layout};
pub use finder::{Finder, FinderChain, FoundComponent, Location};
pub use naming::{kebab, studly};
pub use scaffold::{render_class, ScaffoldWriter, WriteResult};
pub use stubs::{StubSet, CLASS_STUB, VIEW_STUB};
pub use templates::{write_feature_test, FeatureTestTemplateData, TestLayout};

use std::path::Path;

use crate::config::LivewireConfig;
use crate::error::MakeError;
use crate::modules::ModuleDescriptor;

/// Strategy that turns a dotted component name into files on disk
pub trait Generator {
    /// Where this generator places classes and views
    fn layout(&self) -> &Layout;

    /// Where feature tests for this generator's components go
    fn test_layout(&self) -> TestLayout;

    /// Scaffold the component `name` from `stubs`.
    ///
    /// # Errors
    ///
    /// [`MakeError::EmptyName`] for a blank name, [`MakeError::Io`] when a
    /// directory or file cannot be written.
    fn generate(&self, name: &str, stubs: &StubSet) -> Result<WriteResult, MakeError>;

    /// Finder that resolves components produced by this generator
    fn finder(&self) -> Finder {
        let layout = self.layout();
        let mut finder = Finder::new();
        finder.add_location(&layout.view_dir, layout.namespace.as_str());
        finder
    }
}

/// The application's own generator, driven by `livewire.*` configuration
#[derive(Debug, Clone)]
pub struct DefaultGenerator {
    layout: Layout,
    tests: TestLayout,
    force: bool,
}

impl DefaultGenerator {
    pub fn new(config: &LivewireConfig, base_path: &Path) -> Self {
        Self {
            layout: Layout::from_config(config, base_path),
            tests: TestLayout::for_app(base_path),
            force: false,
        }
    }

    /// Overwrite an existing class file instead of failing.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl Generator for DefaultGenerator {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn test_layout(&self) -> TestLayout {
        self.tests.clone()
    }

    fn generate(&self, name: &str, stubs: &StubSet) -> Result<WriteResult, MakeError> {
        let spec = self.layout.component(name)?;
        if spec.class_file_path.exists() && !self.force {
            return Err(MakeError::ComponentExists {
                path: spec.class_file_path,
            });
        }
        tracing::debug!(component = %spec.dotted_name, class = %spec.qualified_class(), "generating application component");
        ScaffoldWriter.write(&spec, &stubs.class, &stubs.view)
    }
}

/// Generator that places components inside one module
///
/// Holds the module by reference for the duration of a single command.
#[derive(Debug, Clone)]
pub struct ModuleGenerator<'a> {
    module: &'a ModuleDescriptor,
    layout: Layout,
}

impl<'a> ModuleGenerator<'a> {
    pub fn new(module: &'a ModuleDescriptor) -> Self {
        Self {
            module,
            layout: Layout::for_module(module),
        }
    }

    pub fn module(&self) -> &ModuleDescriptor {
        self.module
    }
}

impl Generator for ModuleGenerator<'_> {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn test_layout(&self) -> TestLayout {
        TestLayout::for_module(self.module)
    }

    fn generate(&self, name: &str, stubs: &StubSet) -> Result<WriteResult, MakeError> {
        let spec = ComponentSpec::compute(name, self.module)?;
        tracing::debug!(
            module = %self.module.name(),
            component = %spec.dotted_name,
            class = %spec.qualified_class(),
            "generating module component"
        );
        ScaffoldWriter.write(&spec, &stubs.class, &stubs.view)
    }

    /// Module location plus a `<module>::` namespace alias
    fn finder(&self) -> Finder {
        let mut finder = Finder::new();
        finder.add_location(&self.layout.view_dir, self.layout.namespace.as_str());
        finder.add_namespace(
            self.module.name(),
            &self.layout.view_dir,
            self.layout.namespace.as_str(),
        );
        finder
    }
}

/// Pick the generator for an optional module.
///
/// With a module the module generator is used; without one the injected
/// base generator handles the request unchanged.
pub fn select<'a>(
    module: Option<&'a ModuleDescriptor>,
    base: &'a dyn Generator,
) -> Box<dyn Generator + 'a> {
    match module {
        Some(module) => Box::new(ModuleGenerator::new(module)),
        None => Box::new(Delegate(base)),
    }
}

struct Delegate<'a>(&'a dyn Generator);

impl Generator for Delegate<'_> {
    fn layout(&self) -> &Layout {
        self.0.layout()
    }

    fn test_layout(&self) -> TestLayout {
        self.0.test_layout()
    }

    fn generate(&self, name: &str, stubs: &StubSet) -> Result<WriteResult, MakeError> {
        self.0.generate(name, stubs)
    }

    fn finder(&self) -> Finder {
        self.0.finder()
    }
}
