//! Component lookup by name
//!
//! A [`Finder`] maps component names (`users.profile-card`, or
//! `crm::users.profile-card` for a namespaced module) to view files and
//! class names. A [`FinderChain`] composes finders so a module-scoped finder
//! can sit in front of the application's default one instead of replacing it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::component::nest;
use super::naming::{kebab, studly};

/// A view directory paired with the class namespace of its components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub view_path: PathBuf,
    pub class_namespace: String,
}

impl Location {
    fn view_file(&self, name: &str) -> PathBuf {
        let relative: Vec<String> = name.split('.').map(kebab).collect();
        nest(&self.view_path, &format!("{}.blade.php", relative.join("/")))
    }

    fn class_name(&self, name: &str) -> String {
        let segments: Vec<String> = name.split('.').map(studly).collect();
        format!(
            "{}\\{}",
            self.class_namespace.trim_end_matches('\\'),
            segments.join("\\")
        )
    }
}

/// A component found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundComponent {
    pub view_file: PathBuf,
    pub class_name: String,
}

/// Locations and namespace aliases components are looked up in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finder {
    locations: Vec<Location>,
    namespaces: BTreeMap<String, Location>,
}

impl Finder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `view_path` for bare component names.
    pub fn add_location(&mut self, view_path: impl Into<PathBuf>, class_namespace: impl Into<String>) {
        self.locations.push(Location {
            view_path: view_path.into(),
            class_namespace: class_namespace.into(),
        });
    }

    /// Resolve `namespace::name` against `view_path`.
    pub fn add_namespace(
        &mut self,
        namespace: impl Into<String>,
        view_path: impl Into<PathBuf>,
        class_namespace: impl Into<String>,
    ) {
        self.namespaces.insert(
            namespace.into(),
            Location {
                view_path: view_path.into(),
                class_namespace: class_namespace.into(),
            },
        );
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn namespace(&self, namespace: &str) -> Option<&Location> {
        self.namespaces.get(namespace)
    }

    /// Find a component whose view file exists.
    pub fn find(&self, name: &str) -> Option<FoundComponent> {
        self.candidates(name).into_iter().find_map(|(location, name)| {
            let view_file = location.view_file(name);
            view_file.is_file().then(|| FoundComponent {
                view_file,
                class_name: location.class_name(name),
            })
        })
    }

    /// Class name `name` would have, without touching the filesystem.
    pub fn class_name(&self, name: &str) -> Option<String> {
        self.candidates(name)
            .first()
            .map(|(location, name)| location.class_name(name))
    }

    fn candidates<'a>(&'a self, name: &'a str) -> Vec<(&'a Location, &'a str)> {
        match name.split_once("::") {
            Some((namespace, rest)) => self
                .namespaces
                .get(namespace)
                .map(|location| vec![(location, rest)])
                .unwrap_or_default(),
            None => self.locations.iter().map(|l| (l, name)).collect(),
        }
    }
}

/// Finders consulted in order; the first match wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderChain {
    finders: Vec<Finder>,
}

impl FinderChain {
    pub fn new(finder: Finder) -> Self {
        Self {
            finders: vec![finder],
        }
    }

    /// Put `finder` in front of the existing ones.
    pub fn prepend(&mut self, finder: Finder) {
        self.finders.insert(0, finder);
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<FoundComponent> {
        self.finders.iter().find_map(|f| f.find(name))
    }

    pub fn class_name(&self, name: &str) -> Option<String> {
        self.finders.iter().find_map(|f| f.class_name(name))
    }
}
