use std::path::{Path, PathBuf};

use super::naming::{kebab, studly};
use crate::config::LivewireConfig;
use crate::error::MakeError;
use crate::modules::ModuleDescriptor;

/// Where a generator places classes and views
///
/// The default generator derives its layout from the `livewire.*` config;
/// the module generator derives one from a [`ModuleDescriptor`] for the
/// duration of a single command without touching the loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Root namespace of generated classes (no trailing `\`)
    pub namespace: String,
    /// Directory mirroring `namespace`
    pub class_dir: PathBuf,
    /// Root directory of generated views
    pub view_dir: PathBuf,
    /// Dotted prefix of template ids (`livewire`)
    pub view_prefix: String,
}

impl Layout {
    /// Layout inside a module: `src/Livewire` and `resources/views/livewire`.
    pub fn for_module(module: &ModuleDescriptor) -> Self {
        Self {
            namespace: module.qualify("Livewire"),
            class_dir: module.path("src/Livewire"),
            view_dir: module.path("resources/views/livewire"),
            view_prefix: "livewire".to_string(),
        }
    }

    /// Layout of the application itself, as configured.
    pub fn from_config(config: &LivewireConfig, base_path: &Path) -> Self {
        let namespace = config.class_namespace.trim_end_matches('\\').to_string();
        let class_dir = match namespace.strip_prefix(config.app_namespace.as_str()) {
            Some(rest) => base_path.join("app").join(rest.replace('\\', "/")),
            None => base_path.join(namespace.replace('\\', "/")),
        };

        let view_path = config.view_path.trim_end_matches('/');
        let view_prefix = Path::new(view_path)
            .strip_prefix("resources/views")
            .ok()
            .map(|rest| {
                rest.components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(".")
            })
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| "livewire".to_string());

        Self {
            namespace,
            class_dir,
            view_dir: base_path.join(view_path),
            view_prefix,
        }
    }

    /// Compute every name and path of the component `dotted_name`.
    ///
    /// # Errors
    ///
    /// [`MakeError::EmptyName`] when `dotted_name` is empty or blank.
    pub fn component(&self, dotted_name: &str) -> Result<ComponentSpec, MakeError> {
        if dotted_name.trim().is_empty() {
            return Err(MakeError::EmptyName);
        }

        // Plain split: empty segments between consecutive dots are kept.
        let segments: Vec<String> = dotted_name.split('.').map(str::to_string).collect();
        let class_segments: Vec<String> = segments.iter().map(|s| studly(s)).collect();
        let view_segments: Vec<String> = segments.iter().map(|s| kebab(s)).collect();

        let class_name = class_segments.join("\\");
        let short_class = class_segments.last().cloned().unwrap_or_default();

        let mut namespace = self.namespace.clone();
        if class_segments.len() > 1 {
            namespace.push('\\');
            namespace.push_str(&class_segments[..class_segments.len() - 1].join("\\"));
        }

        let template_id = format!("{}.{}", self.view_prefix, view_segments.join("."));
        let class_file_path = nest(
            &self.class_dir,
            &format!("{}.php", class_name.replace('\\', "/")),
        );
        let template_file_path = nest(
            &self.view_dir,
            &format!("{}.blade.php", view_segments.join("/")),
        );

        Ok(ComponentSpec {
            dotted_name: dotted_name.to_string(),
            segments,
            class_name,
            short_class,
            namespace,
            template_id,
            class_file_path,
            template_file_path,
        })
    }
}

/// `relative` appended to `dir` as text, so the result stays below `dir` even
/// when `relative` starts with `/`.
pub(crate) fn nest(dir: &Path, relative: &str) -> PathBuf {
    let mut path = dir.as_os_str().to_owned();
    path.push("/");
    path.push(relative);
    PathBuf::from(path)
}

/// Names and paths of one component, computed fresh per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Name as typed (`users.profile-card`)
    pub dotted_name: String,
    /// Dot-separated parts of the name, never empty
    pub segments: Vec<String>,
    /// Class path below the layout namespace (`Users\ProfileCard`)
    pub class_name: String,
    /// Class name used inside the generated file (`ProfileCard`)
    pub short_class: String,
    /// Namespace of the generated class
    pub namespace: String,
    /// View name passed to `view()` (`livewire.users.profile-card`)
    pub template_id: String,
    pub class_file_path: PathBuf,
    pub template_file_path: PathBuf,
}

impl ComponentSpec {
    /// Compute the spec of `dotted_name` inside `module`.
    ///
    /// # Errors
    ///
    /// [`MakeError::EmptyName`] when `dotted_name` is empty or blank.
    pub fn compute(dotted_name: &str, module: &ModuleDescriptor) -> Result<Self, MakeError> {
        Layout::for_module(module).component(dotted_name)
    }

    /// Fully-qualified class name (`Crm\Livewire\Users\ProfileCard`)
    pub fn qualified_class(&self) -> String {
        format!("{}\\{}", self.namespace, self.short_class)
    }

    /// Dotted component name without the view prefix (`users.profile-card`)
    pub fn view_name(&self) -> String {
        self.segments
            .iter()
            .map(|s| kebab(s))
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crm() -> ModuleDescriptor {
        ModuleDescriptor::new("Crm", "/app/Modules/Crm", "Crm\\")
    }

    #[test]
    fn nested_component_in_module() {
        let spec = ComponentSpec::compute("users.profile-card", &crm()).unwrap();
        assert_eq!(spec.segments, vec!["users", "profile-card"]);
        assert_eq!(spec.class_name, "Users\\ProfileCard");
        assert_eq!(spec.short_class, "ProfileCard");
        assert_eq!(spec.namespace, "Crm\\Livewire\\Users");
        assert_eq!(spec.template_id, "livewire.users.profile-card");
        assert_eq!(
            spec.class_file_path,
            PathBuf::from("/app/Modules/Crm/src/Livewire/Users/ProfileCard.php")
        );
        assert_eq!(
            spec.template_file_path,
            PathBuf::from("/app/Modules/Crm/resources/views/livewire/users/profile-card.blade.php")
        );
        assert_eq!(spec.qualified_class(), "Crm\\Livewire\\Users\\ProfileCard");
        assert_eq!(spec.view_name(), "users.profile-card");
    }

    #[test]
    fn single_segment_has_no_sub_namespace() {
        let spec = ComponentSpec::compute("dashboard", &crm()).unwrap();
        assert_eq!(spec.class_name, "Dashboard");
        assert_eq!(spec.namespace, "Crm\\Livewire");
        assert_eq!(spec.template_id, "livewire.dashboard");
        assert_eq!(
            spec.class_file_path,
            PathBuf::from("/app/Modules/Crm/src/Livewire/Dashboard.php")
        );
    }

    #[test]
    fn pascal_input_is_kebabed_for_views() {
        let spec = ComponentSpec::compute("Admin.UserTable", &crm()).unwrap();
        assert_eq!(spec.class_name, "Admin\\UserTable");
        assert_eq!(spec.template_id, "livewire.admin.user-table");
    }

    #[test]
    fn compute_is_deterministic() {
        let a = ComponentSpec::compute("billing.invoices.line-item", &crm()).unwrap();
        let b = ComponentSpec::compute("billing.invoices.line-item", &crm()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_segments_are_preserved() {
        let spec = ComponentSpec::compute("users..card", &crm()).unwrap();
        assert_eq!(spec.segments, vec!["users", "", "card"]);
        assert_eq!(spec.template_id, "livewire.users..card");
        assert_eq!(
            spec.class_file_path,
            PathBuf::from("/app/Modules/Crm/src/Livewire/Users/Card.php")
        );
        assert_eq!(
            spec.template_file_path,
            PathBuf::from("/app/Modules/Crm/resources/views/livewire/users/card.blade.php")
        );
    }

    #[test]
    fn leading_separator_stays_inside_module() {
        let spec = ComponentSpec::compute(".profile", &crm()).unwrap();
        assert_eq!(spec.class_name, "\\Profile");
        assert_eq!(
            spec.class_file_path,
            PathBuf::from("/app/Modules/Crm/src/Livewire/Profile.php")
        );
        assert_eq!(
            spec.template_file_path,
            PathBuf::from("/app/Modules/Crm/resources/views/livewire/profile.blade.php")
        );

        let spec = ComponentSpec::compute("/tmp/evil", &crm()).unwrap();
        assert!(spec.class_file_path.starts_with("/app/Modules/Crm/src/Livewire"));
        assert!(spec
            .template_file_path
            .starts_with("/app/Modules/Crm/resources/views/livewire"));
    }

    #[test]
    fn application_layout_keeps_absolute_names_under_base() {
        let layout = Layout::from_config(&LivewireConfig::default(), Path::new("/srv/app"));
        let spec = layout.component("/etc/passwd").unwrap();
        assert!(spec.class_file_path.starts_with("/srv/app/app/Livewire"));
        assert!(spec
            .template_file_path
            .starts_with("/srv/app/resources/views/livewire"));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            ComponentSpec::compute("", &crm()),
            Err(MakeError::EmptyName)
        ));
        assert!(matches!(
            ComponentSpec::compute("  ", &crm()),
            Err(MakeError::EmptyName)
        ));
    }

    #[test]
    fn default_layout_follows_config() {
        let layout = Layout::from_config(&LivewireConfig::default(), Path::new("/srv/app"));
        assert_eq!(layout.namespace, "App\\Livewire");
        assert_eq!(layout.class_dir, PathBuf::from("/srv/app/app/Livewire"));
        assert_eq!(
            layout.view_dir,
            PathBuf::from("/srv/app/resources/views/livewire")
        );
        assert_eq!(layout.view_prefix, "livewire");

        let spec = layout.component("users.profile-card").unwrap();
        assert_eq!(spec.namespace, "App\\Livewire\\Users");
        assert_eq!(
            spec.class_file_path,
            PathBuf::from("/srv/app/app/Livewire/Users/ProfileCard.php")
        );
    }

    #[test]
    fn custom_view_path_changes_the_prefix() {
        let config = LivewireConfig {
            class_namespace: "App\\Http\\Livewire\\".into(),
            view_path: "resources/views/components/live".into(),
            ..LivewireConfig::default()
        };
        let layout = Layout::from_config(&config, Path::new("/srv/app"));
        assert_eq!(layout.namespace, "App\\Http\\Livewire");
        assert_eq!(layout.class_dir, PathBuf::from("/srv/app/app/Http/Livewire"));
        assert_eq!(layout.view_prefix, "components.live");
    }

    #[test]
    fn view_prefix_matches_whole_directories_only() {
        let config = LivewireConfig {
            view_path: "resources/viewsfoo".into(),
            ..LivewireConfig::default()
        };
        let layout = Layout::from_config(&config, Path::new("/srv/app"));
        assert_eq!(layout.view_prefix, "livewire");
    }
}
