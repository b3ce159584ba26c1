use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Laravel application skeleton with Livewire installed and one `crm` module
fn app() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("composer.json"),
        r#"{"require": {"php": "^8.2", "livewire/livewire": "^3.5"}}"#,
    )
    .unwrap();
    let crm = dir.path().join("app-modules").join("crm");
    fs::create_dir_all(&crm).unwrap();
    fs::write(
        crm.join("composer.json"),
        r#"{
            "name": "modules/crm",
            "autoload": {
                "psr-4": {
                    "Modules\\Crm\\": "src/",
                    "Modules\\Crm\\Database\\Factories\\": "database/factories/"
                }
            }
        }"#,
    )
    .unwrap();
    dir
}

fn run(base: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_modular-livewire");
    Command::new(exe)
        .arg("--base-path")
        .arg(base)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MLW_BASE_PATH")
        .output()
        .expect("run cli")
}

#[test]
fn test_cli_generates_into_module() {
    let app = app();
    let out = run(
        app.path(),
        &["make:livewire", "users.profile-card", "--module", "crm"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let class = app
        .path()
        .join("app-modules/crm/src/Livewire/Users/ProfileCard.php");
    let view = app
        .path()
        .join("app-modules/crm/resources/views/livewire/users/profile-card.blade.php");
    let source = fs::read_to_string(&class).unwrap();
    assert!(source.contains("namespace Modules\\Crm\\Livewire\\Users;"));
    assert!(source.contains("view('livewire.users.profile-card')"));
    assert!(view.exists());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("INFO  Livewire component ["));
    assert!(stdout.contains("created successfully."));
}

#[test]
fn test_cli_unknown_module_exits_with_invalid() {
    let app = app();
    let out = run(
        app.path(),
        &["make:livewire", "dashboard", "--module=billing"],
    );

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR  The \"billing\" module does not exist."));
    assert!(!app.path().join("app").exists());
    assert!(!app.path().join("app-modules/crm/src").exists());
}

#[test]
fn test_cli_alias_without_module_uses_application() {
    let app = app();
    let out = run(app.path(), &["livewire:make", "counter"]);
    assert!(out.status.success());
    assert!(app.path().join("app/Livewire/Counter.php").exists());

    let again = run(app.path(), &["make:livewire", "counter"]);
    assert_eq!(again.status.code(), Some(1));
    let forced = run(app.path(), &["make:livewire", "counter", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn test_cli_test_flag_writes_module_test() {
    let app = app();
    let out = run(
        app.path(),
        &["make:livewire", "dashboard", "--module", "crm", "--test"],
    );
    assert!(out.status.success());

    let test = app
        .path()
        .join("app-modules/crm/tests/Feature/Livewire/DashboardTest.php");
    let source = fs::read_to_string(test).unwrap();
    assert!(source.contains("namespace Modules\\Crm\\Tests\\Feature\\Livewire;"));
    assert!(source.contains("Livewire::test(Dashboard::class)"));
}

#[test]
fn test_cli_custom_stub_is_used() {
    let app = app();
    fs::create_dir_all(app.path().join("stubs")).unwrap();
    fs::write(
        app.path().join("stubs/livewire.view.stub"),
        "<section>custom</section>\n",
    )
    .unwrap();

    let out = run(app.path(), &["make:livewire", "banner", "--module", "crm"]);
    assert!(out.status.success());
    let view = fs::read_to_string(
        app.path()
            .join("app-modules/crm/resources/views/livewire/banner.blade.php"),
    )
    .unwrap();
    assert_eq!(view, "<section>custom</section>\n");
}

#[test]
fn test_cli_without_livewire_has_no_make_command() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["make:livewire", "counter"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Command \"make:livewire\" is not defined."));
}

#[test]
fn test_cli_lists_modules() {
    let app = app();
    let out = run(app.path(), &["modules"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("crm  Modules\\Crm\\"));
}
