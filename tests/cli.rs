use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bizbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bizbook").unwrap();
    cmd.env("BIZBOOK_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn fresh_install_routes_to_onboarding() {
    let data_dir = TempDir::new().unwrap();

    bizbook(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route:      Onboarding"))
        .stdout(predicate::str::contains("Modules:    (none)"));

    let prefs = std::fs::read_to_string(data_dir.path().join("preferences.json")).unwrap();
    assert!(prefs.contains("\"activeModules\": \"[]\""));
    assert!(prefs.contains("\"hasCompletedOnboarding\": \"false\""));
}

#[test]
fn onboarding_persists_across_runs() {
    let data_dir = TempDir::new().unwrap();

    bizbook(&data_dir)
        .args(["onboard", "--modules", "milk,lending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled modules: milk, lending"));

    bizbook(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route:      Main"))
        .stdout(predicate::str::contains("Modules:    milk, lending"));

    bizbook(&data_dir)
        .args(["onboard", "--modules", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already been completed"));
}

#[test]
fn onboarding_without_modules_fails() {
    let data_dir = TempDir::new().unwrap();

    bizbook(&data_dir)
        .args(["onboard", "--modules", ","])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one module"));
}

#[test]
fn toggling_gates_screens() {
    let data_dir = TempDir::new().unwrap();

    bizbook(&data_dir)
        .args(["onboard", "--modules", "orders"])
        .assert()
        .success();

    bizbook(&data_dir)
        .args(["screen", "inventory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Inventory module is not enabled."));

    bizbook(&data_dir)
        .args(["modules", "enable", "inventory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory & Sales enabled."));

    bizbook(&data_dir)
        .args(["screen", "inventory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory screen is available."));

    bizbook(&data_dir)
        .args(["modules", "toggle", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order Management disabled."));

    bizbook(&data_dir)
        .args(["modules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^no\s+orders").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^yes\s+inventory").unwrap());
}

#[test]
fn unknown_module_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    bizbook(&data_dir)
        .args(["modules", "toggle", "payroll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown module: payroll"));
}

#[test]
fn corrupt_modules_entry_keeps_onboarding_flag() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("preferences.json"),
        r#"{"activeModules": "[orders", "hasCompletedOnboarding": "true"}"#,
    )
    .unwrap();

    bizbook(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route:      Main"))
        .stdout(predicate::str::contains("Modules:    (none)"));
}

#[test]
fn config_updates_are_saved() {
    let data_dir = TempDir::new().unwrap();

    bizbook(&data_dir)
        .args(["config", "--business-name", "Corner Dairy", "--log-level", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."))
        .stdout(predicate::str::contains("Business name: Corner Dairy"));

    let config = std::fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"business_name\": \"Corner Dairy\""));
    assert!(config.contains("\"log_level\": \"info\""));

    bizbook(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Corner Dairy"));
}
