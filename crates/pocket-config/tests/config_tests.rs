use pocket_config::{Config, ConfigError, ConfigManager};
use pocket_domain::{SalaryOverride, SalaryScheme};
use tempfile::tempdir;

#[test]
fn load_returns_defaults_when_missing() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = manager.load().expect("load");
    assert_eq!(config, Config::default());
    assert!(manager.backups_dir().exists());
}

#[test]
fn save_and_reload_round_trips_preferences() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.salary_override = Some(SalaryOverride {
        scheme: SalaryScheme::FourteenMonth,
        monthly_base: 2800.0,
    });
    config.salary_labels.twelve_month = "Wage".into();
    config.recent_months = 3;
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("reload");
    assert_eq!(loaded, config);
    assert!(manager.config_path().exists());
}

#[test]
fn partial_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), r#"{ "currency": "USD" }"#).expect("write");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.savings_window, 12);
    assert_eq!(loaded.salary_labels, Config::default().salary_labels);
}

#[test]
fn backups_can_be_listed_and_restored() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.currency = "GBP".into();
    let name = manager
        .backup(&config, Some("Before raise"))
        .expect("backup");
    assert!(name.ends_with("_before-raise.json"), "unexpected name: {name}");

    let backups = manager.list_backups().expect("list");
    assert_eq!(backups, vec![name.clone()]);

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.currency, "GBP");
}

#[test]
fn restoring_unknown_backup_fails() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let err = manager
        .restore("preferences_20000101_000000.json")
        .expect_err("missing backup");
    assert!(matches!(err, ConfigError::BackupNotFound(_)));
}
