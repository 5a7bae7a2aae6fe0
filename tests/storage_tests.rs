use bethel_connect::models::ThemeMode;
use bethel_connect::storage::{get_config_path, load_config, save_config, save_theme, AppConfig};
use serial_test::serial;
use std::fs;

fn cleanup() {
    let path = get_config_path();
    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn test_save_and_load_config() {
    cleanup();

    let config = AppConfig {
        theme_mode: Some(ThemeMode::Dark),
    };

    save_config(&config).expect("Failed to save config");

    let loaded = load_config();
    assert_eq!(loaded.theme_mode, Some(ThemeMode::Dark));
    assert!(loaded.get_theme().is_dark());

    cleanup();
}

#[test]
#[serial]
fn test_save_theme_updates_existing_config() {
    cleanup();

    save_theme(ThemeMode::Dark).expect("Failed to save theme");
    assert!(load_config().get_theme().is_dark());

    save_theme(ThemeMode::Light).expect("Failed to save theme");
    assert!(!load_config().get_theme().is_dark());

    cleanup();
}

#[test]
#[serial]
fn test_missing_config_falls_back_to_default() {
    cleanup();

    let loaded = load_config();
    assert_eq!(loaded.theme_mode, None);
    assert_eq!(loaded.get_theme(), ThemeMode::Light);
}

#[test]
#[serial]
fn test_corrupt_config_falls_back_to_default() {
    cleanup();

    let path = get_config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create config dir");
    }
    fs::write(&path, "{ not json").expect("Failed to write corrupt config");

    let loaded = load_config();
    assert_eq!(loaded.get_theme(), ThemeMode::Light);

    cleanup();
}

#[test]
#[serial]
fn test_unknown_theme_string_loads_as_light() {
    cleanup();

    let path = get_config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create config dir");
    }
    fs::write(&path, r#"{ "theme_mode": "sepia" }"#).expect("Failed to write config");

    let loaded = load_config();
    assert_eq!(loaded.get_theme(), ThemeMode::Light);

    cleanup();
}
