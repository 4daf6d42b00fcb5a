//! Integration tests for the portico-config crate.

use std::fs;
use portico_config::{Config, ConfigError, Settings};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("portico.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for portico
            theme: "plain",
            layout: {
                mode: "full",
                animate: false,
            },
            sections: {
                center: {
                    menu: [
                        { description: "Find file", key: "f", command: "picker files" },
                        { icon: "+", description: "New file", key: "n", command: "edit new" },
                    ],
                },
                footer: { text: "welcome back" },
            },
            lists: { recent_limit: 12 },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.theme, "plain");
    assert!(!config.layout.animate);
    assert_eq!(config.sections.center.menu.len(), 2);
    assert_eq!(config.sections.center.menu[1].icon.as_deref(), Some("+"));
    assert_eq!(config.sections.footer.text.as_deref(), Some("welcome back"));
    assert_eq!(config.lists.recent_limit, 12);
    // Untouched fields keep defaults
    assert_eq!(config.lists.session_limit, 4);
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let mut original = Config::default();
    original.theme = "plain".to_string();
    original.layout.animation_steps = 8;
    original.icons = false;

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn invalid_file_is_rejected_with_field_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("portico.json5");

    fs::write(
        &config_path,
        r#"
        {
            sections: {
                center: {
                    menu: [
                        { description: "Find file", key: "f", command: "picker files" },
                        { description: "Also f", key: "f", command: "other" },
                    ],
                },
            },
        }
        "#,
    )
    .unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    match err {
        ConfigError::InvalidField { field, .. } => {
            assert_eq!(field, "sections.center.menu[1].key");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn settings_store_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let mut settings = Settings::new(Config::default());
    settings
        .set("layout.mode", serde_json::json!("full"))
        .unwrap();
    settings
        .set("lists.project_limit", serde_json::json!(9))
        .unwrap();

    settings.config().save_to(&config_path).unwrap();
    let reloaded = Config::load_from(&config_path).unwrap();

    assert_eq!(reloaded, *settings.config());
    assert_eq!(reloaded.lists.project_limit, 9);
}

#[test]
fn settings_rejection_keeps_disk_state_loadable() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let mut settings = Settings::new(Config::default());
    assert!(
        settings
            .set("layout.animation_steps", serde_json::json!(1000))
            .is_err()
    );

    // The store still holds a valid config that persists cleanly
    settings.config().save_to(&config_path).unwrap();
    assert!(Config::load_from(&config_path).is_ok());
}
