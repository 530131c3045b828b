//! Integration tests for the termcard-config crate.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use termcard_config::auth::resolve_token;
use termcard_config::{CardDefinition, CardItem, Config, ConfigError, LayoutConfig, StatKind};

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("termcard.json5");

    fs::write(
        &config_path,
        r##"
        {
            // Configuration for termcard
            username: "octocat",
            years: 3,
            layout: { total_width: 60, overflow_line_width: 45 },
            card: [
                "bio",
                "uptime",
                { key: "Editors", value: "Helix, Zed" },
                "gap",
                { section: "GitHub Statistics" },
                "commits",
                { stat: "pull_requests" },
            ],
            language_colors: { Rust: "#ff0000", Gleam: "#ffaff3" },
            output: { dark: "out/dark.svg", macos_window: true },
            github_token: "ghp_test_token",
        }
        "##,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.username.as_deref(), Some("octocat"));
    assert_eq!(config.years, Some(3));
    assert_eq!(config.layout.total_width, 60);
    assert_eq!(config.layout.overflow_line_width, 45);
    assert_eq!(config.layout.min_dots, 8);
    assert_eq!(
        config.card.items(),
        &[
            CardItem::Bio(None),
            CardItem::Stat(StatKind::Uptime),
            CardItem::key_value("Editors", "Helix, Zed"),
            CardItem::Gap,
            CardItem::Section("GitHub Statistics".to_string()),
            CardItem::Stat(StatKind::Commits),
            CardItem::Stat(StatKind::PullRequests),
        ]
    );
    assert_eq!(config.language_colors.get("Rust"), Some("#ff0000"));
    assert_eq!(config.language_colors.get("Gleam"), Some("#ffaff3"));
    assert_eq!(config.language_colors.get("Go"), Some("#00ADD8"));
    assert_eq!(config.output.dark, PathBuf::from("out/dark.svg"));
    assert_eq!(config.output.light, PathBuf::from("light.svg"));
    assert!(config.output.macos_window);
    assert_eq!(config.github_token, Some("ghp_test_token".to_string()));
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        username: Some("grace".to_string()),
        github_token: Some("ghp_global".to_string()),
        years: Some(2),
        layout: LayoutConfig::with_width(80),
        card: CardDefinition::new(vec![
            CardItem::Bio(Some("Fixed bio".to_string())),
            CardItem::Stat(StatKind::Repository),
        ]),
        ..Default::default()
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_load_rejects_invalid_layout() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("termcard.json");
    fs::write(&config_path, r#"{ "layout": { "min_dots": 0 } }"#).unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLayout { .. }), "{err}");
}

#[test]
fn config_load_rejects_unknown_statistic() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("termcard.json5");
    fs::write(&config_path, r#"{ card: ["bio", "karma"] }"#).unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn config_validation() {
    let valid = Config {
        username: Some("octocat".to_string()),
        years: Some(1),
        ..Default::default()
    };
    assert!(valid.validate().is_ok());

    let invalid = Config {
        card: CardDefinition::new(vec![CardItem::key_value("  ", "value")]),
        ..Default::default()
    };
    assert!(matches!(
        invalid.validate(),
        Err(ConfigError::InvalidCardItem(_))
    ));
}

#[test]
fn config_github_token_not_serialized_when_none() {
    let config = Config {
        github_token: None,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("github_token"));
    assert!(!json.contains("language_colors"));
}

#[tokio::test]
async fn explicit_token_wins_over_config() {
    let token = resolve_token(Some("  ghp_flag  "), Some("ghp_file")).await;
    assert_eq!(token.as_deref(), Some("ghp_flag"));

    let token = resolve_token(Some(""), Some("ghp_file")).await;
    assert_eq!(token.as_deref(), Some("ghp_file"));
}
