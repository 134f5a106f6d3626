use portico::{ConfigError, ShellConfig, config::ENV_NAVIGATION};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "app-title = \"Portofino\"\napi-root = \"https://example.test/api/\"\nnavigation = \"custom\""
    )
    .unwrap();

    let config = ShellConfig::load(file.path()).unwrap();
    assert_eq!(config.app_title, "Portofino");
    assert_eq!(config.api_root, "https://example.test/api/");
    assert_eq!(config.navigation(), Some("custom"));
    assert_eq!(config.attributes().app_title(), Some("Portofino"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portico.toml");

    let err = ShellConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("portico.toml"));
}

#[test]
fn test_invalid_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "app-title = ").unwrap();

    assert!(matches!(
        ShellConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_environment_wins_over_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "navigation = \"default\"").unwrap();

    let config = ShellConfig::load(file.path())
        .unwrap()
        .with_overrides(|key| (key == ENV_NAVIGATION).then(|| "custom".to_string()));
    assert_eq!(config.navigation(), Some("custom"));
    assert_eq!(config.app_title, "Demo-TT");
}
