//! Configuration Loader Tests

use std::env;

use ordi_domain::Error;
use ordi_infrastructure::config::{ConfigLoader, ContainerConfig, LoggingConfig};
use ordi_infrastructure::constants::DEFAULT_LOG_LEVEL;
use ordi_infrastructure::ordered::{FailurePolicy, OrderedViewOptions};
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    let config = ConfigLoader::new().load().unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.views.failure_policy, FailurePolicy::Retry);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ordi.toml");

    let original = ContainerConfig {
        logging: LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
            file_output: None,
        },
        views: OrderedViewOptions {
            failure_policy: FailurePolicy::Poison,
        },
    };

    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_save_to_missing_directory_fails_with_context() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing").join("ordi.toml");

    let result = ConfigLoader::new().save_to_file(&ContainerConfig::default(), &config_path);

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert!(message.starts_with("Failed to write config file"));
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ordi.toml");
    std::fs::write(&config_path, "[views]\nfailure_policy = \"poison\"\n").unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.views.failure_policy, FailurePolicy::Poison);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, ContainerConfig::default());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ordi.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_unknown_failure_policy_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ordi.toml");
    std::fs::write(&config_path, "[views]\nfailure_policy = \"ignore\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

/// Verify prefixed environment variables override file values
///
/// Run with: `cargo test -p ordi-infrastructure --test integration env_override -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ordi.toml");
    std::fs::write(&config_path, "[views]\nfailure_policy = \"retry\"\n").unwrap();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("ORDI_ENV_TEST_VIEWS__FAILURE_POLICY", "poison");
    }

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("ORDI_ENV_TEST")
        .load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("ORDI_ENV_TEST_VIEWS__FAILURE_POLICY");
    }

    assert_eq!(config.unwrap().views.failure_policy, FailurePolicy::Poison);
}
