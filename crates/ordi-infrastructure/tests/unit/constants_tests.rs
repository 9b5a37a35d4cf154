//! Constants Tests

use ordi_infrastructure::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    DEFAULT_LOG_LEVEL, LOG_FILTER_ENV,
};
use ordi_infrastructure::logging::parse_log_level;

#[test]
fn test_config_constants() {
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
    assert!(!DEFAULT_CONFIG_DIR.is_empty());
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
    assert!(LOG_FILTER_ENV.starts_with(CONFIG_ENV_PREFIX));
}

#[test]
fn test_default_log_level_is_valid() {
    assert!(parse_log_level(DEFAULT_LOG_LEVEL).is_ok());
}
