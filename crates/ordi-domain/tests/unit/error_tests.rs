//! Unit tests for domain error types

use ordi_domain::Error;

#[test]
fn test_invalid_registration_error() {
    let error = Error::invalid_registration("dyn Plugin", "descriptor declares abstraction u32");
    match &error {
        Error::InvalidRegistration {
            abstraction,
            message,
        } => {
            assert_eq!(abstraction, "dyn Plugin");
            assert!(message.contains("u32"));
        }
        _ => panic!("Expected InvalidRegistration error"),
    }
    assert!(error.to_string().starts_with("Invalid registration for dyn Plugin"));
}

#[test]
fn test_not_registered_error() {
    let error = Error::not_registered("dyn Clock");
    match error {
        Error::NotRegistered { service } => assert_eq!(service, "dyn Clock"),
        _ => panic!("Expected NotRegistered error"),
    }
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::type_mismatch("alloc::string::String", "u64");
    let display = format!("{error}");
    assert!(display.contains("expected alloc::string::String"));
    assert!(display.contains("u64"));
}

#[test]
fn test_view_poisoned_error() {
    let error = Error::view_poisoned("dyn Stage", "Factory error: disk full");
    match error {
        Error::ViewPoisoned {
            abstraction,
            message,
        } => {
            assert_eq!(abstraction, "dyn Stage");
            assert_eq!(message, "Factory error: disk full");
        }
        _ => panic!("Expected ViewPoisoned error"),
    }
}

#[test]
fn test_factory_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "plugin.toml");
    let error = Error::factory_with_source("Failed to load plugin", io);

    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("plugin.toml"));
}
