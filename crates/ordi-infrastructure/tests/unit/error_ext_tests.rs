//! Error Extension Tests

use std::io;

use ordi_domain::Error;
use ordi_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let error = failing_io().context("Failed to open plugin").unwrap_err();

    match &error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Failed to open plugin: missing file");
            assert!(source.is_some());
        }
        _ => panic!("Expected Infrastructure error"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let error = failing_io()
        .with_context(|| format!("Failed after {} attempts", 3))
        .unwrap_err();
    assert!(error.to_string().contains("Failed after 3 attempts"));
}

#[test]
fn test_config_context() {
    let error = failing_io().config_context("Bad config").unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_factory_context() {
    let error = failing_io()
        .factory_context("Failed to build middleware")
        .unwrap_err();

    match error {
        Error::Factory { message, .. } => {
            assert_eq!(message, "Failed to build middleware: missing file");
        }
        _ => panic!("Expected Factory error"),
    }
}
