//! Unit tests for configuration validation.

use l293d::error::{ConfigError, Error, PinError};
use l293d::{parse_config, validate_config, LineId, PinNumbering, SystemConfig};

/// Test that an unknown numbering is rejected.
#[test]
fn test_unknown_numbering() {
    let result = parse_config("pin_numbering = \"WIRING\"\n");

    match result {
        Err(Error::Config(ConfigError::InvalidScheme(name))) => assert_eq!(name.as_str(), "WIRING"),
        other => panic!("expected InvalidScheme, got {:?}", other),
    }
}

/// Test that a line outside the numbering is rejected.
#[test]
fn test_line_outside_numbering() {
    let toml_str = r#"
pin_numbering = "BCM"

[motors.left]
enable = 7
reverse = 5
forward = 6
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Pin(PinError::InvalidPin {
            line: LineId(7),
            numbering: PinNumbering::Bcm
        }))
    ));
}

/// Test that a line used twice in one motor is rejected.
#[test]
fn test_duplicate_line() {
    let toml_str = r#"
[motors.left]
enable = 7
reverse = 12
forward = 12
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Pin(PinError::DuplicatePin(LineId(12))))
    ));
}

/// Test that a line shared between motors is rejected.
#[test]
fn test_shared_line() {
    let toml_str = r#"
[motors.left]
enable = 7
reverse = 11
forward = 12

[motors.right]
enable = 13
reverse = 11
forward = 15
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Pin(PinError::PinConflict(LineId(11))))
    ));
}

/// Test that a default configuration is valid.
#[test]
fn test_default_is_valid() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}
