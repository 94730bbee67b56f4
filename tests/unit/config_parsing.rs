//! Unit tests for TOML configuration parsing.

use l293d::{parse_config, LineId, MotorPins, MotorSystem, PinNumbering, SystemConfig};

const TWO_MOTORS: &str = r#"
pin_numbering = "BOARD"
test_mode = true
verbose = false

[motors.left]
enable = 7
reverse = 11
forward = 12

[motors.right]
enable = 13
reverse = 15
forward = 16
"#;

/// Test parsing a complete configuration.
#[test]
fn test_parse_two_motors() {
    let config = parse_config(TWO_MOTORS).expect("Failed to parse TOML");

    assert_eq!(config.numbering(), Ok(PinNumbering::Board));
    assert!(config.test_mode);
    assert!(!config.verbose);

    let names: Vec<_> = config.motor_names().collect();
    assert_eq!(names, vec!["left", "right"]);

    let left = config.motor("left").expect("Motor not found");
    assert_eq!(left.pins(), MotorPins::new(LineId(7), LineId(11), LineId(12)));
    assert!(!left.force_selection);
}

/// Test that omitted fields fall back to their defaults.
#[test]
fn test_parse_empty_config() {
    let config: SystemConfig = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config.numbering(), Ok(PinNumbering::Board));
    assert!(!config.test_mode);
    assert!(config.verbose);
    assert!(config.motors.is_empty());
}

/// Test lowercase numbering names.
#[test]
fn test_parse_lowercase_numbering() {
    let config = parse_config("pin_numbering = \"bcm\"\n").expect("Failed to parse TOML");
    assert_eq!(config.numbering(), Ok(PinNumbering::Bcm));
}

/// Test forced selection of lines outside the table.
#[test]
fn test_parse_forced_motor() {
    let toml_str = r#"
[motors.odd]
pin_a = 3
pin_b = 5
pin_c = 8
force_selection = true
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("odd").expect("Motor not found");

    assert!(motor.force_selection);
    assert_eq!(motor.pins(), MotorPins::new(LineId(3), LineId(5), LineId(8)));
}

/// Test building every configured motor through the system facade.
#[test]
fn test_config_to_motors() {
    let config = parse_config(TWO_MOTORS).expect("Failed to parse TOML");
    let system = MotorSystem::from_config(config, None).expect("Failed to create system");

    assert!(system.is_simulated());
    let left = system.motor_from_config("left").expect("left");
    let right = system.motor_from_config("right").expect("right");

    assert_eq!(left.pins().enable, LineId(7));
    assert_eq!(right.pins().enable, LineId(13));
    assert_eq!(system.lines_in_use().len(), 6);
}
