//! Unit tests for TOML configuration parsing and validation.

use coil_stepper::config::{parse_config, validate_config, SystemConfig};
use coil_stepper::error::{ConfigError, Error};

/// Test parsing a valid motor configuration from TOML.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motors.pan]
name = "Pan Axis"
steps_per_revolution = 2048.0
phase_delay_us = 1100
power_saver = true
interruptible = false
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("pan").expect("Motor not found");

    assert_eq!(motor.name.as_str(), "Pan Axis");
    assert_eq!(motor.steps_per_revolution, 2048.0);
    assert_eq!(motor.phase_delay.value(), 1100);
    assert!(motor.power_saver);
    assert!(!motor.interruptible);
}

/// Test that more motors than the dispatcher drives can still be described.
#[test]
fn test_parse_more_motors_than_slots() {
    let mut toml_str = String::new();
    for i in 0..5 {
        toml_str.push_str(&format!(
            "[motors.m{i}]\nname = \"Motor {i}\"\nsteps_per_revolution = 200.0\n\n"
        ));
    }

    let config = parse_config(&toml_str).expect("Failed to parse TOML");
    assert_eq!(config.motor_names().count(), 5);
}

/// Test that a configuration without motors is rejected by the parser.
#[test]
fn test_motors_table_required() {
    let result = parse_config("[timer]\nperiod_us = 100\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test validation fails for a zero tick period.
#[test]
fn test_zero_period_rejected() {
    let toml_str = r#"
[timer]
period_us = 0

[motors.pan]
name = "Pan"
steps_per_revolution = 200.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTickPeriod(0)))
    ));
}

/// Test validation of an empty, default configuration.
#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}

/// Test negative steps per revolution are rejected with a readable message.
#[test]
fn test_negative_steps_message() {
    let toml_str = r#"
[motors.pan]
name = "Pan"
steps_per_revolution = -200.0
"#;

    let err = parse_config(toml_str).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("steps per revolution"), "unexpected message: {}", msg);
}

/// Test looking up a motor that the file does not describe.
#[test]
fn test_require_unknown_motor() {
    let toml_str = r#"
[motors.pan]
name = "Pan"
steps_per_revolution = 200.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert!(config.require_motor("pan").is_ok());

    let err = config.require_motor("tilt").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MotorNotFound(_))));
    assert_eq!(format!("{}", err), "Configuration error: Motor 'tilt' not found");
}
