//! Configuration loading from files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Error, Result};

use super::{truncated, SystemConfig};

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use l293d::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    debug!(path = %path.as_ref().display(), "loading configuration");
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(ConfigError::IoError(truncated(&e.to_string())))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinNumbering;
    use crate::error::PinError;
    use crate::lines::LineId;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
pin_numbering = "BCM"

[motors.left]
enable = 4
reverse = 5
forward = 6
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.numbering(), Ok(PinNumbering::Bcm));
        assert!(config.motor("left").is_some());
    }

    #[test]
    fn test_parse_rejects_invalid_pin() {
        let toml = r#"
[motors.left]
enable = 1
reverse = 11
forward = 12
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Pin(PinError::InvalidPin { line: LineId(1), .. }))
        ));
    }

    #[test]
    fn test_parse_error_message() {
        let result = parse_config("pin_numbering = ");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/motors.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
