use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::ParkingConfig, ConfigError};

/// Prefix for environment variable overrides, e.g. `PARKING_ATTENDANT__NAME`.
pub const ENV_PREFIX: &str = "PARKING_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<ParkingConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: ParkingConfig = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<ParkingConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[[lots]]
capacity = 4
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.lots[0].capacity, 4);
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let result = load_config_from_str("lots = 3");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/parking.toml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[attendant]
name = "Sari"

[[lots]]
id = "a"
capacity = 1

[[lots]]
id = "b"
capacity = 2

[selection]
strategy = "most_capacity"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.attendant.name, "Sari");
        assert_eq!(config.lots.len(), 2);
        assert_eq!(config.lots[1].id.as_deref(), Some("b"));
    }
}
