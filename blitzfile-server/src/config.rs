use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

const FILE_ROOT_VAR: &str = "FILE_ROOT";
const PORT_VAR: &str = "PORT";

const DEFAULT_FILE_ROOT: &str = ".";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(#[from] ParseIntError),
}

/// Runtime configuration, resolved once at startup and passed into
/// construction; handlers never consult the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub file_root: PathBuf,
    pub listen_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var(FILE_ROOT_VAR).ok(), env::var(PORT_VAR).ok())
    }

    // An empty variable counts as unset.
    fn resolve(file_root: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let file_root = file_root
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_FILE_ROOT), PathBuf::from);
        let listen_port = match port.filter(|value| !value.is_empty()) {
            Some(value) => value.parse()?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            file_root,
            listen_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.file_root, PathBuf::from("."));
        assert_eq!(config.listen_port, 8000);
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = Config::resolve(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(config.file_root, PathBuf::from("."));
        assert_eq!(config.listen_port, 8000);
    }

    #[test]
    fn test_overrides_applied() {
        let config =
            Config::resolve(Some("/var/blobs".to_string()), Some("9100".to_string())).unwrap();
        assert_eq!(config.file_root, PathBuf::from("/var/blobs"));
        assert_eq!(config.listen_port, 9100);
    }

    #[test]
    fn test_unparsable_port_is_rejected() {
        assert!(Config::resolve(None, Some("eight thousand".to_string())).is_err());
        assert!(Config::resolve(None, Some("70000".to_string())).is_err());
    }
}
