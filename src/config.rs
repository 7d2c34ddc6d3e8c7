use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resize::{DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
use crate::state::{GRID_COLS, GRID_ROWS};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "JOBSHEET_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Grid extent and column sizing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    pub rows: usize,
    pub cols: usize,
    pub default_column_width: f32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            default_column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl SheetConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `$JOBSHEET_CONFIG`, or defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.default_column_width.is_nan() || self.default_column_width < MIN_COLUMN_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "default_column_width must be at least {}, got {}",
                MIN_COLUMN_WIDTH, self.default_column_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_sheet() {
        let config = SheetConfig::default();
        assert_eq!(config.rows, 25);
        assert_eq!(config.cols, 10);
        assert_eq!(config.default_column_width, 124.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = write_config(r#"{ "rows": 40 }"#);
        let config = SheetConfig::load(file.path()).unwrap();
        assert_eq!(config.rows, 40);
        assert_eq!(config.cols, 10);
        assert_eq!(config.default_column_width, 124.0);
    }

    #[test]
    fn narrow_default_width_is_rejected() {
        let file = write_config(r#"{ "default_column_width": 60.0 }"#);
        assert!(matches!(
            SheetConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let file = write_config(r#"{ "rows": 0 }"#);
        assert!(matches!(
            SheetConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_config("{ rows: ");
        assert!(matches!(
            SheetConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SheetConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }
}
