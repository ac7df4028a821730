//! Game data tables loaded from TOML

mod tables;

pub use tables::{DataTables, EntityTable, LevelRow, MainStatTable, SetBonus, SetBonusTable, SpecialBonus};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error loading or validating data tables
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read data file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse data TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid data table: {0}")]
    ValidationError(String),
}

/// Read a TOML file into any deserializable table
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&fs::read_to_string(path)?)
}

/// Deserialize a TOML string into any deserializable table
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
