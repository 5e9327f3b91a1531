use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrincipleError {
    #[error("Resize gave up after {iterations} iterations: width {width} never exceeded length {length}")]
    ContractViolated {
        iterations: u64,
        length: f64,
        width: f64,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl PrincipleError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolated { .. })
    }
}
