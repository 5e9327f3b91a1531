use crate::error::PrincipleError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "DESIGN_PRINCIPLES_CONFIG";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub dip: DipConfig,
    pub lsp: LspConfig,
    pub output: OutputConfig,
}

/// Payloads in the order a computer writes them to its storage parts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DipConfig {
    pub first_payload: String,
    pub second_payload: String,
}

impl Default for DipConfig {
    fn default() -> Self {
        Self {
            first_payload: "1234".to_string(),
            second_payload: "5678".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LspConfig {
    pub max_resize_iterations: u64,
    /// Reproduce the original infinite loop instead of stopping at the bound.
    pub unbounded: bool,
}

impl Default for LspConfig {
    fn default() -> Self {
        Self {
            max_resize_iterations: 1000,
            unbounded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: "=============".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PrincipleError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, PrincipleError> {
        let content = fs::read_to_string(path).map_err(|source| PrincipleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `DESIGN_PRINCIPLES_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self, PrincipleError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading demo config");
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PrincipleError> {
        if self.lsp.max_resize_iterations == 0 {
            return Err(PrincipleError::invalid_config(
                "lsp.max_resize_iterations",
                "must be greater than zero",
            ));
        }
        if self.dip.first_payload.is_empty() {
            return Err(PrincipleError::invalid_config("dip.first_payload", "must not be empty"));
        }
        if self.dip.second_payload.is_empty() {
            return Err(PrincipleError::invalid_config("dip.second_payload", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.dip.first_payload, "1234");
        assert_eq!(config.dip.second_payload, "5678");
        assert_eq!(config.lsp.max_resize_iterations, 1000);
        assert!(!config.lsp.unbounded);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            [lsp]
            max_resize_iterations = 50

            [output]
            separator = "---"
            "#,
        )
        .unwrap();

        assert_eq!(config.lsp.max_resize_iterations, 50);
        assert!(!config.lsp.unbounded);
        assert_eq!(config.output.separator, "---");
        assert_eq!(config.dip, DipConfig::default());
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let err = DemoConfig::from_toml_str("[lsp]\nmax_resize_iterations = 0\n").unwrap_err();
        match err {
            PrincipleError::InvalidConfig { field, .. } => {
                assert_eq!(field, "lsp.max_resize_iterations")
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn empty_payload_is_rejected() {
        let err = DemoConfig::from_toml_str("[dip]\nsecond_payload = \"\"\n").unwrap_err();
        assert!(matches!(err, PrincipleError::InvalidConfig { ref field, .. } if field == "dip.second_payload"));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = DemoConfig::from_toml_str("[lsp]\nmax_iterations = 5\n").unwrap_err();
        assert!(matches!(err, PrincipleError::ConfigParse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dip]\nfirst_payload = \"abcd\"").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dip.first_payload, "abcd");
        assert_eq!(config.dip.second_payload, "5678");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = DemoConfig::from_file(&path).unwrap_err();
        match err {
            PrincipleError::ConfigRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected ConfigRead, got {other:?}"),
        }
    }
}
