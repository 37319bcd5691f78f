use crate::domain::model::{ConstraintKey, RawConstraints};
use crate::domain::ports::ConstraintSource;
use crate::utils::error::{RefereeError, Result};
use crate::utils::validation::{clean_input, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefereeConfig {
    /// Raw answers. Values of any TOML type are accepted here; anything that
    /// is not a recognized string normalizes to the default later.
    pub constraints: HashMap<String, toml::Value>,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub enabled: bool,
    pub path: Option<String>,
}

impl RefereeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            RefereeError::ConfigValidationError {
                field: "config_file".to_string(),
                message: format!("{}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RefereeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        for key in self.constraints.keys() {
            if ConstraintKey::from_name(key).is_none() {
                return Err(RefereeError::InvalidConfigValueError {
                    field: "constraints".to_string(),
                    value: key.clone(),
                    reason: "Unknown constraint name".to_string(),
                });
            }
        }

        if let Some(path) = &self.prompt.path {
            validate_path("prompt.path", path)?;
        }

        Ok(())
    }

    pub fn prompt_enabled(&self) -> bool {
        self.prompt.enabled
    }
}

impl ConstraintSource for RefereeConfig {
    fn collect(&mut self) -> Result<RawConstraints> {
        let mut raw = RawConstraints::new();
        for key in ConstraintKey::ALL {
            match self.constraints.get(key.as_str()) {
                Some(toml::Value::String(value)) => raw.set(key, clean_input(value)),
                Some(other) => {
                    tracing::debug!(
                        "Ignoring non-string {} value {} from config",
                        key.as_str(),
                        other
                    );
                    raw.set(key, "");
                }
                None => {}
            }
        }
        Ok(raw)
    }
}

impl Validate for RefereeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Budget, Level};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[constraints]
budget = "Low"
data_privacy = "high"

[prompt]
enabled = true
path = "prompts/custom.txt"
"#;

        let mut config = RefereeConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.prompt_enabled());
        assert_eq!(config.prompt.path.as_deref(), Some("prompts/custom.txt"));

        let raw = config.collect().unwrap();
        assert_eq!(raw.get(ConstraintKey::Budget), Some("low"));
        assert_eq!(raw.get(ConstraintKey::DataPrivacy), Some("high"));
        assert!(!raw.contains(ConstraintKey::Scalability));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = RefereeConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.prompt_enabled());
    }

    #[test]
    fn test_non_string_values_fall_back_to_defaults() {
        let mut config = RefereeConfig::from_toml_str(
            "[constraints]\nbudget = 1\nscalability = true\ndata_privacy = \"HIGH\"\n",
        )
        .unwrap();
        assert!(config.validate().is_ok());

        let raw = config.collect().unwrap();
        assert_eq!(raw.get(ConstraintKey::Budget), Some(""));
        assert_eq!(raw.get(ConstraintKey::Scalability), Some(""));

        let constraints = crate::core::normalizer::normalize(&raw);
        assert_eq!(constraints.budget, Budget::Medium);
        assert_eq!(constraints.scalability, Level::Low);
        assert_eq!(constraints.data_privacy, Level::High);
    }

    #[test]
    fn test_placeholders_are_not_expanded() {
        let mut config =
            RefereeConfig::from_toml_str("[constraints]\nscalability = \"${REFEREE_SCALE}\"\n")
                .unwrap();
        let raw = config.collect().unwrap();
        assert_eq!(raw.get(ConstraintKey::Scalability), Some("${referee_scale}"));
    }

    #[test]
    fn test_config_validation() {
        let unknown_key = RefereeConfig::from_toml_str("[constraints]\nregion = \"eu\"\n").unwrap();
        assert!(unknown_key.validate().is_err());

        let empty_path = RefereeConfig::from_toml_str("[prompt]\npath = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = RefereeConfig::from_toml_str("[constraints\nbudget = ");
        assert!(matches!(
            result,
            Err(RefereeError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[constraints]\nvendor_lockin_tolerance = \"high\"\n")
            .unwrap();

        let config = RefereeConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.constraints["vendor_lockin_tolerance"].as_str(),
            Some("high")
        );
    }
}
