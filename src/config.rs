//! Configuration for the crisis simulation
//!
//! Configuration is loaded from a TOML file. Credentials are never stored in
//! the file itself: the `[llm]` section names an environment variable
//! (`api_key_env`) that is resolved at runtime. A missing credential is the
//! one fatal precondition of the pipeline — it halts a run before the first
//! phase starts.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Inclusive lower bound on the crisis duration, in months
pub const MIN_CRISIS_DURATION_MONTHS: u8 = 1;
/// Inclusive upper bound on the crisis duration, in months
pub const MAX_CRISIS_DURATION_MONTHS: u8 = 12;

/// Main simulator configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatorConfig {
    #[serde(default)]
    pub simulation: SimulationSection,
    pub llm: LlmSection,
}

/// Simulation section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationSection {
    /// Product whose supply chain is simulated
    #[serde(default = "default_product")]
    pub product: String,
    /// Per-task generation attempt bound handed to the provider call
    #[serde(default = "default_max_task_iterations")]
    pub max_task_iterations: u32,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            product: default_product(),
            max_task_iterations: default_max_task_iterations(),
        }
    }
}

fn default_product() -> String {
    "Galaxy S24 Ultra".to_string()
}

fn default_max_task_iterations() -> u32 {
    5
}

/// LLM section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmSection {
    /// Provider name (currently only "openai")
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// Environment variable containing the API key
    pub api_key_env: String,
    /// Optional temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Optional max tokens per completion
    pub max_tokens: Option<u32>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationSection::default(),
            llm: LlmSection {
                provider: "openai".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                temperature: Some(0.7),
                max_tokens: None,
            },
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SimulatorConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimulatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.provider != "openai" {
            return Err(ConfigError::InvalidConfig(format!(
                "Unsupported LLM provider: {}",
                self.llm.provider
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "llm.model must not be empty".to_string(),
            ));
        }
        if self.llm.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "llm.api_key_env must not be empty".to_string(),
            ));
        }
        if let Some(t) = self.llm.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::InvalidConfig(format!(
                    "llm.temperature {t} outside 0.0..=2.0"
                )));
            }
        }
        if self.simulation.max_task_iterations == 0 {
            return Err(ConfigError::InvalidConfig(
                "simulation.max_task_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the LLM API key from the configured environment variable
    ///
    /// Absence is the fatal precondition: callers must surface it to the
    /// operator and must not retry.
    pub fn get_llm_api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.llm.api_key_env)
            .map_err(|_| ConfigError::EnvVarNotFound(self.llm.api_key_env.clone()))
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[simulation]
product = "Galaxy S24 Ultra"
max_task_iterations = 5

[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
temperature = 0.7
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[simulation]
product = "Galaxy S24 Ultra"
max_task_iterations = 5

[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
temperature = 0.7
max_tokens = 4000
"#;

        let config = SimulatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.simulation.product, "Galaxy S24 Ultra");
        assert_eq!(config.simulation.max_task_iterations, 5);
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, Some(0.7));
        assert_eq!(config.llm.max_tokens, Some(4000));
    }

    #[test]
    fn test_minimal_config_applies_defaults() {
        let toml_content = r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
"#;

        let config = SimulatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.simulation.product, "Galaxy S24 Ultra");
        assert_eq!(config.simulation.max_task_iterations, 5);
        assert_eq!(config.llm.temperature, None);
        assert_eq!(config.llm.max_tokens, None);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, Some(0.7));
    }

    #[test]
    fn test_unsupported_provider_rejected() {
        let toml_content = r#"
[llm]
provider = "anthropic"
model = "claude-3"
api_key_env = "ANTHROPIC_API_KEY"
"#;

        let result = SimulatorConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_model_rejected() {
        let toml_content = r#"
[llm]
provider = "openai"
model = ""
api_key_env = "OPENAI_API_KEY"
"#;

        let result = SimulatorConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let toml_content = r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
temperature = 3.5
"#;

        let result = SimulatorConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let toml_content = r#"
[simulation]
max_task_iterations = 0

[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
"#;

        let result = SimulatorConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_api_key_env_var() {
        let mut config = SimulatorConfig::test_config();
        config.llm.api_key_env = "CHAINSIM_TEST_KEY_THAT_DOES_NOT_EXIST".to_string();

        let result = config.get_llm_api_key();
        match result {
            Err(ConfigError::EnvVarNotFound(name)) => {
                assert_eq!(name, "CHAINSIM_TEST_KEY_THAT_DOES_NOT_EXIST");
            }
            other => panic!("Expected EnvVarNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_duration_bounds() {
        assert_eq!(MIN_CRISIS_DURATION_MONTHS, 1);
        assert_eq!(MAX_CRISIS_DURATION_MONTHS, 12);
    }
}
