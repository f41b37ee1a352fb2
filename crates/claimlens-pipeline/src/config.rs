//! Pipeline configuration

use serde::{Deserialize, Serialize};

/// Language-model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Whether a model is configured at all; false means every stage runs
    /// on its deterministic fallback
    pub enabled: bool,

    /// Ollama endpoint
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Deadline for a single inference call (seconds)
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Knowledge-base configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Whether to query Wikipedia for claim sources
    pub enabled: bool,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration for one pipeline instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Language-model settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Knowledge-base settings
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Claim cap stated to the extraction model
    #[serde(default = "default_max_claims")]
    pub max_claims: usize,

    /// Sampling temperature for the extraction call
    #[serde(default = "default_extraction_temperature")]
    pub extraction_temperature: f32,

    /// Sampling temperature for verification calls
    #[serde(default = "default_verification_temperature")]
    pub verification_temperature: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            knowledge: KnowledgeConfig::default(),
            max_claims: default_max_claims(),
            extraction_temperature: default_extraction_temperature(),
            verification_temperature: default_verification_temperature(),
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_claims == 0 {
            return Err("max_claims must be greater than 0".to_string());
        }
        for (name, temp) in [
            ("extraction_temperature", self.extraction_temperature),
            ("verification_temperature", self.verification_temperature),
        ] {
            if !(0.0..=2.0).contains(&temp) {
                return Err(format!("{} must be in [0.0, 2.0], got {}", name, temp));
            }
        }
        if self.llm.timeout_secs == 0 {
            return Err("llm.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn default_max_claims() -> usize {
    10
}

fn default_extraction_temperature() -> f32 {
    0.3
}

fn default_verification_temperature() -> f32 {
    0.2
}
