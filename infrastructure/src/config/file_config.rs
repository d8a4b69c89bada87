//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file and
//! are deserialized directly.

use parlor_application::ports::reply_generator::GeneratorError;
use parlor_domain::HostPersona;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini backend settings
    pub gemini: GeminiConfig,
    /// Host persona overrides
    pub persona: PersonaConfig,
}

impl FileConfig {
    /// Build the host persona, applying any file overrides to the default.
    pub fn host_persona(&self) -> HostPersona {
        let mut persona = HostPersona::default();
        if let Some(ref instruction) = self.persona.system_instruction {
            persona = persona.with_system_instruction(instruction.clone());
        }
        if let Some(ref line) = self.persona.fallback_line {
            persona = persona.with_fallback_line(line.clone());
        }
        if let Some(temperature) = self.persona.temperature {
            persona = persona.with_temperature(temperature);
        }
        persona
    }
}

/// Gemini backend configuration (`[gemini]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Gemini API.
    pub base_url: String,
    /// Model identifier for `generateContent`.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 120,
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key: a direct value wins, else the configured
    /// environment variable. Missing credentials are a startup error,
    /// surfaced before any session begins.
    pub fn resolve_api_key(&self) -> Result<String, GeneratorError> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GeneratorError::MissingCredentials(format!(
                    "set {} or [gemini].api_key",
                    self.api_key_env
                ))
            })
    }
}

/// Host persona overrides (`[persona]` section).
///
/// Absent fields fall back to the built-in game-show host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub system_instruction: Option<String>,
    pub fallback_line: Option<String>,
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert!(config.persona.system_instruction.is_none());
    }

    #[test]
    fn test_host_persona_without_overrides_is_default() {
        let config = FileConfig::default();
        assert_eq!(config.host_persona(), HostPersona::default());
    }

    #[test]
    fn test_host_persona_applies_overrides() {
        let config: FileConfig = toml::from_str(
            r#"
            [persona]
            fallback_line = "The confetti cannon jammed!"
            temperature = 0.5
            "#,
        )
        .unwrap();

        let persona = config.host_persona();
        assert_eq!(persona.fallback_line, "The confetti cannon jammed!");
        assert_eq!(persona.temperature, 0.5);
        // Untouched fields keep the default
        assert_eq!(
            persona.system_instruction,
            HostPersona::default().system_instruction
        );
    }

    #[test]
    fn test_direct_api_key_wins_over_env() {
        let config = GeminiConfig {
            api_key: Some("direct-key".to_string()),
            ..GeminiConfig::default()
        };
        assert_eq!(config.resolve_api_key().unwrap(), "direct-key");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let config = GeminiConfig {
            api_key_env: "PARLOR_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..GeminiConfig::default()
        };
        let err = config.resolve_api_key().unwrap_err();
        assert!(matches!(err, GeneratorError::MissingCredentials(_)));
    }
}
