use crate::core::errors::ConfigError;
use crate::core::types::PartialResultPolicy;
use std::env;
use tracing::Level;

/// Image preprocessing configuration
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Binarization cutoff: intensity strictly above this becomes ink
    pub threshold: u8,
    /// Integer upscale factor applied before recognition
    pub scale: u32,
}

/// Recognition configuration
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Tesseract language hint (source language is fixed, not auto-detected)
    pub lang: String,
}

/// Translation configuration
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub source_lang: String,
    pub target_lang: String,
    /// Hard bound on the network-backed translation call
    pub timeout_seconds: u64,
}

/// Debug artifact configuration
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    pub enabled: bool,
    /// Fixed, well-known location for the preprocessed image
    pub path: String,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub preprocess: PreprocessConfig,
    pub recognition: RecognitionConfig,
    pub translation: TranslationConfig,
    pub artifact: ArtifactConfig,
    pub partial_results: PartialResultPolicy,
    pub log_level: Level,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = Self::load_from_env()?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_env() -> Result<Self, ConfigError> {
        let log_level = env::var("LOG_LEVEL")
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "trace" => Some(Level::TRACE),
                "debug" => Some(Level::DEBUG),
                "info" => Some(Level::INFO),
                "warn" | "warning" => Some(Level::WARN),
                "error" => Some(Level::ERROR),
                _ => None,
            })
            .unwrap_or(Level::INFO);

        let partial_results = match env::var("PARTIAL_RESULT_POLICY") {
            Ok(s) => match s.trim().to_lowercase().as_str() {
                "preserve" => PartialResultPolicy::Preserve,
                "discard" => PartialResultPolicy::Discard,
                _ => return Err(ConfigError::InvalidPartialResultPolicy(s)),
            },
            Err(_) => PartialResultPolicy::default(),
        };

        Ok(Self {
            preprocess: PreprocessConfig {
                threshold: env::var("BINARIZE_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(140),
                scale: env::var("UPSCALE_FACTOR")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3),
            },
            recognition: RecognitionConfig {
                lang: env::var("OCR_LANG").unwrap_or_else(|_| "jpn".to_string()),
            },
            translation: TranslationConfig {
                source_lang: env::var("SOURCE_LANG").unwrap_or_else(|_| "ja".to_string()),
                target_lang: env::var("TARGET_LANG").unwrap_or_else(|_| "en".to_string()),
                timeout_seconds: env::var("TRANSLATE_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },
            artifact: ArtifactConfig {
                enabled: env::var("DEBUG_ARTIFACT_ENABLED")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
                path: env::var("DEBUG_ARTIFACT_PATH")
                    .unwrap_or_else(|_| "debug_view.png".to_string()),
            },
            partial_results,
            log_level,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=10).contains(&self.preprocess.scale) {
            return Err(ConfigError::InvalidScale(self.preprocess.scale));
        }

        if self.translation.timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        if self.recognition.lang.trim().is_empty()
            || self.translation.source_lang.trim().is_empty()
            || self.translation.target_lang.trim().is_empty()
        {
            return Err(ConfigError::EmptyLanguage);
        }

        Ok(())
    }
}

// Note: No Default implementation because Config::new() can fail.
// Callers should explicitly call Config::new()? and handle errors.

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            preprocess: PreprocessConfig { threshold: 140, scale: 3 },
            recognition: RecognitionConfig { lang: "jpn".to_string() },
            translation: TranslationConfig {
                source_lang: "ja".to_string(),
                target_lang: "en".to_string(),
                timeout_seconds: 10,
            },
            artifact: ArtifactConfig {
                enabled: true,
                path: "debug_view.png".to_string(),
            },
            partial_results: PartialResultPolicy::Preserve,
            log_level: Level::INFO,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn zero_scale_rejected() {
        let mut config = base_config();
        config.preprocess.scale = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale(0))));
    }

    #[test]
    fn oversized_scale_rejected() {
        let mut config = base_config();
        config.preprocess.scale = 11;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale(11))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = base_config();
        config.translation.timeout_seconds = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn empty_language_rejected() {
        let mut config = base_config();
        config.translation.target_lang = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyLanguage)));
    }
}
