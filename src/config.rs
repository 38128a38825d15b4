//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup; a `.env` file
//! is honoured through `dotenvy`. Every variable is optional.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,sentiment_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `MODEL_PATH`: Logistic regression artifact (default: "./models/lr_model_2label.json")
//! - `VECTORIZER_PATH`: Vectorizer artifact (default: "./models/count_2label.json")
//! - `BAD_WORDS_PATH`: Banned word list, one per line (default: "./bad_words.txt")
//! - `COMMENTS_PATH`: Comment log (default: "./user_comments.csv")
//! - `ENABLE_TRANSLATION`: Translate comments before cleaning (default: true)
//! - `TRANSLATION_TARGET`: Target language code (default: "vi")
//! - `TRANSLATION_ENDPOINT`: Translate endpoint (default: Google public endpoint)
//! - `TRANSLATION_TIMEOUT_SECONDS`: Per-request timeout (default: 10)
//! - `SEGMENTER_LEXICON_PATH`: Extra segmenter words, one per line
//! - `SAMPLE_DATA_PATH`: Local sample batch file (default: "./data/data_test_file.csv")
//! - `SAMPLE_DATA_URL`: Remote CSV export used when the local sample is missing
//! - `MAX_UPLOAD_BYTES`: Request body limit for uploads (default: 20 MiB)

use crate::infrastructure::translation::google_translator::DEFAULT_TRANSLATE_ENDPOINT;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    pub model_path: String,

    pub vectorizer_path: String,

    pub bad_words_path: String,

    /// CSV file holding the comment history
    pub comments_path: String,

    /// When false a pass-through translator is installed
    pub enable_translation: bool,

    pub translation_target: String,

    pub translation_endpoint: String,

    pub translation_timeout_seconds: u64,

    /// Optional lexicon extending the built-in segmenter words
    pub segmenter_lexicon_path: Option<String>,

    pub sample_data_path: String,

    pub sample_data_url: Option<String>,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            model_path: env_or("MODEL_PATH", "./models/lr_model_2label.json".to_string())?,
            vectorizer_path: env_or(
                "VECTORIZER_PATH",
                "./models/count_2label.json".to_string(),
            )?,
            bad_words_path: env_or("BAD_WORDS_PATH", "./bad_words.txt".to_string())?,
            comments_path: env_or("COMMENTS_PATH", "./user_comments.csv".to_string())?,
            enable_translation: env_or("ENABLE_TRANSLATION", true)?,
            translation_target: env_or("TRANSLATION_TARGET", "vi".to_string())?,
            translation_endpoint: env_or(
                "TRANSLATION_ENDPOINT",
                DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            )?,
            translation_timeout_seconds: env_or("TRANSLATION_TIMEOUT_SECONDS", 10)?,
            segmenter_lexicon_path: env_optional("SEGMENTER_LEXICON_PATH"),
            sample_data_path: env_or(
                "SAMPLE_DATA_PATH",
                "./data/data_test_file.csv".to_string(),
            )?,
            sample_data_url: env_optional("SAMPLE_DATA_URL"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load an optional environment variable, treating an empty value as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
