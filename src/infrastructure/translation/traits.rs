use async_trait::async_trait;
use serde::Serialize;

/// Outcome of a translation attempt. Callers always get usable text back;
/// a failed call carries the original input together with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    /// Translation was not attempted (disabled or empty input).
    Skipped(String),
    Unavailable { original: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    Translated,
    Skipped,
    Unavailable,
}

impl Translation {
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) | Self::Skipped(text) => text,
            Self::Unavailable { original, .. } => original,
        }
    }

    pub fn status(&self) -> TranslationStatus {
        match self {
            Self::Translated(_) => TranslationStatus::Translated,
            Self::Skipped(_) => TranslationStatus::Skipped,
            Self::Unavailable { .. } => TranslationStatus::Unavailable,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the configured target language. Never fails.
    async fn translate(&self, text: &str) -> Translation;
}

/// Returns its input unchanged; used when translation is disabled.
#[derive(Debug, Clone, Default)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str) -> Translation {
        Translation::Skipped(text.to_string())
    }
}
