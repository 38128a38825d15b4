use super::{normalizer::clean_text, segmenter::Segmenter};
use crate::infrastructure::translation::traits::{Translation, TranslationStatus, Translator};
use std::sync::Arc;

/// Canonical form of a comment, ready for profanity checks and vectorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    pub translation: TranslationStatus,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// translate → clean → segment.
///
/// Translation and segmentation depend on external behaviour, so normalizing
/// already-normalized text is not guaranteed to be a no-op.
pub struct NormalizationPipeline {
    translator: Arc<dyn Translator>,
    segmenter: Arc<dyn Segmenter>,
}

impl NormalizationPipeline {
    pub fn new(translator: Arc<dyn Translator>, segmenter: Arc<dyn Segmenter>) -> Self {
        Self {
            translator,
            segmenter,
        }
    }

    pub async fn normalize(&self, raw: &str) -> NormalizedText {
        if raw.trim().is_empty() {
            return NormalizedText {
                text: String::new(),
                translation: TranslationStatus::Skipped,
            };
        }

        let translation: Translation = self.translator.translate(raw).await;
        let status = translation.status();
        let cleaned = clean_text(translation.text());

        NormalizedText {
            text: self.segmenter.segment(&cleaned),
            translation: status,
        }
    }
}
