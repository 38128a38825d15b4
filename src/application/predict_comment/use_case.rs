use crate::{
    application::predict_comment::dto::{PredictCommentOutcome, PredictCommentRequest},
    domain::{
        comment::{entity::CommentRecord, repository::CommentRepository},
        errors::DomainError,
    },
    infrastructure::{
        ml::traits::SentimentClassifier, security::profanity_filter::ProfanityList,
        text::pipeline::NormalizationPipeline,
    },
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Classifies one comment and records it in the comment log.
///
/// Every rejection happens before anything is written: blank input, a
/// missing model, a comment with no words left after cleaning, and banned
/// words. A failed write does not hide the prediction: the
/// outcome carries `saved = false` and the error text instead.
pub struct PredictCommentUseCase {
    pipeline: Arc<NormalizationPipeline>,
    profanity: Arc<ProfanityList>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
    repository: Arc<dyn CommentRepository>,
}

impl PredictCommentUseCase {
    pub fn new(
        pipeline: Arc<NormalizationPipeline>,
        profanity: Arc<ProfanityList>,
        classifier: Option<Arc<dyn SentimentClassifier>>,
        repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            pipeline,
            profanity,
            classifier,
            repository,
        }
    }

    #[instrument(skip(self, request), fields(comment_len = request.comment.chars().count()))]
    pub async fn execute(
        &self,
        request: PredictCommentRequest,
    ) -> Result<PredictCommentOutcome, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let classifier = self
            .classifier
            .as_ref()
            .ok_or(DomainError::ModelUnavailable)?;

        let normalized = self.pipeline.normalize(&request.comment).await;
        debug!(clean_text = %normalized.text, translation = ?normalized.translation, "Normalized comment");
        if normalized.is_empty() {
            return Err(DomainError::ValidationError(
                "The comment has no words left to classify after cleaning".into(),
            ));
        }

        let banned = self.profanity.check(&normalized.text);
        if !banned.is_empty() {
            warn!(count = banned.len(), "Comment rejected for banned words");
            return Err(DomainError::ProfanityRejected(banned.into_iter().collect()));
        }

        let label = classifier.predict(&normalized.text);
        info!(label = %label, "Predicted sentiment");

        let record = CommentRecord::new(request.comment.clone(), label);
        let (saved, save_error) = match self.repository.append(&record).await {
            Ok(()) => (true, None),
            Err(e) => {
                warn!(error = %e, "Prediction shown but not saved");
                (false, Some(e.to_string()))
            }
        };

        Ok(PredictCommentOutcome {
            comment: request.comment,
            clean_text: normalized.text,
            label,
            display: label.display_text(),
            satisfied: label.is_satisfied(),
            translation: normalized.translation,
            saved,
            save_error,
        })
    }
}
