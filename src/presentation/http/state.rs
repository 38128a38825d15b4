use crate::{
    application::{
        predict_batch::use_case::PredictBatchUseCase,
        predict_comment::use_case::PredictCommentUseCase,
    },
    domain::comment::repository::CommentRepository,
    infrastructure::{
        datasets::sample_data::SampleDataSource, ml::traits::SentimentClassifier,
        security::profanity_filter::ProfanityList, text::pipeline::NormalizationPipeline,
    },
};
use std::sync::Arc;

/// Process-wide resources, loaded once at startup and read-only afterwards.
/// The comment log is the only thing handlers mutate.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NormalizationPipeline>,
    pub profanity: Arc<ProfanityList>,
    /// `None` when the model artifacts could not be loaded.
    pub classifier: Option<Arc<dyn SentimentClassifier>>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub samples: Arc<SampleDataSource>,
}

impl AppState {
    pub fn predict_comment(&self) -> PredictCommentUseCase {
        PredictCommentUseCase::new(
            self.pipeline.clone(),
            self.profanity.clone(),
            self.classifier.clone(),
            self.comment_repo.clone(),
        )
    }

    pub fn predict_batch(&self) -> PredictBatchUseCase {
        PredictBatchUseCase::new(self.pipeline.clone(), self.classifier.clone())
    }
}
