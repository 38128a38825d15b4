use crate::{
    application::predict_batch::dto::{
        BatchPrediction, BatchRow, CLEAN_CONTENT_COLUMN, CONTENT_COLUMN, PredictBatchRequest,
        SENTIMENT_COLUMN,
    },
    domain::{errors::DomainError, sentiment::distribution::SentimentDistribution},
    infrastructure::{
        datasets::batch_file::read_table, ml::traits::SentimentClassifier,
        text::pipeline::NormalizationPipeline,
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Labels every row of an uploaded table. Batch results are returned to the
/// caller only; the comment log is not touched and rows are not screened for
/// banned words.
pub struct PredictBatchUseCase {
    pipeline: Arc<NormalizationPipeline>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
}

impl PredictBatchUseCase {
    pub fn new(
        pipeline: Arc<NormalizationPipeline>,
        classifier: Option<Arc<dyn SentimentClassifier>>,
    ) -> Self {
        Self {
            pipeline,
            classifier,
        }
    }

    #[instrument(skip(self, request), fields(file_name = %request.file_name, bytes = request.data.len()))]
    pub async fn execute(&self, request: PredictBatchRequest) -> Result<BatchPrediction, DomainError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(DomainError::ModelUnavailable)?;

        let mut table = read_table(&request.file_name, &request.data)?;
        let contents: Vec<String> = table
            .column(CONTENT_COLUMN)
            .ok_or_else(|| {
                DomainError::ValidationError(format!(
                    "The uploaded file must have a '{}' column",
                    CONTENT_COLUMN
                ))
            })?
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut cleaned = Vec::with_capacity(contents.len());
        for content in &contents {
            cleaned.push(self.pipeline.normalize(content).await.text);
        }

        let labels = classifier.predict_batch(&cleaned);
        let distribution = SentimentDistribution::from_labels(&labels);

        table.set_column(CLEAN_CONTENT_COLUMN, cleaned.clone())?;
        table.set_column(
            SENTIMENT_COLUMN,
            labels.iter().map(|l| l.as_str().to_string()).collect(),
        )?;

        let rows = contents
            .into_iter()
            .zip(cleaned)
            .zip(&labels)
            .map(|((content, clean_content), label)| BatchRow {
                content,
                clean_content,
                sentiment: *label,
                display: label.display_text(),
            })
            .collect();

        info!(rows = labels.len(), "Batch prediction finished");
        Ok(BatchPrediction {
            table,
            rows,
            distribution,
        })
    }
}
