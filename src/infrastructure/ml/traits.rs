use crate::domain::sentiment::label::SentimentLabel;

pub trait SentimentClassifier: Send + Sync {
    /// Label a single normalized comment.
    fn predict(&self, normalized: &str) -> SentimentLabel;

    /// Label many normalized comments; element `i` equals `predict(&texts[i])`.
    fn predict_batch(&self, normalized: &[String]) -> Vec<SentimentLabel> {
        normalized.iter().map(|text| self.predict(text)).collect()
    }
}
