use super::{
    count_vectorizer::CountVectorizer,
    logistic_regression::{LogisticRegression, LogisticRegressionParams},
    traits::SentimentClassifier,
};
use crate::domain::sentiment::label::SentimentLabel;
use anyhow::Context;
use ndarray::Array1;
use serde::{Serialize, de::DeserializeOwned};
use std::{fs, io::BufWriter, path::Path};

/// Fitted vectorizer + logistic regression pair. Immutable once built.
#[derive(Debug)]
pub struct LinearSentimentClassifier {
    vectorizer: CountVectorizer,
    model: LogisticRegression,
}

impl LinearSentimentClassifier {
    pub fn new(vectorizer: CountVectorizer, model: LogisticRegression) -> anyhow::Result<Self> {
        if vectorizer.vocabulary_len() != model.n_features() {
            anyhow::bail!(
                "vectorizer has {} features but model expects {}",
                vectorizer.vocabulary_len(),
                model.n_features()
            );
        }
        Ok(Self { vectorizer, model })
    }

    /// Fits the vocabulary and the model on already-normalized texts.
    pub fn fit(
        texts: &[String],
        labels: &[SentimentLabel],
        params: &LogisticRegressionParams,
    ) -> anyhow::Result<Self> {
        let vectorizer = CountVectorizer::fit(texts);
        let features = vectorizer.transform(texts);
        let targets: Array1<bool> = labels.iter().map(SentimentLabel::is_satisfied).collect();
        let model = LogisticRegression::fit(&features, &targets, params)?;
        Self::new(vectorizer, model)
    }

    pub fn load(model_path: &Path, vectorizer_path: &Path) -> anyhow::Result<Self> {
        let vectorizer: CountVectorizer = read_artifact(vectorizer_path)?;
        let model: LogisticRegression = read_artifact(model_path)?;
        let classifier = Self::new(vectorizer, model)?;
        tracing::info!(
            "Loaded sentiment model {} ({} features)",
            model_path.display(),
            classifier.vectorizer.vocabulary_len()
        );
        Ok(classifier)
    }

    pub fn save(&self, model_path: &Path, vectorizer_path: &Path) -> anyhow::Result<()> {
        write_artifact(vectorizer_path, &self.vectorizer)?;
        write_artifact(model_path, &self.model)?;
        Ok(())
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    /// Share of `texts` whose prediction matches `labels`.
    pub fn accuracy(&self, texts: &[String], labels: &[SentimentLabel]) -> f64 {
        if texts.is_empty() {
            return 0.0;
        }
        let correct = self
            .predict_batch(texts)
            .iter()
            .zip(labels)
            .filter(|(predicted, expected)| predicted == expected)
            .count();
        correct as f64 / texts.len() as f64
    }
}

impl SentimentClassifier for LinearSentimentClassifier {
    fn predict(&self, normalized: &str) -> SentimentLabel {
        let features = self.vectorizer.transform(&[normalized]);
        self.model
            .predict(&features)
            .first()
            .copied()
            .map_or(SentimentLabel::Unsatisfied, SentimentLabel::from_class)
    }

    fn predict_batch(&self, normalized: &[String]) -> Vec<SentimentLabel> {
        let features = self.vectorizer.transform(normalized);
        self.model
            .predict(&features)
            .into_iter()
            .map(SentimentLabel::from_class)
            .collect()
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("invalid artifact {}", path.display()))
}

fn write_artifact<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), value)?;
    Ok(())
}
