use super::{linear_classifier::LinearSentimentClassifier, logistic_regression::LogisticRegressionParams};
use crate::{
    domain::{
        errors::DomainError,
        sentiment::label::{DEFAULT_POSITIVE_LABEL, SentimentLabel},
    },
    infrastructure::datasets::table::Table,
};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

#[derive(Debug, Clone)]
pub struct TrainingOptions {
    pub text_column: String,
    pub label_column: String,
    /// Raw label that maps to `Satisfied`; everything else is `Unsatisfied`.
    pub positive_label: String,
    pub test_size: f64,
    pub seed: u64,
    pub params: LogisticRegressionParams,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            text_column: "clean_content".to_string(),
            label_column: "title".to_string(),
            positive_label: DEFAULT_POSITIVE_LABEL.to_string(),
            test_size: 0.1,
            seed: 42,
            params: LogisticRegressionParams::default(),
        }
    }
}

pub struct TrainingReport {
    pub classifier: LinearSentimentClassifier,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Accuracy on the held-out partition; `None` when it is empty.
    pub test_accuracy: Option<f64>,
}

/// Row indices of the held-out partition and the training partition, after
/// a seeded shuffle. The test partition holds `ceil(test_size * n)` rows.
pub fn train_test_split(n: usize, test_size: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64) * test_size).ceil() as usize;
    let train = indices.split_off(n_test.min(n));
    (indices, train)
}

pub fn train(table: &Table, options: &TrainingOptions) -> Result<TrainingReport, DomainError> {
    let texts = table.require_column(&options.text_column)?;
    let raw_labels = table.require_column(&options.label_column)?;

    if !(0.0..1.0).contains(&options.test_size) {
        return Err(DomainError::ValidationError(format!(
            "test size must be in [0, 1), got {}",
            options.test_size
        )));
    }

    let (test_idx, train_idx) = train_test_split(table.len(), options.test_size, options.seed);
    if train_idx.is_empty() {
        return Err(DomainError::ValidationError(
            "not enough rows to train a model".into(),
        ));
    }

    let select = |indices: &[usize]| -> (Vec<String>, Vec<SentimentLabel>) {
        indices
            .iter()
            .map(|&i| {
                (
                    texts[i].to_string(),
                    SentimentLabel::from_training_label(raw_labels[i], &options.positive_label),
                )
            })
            .unzip()
    };
    let (train_texts, train_labels) = select(&train_idx);
    let (test_texts, test_labels) = select(&test_idx);

    let classifier = LinearSentimentClassifier::fit(&train_texts, &train_labels, &options.params)
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

    let test_accuracy =
        (!test_texts.is_empty()).then(|| classifier.accuracy(&test_texts, &test_labels));

    tracing::info!(
        train_rows = train_texts.len(),
        test_rows = test_texts.len(),
        vocabulary = classifier.vectorizer().vocabulary_len(),
        "Trained sentiment model"
    );

    Ok(TrainingReport {
        classifier,
        train_rows: train_texts.len(),
        test_rows: test_texts.len(),
        test_accuracy,
    })
}
