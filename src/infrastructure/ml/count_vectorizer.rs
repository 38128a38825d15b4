use lazy_static::lazy_static;
use ndarray::{Array1, Array2};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    // Unicode word runs of two or more characters; `_` keeps segmented words whole.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Bag-of-words encoder with a vocabulary fixed at fit time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountVectorizer {
    /// Token → feature column. Columns follow lexicographic token order.
    vocabulary: BTreeMap<String, usize>,
}

impl CountVectorizer {
    pub fn analyze(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut tokens: Vec<String> = documents
            .iter()
            .flat_map(|doc| Self::analyze(doc.as_ref()))
            .collect();
        tokens.sort();
        tokens.dedup();

        let vocabulary = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| (token, index))
            .collect();

        Self { vocabulary }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// Encodes one document. Tokens outside the vocabulary are ignored.
    pub fn transform_one(&self, document: &str) -> Array1<f64> {
        let mut row = Array1::zeros(self.vocabulary.len());
        for token in Self::analyze(document) {
            if let Some(&column) = self.vocabulary.get(&token) {
                row[column] += 1.0;
            }
        }
        row
    }

    /// Encodes each document independently into one row of the result.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f64> {
        let mut matrix = Array2::zeros((documents.len(), self.vocabulary.len()));
        for (i, doc) in documents.iter().enumerate() {
            matrix.row_mut(i).assign(&self.transform_one(doc.as_ref()));
        }
        matrix
    }
}
