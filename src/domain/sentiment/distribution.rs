use super::label::SentimentLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSlice {
    pub label: SentimentLabel,
    pub display: String,
    pub count: usize,
    /// Share of the total, rounded to one decimal place.
    pub percentage: f64,
}

/// Label counts behind the batch pie chart. Slices with a zero count are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentDistribution {
    pub total: usize,
    pub slices: Vec<DistributionSlice>,
}

impl SentimentDistribution {
    pub fn from_labels(labels: &[SentimentLabel]) -> Self {
        let total = labels.len();
        let mut slices: Vec<DistributionSlice> = SentimentLabel::ALL
            .iter()
            .map(|label| {
                let count = labels.iter().filter(|l| *l == label).count();
                DistributionSlice {
                    label: *label,
                    display: label.display_text().to_string(),
                    count,
                    percentage: percentage(count, total),
                }
            })
            .filter(|slice| slice.count > 0)
            .collect();

        // largest slice first
        slices.sort_by(|a, b| b.count.cmp(&a.count));

        Self { total, slices }
    }

    pub fn count_of(&self, label: SentimentLabel) -> usize {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 * 1000.0) / total as f64).round() / 10.0
}
