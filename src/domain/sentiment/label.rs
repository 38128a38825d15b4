use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Training label that maps to [`SentimentLabel::Satisfied`]; every other
/// training label collapses to [`SentimentLabel::Unsatisfied`].
pub const DEFAULT_POSITIVE_LABEL: &str = "cực kỳ hài lòng";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Satisfied,
    Unsatisfied,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 2] = [SentimentLabel::Satisfied, SentimentLabel::Unsatisfied];

    /// Collapses a raw training label into the binary label set.
    pub fn from_training_label(raw: &str, positive_label: &str) -> Self {
        if raw.trim() == positive_label.trim() {
            Self::Satisfied
        } else {
            Self::Unsatisfied
        }
    }

    pub fn from_class(is_positive: bool) -> Self {
        if is_positive {
            Self::Satisfied
        } else {
            Self::Unsatisfied
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Satisfied => "satisfied",
            Self::Unsatisfied => "unsatisfied",
        }
    }

    /// Vietnamese text shown next to predictions.
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Satisfied => "hài lòng",
            Self::Unsatisfied => "không hài lòng",
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "satisfied" => Ok(Self::Satisfied),
            "unsatisfied" => Ok(Self::Unsatisfied),
            other => Err(format!("unknown sentiment label '{}'", other)),
        }
    }
}
