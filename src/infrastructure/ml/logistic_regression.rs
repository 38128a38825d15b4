use linfa::prelude::*;
use linfa_logistic::FittedLogisticRegression;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogisticRegressionParams {
    /// Inverse regularization strength; smaller is stronger.
    pub c: f64,
    pub max_iter: u64,
    /// Stop once the gradient norm falls below this.
    pub gradient_tolerance: f64,
}

impl Default for LogisticRegressionParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            max_iter: 500,
            gradient_tolerance: 1e-4,
        }
    }
}

/// Binary L2-regularized logistic regression. Targets are `true` for the
/// positive class.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogisticRegression {
    fitted: FittedLogisticRegression<f64, bool>,
}

impl fmt::Debug for LogisticRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogisticRegression")
            .field("n_features", &self.n_features())
            .field("intercept", &self.fitted.intercept())
            .finish()
    }
}

impl LogisticRegression {
    /// Fits on `x` (one row per sample). Both classes must be present.
    pub fn fit(
        x: &Array2<f64>,
        y: &Array1<bool>,
        params: &LogisticRegressionParams,
    ) -> anyhow::Result<Self> {
        let n_samples = x.nrows();
        if n_samples == 0 {
            anyhow::bail!("cannot fit a model on zero samples");
        }
        if y.len() != n_samples {
            anyhow::bail!(
                "feature rows ({}) and targets ({}) differ in length",
                n_samples,
                y.len()
            );
        }
        if params.c <= 0.0 {
            anyhow::bail!("regularization strength C must be positive");
        }
        if y.iter().all(|&t| t) || y.iter().all(|&t| !t) {
            anyhow::bail!("training data must contain both satisfied and unsatisfied rows");
        }

        let dataset = Dataset::new(x.clone(), y.clone());
        let fitted = linfa_logistic::LogisticRegression::default()
            .alpha(1.0 / params.c)
            .max_iterations(params.max_iter)
            .gradient_tolerance(params.gradient_tolerance)
            .fit(&dataset)
            .map_err(|e| anyhow::anyhow!("logistic regression did not fit: {}", e))?;

        tracing::debug!(
            features = fitted.params().len(),
            intercept = fitted.intercept(),
            "Fitted logistic regression"
        );
        Ok(Self { fitted })
    }

    pub fn n_features(&self) -> usize {
        self.fitted.params().len()
    }

    /// Positive-class decision for each row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Vec<bool> {
        self.fitted.predict(x).to_vec()
    }
}
