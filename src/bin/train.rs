//! Fits the vectorizer and logistic regression on a labeled CSV sheet and
//! writes the two artifacts the API loads at startup.

use anyhow::Context;
use clap::Parser;
use sentiment_api::{
    domain::sentiment::label::DEFAULT_POSITIVE_LABEL,
    infrastructure::{
        datasets::{batch_file::read_delimited, sample_data::fetch_table, table::Table},
        ml::{
            logistic_regression::LogisticRegressionParams,
            training::{TrainingOptions, train},
        },
    },
};
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Parser)]
#[command(name = "train", about = "Train the two-label sentiment model")]
struct Args {
    /// Local CSV file with the training data
    #[arg(long, conflicts_with = "url", required_unless_present = "url")]
    input: Option<PathBuf>,

    /// Remote CSV export with the training data
    #[arg(long)]
    url: Option<String>,

    #[arg(long, default_value = "clean_content")]
    text_column: String,

    #[arg(long, default_value = "title")]
    label_column: String,

    /// Raw label mapped to "satisfied"; every other label is "unsatisfied"
    #[arg(long, default_value = DEFAULT_POSITIVE_LABEL)]
    positive_label: String,

    #[arg(long, default_value_t = 0.1)]
    test_size: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 500)]
    max_iter: u64,

    #[arg(long, default_value = "./models/lr_model_2label.json")]
    model_out: PathBuf,

    #[arg(long, default_value = "./models/count_2label.json")]
    vectorizer_out: PathBuf,

    /// Download timeout for --url
    #[arg(long, default_value_t = 60)]
    timeout_seconds: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sentiment_api=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let table = load_table(&args).await?;
    tracing::info!(rows = table.len(), columns = ?table.headers, "Loaded training data");

    let options = TrainingOptions {
        text_column: args.text_column,
        label_column: args.label_column,
        positive_label: args.positive_label,
        test_size: args.test_size,
        seed: args.seed,
        params: LogisticRegressionParams {
            max_iter: args.max_iter,
            ..LogisticRegressionParams::default()
        },
    };

    let report = train(&table, &options)?;
    match report.test_accuracy {
        Some(accuracy) => tracing::info!(
            "Accuracy on {} held-out rows: {:.4}",
            report.test_rows,
            accuracy
        ),
        None => tracing::warn!("No held-out rows, accuracy not measured"),
    }

    report
        .classifier
        .save(&args.model_out, &args.vectorizer_out)?;
    tracing::info!(
        "Saved model to {} and vectorizer to {}",
        args.model_out.display(),
        args.vectorizer_out.display()
    );
    Ok(())
}

async fn load_table(args: &Args) -> anyhow::Result<Table> {
    match (&args.input, &args.url) {
        (Some(path), _) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(read_delimited(&bytes, b',')?)
        }
        (None, Some(url)) => fetch_table(url, Duration::from_secs(args.timeout_seconds)).await,
        (None, None) => anyhow::bail!("either --input or --url is required"),
    }
}
