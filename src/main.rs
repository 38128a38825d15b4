use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use sentiment_api::{
    config::Config,
    infrastructure::{
        datasets::sample_data::SampleDataSource,
        ml::{linear_classifier::LinearSentimentClassifier, traits::SentimentClassifier},
        repositories::csv_comment_repository::CsvCommentRepository,
        security::profanity_filter::ProfanityList,
        text::{
            pipeline::NormalizationPipeline,
            segmenter::{LexiconSegmenter, Segmenter},
        },
        translation::{
            google_translator::GoogleTranslator,
            traits::{PassthroughTranslator, Translator},
        },
    },
    presentation::http::{routes::create_router, state::AppState},
};
use std::{path::Path, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,sentiment_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let timeout = Duration::from_secs(config.translation_timeout_seconds);

    let classifier: Option<Arc<dyn SentimentClassifier>> = match LinearSentimentClassifier::load(
        Path::new(&config.model_path),
        Path::new(&config.vectorizer_path),
    ) {
        Ok(classifier) => Some(Arc::new(classifier)),
        Err(e) => {
            tracing::error!(
                error = %e,
                "Sentiment model not loaded, predictions will return 503 until it is trained"
            );
            None
        }
    };

    let translator: Arc<dyn Translator> = if config.enable_translation {
        Arc::new(GoogleTranslator::new(
            &config.translation_endpoint,
            &config.translation_target,
            timeout,
        )?)
    } else {
        tracing::info!("Translation disabled");
        Arc::new(PassthroughTranslator)
    };

    let segmenter: Arc<dyn Segmenter> = match &config.segmenter_lexicon_path {
        Some(path) => Arc::new(LexiconSegmenter::with_lexicon_file(path)?),
        None => Arc::new(LexiconSegmenter::builtin()),
    };

    let state = AppState {
        pipeline: Arc::new(NormalizationPipeline::new(translator, segmenter)),
        profanity: Arc::new(ProfanityList::load(&config.bad_words_path)),
        classifier,
        comment_repo: Arc::new(CsvCommentRepository::new(&config.comments_path)),
        samples: Arc::new(SampleDataSource::new(
            &config.sample_data_path,
            config.sample_data_url.clone(),
            timeout,
        )?),
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_DISPOSITION])
        .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Sentiment API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
