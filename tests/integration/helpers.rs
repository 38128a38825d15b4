use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use sentiment_api::{
    config::Config,
    domain::sentiment::label::SentimentLabel,
    infrastructure::{
        datasets::sample_data::SampleDataSource,
        ml::{
            linear_classifier::LinearSentimentClassifier,
            logistic_regression::LogisticRegressionParams, traits::SentimentClassifier,
        },
        repositories::csv_comment_repository::CsvCommentRepository,
        security::profanity_filter::ProfanityList,
        text::{pipeline::NormalizationPipeline, segmenter::LexiconSegmenter},
        translation::traits::PassthroughTranslator,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub app: Router,
    pub comments_path: PathBuf,
    pub sample_path: PathBuf,
    // Keeps the comment log and sample file alive for the test's duration.
    _dir: TempDir,
}

pub struct TestOptions {
    pub banned_words: Vec<&'static str>,
    pub with_model: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            banned_words: Vec::new(),
            with_model: true,
        }
    }
}

fn build_config(dir: &TempDir) -> Config {
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        model_path: path("lr_model_2label.json"),
        vectorizer_path: path("count_2label.json"),
        bad_words_path: path("bad_words.txt"),
        comments_path: path("user_comments.csv"),
        enable_translation: false,
        translation_target: "vi".to_string(),
        translation_endpoint: "http://127.0.0.1:9/translate".to_string(),
        translation_timeout_seconds: 1,
        segmenter_lexicon_path: None,
        sample_data_path: path("data_test_file.csv"),
        sample_data_url: None,
        max_upload_bytes: 1024 * 1024,
    }
}

/// Small, clearly separable training set in normalized form.
pub fn trained_classifier() -> LinearSentimentClassifier {
    let rows = [
        ("sản_phẩm tốt giao_hàng nhanh", SentimentLabel::Satisfied),
        ("rất tốt tuyệt_vời đáng_tiền", SentimentLabel::Satisfied),
        ("chất_lượng tốt hài_lòng", SentimentLabel::Satisfied),
        ("đóng_gói cẩn_thận tuyệt_vời", SentimentLabel::Satisfied),
        ("sản_phẩm tệ thất_vọng", SentimentLabel::Unsatisfied),
        ("giao_hàng chậm quá tệ", SentimentLabel::Unsatisfied),
        ("hàng_giả kém chất_lượng", SentimentLabel::Unsatisfied),
        ("thất_vọng không dùng được", SentimentLabel::Unsatisfied),
    ];
    let (texts, labels): (Vec<String>, Vec<SentimentLabel>) = rows
        .iter()
        .map(|(text, label)| (text.to_string(), *label))
        .unzip();
    LinearSentimentClassifier::fit(&texts, &labels, &LogisticRegressionParams::default())
        .expect("failed to train test model")
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(TestOptions::default())
}

pub fn spawn_app_with(options: TestOptions) -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = build_config(&dir);

    let classifier: Option<Arc<dyn SentimentClassifier>> = if options.with_model {
        Some(Arc::new(trained_classifier()))
    } else {
        None
    };

    let pipeline = NormalizationPipeline::new(
        Arc::new(PassthroughTranslator),
        Arc::new(LexiconSegmenter::builtin()),
    );
    let samples = SampleDataSource::new(&config.sample_data_path, None, Duration::from_secs(1))
        .expect("failed to build sample source");

    let state = AppState {
        pipeline: Arc::new(pipeline),
        profanity: Arc::new(ProfanityList::new(options.banned_words)),
        classifier,
        comment_repo: Arc::new(CsvCommentRepository::new(&config.comments_path)),
        samples: Arc::new(samples),
    };

    TestApp {
        app: create_router(state),
        comments_path: PathBuf::from(&config.comments_path),
        sample_path: PathBuf::from(&config.sample_data_path),
        _dir: dir,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();
    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub async fn predict(app: &Router, comment: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/predictions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "comment": comment }).to_string(),
        ))
        .expect("failed to build predict request");
    send(app, req).await
}

pub async fn list_comments(app: &Router) -> Value {
    let req = Request::builder()
        .uri("/api/v1/comments")
        .body(Body::empty())
        .expect("failed to build list request");
    let res = expect_status(send(app, req).await, StatusCode::OK).await;
    read_json(res).await
}

pub fn multipart_file_body(file_name: &str, contents: &[u8]) -> (String, Vec<u8>) {
    let boundary = format!("----sentiment-boundary-{}", Uuid::now_v7());
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    (boundary, body)
}

pub async fn upload_batch(
    app: &Router,
    format: &str,
    file_name: &str,
    contents: &[u8],
) -> axum::response::Response {
    let (boundary, body) = multipart_file_body(file_name, contents);
    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/v1/predictions/batch?format={}", format))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("failed to build batch request");
    send(app, req).await
}
