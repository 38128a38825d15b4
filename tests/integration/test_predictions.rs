use super::helpers::{
    TestOptions, expect_status, list_comments, predict, read_json, send, spawn_app,
    spawn_app_with,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

const REFERENCE_COMMENT: &str = "Sản phẩm ko tốt!!! 😡😡😡";

#[tokio::test]
async fn reference_comment_is_normalized_labeled_and_saved() {
    let test = spawn_app();

    let res = expect_status(predict(&test.app, REFERENCE_COMMENT).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    let clean = body["clean_text"].as_str().expect("missing clean_text");
    assert!(!clean.contains('😡'));
    assert!(!clean.split_whitespace().any(|t| t == "ko"));
    assert!(clean.split_whitespace().any(|t| t == "không"));
    assert!(["satisfied", "unsatisfied"].contains(&body["label"].as_str().unwrap()));
    assert_eq!(body["translation"], "skipped");
    assert_eq!(body["saved"], true);

    let history = list_comments(&test.app).await;
    assert_eq!(history["count"], 1);
    assert_eq!(history["comments"][0]["comment"], REFERENCE_COMMENT);
    assert_eq!(history["comments"][0]["prediction"], body["label"]);
}

#[tokio::test]
async fn clearly_positive_comment_is_satisfied() {
    let test = spawn_app();
    let res = expect_status(
        predict(&test.app, "Chất lượng tốt, tuyệt vời!!").await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["label"], "satisfied");
    assert_eq!(body["display"], "hài lòng");
    assert_eq!(body["satisfied"], true);
}

#[tokio::test]
async fn banned_words_are_rejected_and_not_saved() {
    let test = spawn_app_with(TestOptions {
        banned_words: vec!["không"],
        ..TestOptions::default()
    });

    let res = predict(&test.app, "this sp is ko good").await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["banned_words"], serde_json::json!(["không"]));

    assert_eq!(list_comments(&test.app).await["count"], 0);
    assert!(!test.comments_path.exists());
}

#[tokio::test]
async fn blank_comment_is_a_bad_request() {
    let test = spawn_app();
    expect_status(predict(&test.app, "   ").await, StatusCode::BAD_REQUEST).await;
    assert_eq!(list_comments(&test.app).await["count"], 0);
}

#[tokio::test]
async fn comment_of_only_emoji_and_punctuation_is_a_bad_request() {
    let test = spawn_app();
    expect_status(predict(&test.app, "😡😡😡 !!!").await, StatusCode::BAD_REQUEST).await;
    assert_eq!(list_comments(&test.app).await["count"], 0);
    assert!(!test.comments_path.exists());
}

#[tokio::test]
async fn long_comment_is_accepted() {
    let test = spawn_app();
    let comment = "tốt ".repeat(1300);
    let res = expect_status(predict(&test.app, &comment).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["saved"], true);
    assert_eq!(list_comments(&test.app).await["count"], 1);
}

#[tokio::test]
async fn missing_model_is_service_unavailable() {
    let test = spawn_app_with(TestOptions {
        with_model: false,
        ..TestOptions::default()
    });
    let res = expect_status(predict(&test.app, "hàng tốt").await, StatusCode::SERVICE_UNAVAILABLE).await;
    let body: Value = read_json(res).await;
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn health_reports_model_state() {
    let healthy = spawn_app();
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let res = expect_status(send(&healthy.app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["model"], "loaded");

    let degraded = spawn_app_with(TestOptions {
        with_model: false,
        ..TestOptions::default()
    });
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    expect_status(send(&degraded.app, req).await, StatusCode::SERVICE_UNAVAILABLE).await;
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let test = spawn_app();
    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let res = send(&test.app, req).await;
    assert_eq!(res.headers()["x-request-id"], "trace-me");
}
