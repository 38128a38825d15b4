use super::helpers::{
    TestOptions, expect_status, list_comments, read_json, read_text, spawn_app, spawn_app_with,
    upload_batch,
};
use axum::http::{StatusCode, header};
use serde_json::Value;

const BATCH_CSV: &str = "id,content\n1,Chất lượng tốt tuyệt vời\n2,Thất vọng quá tệ\n3,\"Giao hàng nhanh, sp tốt\"\n";

#[tokio::test]
async fn json_batch_returns_rows_and_distribution() {
    let test = spawn_app();
    let res = upload_batch(&test.app, "json", "reviews.csv", BATCH_CSV.as_bytes()).await;
    let res = expect_status(res, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["row_count"], 3);
    assert_eq!(
        body["columns"],
        serde_json::json!(["id", "content", "clean_content", "sentiment"])
    );
    assert_eq!(body["rows"][0]["sentiment"], "satisfied");
    assert_eq!(body["rows"][1]["sentiment"], "unsatisfied");
    assert_eq!(body["rows"][2]["clean_content"], "giao_hàng nhanh sản_phẩm tốt");
    assert_eq!(body["distribution"]["total"], 3);

    // Batch predictions never touch the history.
    assert_eq!(list_comments(&test.app).await["count"], 0);
}

#[tokio::test]
async fn csv_batch_is_returned_as_attachment() {
    let test = spawn_app();
    let res = upload_batch(&test.app, "csv", "reviews.csv", BATCH_CSV.as_bytes()).await;
    let res = expect_status(res, StatusCode::OK).await;

    let disposition = res.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("ket_qua_du_doan.csv"));

    let text = read_text(res).await;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,content,clean_content,sentiment"));
    assert_eq!(lines.count(), 3);
}

#[tokio::test]
async fn tab_delimited_text_is_accepted() {
    let test = spawn_app();
    let data = "content\tstars\nsản phẩm tệ thất vọng\t1\n";
    let res = upload_batch(&test.app, "json", "reviews.txt", data.as_bytes()).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["rows"][0]["sentiment"], "unsatisfied");
}

#[tokio::test]
async fn missing_content_column_is_rejected() {
    let test = spawn_app();
    let res = upload_batch(&test.app, "json", "reviews.csv", "id,text\n1,tốt\n".as_bytes()).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(body["error"].as_str().unwrap().contains("content"));
    assert!(!test.comments_path.exists());
}

#[tokio::test]
async fn unquoted_delimiter_in_content_is_rejected() {
    let test = spawn_app();
    let data = "id,content\n1,Giao hàng nhanh, nhưng sp tệ thất vọng\n";
    let res = upload_batch(&test.app, "json", "reviews.csv", data.as_bytes()).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(body["error"].as_str().unwrap().contains("Line 2"));
}

#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let test = spawn_app();
    let res = upload_batch(&test.app, "json", "reviews.pdf", b"%PDF-1.4").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn batch_without_model_is_service_unavailable() {
    let test = spawn_app_with(TestOptions {
        with_model: false,
        ..TestOptions::default()
    });
    let res = upload_batch(&test.app, "json", "reviews.csv", BATCH_CSV.as_bytes()).await;
    expect_status(res, StatusCode::SERVICE_UNAVAILABLE).await;
}
