use super::helpers::{
    expect_status, list_comments, predict, read_text, send, spawn_app,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};

#[tokio::test]
async fn history_lists_comments_in_order() {
    let test = spawn_app();
    for comment in ["hàng tốt", "quá tệ", "tuyệt vời"] {
        expect_status(predict(&test.app, comment).await, StatusCode::OK).await;
    }

    let history = list_comments(&test.app).await;
    assert_eq!(history["count"], 3);
    assert_eq!(history["comments"][0]["comment"], "hàng tốt");
    assert_eq!(history["comments"][2]["comment"], "tuyệt vời");
}

#[tokio::test]
async fn export_returns_the_log_as_csv() {
    let test = spawn_app();
    expect_status(predict(&test.app, "Giao hàng nhanh, tốt").await, StatusCode::OK).await;

    let req = Request::builder()
        .uri("/api/v1/comments/export")
        .body(Body::empty())
        .unwrap();
    let res = expect_status(send(&test.app, req).await, StatusCode::OK).await;
    assert!(
        res.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("user_comments.csv")
    );

    let text = read_text(res).await;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("comment,prediction"));
    assert!(lines.next().unwrap().starts_with("\"Giao hàng nhanh, tốt\","));
}

#[tokio::test]
async fn reset_clears_the_history() {
    let test = spawn_app();
    expect_status(predict(&test.app, "hàng tốt").await, StatusCode::OK).await;

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/v1/comments")
        .body(Body::empty())
        .unwrap();
    expect_status(send(&test.app, req).await, StatusCode::NO_CONTENT).await;

    assert_eq!(list_comments(&test.app).await["count"], 0);
    assert!(!test.comments_path.exists());
}

#[tokio::test]
async fn sample_file_is_served_when_present() {
    let test = spawn_app();
    let req = || {
        Request::builder()
            .uri("/api/v1/samples/batch")
            .body(Body::empty())
            .unwrap()
    };

    expect_status(send(&test.app, req()).await, StatusCode::NOT_FOUND).await;

    std::fs::write(&test.sample_path, "content\nsản phẩm tốt\n").unwrap();
    let res = expect_status(send(&test.app, req()).await, StatusCode::OK).await;
    assert_eq!(read_text(res).await, "content\nsản phẩm tốt\n");
}
