//! Answer check API tests.

mod common;

use axum_test::TestServer;

use common::{fixtures, TestContext};

async fn check(server: &TestServer, answer: &str, correct: &str) -> serde_json::Value {
    let response = server
        .post("/api/check")
        .json(&fixtures::check_request(answer, correct))
        .await;
    response.assert_status_ok();
    response.json()
}

/// Part-of-speech prefixes are ignored on both sides.
#[tokio::test]
async fn test_prefix_stripped() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let body = check(&server, "사진", "n. 사진").await;
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["correct_answer"], "n. 사진");

    let body = check(&server, "v. 빌리다", "빌리다").await;
    assert_eq!(body["is_correct"], true);
}

/// Any comma-separated alternative of the meaning counts as correct.
#[tokio::test]
async fn test_alternatives_accepted() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let body = check(&server, "불빛", "n. 빛, 불빛, 광선").await;
    assert_eq!(body["is_correct"], true);
}

/// A wrong answer is reported with the expected answer echoed back.
#[tokio::test]
async fn test_wrong_answer() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let body = check(&server, "사과", "n. 사진").await;
    assert_eq!(body["is_correct"], false);
    assert_eq!(body["correct_answer"], "n. 사진");
}
