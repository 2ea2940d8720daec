//! # CORS ミドルウェアの統合テスト
//!
//! 本番と同じレイヤー構成（`build_app`）で以下を検証する。
//!
//! - `OPTIONS` は任意のパスで `200` と CORS ヘッダーを返し、ボディを持たない
//! - 成功・失敗・404 を問わず、すべてのレスポンスが CORS ヘッダーを持つ

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use pretty_assertions::assert_eq;
use registration_service::app::build_app;
use rstest::rstest;
use tower::ServiceExt;

#[rstest]
#[case::登録ルート("/auth/register")]
#[case::ヘルスチェック("/health")]
#[case::存在しないパス("/no/such/route")]
#[tokio::test]
async fn test_optionsが200とcorsヘッダーを返す(#[case] path: &str) {
    // Given
    let app = build_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    // When
    let response = app.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET,POST,PUT,DELETE,OPTIONS"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type,Authorization"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty(), "プリフライト応答はボディを持たないこと");
}

#[tokio::test]
async fn test_登録成功レスポンスがcorsヘッダーを持つ() {
    // Given
    let app = build_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"email":"a@b.com","password":"x"}"#))
        .unwrap();

    // When
    let response = app.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_404レスポンスもcorsヘッダーを持つ() {
    // Given
    let app = build_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/no/such/route")
        .body(Body::empty())
        .unwrap();

    // When
    let response = app.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_パーサ拒否レスポンスもcorsヘッダーを持つ() {
    // Given
    let app = build_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"email":"#))
        .unwrap();

    // When
    let response = app.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
