//! # CORS ミドルウェア
//!
//! すべてのレスポンスに許可的なクロスオリジンヘッダーを付与し、
//! プリフライト（`OPTIONS`）リクエストをルーティング前に短絡応答する。
//!
//! ## ポリシー
//!
//! | ヘッダー | 値 |
//! |----------|-----|
//! | `Access-Control-Allow-Origin` | `*` |
//! | `Access-Control-Allow-Methods` | `GET,POST,PUT,DELETE,OPTIONS` |
//! | `Access-Control-Allow-Headers` | `Content-Type,Authorization` |
//! | `Access-Control-Allow-Credentials` | `true` |
//!
//! ## tower-http の `CorsLayer` を使わない理由
//!
//! `CorsLayer` はワイルドカードオリジンと
//! `Access-Control-Allow-Credentials: true` の組み合わせを拒否する
//! （Fetch 仕様上は無効な組み合わせのため panic する）。現行の API
//! 契約はこの組み合わせをそのまま返すため、ヘッダーを直接設定する。

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// 許可的な CORS ポリシーを適用するミドルウェア
///
/// `OPTIONS` リクエストはパスに関わらず `200` と CORS ヘッダーのみで
/// 即座に応答し、後続のルーティングを実行しない。
/// それ以外のリクエストは通常どおり処理し、レスポンスに CORS
/// ヘッダーを付与する（404 やエラーレスポンスも含む）。
pub async fn permissive_cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

/// レスポンスヘッダーに CORS ヘッダー一式を設定する
fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
