//! # エラー定義
//!
//! 登録ハンドラのエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラー方針
//!
//! 登録処理中に発生したエラーはすべて `500 Internal Server Error` に
//! 集約し、`{ "message": "Registration failed", "error": <詳細> }` 形式で
//! 返す。クライアントエラーとサーバーエラーの区別は行わない（現行の
//! API 契約）。不正な JSON ボディはハンドラに到達する前に axum の
//! `Json` エクストラクタが拒否するため、この型の対象外。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 登録失敗レスポンス
///
/// `message` は固定文言、`error` は失敗の詳細メッセージ。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error:   String,
}

/// 登録処理で発生するエラー
///
/// `#[from] anyhow::Error` により、`?` 演算子で任意のエラーを
/// `RegisterError::Internal` に変換できる。
#[derive(Debug, Error)]
pub enum RegisterError {
    /// 内部エラー
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for RegisterError {
    /// `RegisterError` を `500` の JSON レスポンスに変換する
    ///
    /// エラー詳細はレスポンスにそのまま含める（現行の API 契約）。
    /// サーバーサイドのログにも出力する。
    fn into_response(self) -> Response {
        tracing::error!("登録処理に失敗しました: {:#}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Registration failed".to_string(),
                error:   self.to_string(),
            }),
        )
            .into_response()
    }
}
