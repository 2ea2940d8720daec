//! # 登録ハンドラ
//!
//! ユーザー登録エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /auth/register` - ユーザー登録
//!
//! ## 現行の API 契約
//!
//! このエンドポイントはアカウントを作成しない。受け取った `email` を
//! そのまま応答に含めて返すのみで、永続化・パスワードハッシュ化・
//! セッション発行は行わない。フィールドの型や存在も検証せず、`email`
//! が欠けていても `200` を返す（`user.email` は省略される）。
//!
//! この寛容さを暗黙の動的レコードに隠さず、[`RegistrationPayload`] の
//! 直和型としてハンドラの公開契約に明示している。

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RegisterError;

// --- リクエスト/レスポンス型 ---

/// 登録リクエスト
///
/// ワイヤ上はどちらのフィールドも任意の JSON 値を受け入れる。
/// 型検査や形式検証は行わない（現行の API 契約）。
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email:    Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

/// 分類済みの登録ペイロード
///
/// 「完全なペイロード」と「フィールドが欠けたペイロード」の区別を
/// 型で表現する。現行契約ではどちらも `200` を返すが、区別は
/// ログとハンドラの契約に現れる。
#[derive(Debug, PartialEq)]
pub enum RegistrationPayload {
    /// `email` と `password` の両方が含まれる
    Complete { email: Value },
    /// いずれかのフィールドが欠けている
    Incomplete { email: Option<Value> },
}

impl RegisterRequest {
    /// リクエストを分類済みペイロードに変換する
    pub fn into_payload(self) -> RegistrationPayload {
        match (self.email, self.password) {
            (Some(email), Some(_)) => RegistrationPayload::Complete { email },
            (email, _) => RegistrationPayload::Incomplete { email },
        }
    }
}

/// 登録された（として応答する）ユーザー
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    /// リクエストの `email` をそのまま返す。欠けていた場合は省略する。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

/// 登録成功レスポンス
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user:    RegisteredUser,
}

// --- ハンドラ ---

/// POST /auth/register
///
/// 受け取った `email` を応答にエコーする。失敗時は
/// [`RegisterError`] が `500 { message, error }` に変換される。
/// 不正な JSON ボディは `Json` エクストラクタが先に拒否する。
pub async fn register(
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, RegisterError> {
    let email = match req.into_payload() {
        RegistrationPayload::Complete { email } => {
            tracing::info!("登録リクエストを受け付けました");
            Some(email)
        }
        RegistrationPayload::Incomplete { email } => {
            // 現行契約: フィールドが欠けていても成功として扱う
            tracing::warn!("登録リクエストにフィールドが欠けています");
            email
        }
    };

    Ok(Json(RegisterResponse {
        message: "Registration successful".to_string(),
        user:    RegisteredUser { email },
    }))
}
