//! # Registration Service
//!
//! ユーザー登録エンドポイントを提供する最小の HTTP API サーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────┐
//! │   Browser    │────▶│ Registration Service │
//! │  (Frontend)  │     │     (port 3000)      │
//! └──────────────┘     └──────────────────────┘
//! ```
//!
//! リクエストは以下の順で処理される:
//!
//! 1. CORS ミドルウェアが全リクエストを受け、`OPTIONS` は即座に応答する
//! 2. JSON ボディを `RegisterRequest` にデシリアライズする
//! 3. 登録ハンドラが応答を構築する
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築（DI とレイヤー構成）
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - CORS ミドルウェア
//! - [`observability`] - トレーシング初期化

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod observability;
