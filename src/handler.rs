//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//!
//! ## ハンドラ一覧
//!
//! - `register`: ユーザー登録
//! - `health`: ヘルスチェック

pub mod health;
pub mod register;

pub use health::health_check;
pub use register::register;
