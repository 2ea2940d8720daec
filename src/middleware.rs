//! # ミドルウェア
//!
//! 全ルートに適用するミドルウェアを提供する。

mod cors;

pub use cors::permissive_cors;
