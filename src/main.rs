//! # Registration Service サーバー
//!
//! ユーザー登録エンドポイントを提供する最小の API サーバー。
//!
//! ## 役割
//!
//! - **登録 API**: `POST /auth/register` で受け取った `email` をエコーする
//! - **CORS**: すべてのレスポンスに許可的なクロスオリジンヘッダーを付与する
//! - **ヘルスチェック**: `GET /health` で稼働状態を返す
//!
//! アカウントの永続化・パスワードハッシュ化・セッション発行は行わない
//! （現行の API 契約）。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `ENVIRONMENT` | No | 実行環境（起動ログにのみ使用） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run
//!
//! # ポートを指定して起動
//! PORT=4000 cargo run --release
//! ```

use std::net::SocketAddr;

use registration_service::{app::build_app, config::AppConfig, observability};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
///
/// リスナーのバインドに失敗した場合はエラーを返し、プロセスは
/// 非ゼロで終了する（リトライやシャットダウンパスは持たない）。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    observability::init_tracing(observability::LogFormat::from_env());
    let _tracing_guard =
        tracing::info_span!("app", service = "registration-service").entered();

    // 設定読み込み
    let config = AppConfig::from_env();

    tracing::info!(
        "Registration Service を起動します: {}:{}",
        config.host,
        config.port
    );
    tracing::info!("実行環境: {}", config.environment);

    // ルーター構築
    let app = build_app();

    // サーバー起動
    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Registration Service が起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
