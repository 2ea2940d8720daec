//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | No | `3000` | ポート番号 |
//! | `ENVIRONMENT` | No | `development` | 実行環境（起動ログにのみ使用） |

use std::env;

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 3000;

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host:        String,
    /// ポート番号（例: `3000`, `4000`）
    pub port:        u16,
    /// 実行環境（`development`, `staging`, `production`）
    ///
    /// 起動ログに出力するのみで、動作は変わらない。
    pub environment: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての変数はオプションであり、未設定の場合はデフォルト値を使用する。
    /// `PORT` が数値としてパースできない場合もデフォルト値にフォールバックする。
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("ENVIRONMENT").ok(),
        )
    }

    /// 環境変数の生の値から設定を構築する
    ///
    /// `from_env` から分離しているのは、テストで環境変数の競合を
    /// 避けるため。
    fn from_vars(host: Option<String>, port: Option<String>, environment: Option<String>) -> Self {
        Self {
            host:        host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port:        port
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: environment.unwrap_or_else(|| "development".to_string()),
        }
    }

    /// バインド先アドレスを `host:port` 形式で返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_未設定のときデフォルト値を使用する() {
        let config = AppConfig::from_vars(None, None, None);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_portが指定されたときその値を使用する() {
        let config = AppConfig::from_vars(None, Some("4000".to_string()), None);

        assert_eq!(config.port, 4000);
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn test_portが数値でないときデフォルト値にフォールバックする() {
        let config = AppConfig::from_vars(None, Some("not-a-port".to_string()), None);

        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_hostとenvironmentが指定されたときその値を使用する() {
        let config = AppConfig::from_vars(
            Some("127.0.0.1".to_string()),
            None,
            Some("production".to_string()),
        );

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.environment, "production");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
