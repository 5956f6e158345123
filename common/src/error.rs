//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 検索と抄録画像の取得失敗はどちらも同じ扱い（ログ出力＋表示のフォールバック）になるが、
/// 診断ログで区別できるように種類を分けて保持する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("Failed to fetch".to_string());
        assert_eq!(format!("{}", error), "Network error: Failed to fetch");
    }

    #[test]
    fn test_error_display_status() {
        let error = Error::Status(502);
        assert_eq!(format!("{}", error), "HTTP status 502");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Decode("not an array".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Decode"));
        assert!(debug.contains("not an array"));
    }
}
