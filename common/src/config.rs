//! クライアント設定
//!
//! ホストページに埋め込まれたJSON（`<script id="search-config" type="application/json">`）から読み込む。
//! 要素がなければデフォルト値を使う。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// デバウンス間隔のデフォルト（ミリ秒）
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// 設定を埋め込む要素のID
pub const CONFIG_ELEMENT_ID: &str = "search-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// APIのベースURL（空なら同一オリジン）
    pub api_base: String,
    pub debounce_ms: u32,
    /// 学科ドロップダウンの選択肢
    pub courses: Vec<String>,
    /// 年度ドロップダウンの選択肢
    pub years: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            courses: Vec::new(),
            years: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.debounce_ms, 200);
        assert!(config.courses.is_empty());
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"courses": ["BSCS", "BSIT"], "years": ["2024", "2023"]}"#;
        let config = ClientConfig::from_json(json).expect("設定の読み込み失敗");
        assert_eq!(config.courses, vec!["BSCS", "BSIT"]);
        assert_eq!(config.years, vec!["2024", "2023"]);
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_from_json_camel_case() {
        let json = r#"{"apiBase": "http://localhost:5000", "debounceMs": 300}"#;
        let config = ClientConfig::from_json(json).expect("設定の読み込み失敗");
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn test_from_json_blank() {
        let config = ClientConfig::from_json("  \n").expect("設定の読み込み失敗");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = ClientConfig::from_json("{courses: }");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
