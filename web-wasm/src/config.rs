//! ホストページからのクライアント設定読み込み

use thesis_search_common::config::CONFIG_ELEMENT_ID;
use thesis_search_common::ClientConfig;

/// `<script id="search-config" type="application/json">` を読む
///
/// 要素がなければデフォルト、JSONが不正なら警告を出してデフォルトを使う。
pub fn load() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(text) = text else {
        return ClientConfig::default();
    };

    ClientConfig::from_json(&text).unwrap_or_else(|e| {
        gloo::console::warn!(format!("Invalid search config, using defaults: {}", e));
        ClientConfig::default()
    })
}
