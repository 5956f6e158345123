//! 検索バックエンドAPI呼び出し
//!
//! - `/api/search`: 検索結果（ResultRowの配列）
//! - `/get_abstract_image`: 抄録ページ画像（Base64）
//!
//! 発行したfetchは中断しない。古いレスポンスの扱いは SearchController 側でトークンにより判定する。

use serde::de::DeserializeOwned;
use thesis_search_common::{AbstractImages, Error, Result, ResultRow};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 検索実行
pub async fn search(url: &str) -> Result<Vec<ResultRow>> {
    get_json(url).await
}

/// 抄録画像の取得
pub async fn abstract_images(url: &str) -> Result<AbstractImages> {
    get_json(url).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let body = fetch_text(url).await?;
    decode_body(&body)
}

/// レスポンス本文をJSONとしてデコード（HTMLのエラーページなどは Error::Json）
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// GETリクエストを送り、本文を文字列で返す
async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(decode_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(decode_error)?)
        .await
        .map_err(decode_error)?;
    text.as_string()
        .ok_or_else(|| Error::Decode("response body is not text".into()))
}

fn network_error(value: JsValue) -> Error {
    Error::Network(js_message(&value))
}

fn decode_error(value: JsValue) -> Error {
    Error::Decode(js_message(&value))
}

/// JavaScript側の例外をメッセージ文字列にする
fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
