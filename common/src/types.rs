//! 検索APIとやり取りする型の定義
//!
//! - ResultRow: `/api/search` が返す1件分の論文データ
//! - DetailRecord: 詳細モーダルに表示する論文データ（行データから生成）
//! - AbstractImages: `/get_abstract_image` が返す抄録ページ画像

use serde::{Deserialize, Deserializer, Serialize};

/// 抄録画像のMIMEタイプ（バックエンドはPNGで描画する）
pub const ABSTRACT_IMAGE_MIME: &str = "image/png";

/// 検索結果の1行
///
/// バックエンドは詳細表示用の項目（著者・キーワード・PDFパス）も行ごとに返すため、
/// モーダル表示時に再取得はしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub course: String,

    #[serde(default, deserialize_with = "optional_text")]
    pub year: Option<String>,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub date_uploaded: String,

    #[serde(default, deserialize_with = "optional_text")]
    pub authors: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    pub keywords: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    pub pdf_path: Option<String>,
}

/// 詳細モーダル用の論文データ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailRecord {
    pub title: String,
    pub course: String,
    pub year: Option<String>,
    pub date_uploaded: String,
    pub authors: Option<String>,
    pub keywords: Option<String>,
    pub pdf_path: Option<String>,
}

impl From<&ResultRow> for DetailRecord {
    fn from(row: &ResultRow) -> Self {
        Self {
            title: row.title.clone(),
            course: row.course.clone(),
            year: row.year.clone(),
            date_uploaded: row.date_uploaded.clone(),
            authors: row.authors.clone(),
            keywords: row.keywords.clone(),
            pdf_path: row.pdf_path.clone(),
        }
    }
}

/// 抄録画像レスポンス
///
/// 抽出できなかった場合、バックエンドは `images` の代わりに `error` を返す。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbstractImages {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AbstractImages {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// `<img src>` にそのまま渡せるData URLの一覧（返却順）
    pub fn data_urls(&self) -> Vec<String> {
        self.images.iter().map(|payload| image_data_url(payload)).collect()
    }
}

/// Base64ペイロードからData URLを生成
pub fn image_data_url(payload: &str) -> String {
    format!("data:{};base64,{}", ABSTRACT_IMAGE_MIME, payload)
}

/// 任意項目が未設定なら `-` を返す
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

/// 文字列・数値・null・空文字を受け付ける。空文字と0は未設定として扱う
fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(TextOrNumber::Text(text)) if !text.is_empty() => Some(text),
        Some(TextOrNumber::Number(n)) if n != 0.0 => Some(format!("{}", n)),
        _ => None,
    })
}

fn text_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn list_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_row_deserialize_full() {
        let json = r#"{
            "title": "Solar Powered Irrigation",
            "course": "BSIT",
            "year": "2023",
            "date_uploaded": "Mar 02, 2024 - 10:15 AM",
            "authors": "Dela Cruz, J.",
            "keywords": "solar, irrigation",
            "pdf_path": "thesis_files/solar.pdf"
        }"#;

        let row: ResultRow = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(row.title, "Solar Powered Irrigation");
        assert_eq!(row.year.as_deref(), Some("2023"));
        assert_eq!(row.pdf_path.as_deref(), Some("thesis_files/solar.pdf"));
    }

    #[test]
    fn test_result_row_missing_optional_fields() {
        let json = r#"{"title": "A", "course": "BSCS", "date_uploaded": "2024-01-01"}"#;
        let row: ResultRow = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(row.year, None);
        assert_eq!(row.authors, None);
        assert_eq!(row.keywords, None);
        assert_eq!(row.pdf_path, None);
    }

    #[test]
    fn test_result_row_null_and_empty_are_absent() {
        let json = r#"{"title": "A", "course": "BSCS", "year": null,
                       "date_uploaded": "x", "authors": "", "pdf_path": null}"#;
        let row: ResultRow = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(row.year, None);
        assert_eq!(row.authors, None);
        assert_eq!(row.pdf_path, None);
    }

    #[test]
    fn test_result_row_numeric_year() {
        let json = r#"{"title": "A", "course": "BSCS", "year": 2019, "date_uploaded": "x"}"#;
        let row: ResultRow = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(row.year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_result_row_null_title_becomes_empty() {
        let json = r#"{"title": null, "course": "BSCS", "date_uploaded": "x"}"#;
        let row: ResultRow = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(row.title, "");
    }

    #[test]
    fn test_detail_record_from_row() {
        let row = ResultRow {
            title: "T".to_string(),
            course: "C".to_string(),
            keywords: Some("k".to_string()),
            ..Default::default()
        };
        let detail = DetailRecord::from(&row);
        assert_eq!(detail.title, "T");
        assert_eq!(detail.keywords.as_deref(), Some("k"));
        assert_eq!(detail.authors, None);
    }

    #[test]
    fn test_abstract_images_deserialize() {
        let json = r#"{"images": ["aGVsbG8=", "d29ybGQ="]}"#;
        let images: AbstractImages = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(images.images.len(), 2);
        assert_eq!(images.data_urls()[0], "data:image/png;base64,aGVsbG8=");
        assert_eq!(images.data_urls()[1], "data:image/png;base64,d29ybGQ=");
    }

    #[test]
    fn test_abstract_images_error_response() {
        let json = r#"{"error": "Failed to extract images."}"#;
        let images: AbstractImages = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(images.is_empty());
        assert_eq!(images.error.as_deref(), Some("Failed to extract images."));
    }

    #[test]
    fn test_abstract_images_null_list() {
        let images: AbstractImages =
            serde_json::from_str(r#"{"images": null}"#).expect("デシリアライズ失敗");
        assert!(images.is_empty());
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("2021")), "2021");
    }
}
