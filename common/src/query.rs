//! 検索クエリとリクエストURLの組み立て

/// 検索APIのパス
pub const SEARCH_PATH: &str = "/api/search";

/// 抄録画像APIのパス
pub const ABSTRACT_IMAGE_PATH: &str = "/get_abstract_image";

/// 検索条件
///
/// 検索のたびに入力欄とドロップダウンの現在値から作り直す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub course: String,
    pub year: String,
}

impl SearchQuery {
    /// 入力欄の値から検索条件を作成（フリーテキストのみ前後の空白を除去）
    pub fn from_controls(text: &str, course: &str, year: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            course: course.to_string(),
            year: year.to_string(),
        }
    }

    /// `/api/search` のURL（各パラメータは個別にパーセントエンコード）
    ///
    /// # Examples
    /// ```
    /// use thesis_search_common::SearchQuery;
    ///
    /// let query = SearchQuery::from_controls(" solar panel ", "BSIT", "");
    /// assert_eq!(
    ///     query.url(""),
    ///     "/api/search?query=solar%20panel&course=BSIT&year="
    /// );
    /// ```
    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}{}?query={}&course={}&year={}",
            api_base.trim_end_matches('/'),
            SEARCH_PATH,
            urlencoding::encode(&self.text),
            urlencoding::encode(&self.course),
            urlencoding::encode(&self.year),
        )
    }
}

/// `/get_abstract_image` のURL
pub fn abstract_image_url(api_base: &str, pdf_path: &str) -> String {
    format!(
        "{}{}?pdf={}",
        api_base.trim_end_matches('/'),
        ABSTRACT_IMAGE_PATH,
        urlencoding::encode(pdf_path),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_controls_trims_text_only() {
        let query = SearchQuery::from_controls("  robot  ", " BSCS", "2022 ");
        assert_eq!(query.text, "robot");
        assert_eq!(query.course, " BSCS");
        assert_eq!(query.year, "2022 ");
    }

    #[test]
    fn test_url_empty_query() {
        let query = SearchQuery::default();
        assert_eq!(query.url(""), "/api/search?query=&course=&year=");
    }

    #[test]
    fn test_url_encodes_each_parameter() {
        let query = SearchQuery::from_controls("a&b=c", "BS IT", "2020/21");
        assert_eq!(
            query.url(""),
            "/api/search?query=a%26b%3Dc&course=BS%20IT&year=2020%2F21"
        );
    }

    #[test]
    fn test_url_with_api_base() {
        let query = SearchQuery::from_controls("x", "", "");
        assert_eq!(
            query.url("http://localhost:5000/"),
            "http://localhost:5000/api/search?query=x&course=&year="
        );
    }

    #[test]
    fn test_abstract_image_url() {
        let url = abstract_image_url("", "thesis_files/My Thesis.pdf");
        assert_eq!(url, "/get_abstract_image?pdf=thesis_files%2FMy%20Thesis.pdf");
    }

    #[test]
    fn test_url_encodes_non_ascii() {
        let query = SearchQuery::from_controls("café", "", "");
        assert_eq!(query.url(""), "/api/search?query=caf%C3%A9&course=&year=");
    }
}
