//! 適用中フィルタ（チップ）の表示内容

use crate::query::SearchQuery;

/// チップの種類（表示順はこの並び）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Query,
    Course,
    Year,
}

impl FilterKind {
    pub fn icon(&self) -> &'static str {
        match self {
            FilterKind::Query => "🔍",
            FilterKind::Course => "📚",
            FilterKind::Year => "📅",
        }
    }
}

/// 適用中フィルタ1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub kind: FilterKind,
    pub value: String,
}

impl FilterChip {
    /// 表示ラベル（例: "📚 BSIT"）
    pub fn label(&self) -> String {
        format!("{} {}", self.kind.icon(), self.value)
    }
}

/// 検索条件からチップ一覧を作成
///
/// 空の項目はチップにならない。呼び出しごとに一覧全体を作り直す。
pub fn active_filters(query: &SearchQuery) -> Vec<FilterChip> {
    [
        (FilterKind::Query, &query.text),
        (FilterKind::Course, &query.course),
        (FilterKind::Year, &query.year),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| FilterChip {
        kind,
        value: value.clone(),
    })
    .collect()
}
