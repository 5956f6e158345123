//! 検索結果テーブルの表示内容

use crate::types::{or_dash, ResultRow};

/// 結果テーブルの列数（タイトル・学科・年度・登録日）
pub const COLUMN_COUNT: u32 = 4;

/// 0件時に表示するメッセージ
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// 表示用の1行
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// レスポンス内の位置（行クリック時にモーダルへ渡すレコードの特定に使う）
    pub index: usize,
    pub title: String,
    pub course: String,
    pub year: String,
    pub date_uploaded: String,
}

/// 結果テーブルの本体
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsTable {
    /// まだ一度も結果を受け取っていない
    #[default]
    Pending,
    /// 0件（全列を結合した1行を表示）
    NoResults,
    Rows(Vec<TableRow>),
}

impl ResultsTable {
    /// レスポンスからテーブルを作成（並び順はレスポンスのまま）
    pub fn from_results(results: &[ResultRow]) -> Self {
        if results.is_empty() {
            return ResultsTable::NoResults;
        }

        let rows = results
            .iter()
            .enumerate()
            .map(|(index, row)| TableRow {
                index,
                title: row.title.clone(),
                course: row.course.clone(),
                year: or_dash(row.year.as_deref()),
                date_uploaded: row.date_uploaded.clone(),
            })
            .collect();

        ResultsTable::Rows(rows)
    }

    /// 描画される `<tr>` の数
    pub fn row_count(&self) -> usize {
        match self {
            ResultsTable::Pending => 0,
            ResultsTable::NoResults => 1,
            ResultsTable::Rows(rows) => rows.len(),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            ResultsTable::Rows(rows) => rows,
            _ => &[],
        }
    }
}
