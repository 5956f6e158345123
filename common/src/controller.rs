//! 検索画面の状態管理
//!
//! 入力欄の値、適用中フィルタ、結果テーブル、詳細モーダルをひとつの構造体で保持する。
//! 通信とタイマーは持たず、呼び出し側（WASM）がリクエストを発行して結果を返す。

use crate::error::{Error, Result};
use crate::filters::{active_filters, FilterChip};
use crate::modal::DetailModal;
use crate::query::{abstract_image_url, SearchQuery};
use crate::sequence::{RequestSequence, Ticket};
use crate::table::ResultsTable;
use crate::types::{AbstractImages, DetailRecord, ResultRow};

/// 発行すべき検索リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub ticket: Ticket,
    pub query: SearchQuery,
}

impl SearchRequest {
    pub fn url(&self, api_base: &str) -> String {
        self.query.url(api_base)
    }
}

/// 発行すべき抄録画像リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractRequest {
    pub ticket: Ticket,
    pub pdf_path: String,
}

impl AbstractRequest {
    pub fn url(&self, api_base: &str) -> String {
        abstract_image_url(api_base, &self.pdf_path)
    }
}

/// レスポンス反映結果
#[derive(Debug)]
pub enum FetchOutcome {
    Applied,
    /// 新しいリクエストが発行済みのため破棄した
    Stale,
    /// 失敗（呼び出し側でログ出力する）
    Failed(Error),
}

#[derive(Debug, Default)]
pub struct SearchController {
    text: String,
    course: String,
    year: String,
    filters: Vec<FilterChip>,
    results: Vec<ResultRow>,
    table: ResultsTable,
    modal: DetailModal,
    searches: RequestSequence,
    abstracts: RequestSequence,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_course(&mut self, course: impl Into<String>) {
        self.course = course.into();
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// 現在の入力値から作った検索条件
    pub fn query(&self) -> SearchQuery {
        SearchQuery::from_controls(&self.text, &self.course, &self.year)
    }

    /// 検索開始：フィルタ表示を作り直し、新しいトークン付きのリクエストを返す
    pub fn begin_search(&mut self) -> SearchRequest {
        let query = self.query();
        self.filters = active_filters(&query);
        SearchRequest {
            ticket: self.searches.issue(),
            query,
        }
    }

    /// 検索結果を反映
    ///
    /// 失敗時はテーブルを前回の表示のまま残す。
    pub fn finish_search(&mut self, ticket: Ticket, response: Result<Vec<ResultRow>>) -> FetchOutcome {
        let results = match response {
            Ok(results) => results,
            Err(e) => return FetchOutcome::Failed(e),
        };
        if !self.searches.is_current(ticket) {
            return FetchOutcome::Stale;
        }

        self.table = ResultsTable::from_results(&results);
        self.results = results;
        FetchOutcome::Applied
    }

    /// 行クリック：モーダルを埋めて表示し、PDFパスがあれば抄録画像リクエストを返す
    ///
    /// 範囲外の行番号なら何もしない。
    pub fn open_detail(&mut self, index: usize) -> Option<AbstractRequest> {
        let record = DetailRecord::from(self.results.get(index)?);
        self.modal.open(&record);

        // 前のレコードの画像が後から届いても反映されないよう、PDFの有無に関係なく更新する
        let ticket = self.abstracts.issue();
        record.pdf_path.map(|pdf_path| AbstractRequest { ticket, pdf_path })
    }

    /// 抄録画像の取得結果を反映（失敗時は代替メッセージ）
    pub fn finish_abstract(&mut self, ticket: Ticket, response: Result<AbstractImages>) -> FetchOutcome {
        let current = self.abstracts.is_current(ticket);
        match response {
            Ok(images) if current => {
                self.modal.show_images(&images);
                FetchOutcome::Applied
            }
            Ok(_) => FetchOutcome::Stale,
            Err(e) => {
                if current {
                    self.modal.show_placeholder();
                }
                FetchOutcome::Failed(e)
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.modal.close();
    }

    pub fn filters(&self) -> &[FilterChip] {
        &self.filters
    }

    pub fn table(&self) -> &ResultsTable {
        &self.table
    }

    pub fn results(&self) -> &[ResultRow] {
        &self.results
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }
}
