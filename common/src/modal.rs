//! 詳細モーダルの状態
//!
//! Closed -> Open は行クリック、Open -> Closed は閉じるボタンのみ。
//! 閉じても内容は消さず、次に開いたときに上書きする。

use crate::types::{or_dash, AbstractImages, DetailRecord};

/// 抄録画像がない場合のメッセージ
pub const NO_ABSTRACT_MESSAGE: &str = "No abstract image available.";

/// 抄録画像エリアの表示内容
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AbstractPanel {
    /// 取得中（前回の画像はクリア済み）
    #[default]
    Cleared,
    /// 返却順のData URL
    Images(Vec<String>),
    Placeholder,
}

/// モーダルに表示するテキスト項目と抄録エリア
#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub title: String,
    pub authors: String,
    pub course: String,
    pub year: String,
    pub keywords: String,
    pub abstract_panel: AbstractPanel,
}

impl ModalContent {
    fn from_record(record: &DetailRecord) -> Self {
        let abstract_panel = if record.pdf_path.is_some() {
            AbstractPanel::Cleared
        } else {
            AbstractPanel::Placeholder
        };

        Self {
            title: record.title.clone(),
            authors: or_dash(record.authors.as_deref()),
            course: record.course.clone(),
            year: or_dash(record.year.as_deref()),
            keywords: or_dash(record.keywords.as_deref()),
            abstract_panel,
        }
    }
}

/// 詳細モーダル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailModal {
    visible: bool,
    content: Option<ModalContent>,
}

impl DetailModal {
    /// レコードの内容で埋めて表示する（表示中でもその場で上書き）
    pub fn open(&mut self, record: &DetailRecord) {
        self.content = Some(ModalContent::from_record(record));
        self.visible = true;
    }

    /// 非表示にするだけで内容は保持する
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// 抄録画像の取得結果を反映（0件なら代替メッセージ）
    pub fn show_images(&mut self, images: &AbstractImages) {
        let panel = if images.is_empty() {
            AbstractPanel::Placeholder
        } else {
            AbstractPanel::Images(images.data_urls())
        };
        if let Some(content) = self.content.as_mut() {
            content.abstract_panel = panel;
        }
    }

    pub fn show_placeholder(&mut self) {
        if let Some(content) = self.content.as_mut() {
            content.abstract_panel = AbstractPanel::Placeholder;
        }
    }
}
