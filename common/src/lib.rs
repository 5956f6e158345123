//! Thesis Search Common Library
//!
//! Web(WASM)側から使われるプラットフォーム非依存の型と状態管理

pub mod types;
pub mod query;
pub mod filters;
pub mod table;
pub mod modal;
pub mod sequence;
pub mod debounce;
pub mod controller;
pub mod config;
pub mod error;

pub use types::{AbstractImages, DetailRecord, ResultRow};
pub use query::{abstract_image_url, SearchQuery};
pub use filters::{active_filters, FilterChip, FilterKind};
pub use table::{ResultsTable, TableRow, COLUMN_COUNT, NO_RESULTS_MESSAGE};
pub use modal::{AbstractPanel, DetailModal, ModalContent, NO_ABSTRACT_MESSAGE};
pub use sequence::{RequestSequence, Ticket};
pub use debounce::{Debouncer, Timer};
pub use controller::{AbstractRequest, FetchOutcome, SearchController, SearchRequest};
pub use config::ClientConfig;
pub use error::{Error, Result};
