//! メインアプリケーションコンポーネント
//!
//! SearchController を1つのシグナルで保持し、入力イベント・fetch・タイマーを配線する。

use crate::api;
use crate::components::{
    active_filters::ActiveFilters,
    detail_panel::DetailPanel,
    filter_bar::FilterBar,
    header::Header,
    results_panel::ResultsPanel,
};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thesis_search_common::{Debouncer, FetchOutcome, SearchController, Timer};

/// gloo のタイマー（Timeoutをdropすると保留中の呼び出しは取り消される）
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = crate::config::load();
    let api_base = StoredValue::new(config.api_base.clone());
    let controller = RwSignal::new(SearchController::new());
    let debouncer = StoredValue::new_local(Debouncer::new(BrowserTimer, config.debounce_ms));

    // 検索の発行（チップ更新→fetch→最新トークンのみ反映）
    let run_search = move || {
        let Some(request) = controller.try_update(SearchController::begin_search) else {
            return;
        };
        let url = request.url(&api_base.get_value());
        spawn_local(async move {
            let response = api::search(&url).await;
            let outcome = controller.try_update(|c| c.finish_search(request.ticket, response));
            report("Error fetching results", outcome);
        });
    };

    let on_text_input = move |text: String| {
        controller.update(|c| c.set_text(text));
        debouncer.update_value(|d| d.call(run_search));
    };

    let on_course_change = move |course: String| {
        controller.update(|c| c.set_course(course));
        run_search();
    };

    let on_year_change = move |year: String| {
        controller.update(|c| c.set_year(year));
        run_search();
    };

    // 行クリック（モーダル表示→PDFがあれば抄録画像を取得）
    let on_select = move |index: usize| {
        let Some(request) = controller.try_update(|c| c.open_detail(index)).flatten() else {
            return;
        };
        let url = request.url(&api_base.get_value());
        spawn_local(async move {
            let response = api::abstract_images(&url).await;
            if let Ok(images) = &response {
                if let Some(message) = &images.error {
                    gloo::console::warn!(format!("Abstract images unavailable: {}", message));
                }
            }
            let outcome = controller.try_update(|c| c.finish_abstract(request.ticket, response));
            report("Error loading abstract images", outcome);
        });
    };

    let on_close = move |_: ()| controller.update(SearchController::close_detail);

    let filters = Memo::new(move |_| controller.with(|c| c.filters().to_vec()));
    let table = Memo::new(move |_| controller.with(|c| c.table().clone()));
    let modal = Memo::new(move |_| controller.with(|c| c.modal().clone()));

    // 初期表示用の検索
    run_search();

    view! {
        <div class="container">
            <Header />

            <FilterBar
                courses=config.courses
                years=config.years
                on_text_input=on_text_input
                on_course_change=on_course_change
                on_year_change=on_year_change
            />

            <ActiveFilters filters=filters />

            <ResultsPanel table=table on_select=on_select />

            <DetailPanel modal=modal on_close=on_close />
        </div>
    }
}

/// 失敗と破棄したレスポンスをコンソールに出力
fn report(context: &str, outcome: Option<FetchOutcome>) {
    match outcome {
        Some(FetchOutcome::Failed(e)) => {
            gloo::console::error!(format!("{}: {}", context, e));
        }
        Some(FetchOutcome::Stale) => {
            gloo::console::debug!(format!("{}: stale response dropped", context));
        }
        Some(FetchOutcome::Applied) | None => {}
    }
}
