//! 適用中フィルタのチップ表示

use leptos::prelude::*;
use thesis_search_common::FilterChip;

#[component]
pub fn ActiveFilters(filters: Memo<Vec<FilterChip>>) -> impl IntoView {
    view! {
        <div id="active-filters" class="active-filters">
            {move || {
                filters
                    .get()
                    .into_iter()
                    .map(|chip| view! { <span class="filter-chip">{chip.label()}</span> })
                    .collect_view()
            }}
        </div>
    }
}
