//! 検索バー（フリーテキスト＋学科・年度フィルタ）

use leptos::prelude::*;

#[component]
pub fn FilterBar<FT, FC, FY>(
    courses: Vec<String>,
    years: Vec<String>,
    on_text_input: FT,
    on_course_change: FC,
    on_year_change: FY,
) -> impl IntoView
where
    FT: Fn(String) + 'static,
    FC: Fn(String) + 'static,
    FY: Fn(String) + 'static,
{
    view! {
        <div class="search-bar">
            <input
                type="text"
                id="search-input"
                placeholder="Search thesis title..."
                autocomplete="off"
                on:input=move |ev| on_text_input(event_target_value(&ev))
            />

            <select
                id="filter-course"
                on:change=move |ev| on_course_change(event_target_value(&ev))
            >
                <option value="">"All Courses"</option>
                {options(courses)}
            </select>

            <select
                id="filter-year"
                on:change=move |ev| on_year_change(event_target_value(&ev))
            >
                <option value="">"All Years"</option>
                {options(years)}
            </select>
        </div>
    }
}

fn options(values: Vec<String>) -> impl IntoView {
    values
        .into_iter()
        .map(|value| view! { <option value=value.clone()>{value.clone()}</option> })
        .collect_view()
}
