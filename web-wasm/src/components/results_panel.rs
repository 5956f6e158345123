//! 検索結果テーブル

use leptos::prelude::*;
use thesis_search_common::{ResultsTable, TableRow, COLUMN_COUNT, NO_RESULTS_MESSAGE};

#[component]
pub fn ResultsPanel<F>(table: Memo<ResultsTable>, on_select: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <table class="results-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Course"</th>
                    <th>"Year"</th>
                    <th>"Date Uploaded"</th>
                </tr>
            </thead>
            <tbody id="result-body">
                {move || match table.get() {
                    ResultsTable::Pending => ().into_any(),
                    ResultsTable::NoResults => view! {
                        <tr>
                            <td
                                colspan=COLUMN_COUNT.to_string()
                                style="text-align:center;color:gray;padding:15px;"
                            >
                                {NO_RESULTS_MESSAGE}
                            </td>
                        </tr>
                    }
                    .into_any(),
                    ResultsTable::Rows(rows) => rows
                        .into_iter()
                        .map(|row| result_row(row, on_select.clone()))
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

fn result_row<F>(row: TableRow, on_select: F) -> impl IntoView
where
    F: Fn(usize) + 'static,
{
    let index = row.index;
    view! {
        <tr class="result-row" on:click=move |_| on_select(index)>
            <td>{row.title}</td>
            <td>{row.course}</td>
            <td>{row.year}</td>
            <td>{row.date_uploaded}</td>
        </tr>
    }
}
