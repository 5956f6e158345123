pub mod header;
pub mod filter_bar;
pub mod active_filters;
pub mod results_panel;
pub mod detail_panel;
