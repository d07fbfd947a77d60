pub mod filter_select;
pub mod pagination_controls;
pub mod sortable_header;
pub mod status_badge;
pub mod ui;
