pub mod api;
pub mod components;
pub mod config;
pub mod data_table;
pub mod date_utils;
pub mod dialogs;
pub mod form_utils;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod local_storage;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod query_cache;
pub mod row_grid;
pub mod theme;
