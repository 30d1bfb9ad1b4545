//! Tabs: `page` wraps a tab's content, `registry` maps keys to views and
//! `tab_labels` maps keys to titles.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_title;
