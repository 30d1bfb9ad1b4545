//! Generic list table: columns, sorting, pagination, text filter, row
//! actions and delete confirmation.
//!
//! A table runs in one of two explicit modes. In [`TableMode::Client`] it
//! owns the whole result set and sorts/slices locally. In
//! [`TableMode::Server`] it renders the rows it is given and reports the
//! wanted page through `on_change`.

pub mod column;
pub mod confirm;
pub mod listing;
pub mod pagination;
pub mod record;
pub mod sorting;
pub mod view;

use std::sync::Arc;

use leptos::prelude::*;

pub use column::{Align, CellValue, Column};
pub use confirm::DeleteConfirmation;
pub use listing::{visible_rows, Listing, RowSource};
pub use pagination::{PageRequest, PageSize};
pub use record::TableRecord;
pub use sorting::SortState;
pub use view::DataTable;

#[derive(Clone, Copy)]
pub enum TableMode {
    Client,
    Server {
        /// Row count across all pages, as reported by the backend.
        total: Signal<usize>,
        on_change: Callback<PageRequest>,
    },
}

impl TableMode {
    pub fn is_server(&self) -> bool {
        matches!(self, TableMode::Server { .. })
    }

    /// Tracks the served total in server mode.
    pub fn source(&self) -> RowSource {
        match self {
            TableMode::Client => RowSource::Local,
            TableMode::Server { total, .. } => RowSource::Served { total: total.get() },
        }
    }
}

pub struct CustomAction<T: 'static> {
    pub label_key: &'static str,
    pub icon: &'static str,
    pub on_click: Callback<T>,
    pub visible: Option<Arc<dyn Fn(&T) -> bool + Send + Sync>>,
}

impl<T: 'static> Clone for CustomAction<T> {
    fn clone(&self) -> Self {
        Self {
            label_key: self.label_key,
            icon: self.icon,
            on_click: self.on_click,
            visible: self.visible.clone(),
        }
    }
}

/// Per-row buttons. Delete always goes through a confirmation prompt.
pub struct RowActions<T: 'static> {
    pub on_view: Option<Callback<T>>,
    pub on_edit: Option<Callback<T>>,
    pub on_delete: Option<Callback<T>>,
    pub custom: Vec<CustomAction<T>>,
}

impl<T: 'static> Default for RowActions<T> {
    fn default() -> Self {
        Self {
            on_view: None,
            on_edit: None,
            on_delete: None,
            custom: Vec::new(),
        }
    }
}

impl<T: 'static> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        Self {
            on_view: self.on_view,
            on_edit: self.on_edit,
            on_delete: self.on_delete,
            custom: self.custom.clone(),
        }
    }
}

impl<T: 'static> RowActions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, cb: Callback<T>) -> Self {
        self.on_view = Some(cb);
        self
    }

    pub fn edit(mut self, cb: Callback<T>) -> Self {
        self.on_edit = Some(cb);
        self
    }

    pub fn delete(mut self, cb: Callback<T>) -> Self {
        self.on_delete = Some(cb);
        self
    }

    pub fn custom(mut self, label_key: &'static str, icon: &'static str, cb: Callback<T>) -> Self {
        self.custom.push(CustomAction {
            label_key,
            icon,
            on_click: cb,
            visible: None,
        });
        self
    }

    /// Custom action shown only on rows matching `visible`.
    pub fn custom_when(
        mut self,
        label_key: &'static str,
        icon: &'static str,
        cb: Callback<T>,
        visible: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.custom.push(CustomAction {
            label_key,
            icon,
            on_click: cb,
            visible: Some(Arc::new(visible)),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_view.is_none()
            && self.on_edit.is_none()
            && self.on_delete.is_none()
            && self.custom.is_empty()
    }
}
