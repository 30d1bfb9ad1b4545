use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::format::{format_money, format_quantity};

/// Comparable value of one cell, produced by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Money(f64),
    Date(NaiveDate),
    Text(String),
    Flag(bool),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(CellValue::Empty, |v| CellValue::Text(v.to_string()))
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        value.map_or(CellValue::Empty, CellValue::Number)
    }

    pub fn opt_money(value: Option<f64>) -> Self {
        value.map_or(CellValue::Empty, CellValue::Money)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) | CellValue::Money(v) => Some(*v),
            _ => None,
        }
    }

    /// String form used for mixed-type comparison and text filtering.
    pub fn sort_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(v) | CellValue::Money(v) => v.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Flag(b) => if *b { "1" } else { "0" }.to_string(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(v) => format_quantity(*v),
            CellValue::Money(v) => format_money(*v),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Flag(b) => if *b { "✓" } else { "" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    End,
    Center,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Start => "",
            Align::End => "table__cell--end",
            Align::Center => "table__cell--center",
        }
    }
}

pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type Renderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// One table column: header label, value accessor and optional custom cell.
pub struct Column<T> {
    pub key: &'static str,
    /// Translation key of the header.
    pub label_key: &'static str,
    pub align: Align,
    pub sortable: bool,
    accessor: Accessor<T>,
    render: Option<Renderer<T>>,
    comparator: Option<Comparator<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label_key: self.label_key,
            align: self.align,
            sortable: self.sortable,
            accessor: self.accessor.clone(),
            render: self.render.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        label_key: &'static str,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label_key,
            align: Align::Start,
            sortable: true,
            accessor: Arc::new(accessor),
            render: None,
            comparator: None,
        }
    }

    pub fn align_end(mut self) -> Self {
        self.align = Align::End;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Replaces the plain text cell with a custom view.
    pub fn render(mut self, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Overrides the accessor-derived ordering for this column.
    pub fn compare_with(
        mut self,
        comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.comparator {
            Some(cmp) => cmp(a, b),
            None => super::sorting::compare_cells(&self.value(a), &self.value(b)),
        }
    }

    pub fn view_cell(&self, row: &T) -> AnyView {
        match &self.render {
            Some(render) => render(row),
            None => self.value(row).display().into_any(),
        }
    }
}
