//! Spreadsheet-like line editing used by the invoice editor and the item
//! units/ingredients grids.

pub mod cells;
pub mod lines;
pub mod navigation;
pub mod pricing;

use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

pub use cells::{GridInput, GridSelect};
pub use lines::{GridLine, LineGrid};
pub use navigation::{CellPos, GridAction, GridNavigator};
pub use pricing::{PriceTable, PricingStore, UnitCache};

/// Focuses the cell input with DOM id `id` on the next frame, after a
/// freshly appended or shifted row has rendered.
pub fn focus_cell(id: String) {
    request_animation_frame(move || {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        match element {
            Some(el) => {
                if let Err(e) = el.focus() {
                    log::warn!("focus {id} failed: {e:?}");
                }
            }
            None => log::debug!("grid cell {id} not rendered"),
        }
    });
}

/// Runs the navigator for a keydown on a grid cell, suppressing the browser
/// default for keys the grid consumes.
pub fn grid_keydown(
    ev: &web_sys::KeyboardEvent,
    navigator: &GridNavigator,
    pos: CellPos,
    row_count: usize,
    rtl: bool,
) -> GridAction {
    let action = navigator.on_key(&ev.key(), ev.shift_key(), rtl, pos, row_count);
    if action.consumes_key() {
        ev.prevent_default();
    }
    action
}

/// Applies a navigator decision to `grid` and moves focus accordingly.
pub fn apply_action<Row>(
    action: GridAction,
    grid: RwSignal<LineGrid<Row>>,
    navigator: &GridNavigator,
) where
    Row: Default + Send + Sync + 'static,
{
    let target = match action {
        GridAction::Ignore | GridAction::Stay => None,
        GridAction::Focus(pos) => Some(pos),
        GridAction::AppendRow(pos) => {
            grid.update(|g| {
                g.append();
            });
            Some(pos)
        }
        GridAction::RemoveRow { index, focus } => {
            let mut removed = false;
            grid.update(|g| removed = g.remove(index));
            removed.then_some(focus)
        }
    };
    if let Some(id) = target.and_then(|pos| navigator.cell_id_at(pos)) {
        focus_cell(id);
    }
}

/// A line grid together with its navigator, addressed by row key so that
/// keyed `<For>` rows stay correct after inserts and removals.
pub struct GridHandle<Row: Send + Sync + 'static> {
    pub lines: RwSignal<LineGrid<Row>>,
    navigator: StoredValue<GridNavigator>,
}

impl<Row: Send + Sync + 'static> Clone for GridHandle<Row> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Row: Send + Sync + 'static> Copy for GridHandle<Row> {}

impl<Row> GridHandle<Row>
where
    Row: Default + Clone + Send + Sync + 'static,
{
    pub fn new(lines: LineGrid<Row>, navigator: GridNavigator) -> Self {
        Self {
            lines: RwSignal::new(lines),
            navigator: StoredValue::new(navigator),
        }
    }

    /// Row keys in display order; tracked.
    pub fn keys(&self) -> Vec<Uuid> {
        self.lines.with(LineGrid::keys)
    }

    /// Current index of `key`; tracked.
    pub fn index(&self, key: Uuid) -> Option<usize> {
        self.lines.with(|g| g.index_of(key))
    }

    /// DOM id of the `field` cell of row `key`; tracked.
    pub fn cell_id(&self, key: Uuid, field: &str) -> String {
        let row = self.index(key).unwrap_or_default();
        self.navigator.with_value(|n| n.cell_id(row, field))
    }

    pub fn read<R>(&self, key: Uuid, f: impl FnOnce(&Row) -> R) -> Option<R> {
        self.lines.with(|g| g.get_by_key(key).map(f))
    }

    pub fn write(&self, key: Uuid, f: impl FnOnce(&mut Row)) {
        self.lines.update(|g| {
            g.update_by_key(key, f);
        });
    }

    pub fn replace(&self, rows: Vec<Row>) {
        self.lines.set(LineGrid::from_rows(rows));
    }

    pub fn rows(&self) -> Vec<Row> {
        self.lines.with_untracked(|g| g.rows().cloned().collect())
    }

    /// See [`LineGrid::filled_rows`].
    pub fn filled_rows(&self, is_blank: impl Fn(&Row) -> bool) -> Vec<Row> {
        self.lines.with_untracked(|g| g.filled_rows(is_blank))
    }

    /// Keyboard handling for the `field` cell of row `key`.
    pub fn on_keydown(&self, ev: &web_sys::KeyboardEvent, key: Uuid, field: &str, rtl: bool) {
        let Some(row) = self.lines.with_untracked(|g| g.index_of(key)) else {
            return;
        };
        let row_count = self.lines.with_untracked(LineGrid::len);
        let lines = self.lines;
        self.navigator.with_value(|nav| {
            let Some(field) = nav.field_index(field) else {
                return;
            };
            let action = grid_keydown(ev, nav, CellPos::new(row, field), row_count, rtl);
            apply_action(action, lines, nav);
        });
    }

    /// Appends an empty row and focuses its `field` cell.
    pub fn append_and_focus(&self, field: &str) {
        let mut index = 0;
        self.lines.update(|g| index = g.append());
        focus_cell(self.navigator.with_value(|n| n.cell_id(index, field)));
    }

    pub fn remove(&self, key: Uuid) {
        self.lines.update(|g| {
            if let Some(index) = g.index_of(key) {
                g.remove(index);
            }
        });
    }
}
