//! Keyboard movement across an editable line grid.
//!
//! The navigator only decides what should happen; the view applies the
//! resulting [`GridAction`] to its `LineGrid` and moves DOM focus.

/// Position of a cell: row index and index into the navigator's field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub row: usize,
    pub field: usize,
}

impl CellPos {
    pub fn new(row: usize, field: usize) -> Self {
        Self { row, field }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    /// Key is not handled by the grid; let the browser have it.
    Ignore,
    /// Handled, but focus stays where it is.
    Stay,
    Focus(CellPos),
    /// Append an empty row, then focus `CellPos` on it.
    AppendRow(CellPos),
    /// Remove row `index`, then focus `focus`.
    RemoveRow { index: usize, focus: CellPos },
}

impl GridAction {
    /// Whether the keydown's default browser behaviour must be suppressed.
    pub fn consumes_key(&self) -> bool {
        !matches!(self, GridAction::Ignore)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridNavigator {
    grid_id: String,
    fields: Vec<&'static str>,
}

impl GridNavigator {
    pub fn new(grid_id: impl Into<String>, fields: Vec<&'static str>) -> Self {
        Self {
            grid_id: grid_id.into(),
            fields,
        }
    }

    pub fn grid_id(&self) -> &str {
        &self.grid_id
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }

    /// DOM id of a cell input: `{grid_id}-{row}-{field}`.
    pub fn cell_id(&self, row: usize, field: &str) -> String {
        format!("{}-{}-{}", self.grid_id, row, field)
    }

    pub fn cell_id_at(&self, pos: CellPos) -> Option<String> {
        self.fields.get(pos.field).map(|f| self.cell_id(pos.row, f))
    }

    /// Resolves a keydown at `pos` in a grid of `row_count` rows.
    pub fn on_key(
        &self,
        key: &str,
        shift: bool,
        rtl: bool,
        pos: CellPos,
        row_count: usize,
    ) -> GridAction {
        let last_field = match self.fields.len() {
            0 => return GridAction::Ignore,
            n => n - 1,
        };
        if row_count == 0 {
            return GridAction::Ignore;
        }
        let last_row = row_count - 1;

        let arrow = match (key, rtl) {
            ("ArrowRight", false) | ("ArrowLeft", true) => Some(true),
            ("ArrowLeft", false) | ("ArrowRight", true) => Some(false),
            _ => None,
        };

        match key {
            "Tab" if shift => {
                if pos.field > 0 {
                    GridAction::Focus(CellPos::new(pos.row, pos.field - 1))
                } else if pos.row > 0 {
                    GridAction::Focus(CellPos::new(pos.row - 1, last_field))
                } else {
                    GridAction::Stay
                }
            }
            "Enter" | "Tab" => {
                if pos.field < last_field {
                    GridAction::Focus(CellPos::new(pos.row, pos.field + 1))
                } else if pos.row < last_row {
                    GridAction::Focus(CellPos::new(pos.row + 1, 0))
                } else {
                    GridAction::AppendRow(CellPos::new(row_count, 0))
                }
            }
            "ArrowRight" | "ArrowLeft" => match arrow {
                Some(true) if pos.field < last_field => {
                    GridAction::Focus(CellPos::new(pos.row, pos.field + 1))
                }
                Some(false) if pos.field > 0 => {
                    GridAction::Focus(CellPos::new(pos.row, pos.field - 1))
                }
                _ => GridAction::Stay,
            },
            "ArrowDown" if pos.row < last_row => {
                GridAction::Focus(CellPos::new(pos.row + 1, pos.field))
            }
            "ArrowUp" if pos.row > 0 => GridAction::Focus(CellPos::new(pos.row - 1, pos.field)),
            "ArrowDown" | "ArrowUp" => GridAction::Stay,
            "Delete" => {
                if row_count <= 1 {
                    GridAction::Stay
                } else {
                    GridAction::RemoveRow {
                        index: pos.row,
                        focus: CellPos::new(pos.row.min(row_count - 2), pos.field),
                    }
                }
            }
            _ => GridAction::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> GridNavigator {
        GridNavigator::new("lines", vec!["item", "unit", "quantity", "price"])
    }

    #[test]
    fn enter_moves_to_next_field_then_next_row() {
        let n = nav();
        assert_eq!(
            n.on_key("Enter", false, false, CellPos::new(0, 1), 3),
            GridAction::Focus(CellPos::new(0, 2))
        );
        assert_eq!(
            n.on_key("Enter", false, false, CellPos::new(0, 3), 3),
            GridAction::Focus(CellPos::new(1, 0))
        );
    }

    #[test]
    fn only_last_cell_of_last_row_appends() {
        let n = nav();
        assert_eq!(
            n.on_key("Tab", false, false, CellPos::new(2, 3), 3),
            GridAction::AppendRow(CellPos::new(3, 0))
        );
        assert_eq!(
            n.on_key("Enter", false, false, CellPos::new(2, 3), 3),
            GridAction::AppendRow(CellPos::new(3, 0))
        );
        for row in 0..3 {
            for field in 0..4 {
                let action = n.on_key("Enter", false, false, CellPos::new(row, field), 3);
                let is_append = matches!(action, GridAction::AppendRow(_));
                assert_eq!(is_append, row == 2 && field == 3, "row {row} field {field}");
            }
        }
    }

    #[test]
    fn shift_tab_wraps_back_and_stops_at_origin() {
        let n = nav();
        assert_eq!(
            n.on_key("Tab", true, false, CellPos::new(1, 0), 2),
            GridAction::Focus(CellPos::new(0, 3))
        );
        assert_eq!(
            n.on_key("Tab", true, false, CellPos::new(0, 0), 2),
            GridAction::Stay
        );
    }

    #[test]
    fn arrows_do_not_wrap_and_mirror_in_rtl() {
        let n = nav();
        assert_eq!(
            n.on_key("ArrowRight", false, false, CellPos::new(0, 1), 1),
            GridAction::Focus(CellPos::new(0, 2))
        );
        assert_eq!(
            n.on_key("ArrowRight", false, true, CellPos::new(0, 1), 1),
            GridAction::Focus(CellPos::new(0, 0))
        );
        assert_eq!(
            n.on_key("ArrowRight", false, false, CellPos::new(0, 3), 1),
            GridAction::Stay
        );
        assert_eq!(
            n.on_key("ArrowLeft", false, true, CellPos::new(0, 3), 1),
            GridAction::Stay
        );
    }

    #[test]
    fn vertical_arrows_keep_field_and_never_append() {
        let n = nav();
        assert_eq!(
            n.on_key("ArrowDown", false, false, CellPos::new(0, 2), 2),
            GridAction::Focus(CellPos::new(1, 2))
        );
        assert_eq!(
            n.on_key("ArrowDown", false, false, CellPos::new(1, 2), 2),
            GridAction::Stay
        );
        assert_eq!(
            n.on_key("ArrowUp", false, false, CellPos::new(0, 2), 2),
            GridAction::Stay
        );
    }

    #[test]
    fn delete_keeps_the_sole_row() {
        let n = nav();
        assert_eq!(
            n.on_key("Delete", false, false, CellPos::new(0, 2), 1),
            GridAction::Stay
        );
    }

    #[test]
    fn delete_refocuses_successor_or_previous_row() {
        let n = nav();
        assert_eq!(
            n.on_key("Delete", false, false, CellPos::new(1, 2), 3),
            GridAction::RemoveRow {
                index: 1,
                focus: CellPos::new(1, 2)
            }
        );
        assert_eq!(
            n.on_key("Delete", false, false, CellPos::new(2, 2), 3),
            GridAction::RemoveRow {
                index: 2,
                focus: CellPos::new(1, 2)
            }
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let n = nav();
        let action = n.on_key("a", false, false, CellPos::new(0, 0), 1);
        assert_eq!(action, GridAction::Ignore);
        assert!(!action.consumes_key());
    }

    #[test]
    fn cell_ids() {
        let n = nav();
        assert_eq!(n.cell_id(4, "quantity"), "lines-4-quantity");
        assert_eq!(
            n.cell_id_at(CellPos::new(0, 3)).as_deref(),
            Some("lines-0-price")
        );
        assert_eq!(n.cell_id_at(CellPos::new(0, 9)), None);
        assert_eq!(n.field_index("unit"), Some(1));
    }
}
