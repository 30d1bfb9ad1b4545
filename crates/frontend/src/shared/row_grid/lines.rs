use uuid::Uuid;

/// One editable line with a key that survives reordering and removal.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine<Row> {
    pub key: Uuid,
    pub data: Row,
}

impl<Row> GridLine<Row> {
    pub fn new(data: Row) -> Self {
        Self {
            key: Uuid::new_v4(),
            data,
        }
    }
}

/// Variable-length list of lines. Never empty: the grid always offers at
/// least one row to type into.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGrid<Row> {
    lines: Vec<GridLine<Row>>,
}

impl<Row: Default> Default for LineGrid<Row> {
    fn default() -> Self {
        Self {
            lines: vec![GridLine::new(Row::default())],
        }
    }
}

impl<Row: Default> LineGrid<Row> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut lines: Vec<GridLine<Row>> = rows.into_iter().map(GridLine::new).collect();
        if lines.is_empty() {
            lines.push(GridLine::new(Row::default()));
        }
        Self { lines }
    }

    /// Appends an empty row and returns its index.
    pub fn append(&mut self) -> usize {
        self.lines.push(GridLine::new(Row::default()));
        self.lines.len() - 1
    }

    /// Removes the row at `index` unless it is the only one.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    /// Drops everything and starts over with one empty row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<Row> LineGrid<Row> {
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut Row)) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                f(&mut line.data);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.lines.get(index).map(|l| &l.data)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[GridLine<Row>] {
        &self.lines
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.lines.iter().map(|l| &l.data)
    }

    /// Rows up to the last non-blank one. Blank rows in between are kept so
    /// that line indices of validation errors still match the grid.
    pub fn filled_rows(&self, is_blank: impl Fn(&Row) -> bool) -> Vec<Row>
    where
        Row: Clone,
    {
        let end = self
            .lines
            .iter()
            .rposition(|l| !is_blank(&l.data))
            .map_or(0, |i| i + 1);
        self.lines[..end].iter().map(|l| l.data.clone()).collect()
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.lines.iter_mut().map(|l| &mut l.data)
    }

    pub fn index_of(&self, key: Uuid) -> Option<usize> {
        self.lines.iter().position(|l| l.key == key)
    }

    pub fn get_by_key(&self, key: Uuid) -> Option<&Row> {
        self.lines.iter().find(|l| l.key == key).map(|l| &l.data)
    }

    pub fn update_by_key(&mut self, key: Uuid, f: impl FnOnce(&mut Row)) -> bool {
        match self.lines.iter_mut().find(|l| l.key == key) {
            Some(line) => {
                f(&mut line.data);
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> Vec<Uuid> {
        self.lines.iter().map(|l| l.key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Line {
        qty: f64,
    }

    #[test]
    fn starts_with_one_row_and_keeps_it() {
        let mut grid: LineGrid<Line> = LineGrid::new();
        assert_eq!(grid.len(), 1);
        assert!(!grid.remove(0));
        assert_eq!(grid.len(), 1);

        let empty: LineGrid<Line> = LineGrid::from_rows(Vec::new());
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn append_update_remove() {
        let mut grid = LineGrid::from_rows(vec![Line { qty: 1.0 }]);
        let idx = grid.append();
        assert_eq!(idx, 1);
        assert!(grid.update(1, |l| l.qty = 5.0));
        assert!(!grid.update(7, |l| l.qty = 9.0));
        assert_eq!(grid.get(1), Some(&Line { qty: 5.0 }));

        assert!(grid.remove(0));
        assert_eq!(grid.rows().cloned().collect::<Vec<_>>(), vec![Line { qty: 5.0 }]);
        assert!(!grid.remove(3));
    }

    #[test]
    fn filled_rows_drop_only_the_trailing_blanks() {
        let grid = LineGrid::from_rows(vec![
            Line { qty: 1.0 },
            Line { qty: 0.0 },
            Line { qty: 2.0 },
            Line { qty: 0.0 },
            Line { qty: 0.0 },
        ]);
        let filled = grid.filled_rows(|l| l.qty == 0.0);
        assert_eq!(filled.len(), 3);
        assert_eq!(filled[1], Line { qty: 0.0 });

        let blank: LineGrid<Line> = LineGrid::new();
        assert!(blank.filled_rows(|l| l.qty == 0.0).is_empty());
    }

    #[test]
    fn keys_are_stable_across_removal() {
        let mut grid: LineGrid<Line> = LineGrid::new();
        grid.append();
        grid.append();
        let key = grid.lines()[2].key;
        assert!(grid.remove(0));
        assert_eq!(grid.index_of(key), Some(1));
        assert_ne!(grid.lines()[0].key, grid.lines()[1].key);

        assert!(grid.update_by_key(key, |l| l.qty = 3.0));
        assert_eq!(grid.get_by_key(key), Some(&Line { qty: 3.0 }));
        assert_eq!(grid.keys().len(), 2);
    }
}
