//! Cell selection with an explicit anchor
//!
//! The selection is a set of cell positions plus the anchor of the current
//! gesture. Shift-extension always builds the rectangle between the stored
//! anchor and the target, so the anchor is never reconstructed from the set.

use std::collections::BTreeSet;

/// Position of a cell in the current display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Current extent of the grid, used to keep selections in bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub rows: usize,
    pub cols: usize,
}

impl GridBounds {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

/// Shape of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionKind {
    #[default]
    Empty,
    SingleCell,
    /// Several cells that are not whole rows. Once rows move they need not
    /// form a single rectangle.
    Range,
    /// One or more complete rows (row header click, select-all)
    FullRows,
}

/// Selected cells and the anchor of the gesture that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    cells: BTreeSet<CellPosition>,
    anchor: Option<CellPosition>,
    kind: SelectionKind,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn anchor(&self) -> Option<CellPosition> {
        self.anchor
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = CellPosition> + '_ {
        self.cells.iter().copied()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&CellPosition::new(row, col))
    }

    /// Whether any cell of `row` is selected (row header highlight)
    pub fn row_has_selection(&self, row: usize) -> bool {
        self.cells
            .range(CellPosition::new(row, 0)..=CellPosition::new(row, usize::MAX))
            .next()
            .is_some()
    }

    /// Distinct row indices touched by the selection, ascending
    pub fn selected_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.cells.iter().map(|p| p.row).collect();
        rows.dedup();
        rows
    }

    /// Click (or shift-click when `extend`) on a cell
    ///
    /// Returns false and leaves the selection alone if the target is outside
    /// the grid.
    pub fn select_cell(&mut self, row: usize, col: usize, extend: bool, bounds: GridBounds) -> bool {
        let target = CellPosition::new(row, col);
        if !bounds.contains(target) {
            return false;
        }

        match self.anchor.filter(|_| extend && !self.cells.is_empty()) {
            Some(anchor) => {
                let rows = anchor.row.min(row)..=anchor.row.max(row);
                let cols = anchor.col.min(col)..=anchor.col.max(col);
                self.cells = rows
                    .flat_map(|r| cols.clone().map(move |c| CellPosition::new(r, c)))
                    .collect();
                self.kind = self.classify(false);
            }
            None => {
                self.cells = BTreeSet::from([target]);
                self.anchor = Some(target);
                self.kind = SelectionKind::SingleCell;
            }
        }
        true
    }

    /// Select every cell of one row
    pub fn select_row(&mut self, row: usize, bounds: GridBounds) -> bool {
        if row >= bounds.rows || bounds.cols == 0 {
            return false;
        }
        self.cells = (0..bounds.cols).map(|c| CellPosition::new(row, c)).collect();
        self.anchor = Some(CellPosition::new(row, 0));
        self.kind = SelectionKind::FullRows;
        true
    }

    /// Select every cell in the grid
    pub fn select_all(&mut self, bounds: GridBounds) {
        if bounds.rows == 0 || bounds.cols == 0 {
            self.clear();
            return;
        }
        self.cells = (0..bounds.rows)
            .flat_map(|r| (0..bounds.cols).map(move |c| CellPosition::new(r, c)))
            .collect();
        self.anchor = Some(CellPosition::new(0, 0));
        self.kind = SelectionKind::FullRows;
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.anchor = None;
        self.kind = SelectionKind::Empty;
    }

    /// Re-derive row indices after the row list changed
    ///
    /// `map` returns the new index of an old row, or `None` if the row is
    /// gone. Cells of vanished rows are dropped. If the anchor's row vanished,
    /// the first remaining cell becomes the anchor.
    pub fn remap_rows(&mut self, map: impl Fn(usize) -> Option<usize>) {
        if self.cells.is_empty() {
            return;
        }
        // Rows are dropped or moved whole, so whole rows stay whole
        let whole_rows = self.kind == SelectionKind::FullRows;

        self.cells = self
            .cells
            .iter()
            .filter_map(|p| map(p.row).map(|row| CellPosition::new(row, p.col)))
            .collect();

        if self.cells.is_empty() {
            self.clear();
            return;
        }

        self.anchor = self
            .anchor
            .and_then(|a| map(a.row).map(|row| CellPosition::new(row, a.col)))
            .or_else(|| self.cells.first().copied());
        self.kind = self.classify(whole_rows);
    }

    fn classify(&self, whole_rows: bool) -> SelectionKind {
        match self.cells.len() {
            0 => SelectionKind::Empty,
            _ if whole_rows => SelectionKind::FullRows,
            1 => SelectionKind::SingleCell,
            _ => SelectionKind::Range,
        }
    }
}
