use std::fmt;

use crate::error::GridError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CellValue {
    O,
    X,
}

impl CellValue {
    /// Get the opposing value
    pub fn other(self) -> CellValue {
        match self {
            CellValue::O => CellValue::X,
            CellValue::X => CellValue::O,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CellValue::O => 'O',
            CellValue::X => 'X',
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single slot in a column; `None` is empty.
pub type Cell = Option<CellValue>;

/// Read-only snapshot of the grid, one array per column, bottom row first.
pub type Matrix = [[Cell; ROWS]; COLS];

/// A column of cells indexed bottom-to-top: row 0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    index: usize,
    cells: [Cell; ROWS],
}

impl Column {
    pub fn new(index: usize) -> Self {
        Column {
            index,
            cells: [None; ROWS],
        }
    }

    /// Position of this column in the grid
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, row: usize) -> Cell {
        self.cells.get(row).copied().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.cells[ROWS - 1].is_some()
    }

    /// Place a piece in the lowest empty cell, returns the row where it landed
    pub fn append(&mut self, value: CellValue) -> Result<usize, GridError> {
        let row = self
            .cells
            .iter()
            .position(Option::is_none)
            .ok_or(GridError::ColumnFull { column: self.index })?;
        self.cells[row] = Some(value);
        Ok(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    columns: [Column; COLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            columns: std::array::from_fn(Column::new),
        }
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[Column; COLS] {
        &self.columns
    }

    /// Get the cell at a position; row 0 is the bottom
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn place(&mut self, col: usize, value: CellValue) -> Result<usize, GridError> {
        let column = self
            .columns
            .get_mut(col)
            .ok_or(GridError::InvalidColumn(col))?;
        column.append(value)
    }

    /// Snapshot of every column's cells
    pub fn as_matrix(&self) -> Matrix {
        std::array::from_fn(|col| self.columns[col].cells)
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows from top to bottom, column 0 on the left, then a column legend.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<String> = self
                .columns
                .iter()
                .map(|column| column.get(row).map_or(' ', CellValue::as_char).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let legend: Vec<String> = (0..COLS).map(|i| i.to_string()).collect();
        write!(f, "{}", legend.join(" "))
    }
}
