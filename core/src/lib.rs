#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use controller::*;
pub use error::*;
pub use scheduler::*;
pub use types::*;

mod board;
mod cell;
mod controller;
mod error;
mod scheduler;
mod types;

/// Board dimensions, validated to be non-empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    rows: Coord,
    cols: Coord,
}

impl BoardConfig {
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::Config { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    /// `(rows, cols)`
    pub const fn size(&self) -> (Coord, Coord) {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// `(row, col)` of `cell`, or `None` if it lies outside the board.
    pub fn position(&self, cell: CellId) -> Option<(Coord, Coord)> {
        if cell.index() >= self.total_cells() {
            return None;
        }
        let cols = CellCount::from(self.cols);
        let row = (cell.index() / cols).try_into().ok()?;
        let col = (cell.index() % cols).try_into().ok()?;
        Some((row, col))
    }

    pub fn cell_at(&self, (row, col): (Coord, Coord)) -> Option<CellId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(CellId::new(
            CellCount::from(row) * CellCount::from(self.cols) + CellCount::from(col),
        ))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_four_by_four() {
        let config = BoardConfig::default();
        assert_eq!(config.size(), (4, 4));
        assert_eq!(config.total_cells(), 16);
    }

    #[test]
    fn zero_sized_config_is_rejected() {
        assert_eq!(
            BoardConfig::new(0, 0),
            Err(GameError::Config { rows: 0, cols: 0 })
        );
        assert!(BoardConfig::new(1, 0).is_err());
        assert!(BoardConfig::new(1, 1).is_ok());
    }

    #[test]
    fn position_and_cell_at_agree_row_major() {
        let config = BoardConfig::new(3, 5).unwrap();

        assert_eq!(config.position(CellId::new(0)), Some((0, 0)));
        assert_eq!(config.position(CellId::new(7)), Some((1, 2)));
        assert_eq!(config.position(CellId::new(15)), None);
        assert_eq!(config.cell_at((2, 4)), Some(CellId::new(14)));
        assert_eq!(config.cell_at((3, 0)), None);
    }
}
