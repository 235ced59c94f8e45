use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Grid of cells the controller places targets on.
///
/// Cells are addressed by [`CellId`] in board order. Implementations hold the
/// occupancy and pulse presentation but know nothing about game rules.
pub trait Board {
    fn cell_count(&self) -> CellCount;

    /// Uniformly random cell, possibly the one currently occupied.
    fn pick_random_cell(&mut self) -> CellId;

    fn is_occupied(&self, cell: CellId) -> bool;

    /// Marks `cell` as holding the target. Cells outside the board are ignored.
    fn mark_occupied(&mut self, cell: CellId);

    /// Removes any target from `cell`, whatever its prior state.
    fn clear_occupied(&mut self, cell: CellId);

    fn start_pulse(&mut self, cell: CellId);

    fn end_pulse(&mut self, cell: CellId);

    fn contains(&self, cell: CellId) -> bool {
        cell.index() < self.cell_count()
    }

    /// First cell in board order that is not `excluded`.
    fn first_cell_except(&self, excluded: CellId) -> Option<CellId> {
        (0..self.cell_count())
            .map(CellId::new)
            .find(|&cell| cell != excluded)
    }
}

/// In-memory board backed by a row-major grid and a seeded RNG.
#[derive(Clone, Debug)]
pub struct GridBoard {
    config: BoardConfig,
    cells: Array2<CellState>,
    rng: SmallRng,
}

impl GridBoard {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        log::debug!(
            "board: {}x{} ({} cells), seed {}",
            config.rows(),
            config.cols(),
            config.total_cells(),
            seed
        );
        Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Validates the size and builds the board in one step.
    pub fn initialize(rows: Coord, cols: Coord, seed: u64) -> Result<Self> {
        Ok(Self::new(BoardConfig::new(rows, cols)?, seed))
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn cell_state(&self, cell: CellId) -> Option<CellState> {
        let pos = self.config.position(cell)?;
        Some(self.cells[pos.to_nd_index()])
    }

    /// All cells with their state, in board order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &state)| (CellId::new(index as CellCount), state))
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells()
            .filter(|(_, state)| state.occupied)
            .map(|(cell, _)| cell)
    }

    fn state_mut(&mut self, cell: CellId) -> Option<&mut CellState> {
        let Some(pos) = self.config.position(cell) else {
            log::warn!("cell {:?} is outside the {:?} board", cell, self.config.size());
            return None;
        };
        Some(&mut self.cells[pos.to_nd_index()])
    }
}

impl Board for GridBoard {
    fn cell_count(&self) -> CellCount {
        self.config.total_cells()
    }

    fn pick_random_cell(&mut self) -> CellId {
        CellId::new(self.rng.random_range(0..self.cell_count()))
    }

    fn is_occupied(&self, cell: CellId) -> bool {
        self.cell_state(cell).is_some_and(|state| state.occupied)
    }

    fn mark_occupied(&mut self, cell: CellId) {
        if let Some(state) = self.state_mut(cell) {
            state.occupied = true;
        }
    }

    fn clear_occupied(&mut self, cell: CellId) {
        if let Some(state) = self.state_mut(cell) {
            state.occupied = false;
        }
    }

    fn start_pulse(&mut self, cell: CellId) {
        if let Some(state) = self.state_mut(cell) {
            state.pulsing = true;
        }
    }

    fn end_pulse(&mut self, cell: CellId) {
        if let Some(state) = self.state_mut(cell) {
            state.pulsing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(rows: Coord, cols: Coord) -> GridBoard {
        GridBoard::initialize(rows, cols, 7).unwrap()
    }

    #[test]
    fn initialize_rejects_empty_dimensions() {
        assert_eq!(
            GridBoard::initialize(0, 4, 0).unwrap_err(),
            GameError::Config { rows: 0, cols: 4 }
        );
        assert!(GridBoard::initialize(3, 0, 0).is_err());
    }

    #[test]
    fn cells_are_listed_in_board_order() {
        let board = board(2, 3);
        let ids: Vec<_> = board.cells().map(|(cell, _)| cell.index()).collect();

        assert_eq!(ids, [0, 1, 2, 3, 4, 5]);
        assert_eq!(board.cell_count(), 6);
    }

    #[test]
    fn random_pick_stays_on_board() {
        let mut board = board(3, 3);
        for _ in 0..200 {
            let cell = board.pick_random_cell();
            assert!(board.contains(cell));
        }
    }

    #[test]
    fn random_pick_covers_every_cell() {
        let mut board = board(2, 2);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[usize::from(board.pick_random_cell())] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn same_seed_picks_same_cells() {
        let mut a = board(4, 4);
        let mut b = board(4, 4);
        for _ in 0..20 {
            assert_eq!(a.pick_random_cell(), b.pick_random_cell());
        }
    }

    #[test]
    fn mark_and_clear_toggle_occupancy() {
        let mut board = board(4, 4);
        let cell = CellId::new(5);

        board.mark_occupied(cell);
        assert!(board.is_occupied(cell));
        assert_eq!(board.occupied_cells().collect::<Vec<_>>(), [cell]);

        board.clear_occupied(cell);
        assert!(!board.is_occupied(cell));
        assert_eq!(board.occupied_cells().count(), 0);
    }

    #[test]
    fn clear_on_clear_cell_is_a_no_op() {
        let mut board = board(2, 2);
        let before: Vec<_> = board.cells().collect();

        board.clear_occupied(CellId::new(3));

        assert_eq!(board.cells().collect::<Vec<_>>(), before);
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut board = board(2, 2);
        let outside = CellId::new(4);

        board.mark_occupied(outside);

        assert!(!board.contains(outside));
        assert!(!board.is_occupied(outside));
        assert_eq!(board.cell_state(outside), None);
        assert_eq!(board.occupied_cells().count(), 0);
    }

    #[test]
    fn pulse_is_independent_of_occupancy() {
        let mut board = board(2, 2);
        let cell = CellId::new(1);

        board.start_pulse(cell);
        assert_eq!(
            board.cell_state(cell),
            Some(CellState {
                occupied: false,
                pulsing: true
            })
        );

        board.end_pulse(cell);
        assert_eq!(board.cell_state(cell), Some(CellState::default()));
    }

    #[test]
    fn first_cell_except_skips_only_the_excluded_cell() {
        let board = board(2, 2);

        assert_eq!(board.first_cell_except(CellId::new(0)), Some(CellId::new(1)));
        assert_eq!(board.first_cell_except(CellId::new(2)), Some(CellId::new(0)));
        assert_eq!(self::board(1, 1).first_cell_except(CellId::new(0)), None);
    }
}
