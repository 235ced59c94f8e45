/// Display state of one board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellState {
    /// A goblin is shown in the cell ("active").
    pub occupied: bool,
    /// The cell is playing its "whack" pulse.
    pub pulsing: bool,
}
