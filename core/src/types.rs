/// Single grid axis used for board rows and columns.
pub type Coord = u8;

/// Count type used for cell indices and total-cell counts.
pub type CellCount = u16;

/// Score and miss counter type.
pub type Points = u32;

pub const DEFAULT_ROWS: Coord = 4;
pub const DEFAULT_COLS: Coord = 4;

/// Delay between a target appearing and it timing out as a miss.
pub const SPAWN_INTERVAL_MS: u32 = 1000;

/// How long the "whack" pulse stays on a cell after a hit.
pub const PULSE_DURATION_MS: u32 = 200;

/// Misses that end the game.
pub const MISS_LIMIT: Points = 5;

pub const GOBLIN_ASSET_PATH: &str = "./assets/gnome.png";
pub const GOBLIN_ALT_TEXT: &str = "Goblin";

/// Id of the host element the game mounts into.
pub const MOUNT_ID: &str = "game";

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Index of a cell in board order (row-major).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(CellCount);

impl CellId {
    pub const fn new(index: CellCount) -> Self {
        Self(index)
    }

    pub const fn index(self) -> CellCount {
        self.0
    }
}

impl From<CellId> for usize {
    fn from(cell: CellId) -> Self {
        cell.0.into()
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for (Coord, Coord) {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Identifies one scheduled spawn timer. Firings carrying any other token are stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpawnToken(u64);

impl SpawnToken {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
