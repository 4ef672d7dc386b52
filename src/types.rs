//! Shared types and constants.
//! Pure data with no external dependencies.

/// Board dimensions (columns x rows).
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Automatic descent timing (milliseconds).
///
/// The interval shrinks by [`DROP_DECAY_PER_LEVEL_MS`] per level and never
/// goes below [`DROP_INTERVAL_MIN_MS`].
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_DECAY_PER_LEVEL_MS: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points awarded per cleared row, multiplied by the level at clear time.
pub const POINTS_PER_LINE: u32 = 100;

/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Drop interval for a given level: `max(100, 1000 - (level - 1) * 100)`.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_DECAY_PER_LEVEL_MS))
        .max(DROP_INTERVAL_MIN_MS)
}

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order. Index order matters: the uniform
    /// generator draws by index, and snapshots export `index + 1` as the
    /// cell color id.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog index, 0..7.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = locked piece kind).
pub type Cell = Option<PieceKind>;

/// Player commands accepted while a game is running and not paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Session lifecycle phase.
///
/// `Idle` is the pre-start / post-reset state; `Over` is terminal until
/// `start` or `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}
