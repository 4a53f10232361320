//! Core types shared across the application.
//! Pure data with no external dependencies.

/// Board dimensions.
pub const BOARD_COLS: u8 = 10;
pub const BOARD_ROWS: u8 = 20;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;
/// Automatic gravity interval. Fixed: this ruleset has no difficulty curve.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Wall-kick retry limit: offsets with magnitude above this abort the rotation.
pub const KICK_LIMIT: i8 = 5;

/// Score delta per line-clear pass, indexed by rows cleared in that pass.
/// Simultaneous clears are one combined bonus, not a per-row sum.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    J,
    L,
    O,
    S,
    Z,
    T,
    I,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::I,
    ];

}

/// Rotation direction for the shape matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

/// Game lifecycle phases.
///
/// GameOver is terminal; only an explicit restart (full re-initialization)
/// re-enters Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// Game actions, as produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// Manual downward drop; also resets the gravity accumulator.
    SoftDrop,
    RotateCw,
    RotateCcw,
    /// Start from NotStarted, or full re-initialization from any phase.
    Restart,
}

/// Cell on the board (None = empty, Some = settled piece color).
pub type Cell = Option<PieceKind>;
