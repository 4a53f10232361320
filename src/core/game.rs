//! Game state module - the session controller.
//!
//! Owns the board, the current and next pieces, the score, and the gravity
//! accumulator, and drives them through the NotStarted -> Running -> GameOver
//! state machine. The host calls `tick(elapsed_ms)` from whatever frame or
//! timer mechanism it has; the engine itself never measures time, which keeps
//! it unit-testable without a rendering surface.

use crate::core::board::Board;
use crate::core::piece::{collides, Piece};
use crate::core::rng::PieceFactory;
use crate::core::scoring::line_clear_score;
use crate::core::transform;
use crate::types::{GameAction, Phase, Spin, DROP_INTERVAL_MS};

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    factory: PieceFactory,
    score: u32,
    /// Elapsed time since the last drop, manual or automatic.
    drop_timer_ms: u32,
    phase: Phase,
}

impl GameState {
    /// Create a new session with the given RNG seed. The game starts in
    /// NotStarted; call [`start`](Self::start) to begin.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            factory: PieceFactory::new(seed),
            score: 0,
            drop_timer_ms: 0,
            phase: Phase::NotStarted,
        }
    }

    /// Start (or restart) the game: fresh board, zero score, new current and
    /// next pieces, gravity accumulator reset. Valid from any phase.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.drop_timer_ms = 0;
        self.current = Some(Piece::spawn(self.factory.draw()));
        self.next = Some(Piece::spawn(self.factory.draw()));
        self.phase = Phase::Running;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active falling piece, if the game has started.
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// The pre-generated preview piece.
    pub fn next_preview(&self) -> Option<Piece> {
        self.next
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn current_mut(&mut self) -> Option<&mut Piece> {
        self.current.as_mut()
    }

    /// Advance game time. When the accumulated elapsed time exceeds the drop
    /// interval, perform one automatic drop. Returns true if a drop happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > DROP_INTERVAL_MS {
            self.drop_piece();
            return true;
        }
        false
    }

    /// Apply a game action. Movement and rotation are accepted only while
    /// Running; Restart re-initializes from any phase.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Restart {
            self.start();
            return true;
        }
        if self.phase != Phase::Running {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                self.drop_piece();
                true
            }
            GameAction::RotateCw => self.rotate_piece(Spin::Cw),
            GameAction::RotateCcw => self.rotate_piece(Spin::Ccw),
            GameAction::Restart => unreachable!("handled above"),
        }
    }

    /// Shift the current piece horizontally; reverts on collision.
    pub fn move_piece(&mut self, dx: i8) -> bool {
        match self.current.as_mut() {
            Some(piece) => transform::shift(&self.board, piece, dx),
            None => false,
        }
    }

    /// Rotate the current piece with the wall-kick retry scan.
    pub fn rotate_piece(&mut self, spin: Spin) -> bool {
        match self.current.as_mut() {
            Some(piece) => transform::rotate(&self.board, piece, spin),
            None => false,
        }
    }

    /// Advance the current piece one row. On collision the move is reverted
    /// and the piece has landed: merge it into the board, clear full lines,
    /// promote the preview piece, and draw a fresh one. A spawn collision of
    /// the promoted piece is the sole game-over condition.
    ///
    /// Resets the gravity accumulator in every case.
    pub fn drop_piece(&mut self) {
        self.drop_timer_ms = 0;

        let Some(piece) = self.current.as_mut() else {
            return;
        };

        piece.y += 1;
        if collides(&self.board, piece) {
            piece.y -= 1;
            self.lock_current();
        }
    }

    /// Merge the landed piece, score any cleared lines, and spawn the next.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        transform::merge(&mut self.board, &piece);

        let cleared = self.board.clear_full_lines();
        self.score += line_clear_score(cleared.len());

        let promoted = self.next.take().unwrap_or_else(|| {
            // Unreachable in normal play; next is populated on start.
            Piece::spawn(self.factory.draw())
        });
        self.next = Some(Piece::spawn(self.factory.draw()));

        if collides(&self.board, &promoted) {
            // No room to spawn: terminal state. Keep the piece visible for
            // the final frame.
            self.current = Some(promoted);
            self.phase = Phase::GameOver;
            return;
        }
        self.current = Some(promoted);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
