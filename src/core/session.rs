//! Session module - the game state machine and loop stepping.
//!
//! A `Session` owns the board, the active and look-ahead pieces, the stats,
//! and the drop accumulator. It is driven externally: the host feeds elapsed
//! milliseconds into [`Session::tick`] and commands into [`Session::handle`],
//! and `tick`'s return value is the sole continue/stop scheduling signal.
//! There is no internal clock and no I/O.

use crate::core::board::Board;
use crate::core::piece::{Piece, ShapeGrid};
use crate::core::rng::PieceGen;
use crate::types::{drop_interval_ms, Command, Phase, LINES_PER_LEVEL, POINTS_PER_LINE};

/// A complete game session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    gen: PieceGen,
}

impl Session {
    /// Create an idle session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_timer_ms: 0,
            gen: PieceGen::new(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// The look-ahead piece, pre-generated one step ahead.
    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Milliseconds accumulated toward the next automatic descent.
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Current automatic descent interval for this level.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Start a game: allowed from `Idle` and `Over`.
    ///
    /// Clears the board, resets stats to (0, 1, 0), generates the first two
    /// pieces, and enters `Running`.
    pub fn start(&mut self) {
        if self.phase == Phase::Running || self.phase == Phase::Paused {
            return;
        }
        self.zero_state();
        self.current = Some(Piece::spawn(self.gen.draw()));
        self.next = Some(Piece::spawn(self.gen.draw()));
        self.phase = Phase::Running;
        self.check_spawn_fits();
    }

    /// Toggle `Running` <-> `Paused`. No-op in other phases.
    ///
    /// Pausing freezes the drop accumulator as-is. The engine never sees
    /// paused wall time: the driver re-baselines its frame clock on resume,
    /// so accumulation continues from where it stopped.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Reset to `Idle` with zeroed state. Idempotent: resetting an already
    /// idle session leaves it unchanged.
    pub fn reset(&mut self) {
        self.zero_state();
        self.current = None;
        self.next = None;
        self.phase = Phase::Idle;
    }

    fn zero_state(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_timer_ms = 0;
    }

    /// Validate a candidate move of the active piece by (dx, dy), optionally
    /// with a candidate shape (for rotation testing). Pure: mutates nothing.
    pub fn is_valid_move(&self, dx: i8, dy: i8, candidate: Option<&ShapeGrid>) -> bool {
        let Some(piece) = self.current.as_ref() else {
            return false;
        };
        let shape = candidate.unwrap_or(&piece.shape);
        self.board.fits(shape, piece.x + dx, piece.y + dy)
    }

    /// Apply a player command. Ignored unless `Running` (in particular,
    /// everything is ignored while paused). Invalid moves and rotations are
    /// silent no-ops. Returns whether the piece changed.
    pub fn handle(&mut self, command: Command) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            // Soft drop never locks: locking happens only on the automatic
            // descent path.
            Command::SoftDrop => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Advance the loop by `elapsed_ms`.
    ///
    /// Returns `true` while the loop should keep being scheduled. Any phase
    /// other than `Running` returns `false` immediately without touching the
    /// accumulator; resuming from pause therefore continues accumulation
    /// without double-counting paused time.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms() {
            self.descend();
            self.drop_timer_ms = 0;
        }

        self.phase == Phase::Running
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_valid_move(dx, dy, None) {
            return false;
        }
        if let Some(piece) = self.current.as_mut() {
            piece.x += dx;
            piece.y += dy;
            return true;
        }
        false
    }

    /// Naive rotation: build the rotated matrix, commit it only if it fits
    /// in place. No wall-kick offsets are attempted.
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.current.as_ref() else {
            return false;
        };
        let candidate = piece.shape.rotated();
        if !self.is_valid_move(0, 0, Some(&candidate)) {
            return false;
        }
        if let Some(piece) = self.current.as_mut() {
            piece.shape = candidate;
            return true;
        }
        false
    }

    /// One automatic descent step: move down, or lock + clear + respawn.
    fn descend(&mut self) {
        if self.try_move(0, 1) {
            return;
        }
        self.lock_current();
    }

    /// Lock the active piece, clear lines, update stats, and promote the
    /// look-ahead. May transition to `Over`.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.board.merge(&piece.shape, piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_lines().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            // Score uses the level in effect at clear time; the level
            // update comes after.
            self.score += cleared * POINTS_PER_LINE * self.level;
            self.level = self.lines / LINES_PER_LEVEL + 1;
        }

        self.spawn_next();
    }

    /// Promote the look-ahead to active and pre-generate a fresh look-ahead.
    /// Checked for game over immediately, before any rendering happens.
    fn spawn_next(&mut self) {
        self.current = Some(
            self.next
                .take()
                .unwrap_or_else(|| Piece::spawn(self.gen.draw())),
        );
        self.next = Some(Piece::spawn(self.gen.draw()));
        self.check_spawn_fits();
    }

    fn check_spawn_fits(&mut self) {
        if let Some(piece) = self.current.as_ref() {
            if !self.board.fits(&piece.shape, piece.x, piece.y) {
                self.phase = Phase::Over;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn force_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
