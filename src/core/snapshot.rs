//! Read-only render snapshots.
//!
//! After each step the host reads one of these instead of reaching into the
//! session. The board is exported as color ids (0 = empty, 1..=7 = piece
//! kinds in catalog order) so renderers need no knowledge of board internals.

use crate::core::piece::{Piece, ShapeGrid};
use crate::core::session::Session;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Snapshot of the active (or look-ahead) piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Full game snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Whether gameplay input currently applies.
    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}

impl Session {
    /// Fill a caller-owned snapshot (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board().write_color_grid(&mut out.board);
        out.active = self.current().map(ActiveSnapshot::from);
        out.next = self.next_piece().map(ActiveSnapshot::from);
        out.phase = self.phase();
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
    }

    /// Build a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_session_state() {
        let mut session = Session::new(9);
        let snap = session.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.active.is_none());
        assert!(snap.next.is_none());

        session.start();
        let snap = session.snapshot();
        assert_eq!(snap.phase, Phase::Running);
        assert!(snap.active.is_some());
        assert!(snap.next.is_some());
        assert!(snap.accepting_input());
        assert_eq!(snap.level, 1);
    }

    #[test]
    fn snapshot_board_starts_empty() {
        let mut session = Session::new(9);
        session.start();
        let snap = session.snapshot();
        let filled: usize = snap
            .board
            .iter()
            .map(|row| row.iter().filter(|&&c| c != 0).count())
            .sum();
        assert_eq!(filled, 0);
    }
}
