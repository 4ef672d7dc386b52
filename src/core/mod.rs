//! Core module - pure game logic with no external I/O dependencies.
//!
//! Everything here is deterministic: the same seed and the same sequence of
//! commands/tick durations produce an identical game.

pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use board::Board;
pub use piece::{template, Piece, ShapeGrid};
pub use rng::{PieceGen, SimpleRng};
pub use session::Session;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
