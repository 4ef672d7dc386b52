//! Blockfall: a falling-block puzzle game.
//!
//! The crate is split into a pure simulation engine (`core`) and thin
//! presentation collaborators (`input`, `term`). The engine owns all game
//! rules and mutable session state; the binary drives it with elapsed time
//! and commands, and draws read-only snapshots.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
