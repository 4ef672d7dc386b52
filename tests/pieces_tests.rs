//! Piece tests - templates, rotation, spawn placement, and the generator.

use blockfall::core::{template, Piece, PieceGen};
use blockfall::types::{PieceKind, BOARD_WIDTH};

#[test]
fn test_every_template_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(template(kind).iter_filled().count(), 4, "kind {:?}", kind);
    }
}

#[test]
fn test_template_sizes() {
    assert_eq!(template(PieceKind::I).size(), 4);
    assert_eq!(template(PieceKind::O).size(), 2);
    for kind in [
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ] {
        assert_eq!(template(kind).size(), 3, "kind {:?}", kind);
    }
}

#[test]
fn test_rotation_cycles_back_after_four() {
    for kind in PieceKind::ALL {
        let original = template(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated();
        }
        assert_eq!(shape, original, "kind {:?}", kind);
    }
}

#[test]
fn test_i_rotates_to_vertical() {
    // Row 1 of a 4x4 becomes column 2 under clockwise rotation.
    let i = template(PieceKind::I).rotated();
    for row in 0..4 {
        assert!(i.filled(row, 2), "row {}", row);
    }
    assert_eq!(i.iter_filled().count(), 4);
}

#[test]
fn test_spawn_is_horizontally_centered() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let n = piece.shape.size() as i8;
        assert_eq!(piece.x, (BOARD_WIDTH as i8) / 2 - n / 2, "kind {:?}", kind);
        assert_eq!(piece.y, 0, "kind {:?}", kind);
    }
}

#[test]
fn test_generator_is_seed_deterministic() {
    let mut a = PieceGen::new(99);
    let mut b = PieceGen::new(99);
    for _ in 0..50 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn test_generator_covers_all_kinds() {
    let mut gen = PieceGen::new(7);
    let mut seen = [false; 7];
    for _ in 0..1000 {
        seen[gen.draw().index()] = true;
    }
    assert!(seen.iter().all(|&s| s), "seen {:?}", seen);
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = PieceGen::new(1);
    let mut b = PieceGen::new(2);
    let draws_a: Vec<_> = (0..20).map(|_| a.draw()).collect();
    let draws_b: Vec<_> = (0..20).map(|_| b.draw()).collect();
    assert_ne!(draws_a, draws_b);
}
