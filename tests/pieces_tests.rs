//! Pieces tests - templates, rotation and spawn placement

use retro_tetris::core::{create_piece, spawn_x, template, ActivePiece, Board};
use retro_tetris::types::{PieceColor, PieceKind};

fn matrix(kind: PieceKind, turns: usize) -> Vec<Vec<u8>> {
    let mut shape = template(kind);
    for _ in 0..turns {
        shape = shape.rotated_cw();
    }
    (0..shape.rows() as usize)
        .map(|r| shape.row_bits(r).collect())
        .collect()
}

#[test]
fn test_template_matrices() {
    assert_eq!(matrix(PieceKind::I, 0), vec![vec![1, 1, 1, 1]]);
    assert_eq!(matrix(PieceKind::O, 0), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(matrix(PieceKind::T, 0), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    assert_eq!(matrix(PieceKind::S, 0), vec![vec![0, 1, 1], vec![1, 1, 0]]);
    assert_eq!(matrix(PieceKind::Z, 0), vec![vec![1, 1, 0], vec![0, 1, 1]]);
    assert_eq!(matrix(PieceKind::J, 0), vec![vec![1, 0, 0], vec![1, 1, 1]]);
    assert_eq!(matrix(PieceKind::L, 0), vec![vec![0, 0, 1], vec![1, 1, 1]]);
}

#[test]
fn test_colors() {
    let colors: Vec<_> = PieceKind::ALL.iter().map(|&k| create_piece(k).color()).collect();
    assert_eq!(
        colors,
        vec![
            PieceColor::Cyan,
            PieceColor::Yellow,
            PieceColor::Purple,
            PieceColor::Green,
            PieceColor::Red,
            PieceColor::Blue,
            PieceColor::Orange,
        ]
    );
}

#[test]
fn test_rotations_clockwise() {
    assert_eq!(matrix(PieceKind::S, 1), vec![vec![1, 0], vec![1, 1], vec![0, 1]]);
    assert_eq!(matrix(PieceKind::J, 1), vec![vec![1, 1], vec![1, 0], vec![1, 0]]);
    assert_eq!(matrix(PieceKind::J, 2), vec![vec![1, 1, 1], vec![0, 0, 1]]);
    assert_eq!(matrix(PieceKind::L, 3), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
}

#[test]
fn test_four_rotations_restore_every_piece() {
    for kind in PieceKind::ALL {
        assert_eq!(matrix(kind, 4), matrix(kind, 0), "{:?}", kind);
    }
}

#[test]
fn test_two_rotations_restore_i_s_z() {
    for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
        assert_eq!(matrix(kind, 2), matrix(kind, 0), "{:?}", kind);
    }
    assert_eq!(matrix(PieceKind::O, 1), matrix(PieceKind::O, 0));
}

#[test]
fn test_spawn_is_centered() {
    assert_eq!(spawn_x(&template(PieceKind::I)), 3);
    assert_eq!(spawn_x(&template(PieceKind::O)), 4);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(spawn_x(&template(kind)), 3);
    }
}

#[test]
fn test_rotating_active_piece_does_not_touch_template() {
    let board = Board::new();
    let mut active = ActivePiece::spawn(create_piece(PieceKind::L));
    assert!(active.try_rotate(&board));
    assert_ne!(*active.shape(), template(PieceKind::L));
    assert_eq!(*create_piece(PieceKind::L).shape(), template(PieceKind::L));
}
