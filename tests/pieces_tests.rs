//! Piece, shape, and movement tests

use blockfall::core::transform::{merge, rotate, shift};
use blockfall::core::{catalog_shape, collides, Board, Piece};
use blockfall::types::{PieceKind, Spin, BOARD_COLS};

#[test]
fn test_spawn_positions_are_centered() {
    assert_eq!(Piece::spawn(PieceKind::T).x, 4);
    assert_eq!(Piece::spawn(PieceKind::O).x, 4);
    assert_eq!(Piece::spawn(PieceKind::I).x, 3);
    for kind in PieceKind::ALL {
        assert_eq!(Piece::spawn(kind).y, 0);
    }
}

#[test]
fn test_every_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(catalog_shape(kind).iter_occupied().count(), 4);
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        for spin in [Spin::Cw, Spin::Ccw] {
            let original = catalog_shape(kind);
            let mut shape = original;
            for _ in 0..4 {
                shape.rotate(spin);
            }
            for y in 0..4u8 {
                for x in 0..4u8 {
                    assert_eq!(shape.occupied(x, y), original.occupied(x, y));
                }
            }
        }
    }
}

#[test]
fn test_shift_blocked_at_walls() {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::O);

    while shift(&board, &mut piece, -1) {}
    assert_eq!(piece.x, 0);

    while shift(&board, &mut piece, 1) {}
    // O occupies columns x..x+2
    assert_eq!(piece.x, BOARD_COLS as i8 - 2);
}

#[test]
fn test_collision_with_settled_cells() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));

    let piece = Piece::spawn(PieceKind::O);
    assert!(collides(&board, &piece));
}

#[test]
fn test_cells_above_the_board_do_not_collide() {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    rotate(&board, &mut piece, Spin::Cw);
    piece.y = -2;
    assert!(!collides(&board, &piece));
}

#[test]
fn test_wall_kick_at_left_wall() {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::J);
    // Two clockwise rotations put the overhang on the left column
    assert!(rotate(&board, &mut piece, Spin::Cw));
    assert!(rotate(&board, &mut piece, Spin::Cw));
    while shift(&board, &mut piece, -1) {}

    let before_x = piece.x;
    assert!(rotate(&board, &mut piece, Spin::Cw));
    assert!(piece.x > before_x, "rotation at the wall should kick right");
}

#[test]
fn test_rotation_failure_leaves_piece_untouched() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.y = 10;
    // Solid rows around the bar, leaving only its own cells free
    for y in 10..14 {
        for x in 0..BOARD_COLS as i8 {
            board.set(x, y, Some(PieceKind::L));
        }
    }
    for (x, y) in piece.iter_cells() {
        board.set(x, y, None);
    }

    let saved = piece;
    assert!(!rotate(&board, &mut piece, Spin::Cw));
    assert_eq!(piece.x, saved.x);
    assert_eq!(piece.y, saved.y);
    for y in 0..4u8 {
        for x in 0..4u8 {
            assert_eq!(piece.shape.occupied(x, y), saved.shape.occupied(x, y));
        }
    }
}

#[test]
fn test_merge_writes_only_occupied_cells() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::O);
    piece.y = 18;

    merge(&mut board, &piece);

    assert_eq!(board.get(4, 18), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 18), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 18), Some(None));
    assert_eq!(board.get(6, 19), Some(None));
}
