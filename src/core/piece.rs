//! Live piece instance and the collision detector.

use crate::core::board::Board;
use crate::core::shape::{catalog_shape, Shape};
use crate::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

/// A falling piece: kind, an owned shape matrix, and a top-left board position.
///
/// The shape is a private copy of the catalog entry; rotation mutates it in
/// place without affecting the catalog or other pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: top of the board, centered
    /// horizontally on the shape matrix width.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = catalog_shape(kind);
        let x = (BOARD_COLS / 2) as i8 - (shape.size() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    /// Iterate the absolute board coordinates of all occupied cells.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .iter_occupied()
            .map(move |(dx, dy)| (self.x + dx as i8, self.y + dy as i8))
    }
}

/// Collision test for a piece against the board and its boundaries.
///
/// An occupied cell collides when it is out of horizontal bounds, at or below
/// the bottom bound, or overlaps a settled board cell. Rows above the top
/// (`y < 0`) are not checked: a piece may partially sit above the board while
/// spawning.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    piece.iter_cells().any(|(x, y)| {
        if x < 0 || x >= BOARD_COLS as i8 || y >= BOARD_ROWS as i8 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Spin;

    #[test]
    fn test_spawn_positions_are_centered() {
        // 3x3 shapes: 10/2 - 3/2 = 4. O (2x2): 10/2 - 2/2 = 4. I (4x4): 10/2 - 4/2 = 3.
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn test_no_collision_on_empty_board_at_spawn() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&board, &Piece::spawn(kind)), "{:?}", kind);
        }
    }

    #[test]
    fn test_collision_left_and_right_bounds() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);

        piece.x = -1;
        assert!(collides(&board, &piece));
        piece.x = 0;
        assert!(!collides(&board, &piece));

        piece.x = (BOARD_COLS - 2) as i8;
        assert!(!collides(&board, &piece));
        piece.x = (BOARD_COLS - 1) as i8;
        assert!(collides(&board, &piece));
    }

    #[test]
    fn test_collision_bottom_bound() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);

        // O occupies rows y and y+1; the bottom-most valid y is 18.
        piece.y = 18;
        assert!(!collides(&board, &piece));
        piece.y = 19;
        assert!(collides(&board, &piece));
    }

    #[test]
    fn test_collision_with_settled_cells() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::Z));

        let piece = Piece::spawn(PieceKind::O);
        // O at spawn covers (4,0), (5,0), (4,1), (5,1).
        assert!(collides(&board, &piece));
    }

    #[test]
    fn test_rows_above_top_are_not_a_collision() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I);
        piece.shape.rotate(Spin::Cw); // vertical bar in column 2
        piece.y = -2;

        assert!(!collides(&board, &piece));
    }

    #[test]
    fn test_iter_cells_absolute_coordinates() {
        let piece = Piece::spawn(PieceKind::O);
        let cells: Vec<(i8, i8)> = piece.iter_cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
    }
}
