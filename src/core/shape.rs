//! Shape catalog and in-place matrix rotation.
//!
//! Each tetromino is a small square 0/1 matrix (2x2, 3x3 or 4x4) stored in a
//! fixed 4x4 buffer. `Shape` is `Copy`: spawning a piece hands it an owned
//! value, so live pieces never alias the catalog and rotation can mutate the
//! matrix in place.

use crate::types::{PieceKind, Spin};

/// Square 0/1 occupancy matrix with side length `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[u8; 4]; 4],
    size: u8,
}

impl Shape {
    /// Side length of the matrix (2, 3 or 4 for catalog shapes).
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Occupancy at (x, y) within the matrix. Out-of-matrix coordinates are empty.
    pub fn occupied(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && self.cells[y as usize][x as usize] != 0
    }

    /// Iterate the (x, y) offsets of all occupied cells.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |y| (0..n).filter_map(move |x| self.occupied(x, y).then_some((x, y))))
    }

    /// Rotate the matrix in place: transpose, then reverse each row (clockwise)
    /// or reverse the row order (counter-clockwise).
    pub fn rotate(&mut self, spin: Spin) {
        let n = self.size as usize;

        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = tmp;
            }
        }

        match spin {
            Spin::Cw => {
                for row in self.cells[..n].iter_mut() {
                    row[..n].reverse();
                }
            }
            Spin::Ccw => {
                self.cells[..n].reverse();
            }
        }
    }

    /// Build a shape from explicit rows (rows must all have the same length).
    fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len() as u8;
        let mut cells = [[0u8; 4]; 4];
        for (y, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), rows.len(), "catalog shapes are square");
            cells[y][..row.len()].copy_from_slice(row);
        }
        Self { cells, size }
    }
}

/// Catalog shape for a piece kind, returned by value (the caller owns its copy).
pub fn catalog_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::J => Shape::from_rows(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::I => Shape::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
    }
}
