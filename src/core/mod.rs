//! Core module - pure game logic with no external dependencies.
//!
//! Board, piece catalog, collision detection, transforms, line clearing,
//! scoring, and the tick-driven session controller. Zero dependencies on
//! UI, terminals, or I/O.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod transform;

pub use board::Board;
pub use game::GameState;
pub use piece::{collides, Piece};
pub use rng::PieceFactory;
pub use shape::{catalog_shape, Shape};
