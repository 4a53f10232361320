//! A falling-block puzzle game for the terminal.
//!
//! The game logic lives in [`core`] and is fully deterministic given a
//! seed; [`term`] renders it with crossterm and [`input`] maps key
//! events to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
