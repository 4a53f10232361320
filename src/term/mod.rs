//! Terminal rendering: framebuffer, game view composition, crossterm output.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, VIEW_H, VIEW_W};
pub use renderer::Renderer;
