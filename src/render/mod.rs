pub mod display;
pub mod renderer;

pub use display::{Display, Glyph};
pub use renderer::{Canvas, TerminalDisplay};
