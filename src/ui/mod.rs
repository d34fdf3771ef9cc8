// src/ui/mod.rs
mod renderer;
mod terminal;

pub use renderer::{list_height, scrollbar_thumb, Renderer};
pub use terminal::{RowLines, TerminalSurface};
