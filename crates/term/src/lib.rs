//! Terminal output for rink canvases.
//!
//! Turns a [`Canvas`](rink_core::Canvas) into plain text or into a crossterm
//! command stream. Styling is configured per call through
//! [`RenderOptions`]; nothing here keeps global state.

pub mod options;
pub mod renderer;

pub use rink_core as core;
pub use rink_types as types;

pub use options::{rink_to_color, RenderOptions};
pub use renderer::{encode_into, render, render_to, TerminalRenderer};
