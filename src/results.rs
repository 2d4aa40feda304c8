//! Story list: selection cursor, row rendering, and key handling.

pub mod cursor_state;
pub mod results_events;
pub mod results_render;

pub use cursor_state::CursorState;
