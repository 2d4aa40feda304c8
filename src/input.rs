pub mod input_events;
pub mod input_render;
mod input_state;

pub use input_state::InputState;
