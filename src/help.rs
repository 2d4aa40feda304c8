//! Help line module
//!
//! Renders the contextual keyboard hints shown at the bottom of the screen.

pub mod help_line_render;
