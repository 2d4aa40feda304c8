//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Ember - Hacker News orange accents on a warm dark background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(232, 230, 227);
    pub const TEXT_DIM: Color = Color::Rgb(110, 104, 96);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 143, 132);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(250, 203, 90);
    pub const ERROR: Color = Color::Rgb(227, 104, 92);

    // Accent colors
    pub const ORANGE: Color = Color::Rgb(255, 102, 0);
    pub const AMBER: Color = Color::Rgb(255, 166, 87);

    // Shared cursor style for the search textarea
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(255, 102, 0);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(110, 104, 96);
    pub const TITLE: Color = Color::Rgb(232, 230, 227);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
    pub const CURSOR_HIDDEN: Style = Style::new();
}

/// Story list styles
pub mod results {
    use super::*;

    // Border colors
    pub const BORDER_FOCUSED: Color = Color::Rgb(255, 102, 0);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(110, 104, 96);
    pub const TITLE: Color = Color::Rgb(232, 230, 227);

    // Story rows
    pub const STORY_TITLE: Color = Color::Rgb(232, 230, 227);
    pub const STORY_META: Color = Color::Rgb(150, 143, 132);
    pub const SELECTED_BG: Color = Color::Rgb(58, 46, 36);

    // Placeholder text shown before the first search and for empty pages
    pub const PLACEHOLDER: Color = Color::Rgb(110, 104, 96);
}

/// Paging bar styles (spinner while fetching, key hint when idle)
pub mod loadmore {
    use super::*;

    pub const SPINNER: Color = Color::Rgb(255, 166, 87);
    pub const LABEL: Color = Color::Rgb(150, 143, 132);
    pub const HINT_KEY: Color = Color::Rgb(255, 166, 87);
    pub const HINT_TEXT: Color = Color::Rgb(110, 104, 96);
}

pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(150, 143, 132);
    pub const DESCRIPTION: Color = Color::Rgb(110, 104, 96);
    pub const SEPARATOR: Color = Color::Rgb(110, 104, 96);
    pub const WARNING: Color = Color::Rgb(250, 203, 90);
}

/// Full-screen failure view styles
pub mod failure {
    use super::*;

    pub const BORDER: Color = Color::Rgb(227, 104, 92);
    pub const HEADLINE: Color = Color::Rgb(232, 230, 227);
    pub const DETAIL: Color = Color::Rgb(150, 143, 132);
    pub const HINT: Color = Color::Rgb(110, 104, 96);
}
