//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Completed tasks and the checked marker.
pub const DONE_GREEN: Color = Color::Rgb(29, 184, 99);
/// Icons and hints.
pub const MUTED_GREY: Color = Color::Rgb(178, 178, 178);
/// Header background.
pub const HEADER_PURPLE: Color = Color::Rgb(136, 84, 208);
/// Destructive dialogs.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
