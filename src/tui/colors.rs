//! Color palette shared by every widget
use ratatui::style::Color;

pub const BG_DARK: Color = Color::Rgb(24, 26, 33);
pub const BORDER_COLOR: Color = Color::Rgb(88, 91, 112);
pub const TEXT_PRIMARY: Color = Color::Rgb(205, 214, 244);
pub const TEXT_SECONDARY: Color = Color::Rgb(147, 153, 178);
pub const TEXT_DISABLED: Color = Color::Rgb(88, 91, 112);
/// Errors
pub const ACCENT_PRIMARY: Color = Color::Rgb(243, 139, 168);
/// Directories
pub const ACCENT_SECONDARY: Color = Color::Rgb(166, 227, 161);
/// Titles, key hints and notices
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(137, 180, 250);
pub const SELECTION_BG: Color = Color::Rgb(49, 50, 68);
