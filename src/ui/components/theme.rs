//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(106, 176, 76);
pub const ACCENT_SECONDARY: Color = Color::Rgb(186, 220, 88);
pub const ACCENT_WARNING: Color = Color::Rgb(240, 180, 60);
pub const ACCENT_ERROR: Color = Color::Rgb(225, 90, 80);

pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 225);
pub const TEXT_SECONDARY: Color = Color::Rgb(190, 190, 180);
pub const TEXT_MUTED: Color = Color::Rgb(130, 130, 120);
pub const TEXT_FAINT: Color = Color::Rgb(80, 80, 75);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 80, 70);
pub const BORDER_FOCUSED: Color = ACCENT_PRIMARY;

pub const SELECTED_BG: Color = Color::Rgb(40, 64, 40);
pub const HEADER_BG: Color = Color::Rgb(20, 36, 20);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
