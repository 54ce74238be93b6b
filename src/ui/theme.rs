//! Theme system for the animation window
//! Plain backdrops so the translucent rings blend cleanly

use iced::color;
use iced::widget::container;
use iced::{Background, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Pick the iced theme for the dark mode setting
pub fn for_mode(dark_mode: bool) -> Theme {
    if dark_mode { Theme::Dark } else { Theme::Light }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window backdrop behind the rings
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}
