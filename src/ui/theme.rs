//! # Theme System
//!
//! Colour themes for the card viewer.
//!
//! ## Overview
//!
//! Rendering code never hardcodes a `ratatui::style::Color`; it reads the
//! fields of the active [`Theme`]. `t` cycles through the built-in themes at
//! runtime and the choice is remembered in the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme
//! - **Rose Pine** - muted dark theme

use ratatui::style::Color;

/// All colours used by the viewer, grouped by role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Name shown in the footer and stored in the config file.
    pub name: &'static str,

    /// Background for the whole screen.
    pub bg: Color,
    /// Primary text (labels, page counter).
    pub fg: Color,
    /// Hints, glosses, disabled buttons.
    pub fg_dim: Color,

    /// Focused borders, enabled buttons, active toggles.
    pub accent: Color,
    /// The character on each card.
    pub glyph: Color,
    /// Card borders.
    pub card_border: Color,
    /// Background of the focused input field.
    pub input_bg: Color,
}

impl Theme {
    /// All built-in themes (order = cycling order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(137, 180, 250),     // blue
        glyph: Color::Rgb(243, 139, 168),      // red
        card_border: Color::Rgb(69, 71, 90),   // surface1
        input_bg: Color::Rgb(49, 50, 68),      // surface0
    },
    // 1 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),         // base
        fg: Color::Rgb(76, 79, 105),           // text
        fg_dim: Color::Rgb(156, 160, 176),     // overlay0
        accent: Color::Rgb(30, 102, 245),      // blue
        glyph: Color::Rgb(210, 15, 57),        // red
        card_border: Color::Rgb(188, 192, 204), // surface1
        input_bg: Color::Rgb(204, 208, 218),   // surface0
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208), // frost
        glyph: Color::Rgb(235, 203, 139),  // yellow
        card_border: Color::Rgb(67, 76, 94),
        input_bg: Color::Rgb(59, 66, 82),
    },
    // 3 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152), // blue
        glyph: Color::Rgb(251, 73, 52),    // red
        card_border: Color::Rgb(80, 73, 69),
        input_bg: Color::Rgb(60, 56, 54),
    },
    // 4 - Rose Pine
    Theme {
        name: "Rose Pine",
        bg: Color::Rgb(25, 23, 36),
        fg: Color::Rgb(224, 222, 244),
        fg_dim: Color::Rgb(110, 106, 134),
        accent: Color::Rgb(156, 207, 216),  // foam
        glyph: Color::Rgb(235, 111, 146),   // love
        card_border: Color::Rgb(38, 35, 58),
        input_bg: Color::Rgb(31, 29, 46),
    },
];
