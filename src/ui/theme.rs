use serde::{Deserialize, Serialize};

/// Visual style and metric constants for the overlay menu.
///
/// Widths are integer pixels because the shared `menu_width` cache uses 0 as
/// its "not computed" marker. Loaded from config with per-field defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    // -- Color palette (sRGB RGBA) --
    /// Row background.
    pub bg: [f32; 4],
    /// Row background when a menu is expanded.
    pub bg_toggled: [f32; 4],
    /// Row border.
    pub border_color: [f32; 4],
    /// Label text.
    pub text: [f32; 4],
    /// Value text (right-aligned column).
    pub value_text: [f32; 4],
    /// Separator heading text.
    pub separator_text: [f32; 4],
    /// Slider fill.
    pub slider_fill: [f32; 4],

    // -- Metrics (pixels) --
    /// Estimated advance per character.
    pub char_width: u32,
    /// Height of one row.
    pub item_height: u32,
    /// Horizontal padding on each side of a row.
    pub item_padding: u32,
    /// Room for the submenu arrow on menu rows.
    pub arrow_width: u32,
    /// Checkbox drawer.
    pub bool_box_width: u32,
    /// Slider track drawer.
    pub slider_track_width: u32,
    /// Row border width.
    pub border_width: f32,
    /// Screen position of the first root menu.
    pub origin: (f32, f32),
}

/// Convert a hex color (#RRGGBB) to sRGB [f32; 4] with alpha 1.0.
const fn hex(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Convert a hex color with custom alpha.
const fn hex_a(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: hex_a(0x1E, 0x1E, 0x24, 0.9),
            bg_toggled: hex_a(0x2E, 0x3A, 0x4C, 0.95),
            border_color: hex(0x50, 0x50, 0x5A),
            text: hex(0xF0, 0xF0, 0xF0),
            value_text: hex(0xC8, 0xA8, 0x50),
            separator_text: hex(0x90, 0x90, 0x98),
            slider_fill: hex_a(0x40, 0x80, 0xC0, 0.8),

            char_width: 7,
            item_height: 20,
            item_padding: 6,
            arrow_width: 12,
            bool_box_width: 20,
            slider_track_width: 80,
            border_width: 1.0,
            origin: (10.0, 10.0),
        }
    }
}
