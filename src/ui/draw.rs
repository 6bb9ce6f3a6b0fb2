use super::Vec2;
use super::theme::Theme;

/// Filled quad in screen pixels. Row backgrounds and slider fills.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCommand {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub bg_color: [f32; 4],
    pub border_color: [f32; 4],
    pub border_width: f32,
}

/// Single-line label anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [f32; 4],
}

/// Output of one draw pass over the menu tree, in paint order.
/// A backend paints every panel, then every text run on top.
#[derive(Debug, Default)]
pub struct DrawList {
    pub panels: Vec<PanelCommand>,
    pub texts: Vec<TextCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
        self.texts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty() && self.texts.is_empty()
    }

    /// Background of one menu row, `width` wide and one item tall.
    pub(crate) fn push_row(&mut self, theme: &Theme, row: Vec2, width: f32, toggled: bool) {
        self.panels.push(PanelCommand {
            x: row.x,
            y: row.y,
            width,
            height: theme.item_height as f32,
            bg_color: if toggled { theme.bg_toggled } else { theme.bg },
            border_color: theme.border_color,
            border_width: theme.border_width,
        });
    }

    /// Borderless slider fill: `fraction` of the track at the right edge of the row.
    pub(crate) fn push_slider_fill(&mut self, theme: &Theme, row: Vec2, width: f32, fraction: f32) {
        let track = theme.slider_track_width as f32;
        self.panels.push(PanelCommand {
            x: row.x + width - theme.item_padding as f32 - track,
            y: row.y + 2.0,
            width: track * fraction.clamp(0.0, 1.0),
            height: theme.item_height as f32 - 4.0,
            bg_color: theme.slider_fill,
            border_color: [0.0; 4],
            border_width: 0.0,
        });
    }

    /// Label starting after the left padding, vertically centred in the row.
    pub(crate) fn push_label(&mut self, theme: &Theme, row: Vec2, text: &str, color: [f32; 4]) {
        self.texts.push(TextCommand {
            text: text.to_string(),
            x: row.x + theme.item_padding as f32,
            y: text_top(theme, row),
            color,
        });
    }

    /// Label ending at the right padding, using the theme's width estimate.
    pub(crate) fn push_right_label(
        &mut self,
        theme: &Theme,
        row: Vec2,
        width: f32,
        text: &str,
        color: [f32; 4],
    ) {
        let text_w = (super::value::text_len(text) * theme.char_width) as f32;
        self.texts.push(TextCommand {
            text: text.to_string(),
            x: row.x + width - theme.item_padding as f32 - text_w,
            y: text_top(theme, row),
            color,
        });
    }
}

/// Top of a text line centred in an item row. Line height is estimated as
/// 1.4 character widths.
fn text_top(theme: &Theme, row: Vec2) -> f32 {
    let height = theme.item_height as f32;
    row.y + (height - theme.char_width as f32 * 1.4).max(0.0) / 2.0
}
