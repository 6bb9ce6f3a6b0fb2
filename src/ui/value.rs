use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// On/off checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuBool {
    pub value: bool,
}

impl MenuBool {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

/// Integer slider. `value` always stays inside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSlider {
    value: i32,
    pub min: i32,
    pub max: i32,
}

impl MenuSlider {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Fraction of the track filled, 0.0–1.0.
    pub fn fraction(&self) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (self.value - self.min) as f32 / (self.max - self.min) as f32
    }
}

/// Pick one of a fixed set of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuList {
    pub options: Vec<String>,
    index: usize,
}

impl MenuList {
    pub fn new(options: Vec<String>, index: usize) -> Self {
        let index = index.min(options.len().saturating_sub(1));
        Self { options, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.options.len().saturating_sub(1));
    }

    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.index).map(String::as_str)
    }

    /// Advance to the next option, wrapping.
    pub fn cycle(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + 1) % self.options.len();
        }
    }
}

/// How a key bind reacts to its key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyBindMode {
    /// Active while the key is held.
    #[default]
    Press,
    /// Flips on each key press.
    Toggle,
}

/// Keyboard shortcut. `key` is a raw virtual key code from the input pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuKeyBind {
    pub key: u32,
    pub mode: KeyBindMode,
    pub active: bool,
}

impl MenuKeyBind {
    pub fn new(key: u32, mode: KeyBindMode) -> Self {
        Self {
            key,
            mode,
            active: false,
        }
    }

    pub fn key_down(&mut self, key: u32) -> bool {
        if key != self.key {
            return false;
        }
        match self.mode {
            KeyBindMode::Press => self.active = true,
            KeyBindMode::Toggle => self.active = !self.active,
        }
        true
    }

    pub fn key_up(&mut self, key: u32) -> bool {
        if key != self.key {
            return false;
        }
        if self.mode == KeyBindMode::Press {
            self.active = false;
        }
        true
    }
}

/// Non-interactive heading row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSeparator;

/// Value attached to an item component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuValue {
    Bool(MenuBool),
    Slider(MenuSlider),
    List(MenuList),
    KeyBind(MenuKeyBind),
    Separator(MenuSeparator),
}

impl MenuValue {
    pub fn kind(&self) -> &'static str {
        match self {
            MenuValue::Bool(_) => MenuBool::KIND,
            MenuValue::Slider(_) => MenuSlider::KIND,
            MenuValue::List(_) => MenuList::KIND,
            MenuValue::KeyBind(_) => MenuKeyBind::KIND,
            MenuValue::Separator(_) => MenuSeparator::KIND,
        }
    }

    /// Text drawn on the right side of the item row.
    pub fn label(&self) -> String {
        match self {
            MenuValue::Bool(b) => (if b.value { "[x]" } else { "[ ]" }).to_string(),
            MenuValue::Slider(s) => s.value.to_string(),
            MenuValue::List(l) => format!("< {} >", l.selected().unwrap_or("")),
            MenuValue::KeyBind(k) => {
                let state = if k.active { "on" } else { "off" };
                format!("[{}] {state}", key_name(k.key))
            }
            MenuValue::Separator(_) => String::new(),
        }
    }

    /// Extra width the value's drawer needs next to the display name.
    pub fn drawer_width(&self, theme: &Theme) -> u32 {
        match self {
            MenuValue::Bool(_) => theme.bool_box_width,
            MenuValue::Slider(_) => theme.slider_track_width,
            MenuValue::List(l) => {
                let widest = l.options.iter().map(|o| text_len(o)).max().unwrap_or(0);
                // "< " + option + " >"
                (widest + 4) * theme.char_width
            }
            // "[" + key + "] " + "off", so the row does not jump when toggled.
            MenuValue::KeyBind(k) => (text_len(&key_name(k.key)) + 6) * theme.char_width,
            MenuValue::Separator(_) => 0,
        }
    }
}

/// Character count used for width estimation.
pub(crate) fn text_len(text: &str) -> u32 {
    text.chars().count() as u32
}

/// Short label for a virtual key code.
pub fn key_name(key: u32) -> String {
    match key {
        0x08 => "Back".into(),
        0x09 => "Tab".into(),
        0x0D => "Enter".into(),
        0x10 => "Shift".into(),
        0x11 => "Ctrl".into(),
        0x12 => "Alt".into(),
        0x1B => "Esc".into(),
        0x20 => "Space".into(),
        0x30..=0x39 | 0x41..=0x5A => char::from_u32(key)
            .map(|c| c.to_string())
            .unwrap_or_else(|| format!("0x{key:02X}")),
        0x70..=0x7B => format!("F{}", key - 0x6F),
        _ => format!("0x{key:02X}"),
    }
}

/// Typed view of one `MenuValue` variant, used by `get_value::<T>`.
pub trait ValueKind: Sized {
    const KIND: &'static str;
    fn from_value(value: &MenuValue) -> Option<&Self>;
    fn from_value_mut(value: &mut MenuValue) -> Option<&mut Self>;
}

macro_rules! value_kind {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl ValueKind for $ty {
            const KIND: &'static str = $kind;

            fn from_value(value: &MenuValue) -> Option<&Self> {
                match value {
                    MenuValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_value_mut(value: &mut MenuValue) -> Option<&mut Self> {
                match value {
                    MenuValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for MenuValue {
            fn from(v: $ty) -> Self {
                MenuValue::$variant(v)
            }
        }
    };
}

value_kind!(MenuBool, Bool, "bool");
value_kind!(MenuSlider, Slider, "slider");
value_kind!(MenuList, List, "list");
value_kind!(MenuKeyBind, KeyBind, "keybind");
value_kind!(MenuSeparator, Separator, "separator");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps() {
        let mut s = MenuSlider::new(50, 0, 10);
        assert_eq!(s.value(), 10);
        s.set_value(-4);
        assert_eq!(s.value(), 0);
        let swapped = MenuSlider::new(5, 10, 0);
        assert_eq!((swapped.min, swapped.max), (0, 10));
    }

    #[test]
    fn list_cycles_and_clamps() {
        let mut l = MenuList::new(vec!["a".into(), "b".into()], 9);
        assert_eq!(l.index(), 1);
        l.cycle();
        assert_eq!(l.selected(), Some("a"));
        let mut empty = MenuList::new(Vec::new(), 0);
        empty.cycle();
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn keybind_modes() {
        let mut press = MenuKeyBind::new(0x20, KeyBindMode::Press);
        assert!(press.key_down(0x20));
        assert!(press.active);
        assert!(press.key_up(0x20));
        assert!(!press.active);
        assert!(!press.key_down(0x41));

        let mut toggle = MenuKeyBind::new(0x20, KeyBindMode::Toggle);
        toggle.key_down(0x20);
        toggle.key_up(0x20);
        assert!(toggle.active);
        toggle.key_down(0x20);
        assert!(!toggle.active);
    }

    #[test]
    fn typed_views_match_variant() {
        let mut v = MenuValue::from(MenuBool::new(true));
        assert!(MenuBool::from_value(&v).is_some());
        assert!(MenuSlider::from_value(&v).is_none());
        if let Some(b) = MenuBool::from_value_mut(&mut v) {
            b.value = false;
        }
        assert_eq!(v, MenuValue::Bool(MenuBool::new(false)));
        assert_eq!(v.kind(), "bool");
    }

    #[test]
    fn key_names() {
        assert_eq!(key_name(0x20), "Space");
        assert_eq!(key_name(0x41), "A");
        assert_eq!(key_name(0x71), "F2");
        assert_eq!(key_name(0xFF), "0xFF");
    }
}
