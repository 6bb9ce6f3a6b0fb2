use super::value::{MenuBool, MenuList, MenuSlider, MenuValue};
use super::{ComponentId, MenuTree};

/// Mouse button identifier (decoupled from any windowing backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Raw input delivered by the host's message pump.
/// Keys are virtual key codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseMove { x: f32, y: f32 },
    MouseDown { button: MouseButton, x: f32, y: f32 },
    MouseUp { button: MouseButton, x: f32, y: f32 },
    KeyDown(u32),
    KeyUp(u32),
}

impl MenuTree {
    /// Returns true if the point (px, py) is inside the component's row as
    /// laid out by the last draw pass.
    pub fn hit(&mut self, id: ComponentId, px: f32, py: f32) -> bool {
        let width = self.menu_width(id) as f32;
        let height = self.theme().item_height as f32;
        let Some(node) = self.component(id) else {
            return false;
        };
        let p = node.position;
        px >= p.x && px < p.x + width && py >= p.y && py < p.y + height
    }

    /// Route one input event to a component. Expanded menus forward to
    /// their children. Returns true if the event was consumed.
    pub fn on_wnd_proc(&mut self, id: ComponentId, event: InputEvent) -> bool {
        let Some(node) = self.component(id) else {
            return false;
        };
        let visible = node.visible;
        let expanded = node.visible && node.toggled;
        let is_menu = node.is_menu();
        let children = node.children().to_vec();

        match event {
            // Key binds fire even while their menu is closed.
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => {
                if is_menu {
                    let mut consumed = false;
                    for child in children {
                        consumed |= self.on_wnd_proc(child, event);
                    }
                    return consumed;
                }
                let down = matches!(event, InputEvent::KeyDown(_));
                match self.component_mut(id).and_then(|n| n.value_mut()) {
                    Some(MenuValue::KeyBind(bind)) if down => bind.key_down(key),
                    Some(MenuValue::KeyBind(bind)) => bind.key_up(key),
                    _ => false,
                }
            }
            InputEvent::MouseDown { button, x, y } => {
                if !visible {
                    return false;
                }
                if button == MouseButton::Left && self.hit(id, x, y) {
                    self.activate(id, x);
                    return true;
                }
                expanded && self.forward(&children, event)
            }
            InputEvent::MouseMove { x, .. } => {
                if self.drag == Some(id) {
                    self.drag_slider(id, x);
                    return true;
                }
                expanded && self.forward(&children, event)
            }
            InputEvent::MouseUp { .. } => {
                if self.drag == Some(id) {
                    self.drag = None;
                    return true;
                }
                expanded && self.forward(&children, event)
            }
        }
    }

    /// Route an event to every root menu.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        let roots = self.roots().to_vec();
        let mut consumed = false;
        for root in roots {
            consumed |= self.on_wnd_proc(root, event);
        }
        consumed
    }

    /// First child that consumes the event wins.
    fn forward(&mut self, children: &[ComponentId], event: InputEvent) -> bool {
        children
            .iter()
            .any(|&child| self.on_wnd_proc(child, event))
    }

    /// Left-click on a component's row.
    fn activate(&mut self, id: ComponentId, x: f32) {
        let Some(node) = self.component(id) else {
            return;
        };

        if node.is_menu() {
            let expand = !node.toggled;
            // Only one submenu per level stays open.
            if expand {
                let siblings: Vec<ComponentId> = match node.parent() {
                    Some(parent) => self
                        .component(parent)
                        .map(|p| p.children().to_vec())
                        .unwrap_or_default(),
                    None => self.roots().to_vec(),
                };
                for sibling in siblings {
                    self.set_toggled(sibling, false);
                }
            }
            self.set_toggled(id, expand);
            self.on_update(id);
            return;
        }

        let value = node.value();
        let is_bool = matches!(value, Some(MenuValue::Bool(_)));
        let is_list = matches!(value, Some(MenuValue::List(_)));
        let is_slider = matches!(value, Some(MenuValue::Slider(_)));

        if is_bool {
            if let Ok(b) = self.value_mut::<MenuBool>(id) {
                b.value = !b.value;
            }
        } else if is_list {
            if let Ok(list) = self.value_mut::<MenuList>(id) {
                list.cycle();
            }
        } else if is_slider {
            self.drag = Some(id);
            self.drag_slider(id, x);
        }
    }

    /// Set a slider from a cursor x over its track.
    fn drag_slider(&mut self, id: ComponentId, x: f32) {
        let width = self.menu_width(id) as f32;
        let track = self.theme().slider_track_width as f32;
        let pad = self.theme().item_padding as f32;
        let row_x = self.position(id).x;
        let track_x = row_x + width - pad - track;
        let fraction = if track > 0.0 {
            ((x - track_x) / track).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if let Ok(slider) = self.value_mut::<MenuSlider>(id) {
            let span = (slider.max - slider.min) as f32;
            slider.set_value(slider.min + (fraction * span).round() as i32);
        }
    }
}
