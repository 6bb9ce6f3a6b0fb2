mod component;
mod draw;
mod error;
mod input;
mod theme;
mod value;

pub use component::{ComponentKind, ComponentNode};
pub use draw::{DrawList, PanelCommand, TextCommand};
pub use error::MenuError;
pub use input::{InputEvent, MouseButton};
pub use theme::Theme;
pub use value::{
    KeyBindMode, MenuBool, MenuKeyBind, MenuList, MenuSeparator, MenuSlider, MenuValue,
    ValueKind, key_name,
};

use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use value::text_len;

new_key_type! {
    /// Handle into the component arena. Stable across insertions/removals.
    pub struct ComponentId;
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Screen coordinate in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Result of dynamic member resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Member<'a> {
    /// The child is an item; yields its raw value.
    Value(&'a MenuValue),
    /// The child is a menu; yields the node itself.
    Component(ComponentId),
}

// ---------------------------------------------------------------------------
// MenuTree
// ---------------------------------------------------------------------------

/// Arena-backed menu component tree.
///
/// `roots` is the root registry: the ordered top-level menus that width
/// computation falls back to for components with no parent.
pub struct MenuTree {
    arena: SlotMap<ComponentId, ComponentNode>,
    roots: Vec<ComponentId>,
    theme: Theme,
    /// Slider currently captured by a mouse press.
    pub(crate) drag: Option<ComponentId>,
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTree {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            arena: SlotMap::with_key(),
            roots: Vec::new(),
            theme,
            drag: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Root registry, in registration order.
    pub fn roots(&self) -> &[ComponentId] {
        &self.roots
    }

    /// Register a top-level menu. Invalidates the registry-wide width.
    pub fn insert_root(&mut self, node: ComponentNode) -> Result<ComponentId, MenuError> {
        if self
            .roots
            .iter()
            .any(|&r| self.arena.get(r).is_some_and(|n| n.name == node.name))
        {
            return Err(MenuError::DuplicateName {
                parent: String::new(),
                name: node.name,
            });
        }
        let mut node = node;
        node.parent = None;
        let id = self.arena.insert(node);
        self.roots.push(id);
        self.reset_width(id);
        Ok(id)
    }

    /// Attach `node` under the menu `parent`. The child inherits the parent's
    /// assembly name when it has none of its own.
    pub fn insert(
        &mut self,
        parent: ComponentId,
        node: ComponentNode,
    ) -> Result<ComponentId, MenuError> {
        let parent_node = self.node(parent)?;
        if !parent_node.is_menu() {
            return Err(MenuError::NotAMenu {
                name: parent_node.name.clone(),
            });
        }
        if self.get(parent, &node.name).is_ok() {
            return Err(MenuError::DuplicateName {
                parent: parent_node.name.clone(),
                name: node.name,
            });
        }

        let mut node = node;
        if node.assembly_name.is_empty() {
            node.assembly_name = parent_node.assembly_name.clone();
        }
        node.parent = Some(parent);
        let id = self.arena.insert(node);
        if let Some(ComponentNode {
            kind: ComponentKind::Menu { children },
            ..
        }) = self.arena.get_mut(parent)
        {
            children.push(id);
        }
        self.reset_width(id);
        Ok(id)
    }

    /// Remove a component and all its descendants.
    pub fn remove(&mut self, id: ComponentId) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        let parent = node.parent;

        let mut to_remove = Vec::new();
        Self::collect_subtree(&self.arena, id, &mut to_remove);

        match parent {
            Some(parent_id) => {
                if let Some(ComponentNode {
                    kind: ComponentKind::Menu { children },
                    ..
                }) = self.arena.get_mut(parent_id)
                {
                    children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }

        for rid in to_remove {
            self.arena.remove(rid);
        }
        if self.drag.is_some_and(|d| !self.arena.contains_key(d)) {
            self.drag = None;
        }

        // Remaining siblings may have been sized by the removed node.
        let siblings = match parent {
            Some(parent_id) => self.component(parent_id).map(|p| p.children().to_vec()),
            None => Some(self.roots.clone()),
        };
        for sibling in siblings.unwrap_or_default() {
            self.set_menu_width(sibling, 0);
        }
    }

    fn collect_subtree(
        arena: &SlotMap<ComponentId, ComponentNode>,
        id: ComponentId,
        out: &mut Vec<ComponentId>,
    ) {
        out.push(id);
        if let Some(node) = arena.get(id) {
            for &child in node.children() {
                Self::collect_subtree(arena, child, out);
            }
        }
    }

    fn node(&self, id: ComponentId) -> Result<&ComponentNode, MenuError> {
        self.arena.get(id).ok_or(MenuError::StaleId(id))
    }

    /// Get a reference to a component node.
    pub fn component(&self, id: ComponentId) -> Option<&ComponentNode> {
        self.arena.get(id)
    }

    /// Raw mutable access. Nothing here invalidates the shared width; call
    /// `reset_width` after changing anything `width` depends on.
    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut ComponentNode> {
        self.arena.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Immediate child of `id` whose name is `name`.
    /// Items have no children, so this always fails for them.
    pub fn get(&self, id: ComponentId, name: &str) -> Result<ComponentId, MenuError> {
        self.node(id)?
            .children()
            .iter()
            .copied()
            .find(|&c| self.arena.get(c).is_some_and(|n| n.name == name))
            .ok_or_else(|| MenuError::not_found(name))
    }

    /// Resolve a dot-separated path starting at a root menu name.
    pub fn find(&self, path: &str) -> Result<ComponentId, MenuError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self
            .roots
            .iter()
            .copied()
            .find(|&r| self.arena.get(r).is_some_and(|n| n.name == first))
            .ok_or_else(|| MenuError::not_found(first))?;
        for segment in segments {
            current = self.get(current, segment)?;
        }
        Ok(current)
    }

    /// Dynamic member access: like `get`, but an item yields its value and
    /// any failure is reported as `None` instead of an error.
    pub fn member(&self, id: ComponentId, name: &str) -> Option<Member<'_>> {
        let child = match self.get(id, name) {
            Ok(child) => child,
            Err(e) => {
                log::trace!("member `{name}` not resolved: {e}");
                return None;
            }
        };
        let node = self.arena.get(child)?;
        Some(match &node.kind {
            ComponentKind::Item { value } => Member::Value(value),
            ComponentKind::Menu { .. } => Member::Component(child),
        })
    }

    /// Typed value of the child `name` of `id`.
    pub fn get_value<T: ValueKind>(&self, id: ComponentId, name: &str) -> Result<&T, MenuError> {
        let child = self.get(id, name)?;
        self.get_own_value(child)
    }

    /// Typed value attached to `id` itself.
    pub fn get_own_value<T: ValueKind>(&self, id: ComponentId) -> Result<&T, MenuError> {
        let node = self.node(id)?;
        let value = node
            .value()
            .ok_or_else(|| MenuError::not_found(node.name.clone()))?;
        T::from_value(value).ok_or_else(|| MenuError::TypeMismatch {
            name: node.name.clone(),
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Mutable typed value attached to `id`. Does not invalidate widths.
    pub fn value_mut<T: ValueKind>(&mut self, id: ComponentId) -> Result<&mut T, MenuError> {
        let node = self.arena.get_mut(id).ok_or(MenuError::StaleId(id))?;
        let name = &node.name;
        match &mut node.kind {
            ComponentKind::Item { value } => {
                let found = value.kind();
                T::from_value_mut(value).ok_or_else(|| MenuError::TypeMismatch {
                    name: name.clone(),
                    expected: T::KIND,
                    found,
                })
            }
            ComponentKind::Menu { .. } => Err(MenuError::not_found(name.clone())),
        }
    }

    /// Replace an item's value wholesale and invalidate the sibling width.
    pub fn set_value(&mut self, id: ComponentId, value: MenuValue) -> Result<(), MenuError> {
        let node = self.arena.get_mut(id).ok_or(MenuError::StaleId(id))?;
        match &mut node.kind {
            ComponentKind::Item { value: slot } => *slot = value,
            ComponentKind::Menu { .. } => return Err(MenuError::not_found(node.name.clone())),
        }
        self.reset_width(id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Names from the root registry down to `id`, joined with '.'.
    /// Walks the parent chain on every call, so renames show up immediately.
    pub fn path(&self, id: ComponentId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(node) = self.arena.get(cid) else {
                break;
            };
            names.push(node.name.as_str());
            current = node.parent;
        }
        names.reverse();
        names.join(".")
    }

    /// Change the lookup key of a component. Fails if a sibling already uses it.
    pub fn rename(&mut self, id: ComponentId, name: &str) -> Result<(), MenuError> {
        let node = self.node(id)?;
        if node.name == name {
            return Ok(());
        }
        let taken = match node.parent {
            Some(parent) => self.get(parent, name).is_ok(),
            None => self
                .roots
                .iter()
                .any(|&r| self.arena.get(r).is_some_and(|n| n.name == name)),
        };
        if taken {
            let parent = node
                .parent
                .and_then(|p| self.arena.get(p))
                .map(|p| p.name.clone())
                .unwrap_or_default();
            return Err(MenuError::DuplicateName {
                parent,
                name: name.to_string(),
            });
        }
        if let Some(node) = self.arena.get_mut(id) {
            node.name = name.to_string();
        }
        Ok(())
    }

    /// Change the presentation label and invalidate the sibling width.
    pub fn set_display_name(&mut self, id: ComponentId, display_name: &str) {
        if let Some(node) = self.arena.get_mut(id) {
            node.display_name = display_name.to_string();
            self.reset_width(id);
        }
    }

    // ------------------------------------------------------------------
    // Flags and position
    // ------------------------------------------------------------------

    pub fn visible(&self, id: ComponentId) -> bool {
        self.arena.get(id).is_some_and(|n| n.visible)
    }

    pub fn set_visible(&mut self, id: ComponentId, visible: bool) {
        if let Some(node) = self.arena.get_mut(id) {
            node.visible = visible;
        }
    }

    pub fn toggled(&self, id: ComponentId) -> bool {
        self.arena.get(id).is_some_and(|n| n.toggled)
    }

    pub fn set_toggled(&mut self, id: ComponentId, toggled: bool) {
        if let Some(node) = self.arena.get_mut(id) {
            node.toggled = toggled;
        }
    }

    pub fn position(&self, id: ComponentId) -> Vec2 {
        self.arena.get(id).map(|n| n.position).unwrap_or_default()
    }

    pub fn set_position(&mut self, id: ComponentId, position: Vec2) {
        if let Some(node) = self.arena.get_mut(id) {
            node.position = position;
        }
    }

    // ------------------------------------------------------------------
    // Width
    // ------------------------------------------------------------------

    /// Width this single component needs for its own content. Not cached.
    pub fn width(&self, id: ComponentId) -> u32 {
        let Some(node) = self.arena.get(id) else {
            return 0;
        };
        let t = &self.theme;
        let label = text_len(&node.display_name) * t.char_width + 2 * t.item_padding;
        match &node.kind {
            ComponentKind::Menu { .. } => label + t.arrow_width,
            ComponentKind::Item { value } => label + value.drawer_width(t),
        }
    }

    /// Components whose widths are aggregated together with `id`: the
    /// parent's children, or the root registry for a top-level component.
    /// Empty for an id that is no longer live.
    fn sibling_set(&self, id: ComponentId) -> Vec<ComponentId> {
        let Some(node) = self.arena.get(id) else {
            return Vec::new();
        };
        match node.parent {
            Some(parent) => self
                .arena
                .get(parent)
                .map(|p| p.children().to_vec())
                .unwrap_or_default(),
            None => self.roots.clone(),
        }
    }

    /// Shared width of the sibling group (or of every root menu).
    /// Computed lazily and cached until `reset_width` clears it.
    pub fn menu_width(&mut self, id: ComponentId) -> u32 {
        let Some(node) = self.arena.get(id) else {
            return 0;
        };
        if node.menu_width != 0 {
            return node.menu_width;
        }

        let siblings = self.sibling_set(id);
        let computed = siblings
            .iter()
            .map(|&s| self.width(s))
            .max()
            .unwrap_or(0);
        log::debug!(
            "menu width of `{}` recomputed over {} components: {}",
            self.path(id),
            siblings.len(),
            computed
        );

        self.set_menu_width(id, computed);
        computed
    }

    /// Overwrite the cache. 0 clears it.
    pub fn set_menu_width(&mut self, id: ComponentId, width: u32) {
        if let Some(node) = self.arena.get_mut(id) {
            node.menu_width = width;
        }
    }

    /// Clear the cached `menu_width` of every sibling of `id` (or every root
    /// menu). Does not touch `id`'s subtree and does not recompute.
    pub fn reset_width(&mut self, id: ComponentId) {
        for sibling in self.sibling_set(id) {
            self.set_menu_width(sibling, 0);
        }
    }

    // ------------------------------------------------------------------
    // Per-frame callbacks
    // ------------------------------------------------------------------

    /// Keep children's visibility in step with their container being
    /// shown and expanded.
    pub fn on_update(&mut self, id: ComponentId) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        let show = node.visible && node.toggled;
        let children = node.children().to_vec();
        for child in children {
            self.set_visible(child, show);
            self.on_update(child);
        }
    }

    /// Run `on_update` over the whole root registry.
    pub fn update(&mut self) {
        for root in self.roots.clone() {
            self.on_update(root);
        }
    }

    /// Emit draw commands for one component at row `index` below `position`.
    /// An expanded menu draws its visible children in a column to its right.
    pub fn on_draw(
        &mut self,
        id: ComponentId,
        position: Vec2,
        index: usize,
        draw_list: &mut DrawList,
    ) {
        if !self.visible(id) {
            return;
        }
        let width = self.menu_width(id) as f32;
        let row = Vec2::new(
            position.x,
            position.y + index as f32 * self.theme.item_height as f32,
        );
        self.set_position(id, row);

        let Some(node) = self.arena.get(id) else {
            return;
        };
        let t = &self.theme;

        draw_list.push_row(t, row, width, node.toggled);
        let label_color = match node.value() {
            Some(MenuValue::Separator(_)) => t.separator_text,
            _ => t.text,
        };
        draw_list.push_label(t, row, &node.display_name, label_color);

        match &node.kind {
            ComponentKind::Item { value } => {
                if let MenuValue::Slider(slider) = value {
                    draw_list.push_slider_fill(t, row, width, slider.fraction());
                }
                let label = value.label();
                if !label.is_empty() {
                    draw_list.push_right_label(t, row, width, &label, t.value_text);
                }
            }
            ComponentKind::Menu { children } => {
                draw_list.push_right_label(t, row, width, ">", t.text);
                if node.toggled {
                    let children = children.clone();
                    let column = Vec2::new(row.x + width, row.y);
                    let mut slot = 0;
                    for child in children {
                        if self.visible(child) {
                            self.on_draw(child, column, slot, draw_list);
                            slot += 1;
                        }
                    }
                }
            }
        }
    }

    /// Walk the root registry and emit draw commands into a `DrawList`.
    pub fn draw(&mut self, draw_list: &mut DrawList) {
        let origin = Vec2::new(self.theme.origin.0, self.theme.origin.1);
        let mut slot = 0;
        for root in self.roots.clone() {
            if self.visible(root) {
                self.on_draw(root, origin, slot, draw_list);
                slot += 1;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Item whose width is exactly `w` pixels with the test theme.
    fn sized_item(name: &str, w: u32) -> ComponentNode {
        ComponentNode::item(name, &"x".repeat(w as usize), name, MenuSeparator)
    }

    /// Theme where one character is one pixel and nothing else adds width.
    fn unit_theme() -> Theme {
        Theme {
            char_width: 1,
            item_padding: 0,
            arrow_width: 0,
            ..Theme::default()
        }
    }

    fn tree_with_children(widths: &[u32]) -> (MenuTree, ComponentId, Vec<ComponentId>) {
        let mut tree = MenuTree::with_theme(unit_theme());
        let root = tree
            .insert_root(ComponentNode::menu("root", "Root", "root"))
            .expect("root");
        let kids = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                tree.insert(root, sized_item(&format!("c{i}"), w))
                    .expect("child")
            })
            .collect();
        (tree, root, kids)
    }

    #[test]
    fn insert_root_and_child() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main-1").with_assembly_name("demo"))
            .expect("root");
        assert_eq!(tree.roots().len(), 1);

        let child = tree
            .insert(root, ComponentNode::item("on", "Enabled", "on-1", MenuBool::new(true)))
            .expect("child");
        let root_node = tree.component(root).expect("root exists");
        assert_eq!(root_node.children(), &[child]);

        let child_node = tree.component(child).expect("child exists");
        assert_eq!(child_node.parent(), Some(root));
        assert_eq!(child_node.assembly_name, "demo");
    }

    #[test]
    fn insert_under_item_fails() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        let item = tree
            .insert(root, ComponentNode::item("on", "On", "on", MenuBool::default()))
            .expect("item");
        let err = tree
            .insert(item, ComponentNode::item("x", "X", "x", MenuBool::default()))
            .expect_err("items hold no children");
        assert!(matches!(err, MenuError::NotAMenu { .. }));
    }

    #[test]
    fn duplicate_child_name_rejected() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        tree.insert(root, ComponentNode::item("a", "A", "a1", MenuBool::default()))
            .expect("first");
        let err = tree
            .insert(root, ComponentNode::item("a", "A", "a2", MenuBool::default()))
            .expect_err("duplicate");
        assert!(matches!(err, MenuError::DuplicateName { .. }));
    }

    #[test]
    fn get_finds_child_or_not_found() {
        let (tree, root, kids) = tree_with_children(&[3, 4]);
        assert_eq!(tree.get(root, "c1").expect("c1"), kids[1]);
        assert!(matches!(
            tree.get(root, "missing"),
            Err(MenuError::NotFound { .. })
        ));
        // Leaves never have children.
        assert!(matches!(
            tree.get(kids[0], "anything"),
            Err(MenuError::NotFound { .. })
        ));
    }

    #[test]
    fn lone_child_menu_width_is_own_width() {
        let (mut tree, _, kids) = tree_with_children(&[9]);
        assert_eq!(tree.menu_width(kids[0]), tree.width(kids[0]));
        assert_eq!(tree.menu_width(kids[0]), 9);
    }

    #[test]
    fn siblings_share_max_width() {
        let (mut tree, _, kids) = tree_with_children(&[3, 7, 5]);
        for &k in &kids {
            assert_eq!(tree.menu_width(k), 7);
        }
    }

    #[test]
    fn stale_width_until_reset() {
        let (mut tree, _, kids) = tree_with_children(&[3, 7, 5]);
        assert_eq!(tree.menu_width(kids[0]), 7);

        // Raw mutation: cache is intentionally not invalidated.
        tree.component_mut(kids[2]).expect("c2").display_name = "x".repeat(12);
        assert_eq!(tree.width(kids[2]), 12);
        assert_eq!(tree.menu_width(kids[0]), 7);

        tree.reset_width(kids[1]);
        assert_eq!(tree.menu_width(kids[0]), 12);
        assert_eq!(tree.menu_width(kids[1]), 12);
    }

    #[test]
    fn reset_width_leaves_subtree_alone() {
        let mut tree = MenuTree::with_theme(unit_theme());
        let root = tree
            .insert_root(ComponentNode::menu("root", "Root", "root"))
            .expect("root");
        let sub = tree
            .insert(root, ComponentNode::menu("sub", "Sub", "sub"))
            .expect("sub");
        let leaf = tree.insert(sub, sized_item("leaf", 4)).expect("leaf");
        assert_eq!(tree.menu_width(leaf), 4);

        tree.reset_width(sub);
        assert_eq!(tree.component(sub).expect("sub").cached_menu_width(), 0);
        assert_eq!(tree.component(leaf).expect("leaf").cached_menu_width(), 4);
    }

    #[test]
    fn set_display_name_invalidates_siblings() {
        let (mut tree, _, kids) = tree_with_children(&[3, 7]);
        assert_eq!(tree.menu_width(kids[0]), 7);
        tree.set_display_name(kids[0], "wider-than-seven");
        assert_eq!(tree.menu_width(kids[1]), 16);
    }

    #[test]
    fn inserting_sibling_invalidates() {
        let (mut tree, root, kids) = tree_with_children(&[3]);
        assert_eq!(tree.menu_width(kids[0]), 3);
        tree.insert(root, sized_item("big", 20)).expect("big");
        assert_eq!(tree.menu_width(kids[0]), 20);
    }

    #[test]
    fn removing_widest_sibling_invalidates() {
        let (mut tree, _, kids) = tree_with_children(&[3, 8]);
        assert_eq!(tree.menu_width(kids[0]), 8);
        tree.remove(kids[1]);
        assert_eq!(tree.menu_width(kids[0]), 3);
    }

    #[test]
    fn reset_width_on_removed_id_is_a_no_op() {
        let mut tree = MenuTree::with_theme(unit_theme());
        let a = tree
            .insert_root(ComponentNode::menu("a", "aaaa", "a"))
            .expect("a");
        let c = tree
            .insert(a, sized_item("c", 2))
            .expect("c");
        assert_eq!(tree.menu_width(a), 4);

        tree.remove(c);
        tree.reset_width(c);
        assert_eq!(tree.component(a).expect("a").cached_menu_width(), 4);
        assert_eq!(tree.menu_width(c), 0);
    }

    #[test]
    fn roots_aggregate_over_registry() {
        let mut tree = MenuTree::with_theme(unit_theme());
        let a = tree
            .insert_root(ComponentNode::menu("a", "short", "a"))
            .expect("a");
        let b = tree
            .insert_root(ComponentNode::menu("b", "much longer", "b"))
            .expect("b");
        assert_eq!(tree.menu_width(a), 11);
        assert_eq!(tree.menu_width(b), 11);
    }

    #[test]
    fn path_tracks_renames() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        let sub = tree
            .insert(root, ComponentNode::menu("combo", "Combo", "combo"))
            .expect("sub");
        let leaf = tree
            .insert(sub, ComponentNode::item("q", "Use Q", "q", MenuBool::new(true)))
            .expect("leaf");
        assert_eq!(tree.path(leaf), "main.combo.q");

        tree.rename(root, "settings").expect("rename");
        assert_eq!(tree.path(leaf), "settings.combo.q");
        assert_eq!(tree.find("settings.combo.q").expect("find"), leaf);
        assert!(tree.find("main.combo.q").is_err());
    }

    #[test]
    fn rename_rejects_sibling_clash() {
        let (mut tree, _, kids) = tree_with_children(&[1, 2]);
        assert!(matches!(
            tree.rename(kids[0], "c1"),
            Err(MenuError::DuplicateName { .. })
        ));
        tree.rename(kids[0], "fresh").expect("rename");
        assert_eq!(tree.component(kids[0]).expect("c0").name(), "fresh");
    }

    #[test]
    fn typed_value_access() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        let range = tree
            .insert(
                root,
                ComponentNode::item("range", "Range", "range", MenuSlider::new(500, 0, 1000)),
            )
            .expect("range");

        let slider: &MenuSlider = tree.get_value(root, "range").expect("slider");
        assert_eq!(slider.value(), 500);

        let err = tree
            .get_value::<MenuBool>(root, "range")
            .expect_err("wrong kind");
        assert!(matches!(
            err,
            MenuError::TypeMismatch {
                expected: "bool",
                found: "slider",
                ..
            }
        ));

        // Menus carry no value of their own.
        assert!(matches!(
            tree.get_own_value::<MenuBool>(root),
            Err(MenuError::NotFound { .. })
        ));

        tree.value_mut::<MenuSlider>(range)
            .expect("slider")
            .set_value(2000);
        assert_eq!(tree.get_own_value::<MenuSlider>(range).expect("slider").value(), 1000);
    }

    #[test]
    fn member_yields_value_or_component() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        let sub = tree
            .insert(root, ComponentNode::menu("sub", "Sub", "sub"))
            .expect("sub");
        tree.insert(root, ComponentNode::item("on", "On", "on", MenuBool::new(true)))
            .expect("on");

        assert_eq!(tree.member(root, "sub"), Some(Member::Component(sub)));
        assert_eq!(
            tree.member(root, "on"),
            Some(Member::Value(&MenuValue::Bool(MenuBool::new(true))))
        );
        assert_eq!(tree.member(root, "nope"), None);
    }

    #[test]
    fn member_on_removed_id_is_none() {
        let (mut tree, root, kids) = tree_with_children(&[1]);
        tree.remove(root);
        assert_eq!(tree.member(root, "c0"), None);
        assert!(tree.component(kids[0]).is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn update_syncs_child_visibility() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        let child = tree
            .insert(root, ComponentNode::item("on", "On", "on", MenuBool::default()))
            .expect("child");

        tree.update();
        assert!(!tree.visible(child));

        tree.set_toggled(root, true);
        tree.update();
        assert!(tree.visible(child));

        tree.set_visible(root, false);
        tree.update();
        assert!(!tree.visible(child));
    }

    #[test]
    fn draw_collapsed_root_only() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        tree.insert(root, ComponentNode::item("on", "Enabled", "on", MenuBool::new(true)))
            .expect("child");
        tree.update();

        let mut dl = DrawList::new();
        tree.draw(&mut dl);
        assert_eq!(dl.panels.len(), 1);
        assert_eq!(dl.texts[0].text, "Main");
        assert!((dl.panels[0].width - tree.menu_width(root) as f32).abs() < 0.01);
    }

    #[test]
    fn draw_expanded_menu_places_children_right() {
        let mut tree = MenuTree::new();
        let root = tree
            .insert_root(ComponentNode::menu("main", "Main", "main"))
            .expect("root");
        let a = tree
            .insert(root, ComponentNode::item("a", "Alpha", "a", MenuBool::new(true)))
            .expect("a");
        let b = tree
            .insert(root, ComponentNode::item("b", "Beta", "b", MenuSlider::new(5, 0, 10)))
            .expect("b");
        tree.set_toggled(root, true);
        tree.update();

        let mut dl = DrawList::new();
        tree.draw(&mut dl);

        let root_w = tree.menu_width(root) as f32;
        let item_h = tree.theme().item_height as f32;
        let origin = tree.theme().origin;
        assert!((tree.position(a).x - (origin.0 + root_w)).abs() < 0.01);
        assert!((tree.position(b).y - (origin.1 + item_h)).abs() < 0.01);
        assert!(dl.texts.iter().any(|t| t.text == "[x]"));
        assert!(dl.texts.iter().any(|t| t.text == "5"));
    }
}
