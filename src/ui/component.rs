use super::value::MenuValue;
use super::{ComponentId, Vec2};

/// Flat enum component identity.
/// Closed set: a node is either a container of named children or an item
/// carrying exactly one value. No trait objects.
#[derive(Debug, Clone)]
pub enum ComponentKind {
    /// Container. Children are keyed by their own `name`, so a rename can
    /// never desynchronize the lookup key.
    Menu { children: Vec<ComponentId> },
    /// Leaf with an attached value.
    Item { value: MenuValue },
}

/// Arena entry: one addressable node of the menu tree.
#[derive(Debug, Clone)]
pub struct ComponentNode {
    /// Lookup key among siblings. Changed only through `MenuTree::rename`.
    pub(crate) name: String,
    /// Presentation label. Changing it alters `width`; prefer
    /// `MenuTree::set_display_name`, which also invalidates the shared width.
    pub display_name: String,
    /// Identity that survives reloads, independent of `name`.
    pub unique_string: String,
    /// Provenance tag of the module that defined this component.
    pub assembly_name: String,
    pub(crate) kind: ComponentKind,
    /// Non-owning back-reference. `None` for members of the root registry.
    pub(crate) parent: Option<ComponentId>,
    pub visible: bool,
    /// Expanded/collapsed for menus; unused by items.
    pub toggled: bool,
    /// Top-left of the component's row, updated by the draw pass.
    pub position: Vec2,
    /// Shared sibling width; 0 means "not yet computed".
    pub(crate) menu_width: u32,
}

impl ComponentNode {
    fn new(name: &str, display_name: &str, unique_string: &str, kind: ComponentKind) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            unique_string: unique_string.to_string(),
            assembly_name: String::new(),
            kind,
            parent: None,
            visible: true,
            toggled: false,
            position: Vec2::default(),
            menu_width: 0,
        }
    }

    pub fn menu(name: &str, display_name: &str, unique_string: &str) -> Self {
        Self::new(
            name,
            display_name,
            unique_string,
            ComponentKind::Menu {
                children: Vec::new(),
            },
        )
    }

    pub fn item(
        name: &str,
        display_name: &str,
        unique_string: &str,
        value: impl Into<MenuValue>,
    ) -> Self {
        Self::new(
            name,
            display_name,
            unique_string,
            ComponentKind::Item {
                value: value.into(),
            },
        )
    }

    pub fn with_assembly_name(mut self, assembly_name: &str) -> Self {
        self.assembly_name = assembly_name.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn is_menu(&self) -> bool {
        matches!(self.kind, ComponentKind::Menu { .. })
    }

    /// Child ids in insertion order. Empty for items.
    pub fn children(&self) -> &[ComponentId] {
        match &self.kind {
            ComponentKind::Menu { children } => children,
            ComponentKind::Item { .. } => &[],
        }
    }

    pub fn value(&self) -> Option<&MenuValue> {
        match &self.kind {
            ComponentKind::Item { value } => Some(value),
            ComponentKind::Menu { .. } => None,
        }
    }

    /// Raw value access. Does not invalidate the shared width.
    pub fn value_mut(&mut self) -> Option<&mut MenuValue> {
        match &mut self.kind {
            ComponentKind::Item { value } => Some(value),
            ComponentKind::Menu { .. } => None,
        }
    }

    /// Cached shared width as last stored, without recomputing.
    pub fn cached_menu_width(&self) -> u32 {
        self.menu_width
    }
}
