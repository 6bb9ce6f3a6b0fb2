use kdl::{KdlDocument, KdlNode};

use crate::ui::{
    ComponentId, ComponentNode, KeyBindMode, MenuBool, MenuError, MenuKeyBind, MenuList,
    MenuSeparator, MenuSlider, MenuTree,
};

/// Parse a KDL file and return the document. Logs a warning and returns None on failure.
fn parse_kdl_file(path: &str) -> Option<KdlDocument> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("failed to read {}: {}", path, e);
            return None;
        }
    };
    match content.parse::<KdlDocument>() {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("failed to parse KDL {}: {}", path, e);
            None
        }
    }
}

/// Positional string argument.
fn arg_str(node: &KdlNode, index: usize) -> Option<&str> {
    node.get(index)?.as_string()
}

fn prop_str<'a>(node: &'a KdlNode, key: &str) -> Option<&'a str> {
    node.get(key)?.as_string()
}

fn prop_i32(node: &KdlNode, key: &str) -> Option<i32> {
    node.get(key)?.as_integer().and_then(|v| i32::try_from(v).ok())
}

fn prop_bool(node: &KdlNode, key: &str) -> Option<bool> {
    node.get(key)?.as_bool()
}

/// Build one component from a layout node (without its children).
///
/// ```kdl
/// menu "combo" "Combo" unique="combo-v1" assembly="demo" { ... }
/// bool "use_q" "Use Q" value=#true
/// slider "range" "Range" value=500 min=0 max=1000
/// list "mode" "Mode" index=0 { option "Fast"; option "Slow" }
/// keybind "key" "Combo Key" key=32 mode="toggle"
/// separator "misc" "Misc"
/// ```
fn build_node(node: &KdlNode) -> Result<ComponentNode, MenuError> {
    let kind = node.name().to_string();
    let name = arg_str(node, 0)
        .ok_or_else(|| MenuError::Layout(format!("`{kind}` node without a name")))?;
    let display = arg_str(node, 1).unwrap_or(name);
    let unique = prop_str(node, "unique").unwrap_or(name);

    let component = match kind.as_str() {
        "menu" => ComponentNode::menu(name, display, unique),
        "bool" => ComponentNode::item(
            name,
            display,
            unique,
            MenuBool::new(prop_bool(node, "value").unwrap_or(false)),
        ),
        "slider" => {
            let min = prop_i32(node, "min").unwrap_or(0);
            let max = prop_i32(node, "max").unwrap_or(100);
            let value = prop_i32(node, "value").unwrap_or(min);
            ComponentNode::item(name, display, unique, MenuSlider::new(value, min, max))
        }
        "list" => {
            let options = node
                .children()
                .map(|children| {
                    children
                        .nodes()
                        .iter()
                        .filter(|n| n.name().to_string() == "option")
                        .filter_map(|n| arg_str(n, 0).map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            let index = prop_i32(node, "index").unwrap_or(0).max(0) as usize;
            ComponentNode::item(name, display, unique, MenuList::new(options, index))
        }
        "keybind" => {
            let key = node
                .get("key")
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| MenuError::Layout(format!("keybind `{name}` needs key=")))?;
            let mode = match prop_str(node, "mode") {
                Some("toggle") => KeyBindMode::Toggle,
                _ => KeyBindMode::Press,
            };
            ComponentNode::item(name, display, unique, MenuKeyBind::new(key, mode))
        }
        "separator" => ComponentNode::item(name, display, unique, MenuSeparator),
        other => {
            return Err(MenuError::Layout(format!("unknown component `{other}`")));
        }
    };

    Ok(match prop_str(node, "assembly") {
        Some(assembly) => component.with_assembly_name(assembly),
        None => component,
    })
}

/// Insert `node` (and, for menus, its subtree) under `parent`, or as a root.
fn attach(
    tree: &mut MenuTree,
    parent: Option<ComponentId>,
    node: &KdlNode,
) -> Result<ComponentId, MenuError> {
    let component = build_node(node)?;
    let is_menu = component.is_menu();
    let id = match parent {
        Some(parent) => tree.insert(parent, component)?,
        None => tree.insert_root(component)?,
    };
    if is_menu && let Some(children) = node.children() {
        for child in children.nodes() {
            attach(tree, Some(id), child)?;
        }
    }
    Ok(id)
}

/// Build root menus from a KDL layout. Returns the new root ids.
pub fn parse_layout(tree: &mut MenuTree, src: &str) -> Result<Vec<ComponentId>, MenuError> {
    let doc = src
        .parse::<KdlDocument>()
        .map_err(|e| MenuError::Layout(e.to_string()))?;
    let mut roots = Vec::new();
    for node in doc.nodes() {
        roots.push(attach(tree, None, node)?);
    }
    log::info!("layout built {} root menus", roots.len());
    Ok(roots)
}

/// Load a layout file into the tree. Logs a warning and adds nothing on failure.
pub fn load_layout(tree: &mut MenuTree, path: &str) -> Vec<ComponentId> {
    let Some(doc) = parse_kdl_file(path) else {
        return Vec::new();
    };
    let mut roots = Vec::new();
    for node in doc.nodes() {
        match attach(tree, None, node) {
            Ok(id) => roots.push(id),
            Err(e) => log::warn!("skipping menu in {}: {}", path, e),
        }
    }
    roots
}
