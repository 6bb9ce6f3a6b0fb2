use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::ui::{ComponentId, KeyBindMode, MenuError, MenuTree, MenuValue};

/// Backing store for configurable component state, keyed by component path.
pub trait SettingsStore {
    fn read(&self, key: &str) -> Option<&MenuValue>;
    fn write(&mut self, key: &str, value: MenuValue);
}

/// In-memory store. Also the body of `RonSettings`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySettings {
    pub values: BTreeMap<String, MenuValue>,
}

impl SettingsStore for MemorySettings {
    fn read(&self, key: &str) -> Option<&MenuValue> {
        self.values.get(key)
    }

    fn write(&mut self, key: &str, value: MenuValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Settings persisted as a pretty-printed RON map on disk.
#[derive(Debug)]
pub struct RonSettings {
    path: PathBuf,
    inner: MemorySettings,
}

impl RonSettings {
    /// Open a settings file. A missing file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            ron::from_str::<BTreeMap<String, MenuValue>>(&content)?
        } else {
            log::info!("no settings at {}, starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self {
            path,
            inner: MemorySettings { values },
        })
    }

    /// Write every stored value back to disk.
    pub fn flush(&self) -> Result<(), MenuError> {
        let pretty = ron::ser::PrettyConfig::default();
        let ron_str = ron::ser::to_string_pretty(&self.inner.values, pretty)?;
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, ron_str)?;
        log::debug!(
            "flushed {} settings to {}",
            self.inner.values.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.values.is_empty()
    }
}

impl SettingsStore for RonSettings {
    fn read(&self, key: &str) -> Option<&MenuValue> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: MenuValue) {
        self.inner.write(key, value);
    }
}

impl MenuTree {
    /// Store the value of `id` and of every item below it, keyed by path.
    /// Separators carry no state and are skipped.
    pub fn save(&self, id: ComponentId, store: &mut dyn SettingsStore) -> Result<(), MenuError> {
        let node = self.component(id).ok_or(MenuError::StaleId(id))?;
        match node.value() {
            Some(MenuValue::Separator(_)) => {}
            Some(value) => store.write(&self.path(id), value.clone()),
            None => {
                for &child in node.children() {
                    self.save(child, store)?;
                }
            }
        }
        Ok(())
    }

    /// Restore the value of `id` and of every item below it. Entries of a
    /// different kind than the live value are skipped with a warning.
    pub fn load(&mut self, id: ComponentId, store: &dyn SettingsStore) -> Result<(), MenuError> {
        let node = self.component(id).ok_or(MenuError::StaleId(id))?;
        if node.is_menu() {
            for child in node.children().to_vec() {
                self.load(child, store)?;
            }
            return Ok(());
        }

        let path = self.path(id);
        let Some(stored) = store.read(&path) else {
            return Ok(());
        };
        let Some(current) = node.value() else {
            return Ok(());
        };
        if stored.kind() != current.kind() {
            log::warn!(
                "skipping saved `{path}`: stored {} but component is {}",
                stored.kind(),
                current.kind()
            );
            return Ok(());
        }
        let restored = restore(current, stored);
        self.set_value(id, restored)
    }

    /// Save every root menu.
    pub fn save_all(&self, store: &mut dyn SettingsStore) -> Result<(), MenuError> {
        for &root in self.roots() {
            self.save(root, store)?;
        }
        Ok(())
    }

    /// Load every root menu.
    pub fn load_all(&mut self, store: &dyn SettingsStore) -> Result<(), MenuError> {
        for root in self.roots().to_vec() {
            self.load(root, store)?;
        }
        Ok(())
    }
}

/// Merge a saved value into the live one. Structure (slider bounds, list
/// options) comes from the live component; only the user's choice is restored.
fn restore(current: &MenuValue, stored: &MenuValue) -> MenuValue {
    match (current, stored) {
        (MenuValue::Slider(live), MenuValue::Slider(saved)) => {
            let mut slider = *live;
            slider.set_value(saved.value());
            MenuValue::Slider(slider)
        }
        (MenuValue::List(live), MenuValue::List(saved)) => {
            let mut list = live.clone();
            list.set_index(saved.index());
            MenuValue::List(list)
        }
        (MenuValue::KeyBind(live), MenuValue::KeyBind(saved)) => {
            let mut bind = *live;
            bind.key = saved.key;
            // Toggle state survives a reload; held keys do not. The live mode decides.
            bind.active = bind.mode == KeyBindMode::Toggle && saved.active;
            MenuValue::KeyBind(bind)
        }
        _ => stored.clone(),
    }
}
