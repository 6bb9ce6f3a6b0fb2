use super::ComponentId;

/// Failures surfaced by typed tree accessors and the persistence/layout loaders.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// No child with the given key, or no value attached.
    #[error("no component or value named `{name}`")]
    NotFound { name: String },

    /// Attached value is a different kind than the one requested.
    #[error("value `{name}` is a {found}, not a {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Children can only be attached to menus.
    #[error("`{name}` is not a menu and cannot hold children")]
    NotAMenu { name: String },

    #[error("`{parent}` already has a child named `{name}`")]
    DuplicateName { parent: String, name: String },

    /// The id no longer refers to a live node (removed subtree).
    #[error("stale component id {0:?}")]
    StaleId(ComponentId),

    #[error("layout error: {0}")]
    Layout(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse RON: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    #[error("failed to write RON: {0}")]
    RonWrite(#[from] ron::Error),
}

impl MenuError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        MenuError::NotFound { name: name.into() }
    }
}
