use std::fmt;

/// Lifecycle of one remotely fetched resource.
///
/// A reload request moves any variant back to `Loading`; completions carry
/// either the data or the error, so "loading and failed at once" cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Resource<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(LoadError),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Idle | Resource::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Resource::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Resource::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Human-readable failure attached to a resource.
///
/// The engine's failure taxonomy is collapsed into one message at this
/// boundary; the user sees the message and a retry action, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
