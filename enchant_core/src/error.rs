//! Error types for the enchantment runtime

use crate::entity::EntityId;
use crate::kind::Kind;
use thiserror::Error;

/// Error raised while running a hook
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HookError {
    /// A handler body refused to run or failed
    #[error("{kind} handler failed: {reason}")]
    Handler { kind: &'static str, reason: String },
    /// The hook call carried a context no handler may see
    #[error("invalid hook context: {reason}")]
    Context { reason: String },
}

impl HookError {
    /// Build a handler error attributed to `kind`
    pub fn handler(kind: Kind, reason: impl Into<String>) -> Self {
        HookError::Handler {
            kind: kind.name(),
            reason: reason.into(),
        }
    }

    /// Build a context error
    pub fn context(reason: impl Into<String>) -> Self {
        HookError::Context {
            reason: reason.into(),
        }
    }
}

/// Result type returned by every hook
pub type HookResult = Result<(), HookError>;

/// Error dispatching against an entity table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),
    #[error(transparent)]
    Hook(#[from] HookError),
}

/// Error building a kind registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Kind id {id} of '{name}' is already used by '{existing}'")]
    DuplicateId {
        id: u16,
        existing: &'static str,
        name: &'static str,
    },
    #[error("Kind name already registered: {0}")]
    DuplicateName(String),
    #[error("Unknown kind: {0}")]
    UnknownKind(String),
}
