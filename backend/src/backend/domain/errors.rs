//! Domain error taxonomy.
//!
//! Services return these; the REST layer translates them to HTTP status
//! codes. Stale-identifier updates and deletes are deliberately NOT errors:
//! they are silent no-ops reported through `Option`/`bool` results.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A required text field was empty after trimming
    #[error("{0}")]
    Validation(String),

    /// A location name collided with an existing one
    #[error("{0}")]
    Duplicate(String),

    /// An operation referenced an entity that must exist (for example
    /// creating a comment for a missing family)
    #[error("{0}")]
    NotFound(String),

    /// An import payload could not be parsed; no state was mutated
    #[error("invalid import payload: {0}")]
    Format(String),

    /// The outbound mail relay is misconfigured or rejected the message
    #[error("{0}")]
    Transport(String),

    /// Persistence failed underneath an otherwise valid operation
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
