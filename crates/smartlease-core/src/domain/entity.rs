//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier type shared by every SmartLease record
pub type RecordId = u32;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DomainError {
    /// The referenced record does not exist in the list. Mutations
    /// against a missing id report this instead of silently doing nothing.
    #[error("not found: {0}")]
    NotFound(String),
    /// A field set violates a domain invariant; the mutation was not applied.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::NotFound("tenant 42".to_string());
        assert_eq!(err.to_string(), "not found: tenant 42");
    }
}
