//! SmartLease Core
//!
//! Domain entities, the generic in-memory record store, CSV export, and the
//! stubbed external collaborators (identity provider, message dispatch)
//! shared by the SmartLease frontend. Contains no UI dependencies so it can
//! be tested natively and compiled to WebAssembly unchanged.

pub mod auth;
pub mod csv;
pub mod domain;
pub mod list;
pub mod messaging;

pub use domain::{DomainError, DomainResult, Entity, RecordId};
pub use list::{ListConfig, RecordList};
