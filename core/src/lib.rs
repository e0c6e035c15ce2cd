//! User CRUD Core Library
//!
//! Contains the user domain model, the storage abstraction with its
//! PostgreSQL implementation, and the startup bootstrap for the service.

pub mod bootstrap;
pub mod domain;
pub mod error;
pub mod schema;
pub mod store;

pub use error::{CoreError, Result};
