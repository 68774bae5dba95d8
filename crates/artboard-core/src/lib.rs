//! # Artboard Core
//! 
//! Domain types, the auth service port, and the session/authorization policy.

pub mod domain;
pub mod ports;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{AuthError, DomainError, ReportError};
