//! Application layer for Coopkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfiguratorService, QuoteService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ConfiguratorService,
    Estimate, // DTO for price + scene
    Handoff,
    QuoteService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, QuoteComposer, SceneRenderer};

pub use error::ApplicationError;
