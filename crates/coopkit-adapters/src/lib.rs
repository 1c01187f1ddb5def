//! Infrastructure adapters for Coopkit.
//!
//! This crate implements the ports defined in `coopkit-core::application::ports`.
//! It contains all markup, transport encoding and I/O operations.

pub mod filesystem;
pub mod mailto;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use mailto::MailtoComposer;
pub use renderer::{JsonSceneRenderer, SvgRenderer};
