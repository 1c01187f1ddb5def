//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `coopkit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{QuoteRequest, Scene};
use crate::error::CoopResult;

/// Port for turning a scene graph into a document.
///
/// Implemented by:
/// - `coopkit_adapters::renderer::SvgRenderer` (SVG markup)
/// - `coopkit_adapters::renderer::JsonSceneRenderer` (scene graph as JSON)
#[cfg_attr(test, mockall::automock)]
pub trait SceneRenderer: Send + Sync {
    /// Render the whole scene into a single document.
    fn render(&self, scene: &Scene) -> CoopResult<String>;

    /// Media type of the rendered document.
    fn media_type(&self) -> &'static str;

    /// File extension, without the dot.
    fn extension(&self) -> &'static str;
}

/// Port for handing a quote request to an external send mechanism.
///
/// Implemented by:
/// - `coopkit_adapters::mailto::MailtoComposer` (`mailto:` link)
#[cfg_attr(test, mockall::automock)]
pub trait QuoteComposer: Send + Sync {
    /// Produce the handoff link for `request`.
    fn compose(&self, request: &QuoteRequest) -> CoopResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `coopkit_adapters::filesystem::LocalFilesystem` (production)
/// - `coopkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoopResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CoopResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
