//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `coopkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SceneRenderer`: Scene graph to markup
//!   - `QuoteComposer`: Quote request to a handoff link
//!   - `Filesystem`: File operations for exports
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, QuoteComposer, SceneRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockQuoteComposer, MockSceneRenderer};
