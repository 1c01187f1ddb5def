//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "price and draw a coop" or "hand off a quote".

pub mod configurator_service;
pub mod quote_service;

pub use configurator_service::{ConfiguratorService, Estimate};
pub use quote_service::{Handoff, QuoteService};
