//! Coopkit Core: the coop configurator without any I/O.
//!
//! This crate provides the domain and application layers for the coop
//! configurator: price estimates, isometric schematics and quote handoff,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           coopkit-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ConfiguratorService, QuoteService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Renderer, Composer, Filesystem)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     coopkit-adapters (Infrastructure)   │
//! │  (SvgRenderer, MailtoComposer, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Configuration, pricing, schematic)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use coopkit_core::domain::{
//!     Configuration, Levels, RoofMaterial, Wood, estimate_price, generate_schematic,
//! };
//!
//! let config = Configuration::builder()
//!     .wood(Wood::Cedar)
//!     .roof_material(RoofMaterial::Wood)
//!     .levels(Levels::One)
//!     .length_feet(8)
//!     .build();
//!
//! assert_eq!(estimate_price(&config).to_string(), "$5,910");
//! assert!(!generate_schematic(&config).parts.is_empty());
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// The types most front-ends need.
pub mod prelude {
    pub use crate::application::{
        ConfiguratorService, Estimate, Handoff, QuoteService,
        ports::{Filesystem, QuoteComposer, SceneRenderer},
    };
    pub use crate::domain::{
        Color, ContactDetails, Configuration, ConfigurationBuilder, HardwareFinish, Levels,
        Palette, Price, PriceTable, QuoteRequest, RoofMaterial, RoofStyle, Scene, Wood,
        estimate_price, generate_schematic,
    };
    pub use crate::error::{CoopError, CoopResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
