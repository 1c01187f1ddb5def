pub mod configuration;
pub mod quote;
pub mod scene;

pub use crate::domain::DomainError;
pub use configuration::{Configuration, ConfigurationBuilder};
pub use quote::{ContactDetails, QuoteRequest};
pub use scene::{Part, PartKind, Scene};
