// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for coopkit.
//!
//! This module contains pure business logic: the price model, the palette
//! tables, the schematic generator and the quote formatter. All I/O,
//! markup and transport concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Pure functions**: Same configuration in, same price and scene out
//!
// Public API - what the world sees
pub mod color;
pub mod entities;
pub mod error;
pub mod palette;
pub mod pricing;
pub mod schematic;
pub mod value_objects;

// Re-exports for convenience
pub use color::Color;
pub use entities::{
    configuration::{
        Configuration, ConfigurationBuilder, DEFAULT_LENGTH_FEET, MAX_LENGTH_FEET, MIN_LENGTH_FEET,
    },
    quote::{ContactDetails, QuoteRequest},
    scene::{
        Material, Paint, Part, PartKind, Point, Scene, Shape, Stroke, Style, TextAnchor, ViewBox,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use palette::{Palette, WoodPalette, mesh_stroke};
pub use pricing::{Price, PriceLine, PriceTable, estimate_price};
pub use schematic::{generate as generate_schematic, generate_with_palette};

pub use value_objects::{HardwareFinish, Levels, RoofMaterial, RoofStyle, Wood};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn wood_parses_correctly() {
        assert_eq!(Wood::from_str("cedar").unwrap(), Wood::Cedar);
        assert_eq!(Wood::from_str("PINE").unwrap(), Wood::Pine);
        assert!(Wood::from_str("oak").is_err());
    }

    #[test]
    fn roof_accepts_aliases() {
        assert_eq!(RoofStyle::from_str("lean-to").unwrap(), RoofStyle::LeanTo);
        assert_eq!(RoofStyle::from_str("leanto").unwrap(), RoofStyle::LeanTo);
        assert_eq!(RoofStyle::from_str("Gable").unwrap(), RoofStyle::Gable);
        assert_eq!(
            RoofMaterial::from_str("sheet-metal").unwrap(),
            RoofMaterial::Metal
        );
    }

    #[test]
    fn unknown_option_names_the_field() {
        let err = HardwareFinish::from_str("chrome").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownOption {
                field: "hardware finish",
                value: "chrome".into()
            }
        );
        assert!(err.suggestions()[0].contains("galvanized"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn levels_only_one_or_two() {
        assert_eq!(Levels::try_from(1).unwrap(), Levels::One);
        assert_eq!(Levels::from_str("2").unwrap(), Levels::Two);
        assert!(matches!(
            Levels::try_from(3),
            Err(DomainError::InvalidLevels { value: 3 })
        ));
        assert!(Levels::from_str("two").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for w in Wood::ALL {
            assert_eq!(Wood::from_str(&w.to_string()).unwrap(), w);
        }
        for r in RoofStyle::ALL {
            assert_eq!(RoofStyle::from_str(&r.to_string()).unwrap(), r);
        }
        for m in RoofMaterial::ALL {
            assert_eq!(RoofMaterial::from_str(&m.to_string()).unwrap(), m);
        }
        for h in HardwareFinish::ALL {
            assert_eq!(HardwareFinish::from_str(&h.to_string()).unwrap(), h);
        }
        for l in Levels::ALL {
            assert_eq!(Levels::from_str(&l.to_string()).unwrap(), l);
        }
    }

    // ========================================================================
    // Serde Tests
    // ========================================================================

    #[test]
    fn configuration_serializes_with_canonical_names() {
        let cfg = Configuration::builder()
            .roof(RoofStyle::LeanTo)
            .levels(Levels::One)
            .build();
        let json = serde_json::to_value(cfg).unwrap();
        assert_eq!(json["roof"], "lean-to");
        assert_eq!(json["levels"], 1);
        assert_eq!(json["length_feet"], 11);
    }

    #[test]
    fn configuration_deserializes_partial_input() {
        let cfg: Configuration =
            serde_json::from_str(r#"{ "wood": "pine", "length_feet": 6 }"#).unwrap();
        assert_eq!(cfg.wood(), Wood::Pine);
        assert_eq!(cfg.length_feet(), 6);
        assert_eq!(cfg.roof(), RoofStyle::Gable);
    }

    #[test]
    fn configuration_rejects_bad_levels() {
        let result = serde_json::from_str::<Configuration>(r#"{ "levels": 3 }"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<Configuration>(r#"{ "wood": "oak" }"#);
        assert!(result.is_err());
    }

    // ========================================================================
    // Cross-module Tests
    // ========================================================================

    #[test]
    fn price_and_scene_share_a_configuration() {
        let cfg = Configuration::builder().length_feet(30).build();
        let capped = cfg.to_builder().length_feet(16).build();
        // price uses the raw length, the drawing the clamped one
        assert_eq!(
            estimate_price(&cfg).dollars() - estimate_price(&capped).dollars(),
            280 * 14
        );
        assert_eq!(generate_schematic(&cfg), generate_schematic(&capped));
    }
}
