//! The `Configuration` value object and its builder.
//!
//! A `Configuration` is one snapshot of everything the buyer can select. It is
//! recreated on every change and never mutated in place; both the pricing
//! engine and the schematic generator are pure functions of it.
//!
//! # Length
//!
//! The raw length is stored as given. The schematic generator clamps it into
//! [`MIN_LENGTH_FEET`, `MAX_LENGTH_FEET`]; the pricing engine deliberately
//! uses the raw value.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{HardwareFinish, Levels, RoofMaterial, RoofStyle, Wood};

/// Shortest coop (coop + run) the schematic will draw.
pub const MIN_LENGTH_FEET: u32 = 4;
/// Longest coop (coop + run) the schematic will draw.
pub const MAX_LENGTH_FEET: u32 = 16;
/// Length of the initial selection.
pub const DEFAULT_LENGTH_FEET: u32 = 11;

/// A full set of coop options.
///
/// `Default` is the configurator's initial selection: cedar, gable roof in
/// sheet metal, two levels, no timed door, 11 ft, black hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    wood: Wood,
    roof: RoofStyle,
    roof_material: RoofMaterial,
    levels: Levels,
    timed_door: bool,
    length_feet: u32,
    hardware_finish: HardwareFinish,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            wood: Wood::default(),
            roof: RoofStyle::default(),
            roof_material: RoofMaterial::default(),
            levels: Levels::default(),
            timed_door: false,
            length_feet: DEFAULT_LENGTH_FEET,
            hardware_finish: HardwareFinish::default(),
        }
    }
}

impl Configuration {
    /// Start building from the default selection.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Start building from this configuration.
    pub fn to_builder(self) -> ConfigurationBuilder {
        ConfigurationBuilder { inner: self }
    }

    pub const fn wood(&self) -> Wood {
        self.wood
    }
    pub const fn roof(&self) -> RoofStyle {
        self.roof
    }
    pub const fn roof_material(&self) -> RoofMaterial {
        self.roof_material
    }
    pub const fn levels(&self) -> Levels {
        self.levels
    }
    pub const fn timed_door(&self) -> bool {
        self.timed_door
    }
    pub const fn hardware_finish(&self) -> HardwareFinish {
        self.hardware_finish
    }

    /// Raw length as selected, not clamped.
    pub const fn length_feet(&self) -> u32 {
        self.length_feet
    }

    /// Length clamped into the drawable range.
    pub fn clamped_length_feet(&self) -> u32 {
        self.length_feet.clamp(MIN_LENGTH_FEET, MAX_LENGTH_FEET)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} roof), {} ft, {} level(s), {} hardware",
            self.wood, self.roof, self.roof_material, self.length_feet, self.levels,
            self.hardware_finish
        )?;
        if self.timed_door {
            f.write_str(", timed door")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Configuration`].
///
/// Every field is a closed type, so building cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationBuilder {
    inner: Configuration,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wood(mut self, wood: Wood) -> Self {
        self.inner.wood = wood;
        self
    }

    pub fn roof(mut self, roof: RoofStyle) -> Self {
        self.inner.roof = roof;
        self
    }

    pub fn roof_material(mut self, material: RoofMaterial) -> Self {
        self.inner.roof_material = material;
        self
    }

    pub fn levels(mut self, levels: Levels) -> Self {
        self.inner.levels = levels;
        self
    }

    pub fn timed_door(mut self, timed_door: bool) -> Self {
        self.inner.timed_door = timed_door;
        self
    }

    /// Set the raw length. Out-of-range values are kept as-is.
    pub fn length_feet(mut self, feet: u32) -> Self {
        self.inner.length_feet = feet;
        self
    }

    pub fn hardware_finish(mut self, finish: HardwareFinish) -> Self {
        self.inner.hardware_finish = finish;
        self
    }

    pub fn build(self) -> Configuration {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_selection() {
        let cfg = Configuration::default();
        assert_eq!(cfg.wood(), Wood::Cedar);
        assert_eq!(cfg.roof(), RoofStyle::Gable);
        assert_eq!(cfg.roof_material(), RoofMaterial::Metal);
        assert_eq!(cfg.levels(), Levels::Two);
        assert!(!cfg.timed_door());
        assert_eq!(cfg.length_feet(), 11);
        assert_eq!(cfg.hardware_finish(), HardwareFinish::Black);
    }

    #[test]
    fn raw_length_is_preserved() {
        let cfg = Configuration::builder().length_feet(30).build();
        assert_eq!(cfg.length_feet(), 30);
        assert_eq!(cfg.clamped_length_feet(), 16);

        let cfg = Configuration::builder().length_feet(2).build();
        assert_eq!(cfg.length_feet(), 2);
        assert_eq!(cfg.clamped_length_feet(), 4);
    }

    #[test]
    fn to_builder_keeps_other_fields() {
        let base = Configuration::builder().wood(Wood::Pine).timed_door(true).build();
        let changed = base.to_builder().length_feet(6).build();
        assert_eq!(changed.wood(), Wood::Pine);
        assert!(changed.timed_door());
        assert_eq!(changed.length_feet(), 6);
    }

    #[test]
    fn display_mentions_timed_door_only_when_selected() {
        let plain = Configuration::builder().timed_door(false).build();
        let timed = Configuration::builder().timed_door(true).build();
        assert!(!plain.to_string().contains("timed door"));
        assert!(timed.to_string().contains("timed door"));
    }
}
