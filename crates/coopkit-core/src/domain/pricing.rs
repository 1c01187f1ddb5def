//! Pricing engine: a pure, additive price model.
//!
//! The estimate is a display-only "visual estimate", not a binding quote.
//! It uses the raw (unclamped) length of the configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Configuration,
    error::DomainError,
    value_objects::{HardwareFinish, RoofMaterial, RoofStyle, Wood},
};

/// A rounded price in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(dollars: u64) -> Self {
        Self(dollars)
    }

    pub const fn dollars(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    /// US display form with thousands separators, e.g. `$12,480`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${grouped}")
    }
}

/// One itemised term of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLine {
    pub label: &'static str,
    pub amount: f64,
}

/// Rates and surcharges of the price model.
///
/// `Default` is the published table. Rates are `f64` so that a fractional
/// rate still rounds to a whole-dollar estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub base_fee: f64,
    pub cedar_per_foot: f64,
    pub pine_per_foot: f64,
    pub gable_roof: f64,
    pub lean_to_roof: f64,
    pub black_hardware: f64,
    pub galvanized_hardware: f64,
    pub second_level: f64,
    pub metal_roof: f64,
    pub timed_door: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            base_fee: 3200.0,
            cedar_per_foot: 280.0,
            pine_per_foot: 220.0,
            gable_roof: 350.0,
            lean_to_roof: 180.0,
            black_hardware: 120.0,
            galvanized_hardware: 0.0,
            second_level: 350.0,
            metal_roof: 220.0,
            timed_door: 180.0,
        }
    }
}

impl PriceTable {
    /// Reject negative or non-finite rates.
    pub fn validate(&self) -> Result<(), DomainError> {
        let rates = [
            ("base_fee", self.base_fee),
            ("cedar_per_foot", self.cedar_per_foot),
            ("pine_per_foot", self.pine_per_foot),
            ("gable_roof", self.gable_roof),
            ("lean_to_roof", self.lean_to_roof),
            ("black_hardware", self.black_hardware),
            ("galvanized_hardware", self.galvanized_hardware),
            ("second_level", self.second_level),
            ("metal_roof", self.metal_roof),
            ("timed_door", self.timed_door),
        ];
        match rates.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            Some((name, value)) => Err(DomainError::InvalidPriceTable {
                reason: format!("{name} = {value}"),
            }),
            None => Ok(()),
        }
    }

    pub fn per_foot(&self, wood: Wood) -> f64 {
        match wood {
            Wood::Cedar => self.cedar_per_foot,
            Wood::Pine => self.pine_per_foot,
        }
    }

    /// Itemised terms; their sum, rounded, is [`PriceTable::estimate`].
    pub fn breakdown(&self, config: &Configuration) -> Vec<PriceLine> {
        let line = |label, amount| PriceLine { label, amount };
        vec![
            line("Base build", self.base_fee),
            line(
                "Length",
                self.per_foot(config.wood()) * f64::from(config.length_feet()),
            ),
            line(
                "Roof style",
                match config.roof() {
                    RoofStyle::Gable => self.gable_roof,
                    RoofStyle::LeanTo => self.lean_to_roof,
                },
            ),
            line(
                "Hardware",
                match config.hardware_finish() {
                    HardwareFinish::Black => self.black_hardware,
                    HardwareFinish::Galvanized => self.galvanized_hardware,
                },
            ),
            line(
                "Loft + ladder",
                if config.levels().has_loft() {
                    self.second_level
                } else {
                    0.0
                },
            ),
            line(
                "Roof material",
                match config.roof_material() {
                    RoofMaterial::Metal => self.metal_roof,
                    RoofMaterial::Wood => 0.0,
                },
            ),
            line(
                "Timed door",
                if config.timed_door() {
                    self.timed_door
                } else {
                    0.0
                },
            ),
        ]
    }

    /// Total estimate, rounded half-up to whole dollars.
    pub fn estimate(&self, config: &Configuration) -> Price {
        let total: f64 = self.breakdown(config).iter().map(|l| l.amount).sum();
        // Non-negative for any validated table; `as` saturates otherwise.
        Price((total + 0.5).floor().max(0.0) as u64)
    }
}

/// Estimate with the published price table.
pub fn estimate_price(config: &Configuration) -> Price {
    PriceTable::default().estimate(config)
}
