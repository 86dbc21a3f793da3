use serde::{Deserialize, Serialize};

use crate::quoting::domain::Zone;

/// Rate card for the pricing model. All amounts are SEK; surcharges and the
/// ROT cap are fractions.
///
/// Every field has a default matching the published price list, and the
/// struct deserializes with `#[serde(default)]` so an operator override file
/// only needs to name the rates it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Labor rate per painted m² before difficulty multipliers.
    pub labor_rate_per_m2: f64,
    /// Material cost per m² for a single coat of standard-grade paint.
    pub material_rate_per_coat_m2: f64,
    /// Ceiling height that carries no surcharge.
    pub height_reference_m: f64,
    /// Height interval that adds one surcharge step.
    pub height_step_m: f64,
    /// Labor surcharge fraction added per height step above the reference.
    pub height_step_surcharge: f64,
    pub travel_fee_zone_a: f64,
    pub travel_fee_zone_b: f64,
    pub travel_fee_zone_c: f64,
    /// Upper bound for the ROT deduction fraction.
    pub rot_percent_cap: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            labor_rate_per_m2: 280.0,
            material_rate_per_coat_m2: 35.0,
            height_reference_m: 2.4,
            height_step_m: 0.3,
            height_step_surcharge: 0.05,
            travel_fee_zone_a: 500.0,
            travel_fee_zone_b: 900.0,
            travel_fee_zone_c: 1300.0,
            rot_percent_cap: 0.30,
        }
    }
}

impl PricingConfig {
    /// Flat call-out fee for the given travel zone.
    pub fn travel_fee(&self, zone: Zone) -> f64 {
        match zone {
            Zone::A => self.travel_fee_zone_a,
            Zone::B => self.travel_fee_zone_b,
            Zone::C => self.travel_fee_zone_c,
        }
    }
}
