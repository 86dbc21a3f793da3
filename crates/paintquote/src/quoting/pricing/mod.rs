mod config;
mod factors;

pub use config::PricingConfig;
pub use factors::{FactorComponent, FactorKind};

use serde::{Deserialize, Serialize};

use crate::quoting::domain::{MaterialProvider, QuoteRequest};
use factors::{color_change_profile, factor_components};

/// Stateless engine applying the rate card to quote requests.
///
/// `quote` is a total function over the request type: every combination of
/// the closed enums produces a breakdown, and out-of-range `rot_percent`
/// values are clamped rather than rejected.
pub struct QuoteEngine {
    config: PricingConfig,
}

impl QuoteEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn quote(&self, request: &QuoteRequest) -> QuoteBreakdown {
        let config = &self.config;

        let total_area_m2 = request.walls_area_m2
            + if request.scope.includes_ceiling() {
                request.ceiling_area_m2
            } else {
                0.0
            };

        let color = color_change_profile(request.color_change);
        let coats = request.coats.fixed_count().unwrap_or(color.auto_coats);

        let factors = factor_components(request, config);
        let labor_factor: f64 = factors
            .iter()
            .filter(|component| component.kind.affects_labor())
            .map(|component| component.value)
            .product();
        let material_factor: f64 = factors
            .iter()
            .filter(|component| component.kind.affects_material())
            .map(|component| component.value)
            .product();

        let labor_before_rot = config.labor_rate_per_m2 * labor_factor * total_area_m2;

        let material_cost = match request.material_provided_by {
            MaterialProvider::Customer => 0.0,
            MaterialProvider::Painter => {
                config.material_rate_per_coat_m2
                    * f64::from(coats)
                    * total_area_m2
                    * material_factor
            }
        };

        let travel_cost = config.travel_fee(request.zone);

        let rot_cap = config.rot_percent_cap.max(0.0);
        let rot_percent = request.rot_percent.clamp(0.0, rot_cap);
        let rot_deduction = if request.rot_enabled {
            labor_before_rot * rot_percent
        } else {
            0.0
        };
        let labor_after_rot = labor_before_rot - rot_deduction;

        let total_before_rot = labor_before_rot + material_cost + travel_cost;
        let total_after_rot = labor_after_rot + material_cost + travel_cost;

        let price_per_m2_before_rot = if total_area_m2 > 0.0 {
            total_before_rot / total_area_m2
        } else {
            0.0
        };
        let price_per_m2_after_rot = if total_area_m2 > 0.0 {
            total_after_rot / total_area_m2
        } else {
            0.0
        };

        QuoteBreakdown {
            total_area_m2,
            coats,
            labor_factor,
            material_factor,
            labor_before_rot: round_currency(labor_before_rot),
            rot_deduction: round_currency(rot_deduction),
            labor_after_rot: round_currency(labor_after_rot),
            material_cost: round_currency(material_cost),
            travel_cost: round_currency(travel_cost),
            total_before_rot: round_currency(total_before_rot),
            total_after_rot: round_currency(total_after_rot),
            price_per_m2_before_rot: round_unit_price(price_per_m2_before_rot),
            price_per_m2_after_rot: round_unit_price(price_per_m2_after_rot),
            factors,
        }
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

/// Itemized result of pricing one request. Currency amounts are whole SEK,
/// unit prices carry one decimal; intermediate math runs at full precision
/// and rounding happens only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub total_area_m2: f64,
    pub coats: u8,
    pub labor_factor: f64,
    pub material_factor: f64,
    pub labor_before_rot: i64,
    pub rot_deduction: i64,
    pub labor_after_rot: i64,
    pub material_cost: i64,
    pub travel_cost: i64,
    pub total_before_rot: i64,
    pub total_after_rot: i64,
    pub price_per_m2_before_rot: f64,
    pub price_per_m2_after_rot: f64,
    pub factors: Vec<FactorComponent>,
}

fn round_currency(amount: f64) -> i64 {
    amount.round() as i64
}

fn round_unit_price(amount: f64) -> f64 {
    (amount * 10.0).round() / 10.0
}
