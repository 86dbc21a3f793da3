//! The quoting domain: request model, rate card, pricing engine, room
//! measurement, batch intake, and display views.

pub mod domain;
pub mod intake;
pub mod measurement;
pub mod pricing;
pub mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    CoatSelection, ColorChange, Condition, Furnishing, MaterialProvider, Quality, QuoteRequest,
    Scope, Substrate, UnknownVariant, WallpaperAction, Zone, DEFAULT_CEILING_HEIGHT_M,
};
pub use intake::{ImportedQuoteRequest, QuoteImportError, QuoteRequestImporter};
pub use measurement::{MeasurementPlan, Room, RoomSection};
pub use pricing::{FactorComponent, FactorKind, PricingConfig, QuoteBreakdown, QuoteEngine};
pub use report::{QuoteLine, QuoteSummary};
