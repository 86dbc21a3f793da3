use crate::quoting::domain::{
    CoatSelection, ColorChange, Condition, Furnishing, MaterialProvider, Quality, QuoteRequest,
    Scope, Substrate, WallpaperAction, Zone,
};
use crate::quoting::pricing::{PricingConfig, QuoteEngine};

pub(super) fn engine() -> QuoteEngine {
    QuoteEngine::new(PricingConfig::default())
}

/// 20 m² of plain walls in zone A with every factor at its neutral value:
/// labor 5 600, materials 1 400, travel 500.
pub(super) fn baseline_request() -> QuoteRequest {
    QuoteRequest {
        walls_area_m2: 20.0,
        ceiling_area_m2: 0.0,
        ceiling_height_m: 2.4,
        scope: Scope::Walls,
        zone: Zone::A,
        substrate: Substrate::PaintedWall,
        wallpaper_action: WallpaperAction::PaintOver,
        condition: Condition::Normal,
        furnishing: Furnishing::HalfFurnished,
        color_change: ColorChange::LightToLight,
        coats: CoatSelection::Auto,
        quality: Quality::Standard,
        material_provided_by: MaterialProvider::Painter,
        rot_enabled: false,
        rot_percent: 0.0,
    }
}
