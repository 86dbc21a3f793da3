use serde::{Deserialize, Serialize};

use super::config::PricingConfig;
use crate::quoting::domain::{
    ColorChange, Condition, Furnishing, Quality, QuoteRequest, Substrate, WallpaperAction,
};

/// Pricing dimensions that contribute a multiplier to the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Substrate,
    Condition,
    Furnishing,
    CeilingHeight,
    ColorChange,
    Quality,
}

impl FactorKind {
    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::Substrate => "substrate",
            FactorKind::Condition => "condition",
            FactorKind::Furnishing => "furnishing",
            FactorKind::CeilingHeight => "ceiling_height",
            FactorKind::ColorChange => "color_change",
            FactorKind::Quality => "quality",
        }
    }

    /// Quality only prices the paint itself, never the hours.
    pub const fn affects_labor(self) -> bool {
        !matches!(self, FactorKind::Quality)
    }

    /// Prep effort (condition, furnishing, height) does not change how much
    /// paint is consumed.
    pub const fn affects_material(self) -> bool {
        matches!(
            self,
            FactorKind::Substrate | FactorKind::ColorChange | FactorKind::Quality
        )
    }
}

/// Discrete multiplier applied to the quote, kept so the breakdown can show
/// where a price came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorComponent {
    pub kind: FactorKind,
    pub value: f64,
    pub notes: String,
}

/// Default coat count and coverage multiplier for a color change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColorChangeProfile {
    pub(crate) auto_coats: u8,
    pub(crate) factor: f64,
}

pub(crate) fn color_change_profile(change: ColorChange) -> ColorChangeProfile {
    match change {
        ColorChange::LightToLight => ColorChangeProfile {
            auto_coats: 2,
            factor: 1.0,
        },
        ColorChange::DarkToLight => ColorChangeProfile {
            auto_coats: 3,
            factor: 1.15,
        },
        ColorChange::LightToDark => ColorChangeProfile {
            auto_coats: 2,
            factor: 1.05,
        },
        ColorChange::Refresh => ColorChangeProfile {
            auto_coats: 1,
            factor: 0.9,
        },
    }
}

/// Base substrate multiplier combined with the wallpaper-removal surcharge.
/// The action surcharge exists only for wallpaper; the field is ignored for
/// every other substrate.
pub(crate) fn substrate_factor(substrate: Substrate, action: WallpaperAction) -> f64 {
    let base = match substrate {
        Substrate::PaintedWall => 1.0,
        Substrate::Wallpaper => 1.05,
        Substrate::ConcreteOrBrick | Substrate::WoodPanel => 1.1,
    };

    if substrate == Substrate::Wallpaper {
        let action_factor = match action {
            WallpaperAction::PaintOver => 1.0,
            WallpaperAction::RemoveWallpaper => 1.35,
        };
        base * action_factor
    } else {
        base
    }
}

pub(crate) fn condition_factor(condition: Condition) -> f64 {
    match condition {
        Condition::Good => 0.9,
        Condition::Normal => 1.0,
        Condition::Bad => 1.35,
    }
}

pub(crate) fn furnishing_factor(furnishing: Furnishing) -> f64 {
    match furnishing {
        Furnishing::Empty => 0.95,
        Furnishing::HalfFurnished => 1.0,
        Furnishing::Full => 1.15,
    }
}

/// `1 + max(0, (height − reference) / step) × surcharge`. Rooms at or below
/// the reference height never earn a discount.
pub(crate) fn height_factor(config: &PricingConfig, ceiling_height_m: f64) -> f64 {
    let steps = ((ceiling_height_m - config.height_reference_m) / config.height_step_m).max(0.0);
    1.0 + steps * config.height_step_surcharge
}

pub(crate) fn quality_factor(quality: Quality) -> f64 {
    match quality {
        Quality::Budget => 0.85,
        Quality::Standard => 1.0,
        Quality::Premium => 1.25,
    }
}

/// Full multiplier trail for one request, one component per pricing
/// dimension. The engine derives its combined labor and material factors
/// from this list so the audit trail can never drift from the math.
pub(crate) fn factor_components(
    request: &QuoteRequest,
    config: &PricingConfig,
) -> Vec<FactorComponent> {
    let substrate_note = match (request.substrate, request.wallpaper_action) {
        (Substrate::PaintedWall, _) => "previously painted surface".to_string(),
        (Substrate::Wallpaper, WallpaperAction::PaintOver) => {
            "painting over existing wallpaper".to_string()
        }
        (Substrate::Wallpaper, WallpaperAction::RemoveWallpaper) => {
            "wallpaper stripped before painting".to_string()
        }
        (Substrate::ConcreteOrBrick, _) => "bare concrete or brick".to_string(),
        (Substrate::WoodPanel, _) => "wood panelling".to_string(),
    };

    let condition_note = match request.condition {
        Condition::Good => "surface in good shape, light prep".to_string(),
        Condition::Normal => "normal prep work".to_string(),
        Condition::Bad => "heavy prep work required".to_string(),
    };

    let furnishing_note = match request.furnishing {
        Furnishing::Empty => "empty room".to_string(),
        Furnishing::HalfFurnished => "half furnished".to_string(),
        Furnishing::Full => "fully furnished, extra masking and moving".to_string(),
    };

    let height_note = if request.ceiling_height_m > config.height_reference_m {
        format!(
            "{:.2} m ceiling, {:.2} m above the {:.2} m reference",
            request.ceiling_height_m,
            request.ceiling_height_m - config.height_reference_m,
            config.height_reference_m
        )
    } else {
        format!(
            "{:.2} m ceiling at or below the {:.2} m reference",
            request.ceiling_height_m, config.height_reference_m
        )
    };

    let color_note = match request.color_change {
        ColorChange::LightToLight => "light shade over light shade".to_string(),
        ColorChange::DarkToLight => "covering a dark surface with a light shade".to_string(),
        ColorChange::LightToDark => "going darker".to_string(),
        ColorChange::Refresh => "refresh in the existing shade".to_string(),
    };

    let quality_note = match request.quality {
        Quality::Budget => "budget grade paint".to_string(),
        Quality::Standard => "standard grade paint".to_string(),
        Quality::Premium => "premium grade paint".to_string(),
    };

    vec![
        FactorComponent {
            kind: FactorKind::Substrate,
            value: substrate_factor(request.substrate, request.wallpaper_action),
            notes: substrate_note,
        },
        FactorComponent {
            kind: FactorKind::Condition,
            value: condition_factor(request.condition),
            notes: condition_note,
        },
        FactorComponent {
            kind: FactorKind::Furnishing,
            value: furnishing_factor(request.furnishing),
            notes: furnishing_note,
        },
        FactorComponent {
            kind: FactorKind::CeilingHeight,
            value: height_factor(config, request.ceiling_height_m),
            notes: height_note,
        },
        FactorComponent {
            kind: FactorKind::ColorChange,
            value: color_change_profile(request.color_change).factor,
            notes: color_note,
        },
        FactorComponent {
            kind: FactorKind::Quality,
            value: quality_factor(request.quality),
            notes: quality_note,
        },
    ]
}
