use super::common::*;
use crate::quoting::domain::{
    ColorChange, Condition, Furnishing, Quality, Substrate, WallpaperAction,
};
use crate::quoting::pricing::{FactorKind, QuoteBreakdown};

fn factor_value(breakdown: &QuoteBreakdown, kind: FactorKind) -> f64 {
    breakdown
        .factors
        .iter()
        .find(|component| component.kind == kind)
        .map(|component| component.value)
        .expect("component present for every kind")
}

#[test]
fn substrate_table_matches_the_price_list() {
    let cases = [
        (Substrate::PaintedWall, 1.0),
        (Substrate::Wallpaper, 1.05),
        (Substrate::ConcreteOrBrick, 1.1),
        (Substrate::WoodPanel, 1.1),
    ];

    for (substrate, expected) in cases {
        let mut request = baseline_request();
        request.substrate = substrate;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::Substrate) - expected).abs() < 1e-12,
            "substrate factor for {substrate:?}"
        );
    }
}

#[test]
fn wallpaper_removal_multiplies_only_wallpaper() {
    let mut wallpaper = baseline_request();
    wallpaper.substrate = Substrate::Wallpaper;
    wallpaper.wallpaper_action = WallpaperAction::RemoveWallpaper;
    let breakdown = engine().quote(&wallpaper);
    assert!((factor_value(&breakdown, FactorKind::Substrate) - 1.05 * 1.35).abs() < 1e-12);

    // The action field is present but ignored for other substrates.
    let mut concrete = baseline_request();
    concrete.substrate = Substrate::ConcreteOrBrick;
    concrete.wallpaper_action = WallpaperAction::RemoveWallpaper;
    let breakdown = engine().quote(&concrete);
    assert!((factor_value(&breakdown, FactorKind::Substrate) - 1.1).abs() < 1e-12);
}

#[test]
fn condition_table_matches_the_price_list() {
    let cases = [
        (Condition::Good, 0.9),
        (Condition::Normal, 1.0),
        (Condition::Bad, 1.35),
    ];

    for (condition, expected) in cases {
        let mut request = baseline_request();
        request.condition = condition;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::Condition) - expected).abs() < 1e-12,
            "condition factor for {condition:?}"
        );
    }
}

#[test]
fn furnishing_table_matches_the_price_list() {
    let cases = [
        (Furnishing::Empty, 0.95),
        (Furnishing::HalfFurnished, 1.0),
        (Furnishing::Full, 1.15),
    ];

    for (furnishing, expected) in cases {
        let mut request = baseline_request();
        request.furnishing = furnishing;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::Furnishing) - expected).abs() < 1e-12,
            "furnishing factor for {furnishing:?}"
        );
    }
}

#[test]
fn height_factor_is_flat_up_to_the_reference() {
    for height in [2.1, 2.4] {
        let mut request = baseline_request();
        request.ceiling_height_m = height;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::CeilingHeight) - 1.0).abs() < 1e-12,
            "height factor at {height} m"
        );
    }
}

#[test]
fn height_factor_grows_per_step_above_the_reference() {
    let cases = [(2.7, 1.05), (3.0, 1.1), (3.3, 1.15)];

    for (height, expected) in cases {
        let mut request = baseline_request();
        request.ceiling_height_m = height;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::CeilingHeight) - expected).abs() < 1e-9,
            "height factor at {height} m"
        );
    }
}

#[test]
fn color_change_table_matches_the_price_list() {
    let cases = [
        (ColorChange::LightToLight, 1.0),
        (ColorChange::DarkToLight, 1.15),
        (ColorChange::LightToDark, 1.05),
        (ColorChange::Refresh, 0.9),
    ];

    for (color_change, expected) in cases {
        let mut request = baseline_request();
        request.color_change = color_change;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::ColorChange) - expected).abs() < 1e-12,
            "color factor for {color_change:?}"
        );
    }
}

#[test]
fn quality_table_matches_the_price_list() {
    let cases = [
        (Quality::Budget, 0.85),
        (Quality::Standard, 1.0),
        (Quality::Premium, 1.25),
    ];

    for (quality, expected) in cases {
        let mut request = baseline_request();
        request.quality = quality;
        let breakdown = engine().quote(&request);
        assert!(
            (factor_value(&breakdown, FactorKind::Quality) - expected).abs() < 1e-12,
            "quality factor for {quality:?}"
        );
    }
}

#[test]
fn quality_never_touches_labor() {
    let mut premium = baseline_request();
    premium.quality = Quality::Premium;
    let breakdown = engine().quote(&premium);

    assert_eq!(breakdown.labor_before_rot, 5600);
    // 35 × 2 × 20 × 1.25
    assert_eq!(breakdown.material_cost, 1750);
}

#[test]
fn prep_factors_never_touch_material() {
    let mut request = baseline_request();
    request.condition = Condition::Bad;
    request.furnishing = Furnishing::Full;
    request.ceiling_height_m = 3.0;

    let breakdown = engine().quote(&request);

    assert_eq!(breakdown.material_cost, 1400);
    assert!(breakdown.labor_before_rot > 5600);
}
