use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use paintquote::quoting::{
    CoatSelection, ColorChange, Condition, Furnishing, MaterialProvider, Quality, Scope,
    Substrate, UnknownVariant, WallpaperAction, Zone,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn parse_variant<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.trim()
        .to_ascii_lowercase()
        .parse()
        .map_err(|err: UnknownVariant| err.to_string())
}

pub(crate) fn parse_scope(raw: &str) -> Result<Scope, String> {
    parse_variant(raw)
}

pub(crate) fn parse_zone(raw: &str) -> Result<Zone, String> {
    parse_variant(raw)
}

pub(crate) fn parse_substrate(raw: &str) -> Result<Substrate, String> {
    parse_variant(raw)
}

pub(crate) fn parse_wallpaper_action(raw: &str) -> Result<WallpaperAction, String> {
    parse_variant(raw)
}

pub(crate) fn parse_condition(raw: &str) -> Result<Condition, String> {
    parse_variant(raw)
}

pub(crate) fn parse_furnishing(raw: &str) -> Result<Furnishing, String> {
    parse_variant(raw)
}

pub(crate) fn parse_color_change(raw: &str) -> Result<ColorChange, String> {
    parse_variant(raw)
}

pub(crate) fn parse_coats(raw: &str) -> Result<CoatSelection, String> {
    parse_variant(raw)
}

pub(crate) fn parse_quality(raw: &str) -> Result<Quality, String> {
    parse_variant(raw)
}

pub(crate) fn parse_material_provider(raw: &str) -> Result<MaterialProvider, String> {
    parse_variant(raw)
}

/// ROT fraction flag: must be a number, clamping to the cap happens in the
/// engine.
pub(crate) fn parse_rot_percent(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a usable fraction"))
    }
}
