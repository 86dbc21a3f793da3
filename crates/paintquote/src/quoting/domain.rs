use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ceiling height assumed when the customer leaves the field blank.
pub const DEFAULT_CEILING_HEIGHT_M: f64 = 2.4;

/// Raised when a categorical field receives a token outside its closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} '{value}'")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Which surfaces are being painted and priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Walls,
    WallsAndCeiling,
}

impl Scope {
    pub const fn includes_ceiling(self) -> bool {
        matches!(self, Scope::WallsAndCeiling)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Scope::Walls => "walls",
            Scope::WallsAndCeiling => "walls_and_ceiling",
        }
    }
}

impl FromStr for Scope {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "walls" => Ok(Scope::Walls),
            "walls_and_ceiling" | "walls+ceiling" => Ok(Scope::WallsAndCeiling),
            other => Err(UnknownVariant::new("scope", other)),
        }
    }
}

/// Travel-distance tier; each tier maps to a flat call-out fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    A,
    B,
    C,
}

impl Zone {
    pub const fn label(self) -> &'static str {
        match self {
            Zone::A => "zone_a",
            Zone::B => "zone_b",
            Zone::C => "zone_c",
        }
    }
}

impl FromStr for Zone {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "a" | "zone_a" => Ok(Zone::A),
            "b" | "zone_b" => Ok(Zone::B),
            "c" | "zone_c" => Ok(Zone::C),
            other => Err(UnknownVariant::new("zone", other)),
        }
    }
}

/// Wall material underneath the new paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Substrate {
    PaintedWall,
    Wallpaper,
    ConcreteOrBrick,
    WoodPanel,
}

impl Substrate {
    pub const fn label(self) -> &'static str {
        match self {
            Substrate::PaintedWall => "painted_wall",
            Substrate::Wallpaper => "wallpaper",
            Substrate::ConcreteOrBrick => "concrete_or_brick",
            Substrate::WoodPanel => "wood_panel",
        }
    }
}

impl FromStr for Substrate {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "painted_wall" => Ok(Substrate::PaintedWall),
            "wallpaper" => Ok(Substrate::Wallpaper),
            "concrete_or_brick" => Ok(Substrate::ConcreteOrBrick),
            "wood_panel" => Ok(Substrate::WoodPanel),
            other => Err(UnknownVariant::new("substrate", other)),
        }
    }
}

/// What happens to existing wallpaper. Only consulted when the substrate
/// actually is wallpaper; for every other substrate the field is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallpaperAction {
    #[default]
    PaintOver,
    RemoveWallpaper,
}

impl WallpaperAction {
    pub const fn label(self) -> &'static str {
        match self {
            WallpaperAction::PaintOver => "paint_over",
            WallpaperAction::RemoveWallpaper => "remove_wallpaper",
        }
    }
}

impl FromStr for WallpaperAction {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "paint_over" => Ok(WallpaperAction::PaintOver),
            "remove_wallpaper" | "remove" => Ok(WallpaperAction::RemoveWallpaper),
            other => Err(UnknownVariant::new("wallpaper action", other)),
        }
    }
}

/// Condition of the surfaces before prep work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Normal,
    Bad,
}

impl Condition {
    pub const fn label(self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Normal => "normal",
            Condition::Bad => "bad",
        }
    }
}

impl FromStr for Condition {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "good" => Ok(Condition::Good),
            "normal" => Ok(Condition::Normal),
            "bad" => Ok(Condition::Bad),
            other => Err(UnknownVariant::new("condition", other)),
        }
    }
}

/// How much furniture the crew must work around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Furnishing {
    Empty,
    HalfFurnished,
    Full,
}

impl Furnishing {
    pub const fn label(self) -> &'static str {
        match self {
            Furnishing::Empty => "empty",
            Furnishing::HalfFurnished => "half_furnished",
            Furnishing::Full => "full",
        }
    }
}

impl FromStr for Furnishing {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "empty" => Ok(Furnishing::Empty),
            "half_furnished" => Ok(Furnishing::HalfFurnished),
            "full" => Ok(Furnishing::Full),
            other => Err(UnknownVariant::new("furnishing", other)),
        }
    }
}

/// Direction of the color change. Drives both the default coat count and a
/// coverage multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorChange {
    LightToLight,
    DarkToLight,
    LightToDark,
    Refresh,
}

impl ColorChange {
    pub const fn label(self) -> &'static str {
        match self {
            ColorChange::LightToLight => "light_to_light",
            ColorChange::DarkToLight => "dark_to_light",
            ColorChange::LightToDark => "light_to_dark",
            ColorChange::Refresh => "refresh",
        }
    }
}

impl FromStr for ColorChange {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light_to_light" => Ok(ColorChange::LightToLight),
            "dark_to_light" => Ok(ColorChange::DarkToLight),
            "light_to_dark" => Ok(ColorChange::LightToDark),
            "refresh" => Ok(ColorChange::Refresh),
            other => Err(UnknownVariant::new("color change", other)),
        }
    }
}

/// Coat count selection. `Auto` defers to the color-change table, so a
/// resolved count is always one, two, or three by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoatSelection {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl CoatSelection {
    /// Explicit coat count, or `None` when the color change decides.
    pub const fn fixed_count(self) -> Option<u8> {
        match self {
            CoatSelection::Auto => None,
            CoatSelection::One => Some(1),
            CoatSelection::Two => Some(2),
            CoatSelection::Three => Some(3),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CoatSelection::Auto => "auto",
            CoatSelection::One => "1",
            CoatSelection::Two => "2",
            CoatSelection::Three => "3",
        }
    }
}

impl FromStr for CoatSelection {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "auto" => Ok(CoatSelection::Auto),
            "1" => Ok(CoatSelection::One),
            "2" => Ok(CoatSelection::Two),
            "3" => Ok(CoatSelection::Three),
            other => Err(UnknownVariant::new("coats", other)),
        }
    }
}

/// Material grade chosen by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Budget,
    Standard,
    Premium,
}

impl Quality {
    pub const fn label(self) -> &'static str {
        match self {
            Quality::Budget => "budget",
            Quality::Standard => "standard",
            Quality::Premium => "premium",
        }
    }
}

impl FromStr for Quality {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "budget" => Ok(Quality::Budget),
            "standard" => Ok(Quality::Standard),
            "premium" => Ok(Quality::Premium),
            other => Err(UnknownVariant::new("quality", other)),
        }
    }
}

/// Who buys the paint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialProvider {
    #[default]
    Painter,
    Customer,
}

impl MaterialProvider {
    pub const fn label(self) -> &'static str {
        match self {
            MaterialProvider::Painter => "painter",
            MaterialProvider::Customer => "customer",
        }
    }
}

impl FromStr for MaterialProvider {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "painter" => Ok(MaterialProvider::Painter),
            "customer" => Ok(MaterialProvider::Customer),
            other => Err(UnknownVariant::new("material provider", other)),
        }
    }
}

/// One priced job as gathered by the measurement and project forms.
///
/// The serde defaults match the form boundary: no wallpaper action means
/// painting over, no coat choice means auto, and a missing ceiling height
/// falls back to the 2.4 m reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub walls_area_m2: f64,
    #[serde(default)]
    pub ceiling_area_m2: f64,
    #[serde(default = "default_ceiling_height")]
    pub ceiling_height_m: f64,
    pub scope: Scope,
    pub zone: Zone,
    pub substrate: Substrate,
    #[serde(default)]
    pub wallpaper_action: WallpaperAction,
    pub condition: Condition,
    pub furnishing: Furnishing,
    pub color_change: ColorChange,
    #[serde(default)]
    pub coats: CoatSelection,
    pub quality: Quality,
    #[serde(default)]
    pub material_provided_by: MaterialProvider,
    #[serde(default)]
    pub rot_enabled: bool,
    #[serde(default)]
    pub rot_percent: f64,
}

fn default_ceiling_height() -> f64 {
    DEFAULT_CEILING_HEIGHT_M
}
