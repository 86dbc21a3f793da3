use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::normalizer::normalize_cell;
use super::{ImportedQuoteRequest, QuoteImportError};
use crate::quoting::domain::{
    CoatSelection, MaterialProvider, QuoteRequest, Scope, UnknownVariant, WallpaperAction,
    DEFAULT_CEILING_HEIGHT_M,
};
use crate::quoting::measurement::parse_dimension;
use crate::quoting::pricing::PricingConfig;

pub(crate) fn parse_requests<R: Read>(
    reader: R,
) -> Result<Vec<ImportedQuoteRequest>, QuoteImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut requests = Vec::new();

    for (index, record) in csv_reader.deserialize::<QuoteCsvRow>().enumerate() {
        let row = record?;
        // Header occupies line 1, so data rows start at line 2.
        requests.push(row.into_request(index + 2)?);
    }

    Ok(requests)
}

#[derive(Debug, Deserialize)]
struct QuoteCsvRow {
    #[serde(rename = "Reference", default, deserialize_with = "empty_string_as_none")]
    reference: Option<String>,
    #[serde(rename = "Walls m2", default, deserialize_with = "empty_string_as_none")]
    walls_m2: Option<String>,
    #[serde(rename = "Ceiling m2", default, deserialize_with = "empty_string_as_none")]
    ceiling_m2: Option<String>,
    #[serde(
        rename = "Ceiling Height m",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    ceiling_height_m: Option<String>,
    #[serde(rename = "Scope")]
    scope: String,
    #[serde(rename = "Zone")]
    zone: String,
    #[serde(rename = "Substrate")]
    substrate: String,
    #[serde(
        rename = "Wallpaper Action",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    wallpaper_action: Option<String>,
    #[serde(rename = "Condition")]
    condition: String,
    #[serde(rename = "Furnishing")]
    furnishing: String,
    #[serde(rename = "Color Change")]
    color_change: String,
    #[serde(rename = "Coats", default, deserialize_with = "empty_string_as_none")]
    coats: Option<String>,
    #[serde(rename = "Quality")]
    quality: String,
    #[serde(rename = "Material Provided By")]
    material_provided_by: String,
    #[serde(rename = "ROT", default, deserialize_with = "empty_string_as_none")]
    rot: Option<String>,
    #[serde(
        rename = "ROT Percent",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    rot_percent: Option<String>,
}

impl QuoteCsvRow {
    fn into_request(self, line: usize) -> Result<ImportedQuoteRequest, QuoteImportError> {
        let scope: Scope = parse_field(&self.scope, "Scope", line)?;
        let zone = parse_field(&self.zone, "Zone", line)?;
        let substrate = parse_field(&self.substrate, "Substrate", line)?;
        let wallpaper_action = match self.wallpaper_action.as_deref() {
            Some(raw) => parse_field(raw, "Wallpaper Action", line)?,
            None => WallpaperAction::default(),
        };
        let condition = parse_field(&self.condition, "Condition", line)?;
        let furnishing = parse_field(&self.furnishing, "Furnishing", line)?;
        let color_change = parse_field(&self.color_change, "Color Change", line)?;
        let coats = match self.coats.as_deref() {
            Some(raw) => parse_field(raw, "Coats", line)?,
            None => CoatSelection::Auto,
        };
        let quality = parse_field(&self.quality, "Quality", line)?;
        let material_provided_by: MaterialProvider =
            parse_field(&self.material_provided_by, "Material Provided By", line)?;
        let rot_enabled = match self.rot.as_deref() {
            Some(raw) => parse_flag(raw, "ROT", line)?,
            None => false,
        };
        let rot_percent = match self.rot_percent.as_deref() {
            Some(raw) => parse_fraction(raw, "ROT Percent", line)?,
            None => 0.0,
        };

        // Measurement cells stay lenient like the form; a blank or
        // unparseable height falls back to the reference.
        let walls_area_m2 = self.walls_m2.as_deref().map(parse_dimension).unwrap_or(0.0);
        let ceiling_area_m2 = self
            .ceiling_m2
            .as_deref()
            .map(parse_dimension)
            .unwrap_or(0.0);
        let ceiling_height_m = self
            .ceiling_height_m
            .as_deref()
            .map(parse_dimension)
            .filter(|height| *height > 0.0)
            .unwrap_or(DEFAULT_CEILING_HEIGHT_M);

        let reference = self.reference.unwrap_or_else(|| format!("row-{line}"));

        Ok(ImportedQuoteRequest {
            reference,
            request: QuoteRequest {
                walls_area_m2,
                ceiling_area_m2,
                ceiling_height_m,
                scope,
                zone,
                substrate,
                wallpaper_action,
                condition,
                furnishing,
                color_change,
                coats,
                quality,
                material_provided_by,
                rot_enabled,
                rot_percent,
            },
        })
    }
}

fn parse_field<T>(raw: &str, column: &'static str, line: usize) -> Result<T, QuoteImportError>
where
    T: FromStr<Err = UnknownVariant>,
{
    normalize_cell(raw)
        .parse()
        .map_err(|source| QuoteImportError::Field {
            line,
            column,
            source,
        })
}

fn parse_flag(raw: &str, column: &'static str, line: usize) -> Result<bool, QuoteImportError> {
    match normalize_cell(raw).as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(QuoteImportError::Number {
            line,
            column,
            value: raw.trim().to_string(),
        }),
    }
}

/// Strict fraction parse for the ROT column, clamped into the configured
/// cap so imported rows round-trip through the engine unchanged.
fn parse_fraction(raw: &str, column: &'static str, line: usize) -> Result<f64, QuoteImportError> {
    let parsed: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| QuoteImportError::Number {
            line,
            column,
            value: raw.trim().to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(QuoteImportError::Number {
            line,
            column,
            value: raw.trim().to_string(),
        });
    }
    Ok(parsed.clamp(0.0, PricingConfig::default().rot_percent_cap))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
