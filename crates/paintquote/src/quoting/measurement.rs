//! Room measurement arithmetic feeding the quote form.
//!
//! Customers enter one rectangular face at a time; areas sum per room and
//! across rooms, and the grand total becomes `walls_area_m2` on the quote
//! request.

use serde::{Deserialize, Serialize};

/// One rectangular painted face entered by the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSection {
    pub label: String,
    pub length_m: f64,
    pub width_m: f64,
}

impl RoomSection {
    /// Build a section from raw form cells. Dimensions that fail to parse
    /// count as zero, matching the form behavior.
    pub fn from_raw(label: impl Into<String>, length: &str, width: &str) -> Self {
        Self {
            label: label.into(),
            length_m: parse_dimension(length),
            width_m: parse_dimension(width),
        }
    }

    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// A room with its measured faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub label: String,
    pub sections: Vec<RoomSection>,
}

impl Room {
    pub fn area_m2(&self) -> f64 {
        self.sections.iter().map(RoomSection::area_m2).sum()
    }
}

/// All measured rooms for one job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPlan {
    pub rooms: Vec<Room>,
}

impl MeasurementPlan {
    pub fn total_area_m2(&self) -> f64 {
        self.rooms.iter().map(Room::area_m2).sum()
    }
}

/// Lenient numeric parse for a hand-entered dimension. Accepts a comma
/// decimal separator; blank, negative, or non-numeric input yields zero.
pub fn parse_dimension(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_area_is_length_times_width() {
        let section = RoomSection {
            label: "Long wall".to_string(),
            length_m: 4.0,
            width_m: 2.5,
        };
        assert_eq!(section.area_m2(), 10.0);
    }

    #[test]
    fn plan_total_sums_rooms_and_sections() {
        let plan = MeasurementPlan {
            rooms: vec![
                Room {
                    label: "Living room".to_string(),
                    sections: vec![
                        RoomSection::from_raw("Wall 1", "4", "2.5"),
                        RoomSection::from_raw("Wall 2", "3", "2.5"),
                    ],
                },
                Room {
                    label: "Bedroom".to_string(),
                    sections: vec![RoomSection::from_raw("Wall 1", "2", "2.5")],
                },
            ],
        };
        assert!((plan.total_area_m2() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn parse_dimension_accepts_comma_decimals() {
        assert_eq!(parse_dimension("3,2"), 3.2);
        assert_eq!(parse_dimension(" 4.5 "), 4.5);
    }

    #[test]
    fn parse_dimension_treats_garbage_as_zero() {
        assert_eq!(parse_dimension(""), 0.0);
        assert_eq!(parse_dimension("abc"), 0.0);
        assert_eq!(parse_dimension("-2"), 0.0);
        assert_eq!(parse_dimension("NaN"), 0.0);
    }

    #[test]
    fn empty_plan_totals_zero() {
        assert_eq!(MeasurementPlan::default().total_area_m2(), 0.0);
    }
}
