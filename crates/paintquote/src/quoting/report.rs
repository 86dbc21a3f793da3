//! Customer-facing rendering of a quote breakdown.
//!
//! Amounts render the way the app shows them: whole kronor with a space as
//! thousands separator ("5 600 kr") and unit prices with a comma decimal
//! ("375,0 kr/m²").

use serde::Serialize;

use super::pricing::QuoteBreakdown;

/// One labeled row of the quote card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Display-ready view of a [`QuoteBreakdown`], rows in card order. The ROT
/// deduction row only appears when a deduction was actually taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub lines: Vec<QuoteLine>,
}

impl QuoteBreakdown {
    pub fn summary(&self) -> QuoteSummary {
        let mut lines = vec![
            QuoteLine {
                key: "total_area",
                label: "Painted area",
                value: format_area_m2(self.total_area_m2),
            },
            QuoteLine {
                key: "coats",
                label: "Coats",
                value: self.coats.to_string(),
            },
            QuoteLine {
                key: "labor_before_rot",
                label: "Labor",
                value: format_kronor(self.labor_before_rot),
            },
        ];

        if self.rot_deduction > 0 {
            lines.push(QuoteLine {
                key: "rot_deduction",
                label: "ROT deduction",
                value: format!("-{}", format_kronor(self.rot_deduction)),
            });
        }

        lines.extend([
            QuoteLine {
                key: "labor_after_rot",
                label: "Labor after ROT",
                value: format_kronor(self.labor_after_rot),
            },
            QuoteLine {
                key: "material_cost",
                label: "Materials",
                value: format_kronor(self.material_cost),
            },
            QuoteLine {
                key: "travel_cost",
                label: "Travel",
                value: format_kronor(self.travel_cost),
            },
            QuoteLine {
                key: "total_before_rot",
                label: "Total before ROT",
                value: format_kronor(self.total_before_rot),
            },
            QuoteLine {
                key: "total_after_rot",
                label: "Total after ROT",
                value: format_kronor(self.total_after_rot),
            },
            QuoteLine {
                key: "price_per_m2_before_rot",
                label: "Price per m² before ROT",
                value: format_kronor_per_m2(self.price_per_m2_before_rot),
            },
            QuoteLine {
                key: "price_per_m2_after_rot",
                label: "Price per m² after ROT",
                value: format_kronor_per_m2(self.price_per_m2_after_rot),
            },
        ]);

        QuoteSummary { lines }
    }
}

pub fn format_kronor(amount: i64) -> String {
    format!("{} kr", group_thousands(amount))
}

pub fn format_kronor_per_m2(amount: f64) -> String {
    format!("{} kr/m²", format!("{amount:.1}").replace('.', ","))
}

pub fn format_area_m2(area: f64) -> String {
    format!("{area} m²")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 && (bytes.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*byte as char);
    }
    grouped
}
