//! Craftsman contact requests captured after a quote is presented.
//!
//! The platform forwards these to partner painters; here we only validate
//! and shape the submission. Nothing is stored in this crate.

use serde::{Deserialize, Serialize};

/// Contact details for a customer who wants a painter to follow up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub project_description: String,
}

/// Validation failure listing every required field left blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", fields.join(", "))]
pub struct MissingFields {
    pub fields: Vec<&'static str>,
}

impl LeadRequest {
    /// First and last name, e-mail, and phone are required; whitespace-only
    /// input counts as blank.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let mut fields = Vec::new();
        if self.first_name.trim().is_empty() {
            fields.push("first_name");
        }
        if self.last_name.trim().is_empty() {
            fields.push("last_name");
        }
        if self.email.trim().is_empty() {
            fields.push("email");
        }
        if self.phone.trim().is_empty() {
            fields.push("phone");
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(MissingFields { fields })
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}
