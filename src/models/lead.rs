//! Lead form record as produced by the intake UI.

use crate::ui::SelectOption;
use serde::{Deserialize, Serialize};

/// Raw min/max pair of a range group, exactly as bound to the two text
/// inputs of the form (empty strings when untouched).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeInput {
    /// Lower bound text
    pub min: String,

    /// Upper bound text
    pub max: String,
}

impl RangeInput {
    /// Create a range from two raw values.
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// A lead request as filled in by a prospective resident.
///
/// Every field carries the raw UI value: text inputs stay text (including
/// the numeric and date ranges) and the place type is whatever option the
/// select currently holds. [`crate::validation::validate`] decides whether
/// the record is submittable; this type imposes nothing on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    /// Organization / legal-entity name
    pub title: String,

    /// Address of the organization
    pub address: String,

    /// Contact phone in the masked display format
    pub phone: String,

    /// Selected place type option, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_type: Option<SelectOption>,

    /// Requested area range in square meters (raw text)
    pub area: RangeInput,

    /// Requested lease date range in `DD.MM.YYYY` form (raw text)
    pub date: RangeInput,
}

/// Request payload for submitting a lead.
/// The intake API expects the record nested as `{ "request": { ... } }`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitLeadRequest {
    request: LeadForm,
}

impl From<&LeadForm> for SubmitLeadRequest {
    fn from(form: &LeadForm) -> Self {
        Self {
            request: form.clone(),
        }
    }
}

/// Receipt returned by the intake API for an accepted lead.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LeadReceipt {
    /// Identifier assigned to the stored request
    pub id: String,

    /// Processing status reported by the API
    #[serde(default)]
    pub status: String,
}
