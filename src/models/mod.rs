//! Data models for the lead intake form.
//!
//! This module contains the raw form record a prospective resident fills
//! in, plus the request/receipt wire types for the submission API.

pub mod lead;

pub use lead::{LeadForm, LeadReceipt, RangeInput, SubmitLeadRequest};
