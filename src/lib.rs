//! Lease Leads - validation and submission core for a commercial leasing lead form.
//!
//! This library implements the logic behind a localized (Russian/English)
//! real-estate leasing intake form: schema validation of the lead record,
//! a phone input mask table keyed by country calling code, locale
//! catalogs, typed UI component contracts and an HTTP client that hands
//! accepted leads to the intake API.
//!
//! # Architecture
//!
//! - **models**: the raw lead form record and submission wire types
//! - **domain**: value objects (phone number, lease date) validated at construction
//! - **validation**: the rule-table validator producing field → message reports
//! - **locale**: Russian/English catalogs for messages and form labels
//! - **ui**: typed component contracts (button, input, select, icon) and the form view
//! - **client**: HTTP submission of validated leads
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod locale;
pub mod models;
pub mod ui;
pub mod validation;

pub use client::LeadClient;
pub use config::Config;
pub use domain::{mask_for, LeaseDate, PhoneNumber};
pub use error::{ConfigError, LeadApiError};
pub use locale::{label, message, LabelKey, Locale};
pub use models::{LeadForm, LeadReceipt, RangeInput, SubmitLeadRequest};
pub use ui::{LeadFormView, SelectOption};
pub use validation::{validate, Field, MessageKey, ValidationReport};
