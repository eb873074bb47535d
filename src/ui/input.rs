//! Text / phone input component contract.

use crate::domain::mask_for;
use serde::{Deserialize, Serialize};

/// Kind of input control, mapped to the HTML `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "tel")]
    Phone,
}

impl Default for InputKind {
    fn default() -> Self {
        InputKind::Text
    }
}

/// Browser autocomplete switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autocomplete {
    Off,
    On,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Autocomplete::Off
    }
}

/// Props of a single-line form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub autocomplete: Autocomplete,
    /// Digit mask applied while typing (`#` = digit slot)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub is_uppercase_first: bool,
    pub is_uppercase_all: bool,
    pub is_label_required: bool,
    pub has_clear: bool,
    /// Country calling code, for phone inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<u16>,
    pub is_loading: bool,
}

impl InputModel {
    /// A plain required text input.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
            required: true,
            is_label_required: true,
            ..Default::default()
        }
    }

    /// A phone input whose mask follows the country calling code.
    pub fn phone(name: impl Into<String>, label: impl Into<String>, phone_code: u16) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
            required: true,
            is_label_required: true,
            kind: InputKind::Phone,
            mask: Some(mask_for(phone_code).to_string()),
            phone_code: Some(phone_code),
            ..Default::default()
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Switch the phone mask to another country calling code.
    pub fn with_phone_code(mut self, phone_code: u16) -> Self {
        self.phone_code = Some(phone_code);
        self.mask = Some(mask_for(phone_code).to_string());
        self
    }
}
