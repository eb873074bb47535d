//! Select component contract.

use super::icon::{IconDirection, IconModel};
use serde::{Deserialize, Serialize};

/// A selectable option. Also the payload of the lead's place-type field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Props of a single-choice select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SelectOption>,
    pub options: Vec<SelectOption>,
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub has_search: bool,
    pub is_loading: bool,
    pub is_disabled: bool,
    pub is_label_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_option_text: Option<String>,
    pub required: bool,
}

impl SelectModel {
    /// A required single-choice select with the given options.
    pub fn required(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            options,
            required: true,
            is_label_required: true,
            ..Default::default()
        }
    }

    /// Dropdown marker icon for the current open state.
    pub fn dropdown_icon(&self, open: bool) -> IconModel {
        IconModel::chevron(if open {
            IconDirection::Up
        } else {
            IconDirection::Down
        })
    }
}
