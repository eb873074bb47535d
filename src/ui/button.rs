//! Button component contract.

use serde::{Deserialize, Serialize};

/// Visual theme of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTheme {
    Error,
    Brand,
}

/// HTML button type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Button,
    Submit,
    Reset,
}

impl Default for ButtonKind {
    fn default() -> Self {
        ButtonKind::Button
    }
}

/// Props of a form button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonModel {
    #[serde(rename = "type")]
    pub kind: ButtonKind,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ButtonTheme>,
    pub is_loading: bool,
    pub is_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ButtonModel {
    /// A submit button with the given caption.
    pub fn submit(text: impl Into<String>) -> Self {
        Self {
            kind: ButtonKind::Submit,
            theme: Some(ButtonTheme::Brand),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}
