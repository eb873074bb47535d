//! Icon component contract.

use serde::{Deserialize, Serialize};

/// Icons used by the form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Chevron,
    Close,
}

/// Direction a directional icon points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconDirection {
    Right,
    Left,
    Up,
    Down,
}

/// Props of an inline icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconModel {
    pub kind: IconKind,
    #[serde(default)]
    pub is_svg: bool,
    #[serde(default)]
    pub filled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<IconDirection>,
}

impl IconModel {
    /// Chevron pointing in the given direction (select dropdown marker).
    pub fn chevron(direction: IconDirection) -> Self {
        Self {
            kind: IconKind::Chevron,
            is_svg: true,
            filled: false,
            direction: Some(direction),
        }
    }

    /// Close / clear icon.
    pub fn close() -> Self {
        Self {
            kind: IconKind::Close,
            is_svg: true,
            filled: false,
            direction: None,
        }
    }
}
