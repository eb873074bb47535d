//! Lead form view assembly.
//!
//! Builds the typed component models for the intake popup from the locale
//! catalogs and the phone mask table — the data the rendering layer binds
//! to, with no rendering here.

use super::button::ButtonModel;
use super::input::InputModel;
use super::select::{SelectModel, SelectOption};
use crate::locale::{label, LabelKey, Locale};
use serde::Serialize;

/// Country calling code preselected in the phone input.
const DEFAULT_PHONE_CODE: u16 = 7;

/// Component models of the lead intake popup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormView {
    pub popup_title: String,
    pub title: InputModel,
    pub phone: InputModel,
    pub place_type: SelectModel,
    pub address: InputModel,
    /// Area range bounds, labelled "from" / "to"
    pub area_min: InputModel,
    pub area_max: InputModel,
    /// Date range bounds, labelled "from" / "to"
    pub date_min: InputModel,
    pub date_max: InputModel,
    pub submit: ButtonModel,
}

impl LeadFormView {
    /// Assemble the form for a locale, with the given place type options.
    pub fn new(locale: Locale, place_types: Vec<SelectOption>) -> Self {
        Self {
            popup_title: label(locale, LabelKey::PopupTitle).to_string(),
            title: InputModel::text("title", label(locale, LabelKey::FieldTitle)),
            phone: InputModel::phone(
                "phone",
                label(locale, LabelKey::FieldPhone),
                DEFAULT_PHONE_CODE,
            ),
            place_type: SelectModel::required(
                "placeType",
                label(locale, LabelKey::FieldPlaceType),
                place_types,
            ),
            address: InputModel::text("address", label(locale, LabelKey::FieldAddress)),
            area_min: InputModel::text("area.min", label(locale, LabelKey::FieldArea))
                .with_placeholder(label(locale, LabelKey::NumberFrom)),
            area_max: InputModel::text("area.max", label(locale, LabelKey::FieldArea))
                .with_placeholder(label(locale, LabelKey::NumberTo)),
            date_min: InputModel::text("date.min", label(locale, LabelKey::FieldDate))
                .with_placeholder(label(locale, LabelKey::DateFrom)),
            date_max: InputModel::text("date.max", label(locale, LabelKey::FieldDate))
                .with_placeholder(label(locale, LabelKey::DateTo)),
            submit: ButtonModel::submit(label(locale, LabelKey::SubmitButton)),
        }
    }
}
