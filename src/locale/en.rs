//! English catalog.

use super::LabelKey;
use crate::validation::MessageKey;

pub(super) fn message(key: MessageKey) -> &'static str {
    match key {
        MessageKey::TitleRequired => "Organization name is required",
        MessageKey::AddressRequired => "Organization name is required",
        MessageKey::PhoneRequired => "Phone number is required",
        MessageKey::PhoneInvalid => "Phone number is not valid",
        MessageKey::PlaceTypeRequired => "Place type is required",
        MessageKey::AreaMinRequired => "Minimum area is required",
        MessageKey::AreaMinInvalid => "Area must be a valid number",
        MessageKey::AreaMinNegative => "Minimum area cannot be negative",
        MessageKey::AreaMinExceedsMax => "Minimum area cannot exceed the maximum area",
        MessageKey::AreaMaxRequired => "Maximum area is required",
        MessageKey::AreaMaxInvalid => "Area must be a valid number",
        MessageKey::AreaMaxBelowMin => "Maximum area must be greater than or equal to the minimum",
        MessageKey::AreaMaxNotPositive => "Maximum area must be positive",
        MessageKey::DateMinRequired => "Lease start date is required",
        MessageKey::DateMinInvalid => "Lease start date must be a valid date",
        MessageKey::DateMaxRequired => "Lease end date is required",
        MessageKey::DateMaxInvalid => "Lease end date must be a valid date",
        MessageKey::DateMaxNotLater => "Lease end date must be later than the start date",
    }
}

pub(super) fn label(key: LabelKey) -> &'static str {
    match key {
        LabelKey::PopupTitle => "Fill out the request to become a resident",
        LabelKey::FieldTitle => "Organization / sole proprietor name",
        LabelKey::FieldPhone => "Contact phone",
        LabelKey::FieldPlaceType => "Place type",
        LabelKey::FieldAddress => "Address",
        LabelKey::FieldArea => "Place area (m2)",
        LabelKey::FieldDate => "Lease start date",
        LabelKey::NumberFrom => "from",
        LabelKey::NumberTo => "to",
        LabelKey::DateFrom => "from",
        LabelKey::DateTo => "to",
        LabelKey::SubmitButton => "Submit",
    }
}
