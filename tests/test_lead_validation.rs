//! End-to-end tests for lead form validation.
//!
//! These tests exercise the public validation contract: a raw form record
//! goes in, and either `Ok(())` or a field → message report comes out.

use lease_leads::{
    mask_for, validate, Field, LeadForm, Locale, MessageKey, RangeInput, SelectOption,
};

fn valid_form() -> LeadForm {
    LeadForm {
        title: "ООО Ромашка".to_string(),
        address: "г. Москва, ул. Ленина, 1".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
        place_type: Some(SelectOption::new("office", "Офис")),
        area: RangeInput::new("25", "250"),
        date: RangeInput::new("01.09.2024", "01.09.2025"),
    }
}

#[test]
fn test_valid_record_produces_empty_report() {
    assert!(validate(&valid_form()).is_ok());
}

#[test]
fn test_empty_title_is_reported() {
    let mut form = valid_form();
    form.title = String::new();
    let report = validate(&form).unwrap_err();
    assert_eq!(report.message_for(Field::Title), Some(MessageKey::TitleRequired));
    // The rest of the record is untouched, so nothing else fires
    assert_eq!(report.len(), 1);
}

#[test]
fn test_phone_pattern_rejections() {
    let bad_phones = [
        "+7 999 123-45-67",
        "+7 (999) 1234567",
        "89991234567",
        "+7 (99) 123-45-67",
        "+7 (999) 123-45-6",
        "phone",
    ];
    for phone in bad_phones {
        let mut form = valid_form();
        form.phone = phone.to_string();
        let report = validate(&form).unwrap_err();
        assert_eq!(
            report.message_for(Field::Phone),
            Some(MessageKey::PhoneInvalid),
            "expected {:?} to be rejected",
            phone
        );
    }
}

#[test]
fn test_reference_phone_is_accepted() {
    let mut form = valid_form();
    form.phone = "+7 (999) 123-45-67".to_string();
    assert!(validate(&form).is_ok());

    // 1-3 digit country codes are all allowed
    form.phone = "+1 (555) 123-45-67".to_string();
    assert!(validate(&form).is_ok());
    form.phone = "+375 (291) 234-56-78".to_string();
    assert!(validate(&form).is_ok());
}

#[test]
fn test_missing_place_type_is_reported() {
    let mut form = valid_form();
    form.place_type = None;
    let report = validate(&form).unwrap_err();
    assert_eq!(
        report.message_for(Field::PlaceType),
        Some(MessageKey::PlaceTypeRequired)
    );
}

#[test]
fn test_inverted_area_range_fires_min_rule() {
    let mut form = valid_form();
    form.area = RangeInput::new("50", "30");
    let report = validate(&form).unwrap_err();
    // min > max triggers min's "cannot exceed max" rule...
    assert_eq!(
        report.message_for(Field::AreaMin),
        Some(MessageKey::AreaMinExceedsMax)
    );
    // ...and max's mirrored "must be >= min" rule
    assert_eq!(
        report.message_for(Field::AreaMax),
        Some(MessageKey::AreaMaxBelowMin)
    );
}

#[test]
fn test_negative_area_min_fires_negative_rule() {
    let mut form = valid_form();
    form.area = RangeInput::new("-5", "10");
    let report = validate(&form).unwrap_err();
    assert_eq!(
        report.message_for(Field::AreaMin),
        Some(MessageKey::AreaMinNegative)
    );
    assert_eq!(report.message_for(Field::AreaMax), None);
}

#[test]
fn test_date_range_order_is_calendar_based() {
    let mut form = valid_form();
    form.date = RangeInput::new("01.01.2024", "01.01.2023");
    let report = validate(&form).unwrap_err();
    assert_eq!(report.message_for(Field::DateMin), None);
    assert_eq!(
        report.message_for(Field::DateMax),
        Some(MessageKey::DateMaxNotLater)
    );
}

#[test]
fn test_invalid_calendar_date_suppresses_ordering_rule() {
    let mut form = valid_form();
    form.date = RangeInput::new("31.02.2024", "01.01.2025");
    let report = validate(&form).unwrap_err();
    assert_eq!(
        report.message_for(Field::DateMin),
        Some(MessageKey::DateMinInvalid)
    );
    // Ordering must not additionally fire on max
    assert_eq!(report.message_for(Field::DateMax), None);
}

#[test]
fn test_mask_resolution() {
    assert_eq!(mask_for(1), "###-###-####");
    assert_eq!(mask_for(7), "(###) ###-##-##");
    assert_eq!(mask_for(375), "(##) ###-##-##");
}

#[test]
fn test_validate_is_idempotent() {
    let mut form = valid_form();
    form.title = String::new();
    form.area = RangeInput::new("50", "30");

    let first = validate(&form).unwrap_err();
    let second = validate(&form).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(
        first.localized(Locale::Ru),
        second.localized(Locale::Ru)
    );
}

#[test]
fn test_localized_report_for_display() {
    let mut form = valid_form();
    form.phone = "nope".to_string();
    let report = validate(&form).unwrap_err();

    let ru = report.localized(Locale::Ru);
    assert_eq!(ru["phone"], "Номер телефона некорректен");

    let en = report.localized(Locale::En);
    assert_eq!(en["phone"], "Phone number is not valid");
}
