//! Catalog coverage tests.
//!
//! Every message key the validator can produce, and every form label, must
//! resolve to non-empty text in every supported locale. The catalogs are
//! exhaustive matches so a missing key cannot compile, but empty or
//! duplicated-by-accident text would still slip through without these.

use lease_leads::{label, message, LabelKey, Locale, MessageKey};

#[test]
fn test_every_message_resolves_in_every_locale() {
    for locale in Locale::ALL {
        for key in MessageKey::ALL {
            let text = message(locale, key);
            assert!(
                !text.trim().is_empty(),
                "empty message for {:?} in {:?}",
                key,
                locale
            );
        }
    }
}

#[test]
fn test_every_label_resolves_in_every_locale() {
    for locale in Locale::ALL {
        for key in LabelKey::ALL {
            let text = label(locale, key);
            assert!(
                !text.trim().is_empty(),
                "empty label for {:?} in {:?}",
                key,
                locale
            );
        }
    }
}

#[test]
fn test_locales_are_actually_translated() {
    // Spot-check that the two catalogs differ where they should
    assert_ne!(
        message(Locale::Ru, MessageKey::PhoneRequired),
        message(Locale::En, MessageKey::PhoneRequired)
    );
    assert_ne!(
        label(Locale::Ru, LabelKey::SubmitButton),
        label(Locale::En, LabelKey::SubmitButton)
    );
}

#[test]
fn test_distinct_rules_have_distinct_ru_messages() {
    // Within one field, each rule must be tellable apart by its text.
    // (Across fields the source reuses some strings deliberately.)
    let min_rules = [
        MessageKey::AreaMinRequired,
        MessageKey::AreaMinInvalid,
        MessageKey::AreaMinNegative,
        MessageKey::AreaMinExceedsMax,
    ];
    for (i, a) in min_rules.iter().enumerate() {
        for b in &min_rules[i + 1..] {
            assert_ne!(
                message(Locale::Ru, *a),
                message(Locale::Ru, *b),
                "{:?} and {:?} share a message",
                a,
                b
            );
        }
    }
}
