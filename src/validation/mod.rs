//! Lead form validation.
//!
//! The schema is a plain rule table: for every form field an ordered list
//! of `(message, predicate)` records. [`validate`] always evaluates every
//! field (errors are collected, never short-circuited across fields);
//! within one field the rules run in declared order and the first violated
//! rule supplies that field's message. Predicates later in a field's list
//! may therefore assume the earlier ones passed.
//!
//! Messages are carried as [`MessageKey`]s and only turned into text
//! through the [`crate::locale`] catalogs.

use crate::domain::{LeaseDate, PhoneNumber};
use crate::locale::{self, Locale};
use crate::models::LeadForm;
use std::collections::BTreeMap;
use std::fmt;

/// Path of a validated form field, as reported to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Address,
    Phone,
    PlaceType,
    AreaMin,
    AreaMax,
    DateMin,
    DateMax,
}

impl Field {
    /// All validated fields, in report order.
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Address,
        Field::Phone,
        Field::PlaceType,
        Field::AreaMin,
        Field::AreaMax,
        Field::DateMin,
        Field::DateMax,
    ];

    /// Dotted field path used as the error-map key.
    pub fn path(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::PlaceType => "place_type",
            Field::AreaMin => "area.min",
            Field::AreaMax => "area.max",
            Field::DateMin => "date.min",
            Field::DateMax => "date.max",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Key of a user-facing validation message.
///
/// Every key must resolve in every supported locale; the catalogs in
/// [`crate::locale`] match on this enum exhaustively, so adding a variant
/// without translations fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    TitleRequired,
    AddressRequired,
    PhoneRequired,
    PhoneInvalid,
    PlaceTypeRequired,
    AreaMinRequired,
    AreaMinInvalid,
    AreaMinNegative,
    AreaMinExceedsMax,
    AreaMaxRequired,
    AreaMaxInvalid,
    AreaMaxBelowMin,
    AreaMaxNotPositive,
    DateMinRequired,
    DateMinInvalid,
    DateMaxRequired,
    DateMaxInvalid,
    DateMaxNotLater,
}

impl MessageKey {
    /// Every message the validator can produce.
    pub const ALL: [MessageKey; 18] = [
        MessageKey::TitleRequired,
        MessageKey::AddressRequired,
        MessageKey::PhoneRequired,
        MessageKey::PhoneInvalid,
        MessageKey::PlaceTypeRequired,
        MessageKey::AreaMinRequired,
        MessageKey::AreaMinInvalid,
        MessageKey::AreaMinNegative,
        MessageKey::AreaMinExceedsMax,
        MessageKey::AreaMaxRequired,
        MessageKey::AreaMaxInvalid,
        MessageKey::AreaMaxBelowMin,
        MessageKey::AreaMaxNotPositive,
        MessageKey::DateMinRequired,
        MessageKey::DateMinInvalid,
        MessageKey::DateMaxRequired,
        MessageKey::DateMaxInvalid,
        MessageKey::DateMaxNotLater,
    ];
}

/// One validation rule: the message reported when the predicate fails.
struct Rule {
    message: MessageKey,
    passes: fn(&LeadForm) -> bool,
}

/// Ordered rules for one field.
struct FieldRules {
    field: Field,
    rules: &'static [Rule],
}

/// Parse an area value as a finite number; `None` for blank or non-numeric text.
fn area_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a date field when it holds a valid calendar date.
fn date_value(text: &str) -> Option<LeaseDate> {
    LeaseDate::parse(text).ok()
}

fn present(text: &str) -> bool {
    !text.trim().is_empty()
}

// Cross-field comparisons are guarded: when the other endpoint of a range
// does not parse, the ordering rule passes so it cannot mask that
// endpoint's own validity error.
static RULE_TABLE: &[FieldRules] = &[
    FieldRules {
        field: Field::Title,
        rules: &[Rule {
            message: MessageKey::TitleRequired,
            passes: |f| present(&f.title),
        }],
    },
    FieldRules {
        field: Field::Address,
        rules: &[Rule {
            message: MessageKey::AddressRequired,
            passes: |f| present(&f.address),
        }],
    },
    FieldRules {
        field: Field::Phone,
        rules: &[
            Rule {
                message: MessageKey::PhoneRequired,
                passes: |f| present(&f.phone),
            },
            Rule {
                message: MessageKey::PhoneInvalid,
                passes: |f| PhoneNumber::is_valid(&f.phone),
            },
        ],
    },
    FieldRules {
        field: Field::PlaceType,
        rules: &[Rule {
            message: MessageKey::PlaceTypeRequired,
            passes: |f| f.place_type.is_some(),
        }],
    },
    FieldRules {
        field: Field::AreaMin,
        rules: &[
            Rule {
                message: MessageKey::AreaMinRequired,
                passes: |f| present(&f.area.min),
            },
            Rule {
                message: MessageKey::AreaMinInvalid,
                passes: |f| area_value(&f.area.min).is_some(),
            },
            Rule {
                message: MessageKey::AreaMinNegative,
                passes: |f| area_value(&f.area.min).map_or(true, |min| min >= 0.0),
            },
            Rule {
                message: MessageKey::AreaMinExceedsMax,
                passes: |f| match (area_value(&f.area.min), area_value(&f.area.max)) {
                    (Some(min), Some(max)) => min <= max,
                    _ => true,
                },
            },
        ],
    },
    FieldRules {
        field: Field::AreaMax,
        rules: &[
            Rule {
                message: MessageKey::AreaMaxRequired,
                passes: |f| present(&f.area.max),
            },
            Rule {
                message: MessageKey::AreaMaxInvalid,
                passes: |f| area_value(&f.area.max).is_some(),
            },
            Rule {
                message: MessageKey::AreaMaxBelowMin,
                passes: |f| match (area_value(&f.area.min), area_value(&f.area.max)) {
                    (Some(min), Some(max)) => max >= min,
                    _ => true,
                },
            },
            Rule {
                message: MessageKey::AreaMaxNotPositive,
                passes: |f| area_value(&f.area.max).map_or(true, |max| max > 0.0),
            },
        ],
    },
    FieldRules {
        field: Field::DateMin,
        rules: &[
            Rule {
                message: MessageKey::DateMinRequired,
                passes: |f| present(&f.date.min),
            },
            Rule {
                message: MessageKey::DateMinInvalid,
                passes: |f| date_value(&f.date.min).is_some(),
            },
        ],
    },
    FieldRules {
        field: Field::DateMax,
        rules: &[
            Rule {
                message: MessageKey::DateMaxRequired,
                passes: |f| present(&f.date.max),
            },
            Rule {
                message: MessageKey::DateMaxInvalid,
                passes: |f| date_value(&f.date.max).is_some(),
            },
            Rule {
                message: MessageKey::DateMaxNotLater,
                passes: |f| match (date_value(&f.date.min), date_value(&f.date.max)) {
                    (Some(min), Some(max)) => max > min,
                    _ => true,
                },
            },
        ],
    },
];

/// Result of a failed validation: one message key per violated field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: BTreeMap<Field, MessageKey>,
}

impl ValidationReport {
    /// Whether the report carries no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message key recorded for a field, if that field failed.
    pub fn message_for(&self, field: Field) -> Option<MessageKey> {
        self.errors.get(&field).copied()
    }

    /// Iterate over `(field, message key)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, MessageKey)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    /// Resolve the report into `field path -> localized message` for UI display.
    pub fn localized(&self, locale: Locale) -> BTreeMap<&'static str, &'static str> {
        self.errors
            .iter()
            .map(|(field, key)| (field.path(), locale::message(locale, *key)))
            .collect()
    }

    /// Combined message for the area range group, min then max,
    /// space-separated and trimmed.
    pub fn area_summary(&self, locale: Locale) -> String {
        self.group_summary(locale, Field::AreaMin, Field::AreaMax)
    }

    /// Combined message for the date range group, min then max,
    /// space-separated and trimmed.
    pub fn date_summary(&self, locale: Locale) -> String {
        self.group_summary(locale, Field::DateMin, Field::DateMax)
    }

    fn group_summary(&self, locale: Locale, min: Field, max: Field) -> String {
        let min_msg = self
            .message_for(min)
            .map(|key| locale::message(locale, key))
            .unwrap_or("");
        let max_msg = self
            .message_for(max)
            .map(|key| locale::message(locale, key))
            .unwrap_or("");
        format!("{} {}", min_msg, max_msg).trim().to_string()
    }
}

/// Validate a lead form record.
///
/// Returns `Ok(())` when every rule passes, otherwise a report mapping
/// each violated field to its message key. Pure: no state, no I/O, same
/// input gives the same report.
pub fn validate(form: &LeadForm) -> Result<(), ValidationReport> {
    let mut errors = BTreeMap::new();

    for field_rules in RULE_TABLE {
        for rule in field_rules.rules {
            if !(rule.passes)(form) {
                errors.insert(field_rules.field, rule.message);
                break;
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(fields = errors.len(), "lead form failed validation");
        Err(ValidationReport { errors })
    }
}
