//! Locale catalogs for user-facing strings.
//!
//! Two locales are supported, Russian (the default) and English. The
//! catalogs are exhaustive `match` tables over [`MessageKey`] and
//! [`LabelKey`], so every key is guaranteed to resolve in every locale at
//! compile time — a missing translation is a build error, not a runtime
//! fallback.

mod en;
mod ru;

use crate::validation::MessageKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian (default)
    Ru,
    /// English
    En,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Ru, Locale::En];
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Ru
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => f.write_str("ru"),
            Locale::En => f.write_str("en"),
        }
    }
}

/// Error returned when parsing an unsupported locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

/// Key of a form chrome string (labels, captions, range connectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Popup heading
    PopupTitle,
    /// Organization name input label
    FieldTitle,
    /// Phone input label
    FieldPhone,
    /// Place type select label
    FieldPlaceType,
    /// Address input label
    FieldAddress,
    /// Area range group label
    FieldArea,
    /// Date range group label
    FieldDate,
    /// Numeric range lower-bound connector
    NumberFrom,
    /// Numeric range upper-bound connector
    NumberTo,
    /// Date range lower-bound connector
    DateFrom,
    /// Date range upper-bound connector
    DateTo,
    /// Submit button caption
    SubmitButton,
}

impl LabelKey {
    /// Every label the form uses.
    pub const ALL: [LabelKey; 12] = [
        LabelKey::PopupTitle,
        LabelKey::FieldTitle,
        LabelKey::FieldPhone,
        LabelKey::FieldPlaceType,
        LabelKey::FieldAddress,
        LabelKey::FieldArea,
        LabelKey::FieldDate,
        LabelKey::NumberFrom,
        LabelKey::NumberTo,
        LabelKey::DateFrom,
        LabelKey::DateTo,
        LabelKey::SubmitButton,
    ];
}

/// Localized text for a validation message.
pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::Ru => ru::message(key),
        Locale::En => en::message(key),
    }
}

/// Localized text for a form chrome string.
pub fn label(locale: Locale, key: LabelKey) -> &'static str {
    match locale {
        Locale::Ru => ru::label(key),
        Locale::En => en::label(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ru ".parse::<Locale>().unwrap(), Locale::Ru);
        assert!("de".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_locale_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Ru).unwrap(), "\"ru\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn test_ru_messages_match_source_strings() {
        assert_eq!(
            message(Locale::Ru, MessageKey::TitleRequired),
            "Наименование организации обязательно"
        );
        assert_eq!(
            message(Locale::Ru, MessageKey::PhoneInvalid),
            "Номер телефона некорректен"
        );
        assert_eq!(
            message(Locale::Ru, MessageKey::DateMaxNotLater),
            "Дата окончания должна быть позже даты начала"
        );
    }

    #[test]
    fn test_address_reuses_title_message_text() {
        // The form deliberately shows the organization-name wording for both
        for locale in Locale::ALL {
            assert_eq!(
                message(locale, MessageKey::TitleRequired),
                message(locale, MessageKey::AddressRequired)
            );
        }
    }
}
