//! PhoneNumber value object and input mask lookup.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display format accepted by the intake form: `+<code> (<3 digits>) <3>-<2>-<2>`.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+\d{1,3} \(\d{3}\) \d{3}-\d{2}-\d{2}$").expect("phone pattern is valid")
});

/// A type-safe wrapper for phone numbers in the intake display format.
///
/// This ensures that phone numbers are validated at construction time.
/// Only the fully formatted shape produced by the masked phone input is
/// accepted, e.g. `+7 (999) 123-45-67`.
///
/// # Example
///
/// ```
/// use lease_leads::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+7 (999) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "+7 (999) 123-45-67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone does not match
    /// `+<1-3 digits> (<3 digits>) <3 digits>-<2 digits>-<2 digits>`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input mask template for the national part of a phone number, keyed by
/// country calling code. `#` marks a required digit slot; everything else
/// is literal.
///
/// Exact-code match only; unknown codes take the default mask.
pub fn mask_for(country_code: u16) -> &'static str {
    match country_code {
        1 | 62 | 91 => "###-###-####",
        374 => "##-###-##-##",
        375 | 998 => "(##) ###-##-##",
        992 | 994 | 995 | 996 => "###-###-##-##",
        _ => "(###) ###-##-##",
    }
}
