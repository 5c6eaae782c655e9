//! # Identity Newtypes
//!
//! The owner-records API is keyed by the normalized RUT. [`Rut`] carries
//! that key as a validated value: once constructed, its shape and check
//! character are known to be correct, so handlers and storage code never
//! re-validate a bare string.
//!
//! ## Validation
//!
//! [`Rut::new`] accepts any of the shapes a form produces (`12345678-5`,
//! `12.345.678-5`, lower-case `k`) and stores the normalized form
//! (`123456785`). Deserialization goes through the same constructor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::rut;

/// Chilean national identification number (Rol Único Tributario).
///
/// Stored normalized: 7-8 body digits followed by the check character,
/// no punctuation, `K` upper-case. Serializes as that normalized string and
/// displays in canonical dotted form (`12.345.678-5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rut(String);

impl Rut {
    /// Validate and normalize a RUT.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedRut`] if the normalized input is
    /// not a 7-8 digit body followed by a digit or `K`, and
    /// [`ValidationError::CheckDigitMismatch`] if the check character does
    /// not match the body.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = rut::normalize(raw.as_str());
        if !rut::has_valid_shape(normalized.as_str()) {
            return Err(ValidationError::MalformedRut(raw));
        }

        // Shape-checked, so the value is ASCII and non-empty.
        let (body, check) = normalized.split_at(normalized.len() - 1);
        let expected = rut::compute_check_digit(body);
        let found = check.chars().next().unwrap_or_default();
        if found != expected {
            return Err(ValidationError::CheckDigitMismatch {
                rut: raw,
                expected,
                found,
            });
        }

        Ok(Self(normalized))
    }

    /// Complete a bare body by appending its computed check character.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedRut`] unless `body` is exactly
    /// 7 or 8 ASCII digits (separators are not stripped here).
    pub fn from_body(body: &str) -> Result<Self, ValidationError> {
        if !(rut::MIN_BODY_LEN..=rut::MAX_BODY_LEN).contains(&body.len())
            || !body.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::MalformedRut(body.to_string()));
        }
        let check = rut::compute_check_digit(body);
        Ok(Self(format!("{body}{check}")))
    }

    /// The normalized form, e.g. `123456785`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Body digits without the check character.
    pub fn body(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    /// The check character (`0`-`9` or `K`).
    pub fn check_char(&self) -> char {
        self.0
            .chars()
            .next_back()
            .expect("validated at construction")
    }

    /// Canonical dotted form, e.g. `12.345.678-5`.
    pub fn formatted(&self) -> String {
        rut::format_canonical(self.0.as_str())
    }

    /// Consume the value, returning the normalized string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Rut {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Rut {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
