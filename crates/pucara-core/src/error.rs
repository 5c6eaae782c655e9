//! # Error Types
//!
//! Structured error hierarchy for the Pucara toolkit, built on `thiserror`.
//!
//! The pure functions in [`crate::rut`] and [`crate::temporal`] never return
//! errors: a malformed RUT is reported as `false` and the form layer turns
//! that into a validation message. Errors only appear at typed boundaries,
//! where a value is promoted into a domain type ([`crate::Rut`], a parsed
//! date) or where configuration and files are loaded.

use thiserror::Error;

/// Top-level error type for the Pucara toolkit.
#[derive(Error, Debug)]
pub enum PucaraError {
    /// A value failed domain validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or was rejected.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A value could not be promoted into a validated domain type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input does not have the shape of a RUT (7-8 digit body plus a
    /// digit or `K`) after normalization.
    #[error("malformed RUT: {0:?}")]
    MalformedRut(String),

    /// The input is shaped like a RUT but its check character is wrong.
    #[error("RUT {rut:?} has check character {found}, expected {expected}")]
    CheckDigitMismatch {
        /// The input as supplied.
        rut: String,
        /// Check character computed from the body.
        expected: char,
        /// Check character supplied in the input.
        found: char,
    },

    /// The input is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
