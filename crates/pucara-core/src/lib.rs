//! # pucara-core — Owner Identity and Display Primitives
//!
//! Shared building blocks for the Pucara veterinary clinic: validation and
//! formatting of the Chilean RUT that keys every owner record, and the
//! calendar-date helpers used wherever appointments and patients are listed.
//!
//! ## Key Design Principles
//!
//! 1. **Total functions at the form boundary.** Everything in [`rut`] and
//!    [`temporal`] accepts `&str` or `None` and answers with a `bool` or a
//!    string. Malformed input is an ordinary answer, not an error.
//!
//! 2. **Validated newtype at the records boundary.** [`Rut`] holds the
//!    normalized key the owner-records API uses. It can only be built
//!    through checksum validation, including via `Deserialize`.
//!
//! 3. **Calendar dates stay calendar dates.** Dates are re-arranged as text
//!    and never shifted through a timezone offset.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; `expect` only where a
//!   constructor has already established the invariant.
//! - No I/O and no shared state; every function is safe to call from any
//!   number of threads.

pub mod error;
pub mod identity;
pub mod rut;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{PucaraError, ValidationError};
pub use identity::Rut;
pub use rut::{
    compute_check_digit, format_canonical, format_for_display, format_while_typing,
    has_valid_shape, is_valid, matches_search, normalize,
};
