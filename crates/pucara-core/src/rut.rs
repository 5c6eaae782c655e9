//! # RUT Validation and Formatting
//!
//! Pure functions over Chilean RUT (Rol Único Tributario) text as it arrives
//! from owner-registration and booking forms.
//!
//! A RUT is a 7-8 digit body followed by a check character (`0`-`9` or `K`)
//! computed from the body with the Módulo 11 weighted checksum. Users type it
//! in several shapes, all of which normalize to the same value:
//!
//! | Input            | Normalized   | Canonical        |
//! |------------------|--------------|------------------|
//! | `12345678-5`     | `123456785`  | `12.345.678-5`   |
//! | `12.345.678-5`   | `123456785`  | `12.345.678-5`   |
//! | ` 1.000.005-k `  | `1000005K`   | `1.000.005-K`    |
//!
//! Every function is total. Missing input is accepted as `None` alongside
//! plain `&str`, and malformed input yields `false` or an empty/unchanged
//! string instead of an error. Callers promote a value into the validated
//! [`Rut`](crate::Rut) type when they need a typed guarantee.

/// Smallest number of digits in a RUT body.
pub const MIN_BODY_LEN: usize = 7;

/// Largest number of digits in a RUT body.
pub const MAX_BODY_LEN: usize = 8;

/// Longest cleaned input accepted while typing: a full body plus the check
/// character.
pub const MAX_TYPED_LEN: usize = MAX_BODY_LEN + 1;

/// Longest string [`format_while_typing`] can produce (`12.345.678-9`).
pub const MAX_TYPED_DISPLAY_LEN: usize = 12;

const MIN_CANONICAL_LEN: usize = MIN_BODY_LEN + 1;

/// Strip periods, hyphens and whitespace, then upper-case.
///
/// ```
/// assert_eq!(pucara_core::rut::normalize("12.345.678-5"), "123456785");
/// assert_eq!(pucara_core::rut::normalize(None), "");
/// ```
pub fn normalize<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        Some(raw) => raw
            .chars()
            .filter(|c| !is_separator(*c))
            .collect::<String>()
            .to_uppercase(),
        None => String::new(),
    }
}

/// Cheap shape check: 7 or 8 digits followed by a digit or `K`, after
/// normalization. Says nothing about the checksum.
pub fn has_valid_shape<'a>(input: impl Into<Option<&'a str>>) -> bool {
    shape_ok(&normalize(input))
}

/// Compute the Módulo 11 check character for a body of decimal digits.
///
/// Digits are weighted right to left with the cycle 2, 3, 4, 5, 6, 7, 2, ...
/// and the weighted sum is reduced modulo 11. Characters that are not ASCII
/// digits are skipped; callers are expected to pass digits only.
pub fn compute_check_digit(body: &str) -> char {
    let remainder = body
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .zip((2..=7).cycle())
        .fold(0, |acc, (digit, weight)| (acc + digit * weight) % 11);
    check_char_for_remainder(remainder)
}

/// Full validation: shape plus checksum.
///
/// Returns `false` for `None`, empty, malformed, or wrongly-checked input.
pub fn is_valid<'a>(input: impl Into<Option<&'a str>>) -> bool {
    let normalized = normalize(input);
    if !shape_ok(&normalized) {
        return false;
    }
    match split_check(&normalized) {
        Some((body, check)) => check.eq_ignore_ascii_case(&compute_check_digit(body)),
        None => false,
    }
}

/// Canonical dotted form, e.g. `12.345.678-5`.
///
/// Inputs shorter than a minimal RUT after normalization are returned in
/// normalized form without any dotting.
pub fn format_canonical<'a>(input: impl Into<Option<&'a str>>) -> String {
    let normalized = normalize(input);
    if normalized.chars().count() < MIN_CANONICAL_LEN {
        return normalized;
    }
    match split_check(&normalized) {
        Some((body, check)) => format!("{}-{check}", group_thousands(body)),
        None => normalized,
    }
}

/// Progressive mask applied on every keystroke of a RUT input field.
///
/// Keeps only digits and `K`, caps the value at nine characters and, once
/// there are at least two, renders everything but the last character as a
/// dotted body and the last one as the check character. A lone character is
/// returned untouched so it is never shown as a check character.
///
/// ```
/// use pucara_core::rut::format_while_typing;
///
/// assert_eq!(format_while_typing("1"), "1");
/// assert_eq!(format_while_typing("1234"), "123-4");
/// assert_eq!(format_while_typing("12345678k"), "12.345.678-K");
/// ```
pub fn format_while_typing<'a>(raw: impl Into<Option<&'a str>>) -> String {
    let cleaned: String = raw
        .into()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_TYPED_LEN)
        .collect();

    if cleaned.len() <= 1 {
        return cleaned;
    }
    match split_check(&cleaned) {
        Some((body, check)) => format!("{}-{check}", group_thousands(body)),
        None => cleaned,
    }
}

/// Lenient display form for stored values in owner and patient tables.
///
/// Unlike [`format_canonical`] this keeps the stored case and starts dotting
/// from two characters, returning very short values exactly as stored.
pub fn format_for_display<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(raw) = input.into() else {
        return String::new();
    };
    let stripped: String = raw.chars().filter(|c| !is_separator(*c)).collect();
    if stripped.chars().count() < 2 {
        return raw.to_string();
    }
    match split_check(&stripped) {
        Some((body, check)) => format!("{}-{check}", group_digit_runs(body)),
        None => raw.to_string(),
    }
}

/// Owner-list search over a stored RUT.
///
/// Matches a plain case-insensitive substring, and also compares normalized
/// forms so a formatted query finds an unformatted record and vice versa.
/// A blank query matches everything.
pub fn matches_search<'a>(rut: impl Into<Option<&'a str>>, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let Some(rut) = rut.into() else {
        return false;
    };
    if rut.to_lowercase().contains(&query.to_lowercase()) {
        return true;
    }
    let needle = normalize(query);
    !needle.is_empty() && normalize(rut).contains(&needle)
}

/// Periods, hyphens and the whitespace set of the clinic's web forms.
///
/// That set includes U+FEFF (a pasted byte-order mark) and excludes U+0085,
/// so it differs from [`char::is_whitespace`].
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '.' | '-'
            | '\t'
            | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn shape_ok(normalized: &str) -> bool {
    let Some((&check, body)) = normalized.as_bytes().split_last() else {
        return false;
    };
    (MIN_BODY_LEN..=MAX_BODY_LEN).contains(&body.len())
        && body.iter().all(u8::is_ascii_digit)
        && (check.is_ascii_digit() || check == b'K')
}

/// Split into (body, trailing character). `None` only for the empty string.
fn split_check(value: &str) -> Option<(&str, char)> {
    let check = value.chars().next_back()?;
    Some((&value[..value.len() - check.len_utf8()], check))
}

fn check_char_for_remainder(remainder: u32) -> char {
    match remainder % 11 {
        0 => '0',
        1 => 'K',
        r => char::from_digit(11 - r, 10).unwrap_or('0'),
    }
}

/// Insert `.` every three characters counting from the right.
fn group_thousands(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped
}

/// Insert `.` before every trailing group of three digits in each digit run
/// that follows a letter, digit or underscore. Other characters are kept in
/// place, so `ABC12345` becomes `ABC12.345`.
fn group_digit_runs(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_digit() && is_word_char(chars[i - 1]) {
            let run = chars[i..].iter().take_while(|d| d.is_ascii_digit()).count();
            if run % 3 == 0 {
                grouped.push('.');
            }
        }
        grouped.push(*c);
    }
    grouped
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
