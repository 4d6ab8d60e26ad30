//! Short code generation.
//!
//! Codes are built from a random 128-bit value encoded in base 62
//! (`0-9A-Za-z`, most significant digit first) and truncated to
//! [`CODE_LENGTH`] characters.
//!
//! Truncation throws away most of the entropy, so two calls can produce the
//! same code. Uniqueness is enforced by the unique index on `urls.short_code`
//! and the retry loop in [`crate::application::services::UrlService`], not
//! here.

/// Base-62 digit alphabet.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 7;

/// Fixed route segments that can never be used as short links.
///
/// Only `shorten` has [`CODE_LENGTH`] characters and can actually be
/// generated; the shorter names guard codes inserted by other means and any
/// future change to the code length.
const RESERVED_CODES: &[&str] = &["shorten", "stats", "health", "docs"];

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a new candidate code. Has no side effects.
    fn generate(&self) -> String;
}

/// Random base-62 generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base62CodeGenerator;

impl CodeGenerator for Base62CodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a [`CODE_LENGTH`]-character code from a random 128-bit value.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let value: u128 = rand::random();
    code_from_value(value)
}

/// Encodes `value` and cuts it to exactly [`CODE_LENGTH`] characters.
///
/// Encodings shorter than the code length are left-padded with `0`.
fn code_from_value(value: u128) -> String {
    let encoded = encode_base62(value);

    if encoded.len() < CODE_LENGTH {
        return format!("{encoded:0>width$}", width = CODE_LENGTH);
    }

    encoded[..CODE_LENGTH].to_string()
}

/// Encodes an integer in base 62, most significant digit first.
pub fn encode_base62(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(22);
    while value > 0 {
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    // Alphabet is ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Returns true if `code` collides with a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
