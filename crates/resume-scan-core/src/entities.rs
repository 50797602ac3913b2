//! Naive contact detection over whitespace-delimited tokens.
//!
//! Nothing here validates an address or a number. A token "looks like an
//! email" when it contains `@`, and "looks like a phone number" when it has
//! a digit and is longer than 8 characters. Punctuation stuck to a token
//! (`john@x.com,`) is kept as-is.

/// Minimum token length (exclusive) for a phone-like token.
const PHONE_MIN_LEN: usize = 8;

/// Whether `token` contains an `@`.
pub fn is_email_like(token: &str) -> bool {
    token.contains('@')
}

/// Whether `token` contains an ASCII digit and is longer than 8 characters.
pub fn is_phone_like(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit()) && token.chars().count() > PHONE_MIN_LEN
}

/// All email-like tokens of `text`, in text order, duplicates kept.
pub fn email_like_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|t| is_email_like(t))
        .map(str::to_string)
        .collect()
}

/// All phone-like tokens of `text`, in text order, duplicates kept.
pub fn phone_like_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|t| is_phone_like(t))
        .map(str::to_string)
        .collect()
}
