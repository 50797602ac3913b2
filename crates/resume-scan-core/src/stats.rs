//! Word, character, and line counts over extracted text.

/// Number of characters shown in the text preview.
pub const PREVIEW_CHARS: usize = 300;

/// Basic size statistics for a block of extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextStats {
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Length of the raw text in characters (Unicode scalar values).
    pub char_count: usize,
    /// Number of `\n`-separated lines that are not blank after trimming.
    pub line_count: usize,
}

impl TextStats {
    /// Compute statistics for `text`.
    ///
    /// Whitespace is counted as characters. Lines are split on `\n` only, so a
    /// trailing `\r` stays part of its line and is trimmed away when deciding
    /// whether the line is blank.
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            line_count: text.split('\n').filter(|line| !line.trim().is_empty()).count(),
        }
    }
}

/// Return the first [`PREVIEW_CHARS`] characters of `text`.
///
/// The cut is not word-aligned and may land mid-word.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
