//! One-shot analysis of extracted text.

use crate::entities::{email_like_tokens, phone_like_tokens};
use crate::skills::detect_skills;
use crate::stats::{TextStats, preview};

/// Maximum number of phone-like tokens shown in a report.
pub const PHONE_REPORT_LIMIT: usize = 3;

/// Everything resume-scan derives from a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextAnalysis {
    /// Word, character, and line counts.
    pub stats: TextStats,
    /// The first 300 characters of the text.
    pub preview: String,
    /// Tokens containing `@`, in text order.
    pub emails: Vec<String>,
    /// All tokens with a digit and more than 8 characters, in text order.
    ///
    /// Reports only show the first [`PHONE_REPORT_LIMIT`]; see
    /// [`TextAnalysis::reported_phones`].
    pub phones: Vec<String>,
    /// Matched skill keywords, in vocabulary order.
    pub skills: Vec<&'static str>,
}

impl TextAnalysis {
    /// The phone-like tokens a report should show.
    pub fn reported_phones(&self) -> &[String] {
        &self.phones[..self.phones.len().min(PHONE_REPORT_LIMIT)]
    }
}

/// Analyze `text`. Pure and deterministic.
pub fn analyze(text: &str) -> TextAnalysis {
    TextAnalysis {
        stats: TextStats::from_text(text),
        preview: preview(text).to_string(),
        emails: email_like_tokens(text),
        phones: phone_like_tokens(text),
        skills: detect_skills(text),
    }
}
