//! resume-scan-core: Backend-independent text analysis.
//!
//! This crate turns already-extracted document text into the numbers and
//! naive matches reported by resume-scan: word/character/line counts, a short
//! preview, email-like and phone-like tokens, and hits against a fixed skill
//! vocabulary. It knows nothing about PDFs.

pub mod analysis;
pub mod entities;
pub mod skills;
pub mod stats;

pub use analysis::{PHONE_REPORT_LIMIT, TextAnalysis, analyze};
pub use entities::{email_like_tokens, is_email_like, is_phone_like, phone_like_tokens};
pub use skills::{SKILL_KEYWORDS, SkillKeyword, detect_skills};
pub use stats::{PREVIEW_CHARS, TextStats, preview};
