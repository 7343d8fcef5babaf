//! Record types for certifications, categories and flashcards.

use chrono::{DateTime, Utc};

/// Top-level grouping of study material, such as a professional exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: i64,
    pub name: String,
}

/// Named subdivision of a certification's material.
///
/// `(cert_id, name)` is the natural key used by ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub cert_id: i64,
    pub name: String,
}

/// A single question/answer study unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub id: i64,
    pub cat_id: i64,
    pub question: String,
    pub answer: String,
    /// Inert: nothing increments this yet.
    pub view_count: i64,
    /// Inert: set to the creation time and never touched again.
    pub last_viewed_at: DateTime<Utc>,
}

/// Question/answer pair read from one CSV row, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
}

impl NewFlashcard {
    /// Build from a CSV record. Fields past the second are ignored.
    ///
    /// Returns `None` for rows with fewer than two fields.
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let question = fields.next()?;
        let answer = fields.next()?;
        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}
