use serde::{Deserialize, Serialize};

/// Trivia category. Seeded by migration and read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Display label, e.g. "Science"
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Trivia question. The serialized form of this struct is exactly the wire
/// projection `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Unique question identifier
    pub id: i64,
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Decimal string form of a category id. Compared as a string throughout;
    /// never validated against the categories table.
    pub category: String,
    /// Difficulty score
    pub difficulty: i64,
}

/// Fields of a question not yet assigned an id.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}
