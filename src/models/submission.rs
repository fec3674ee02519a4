//! Validated survey submission types
//!
//! A `SurveySubmission` only exists after the validator has accepted the
//! raw payload, so the invariants (10 answers, question numbers forming
//! the set {1..10}, values in 1..=7) hold by construction. Nothing here
//! is mutated after validation.

use serde::Serialize;

/// One answered survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerEntry {
    /// Question number, 1..=10, unique within the submission
    pub question_number: u8,
    /// Likert-style response, 1..=7
    pub question_value: u8,
}

/// A validated survey submission for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveySubmission {
    /// Submitting user identifier (at least 5 characters)
    pub user_id: String,
    /// Exactly 10 answers, kept in the order they arrived
    pub answers: Vec<AnswerEntry>,
}

impl SurveySubmission {
    /// Answer values in submission order
    pub fn question_values(&self) -> Vec<u8> {
        self.answers.iter().map(|a| a.question_value).collect()
    }
}
