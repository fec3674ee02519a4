//! Submission validation
//!
//! Checks the raw JSON payload against the survey schema and business
//! rules. Checks run in a fixed order and stop at the first violation
//! (short-circuit, not a full error report); each rejected field is
//! logged as a warning before the error propagates. Pure apart from
//! logging.

use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

use crate::models::{AnswerEntry, SurveySubmission};

/// Number of answers a submission must carry
pub const SURVEY_LENGTH: usize = 10;
/// Minimum accepted user_id length
pub const MIN_USER_ID_LEN: usize = 5;

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// user_id missing, not a string, or shorter than 5 characters
    #[error("Invalid user_id: must be a string with at least 5 characters.")]
    InvalidUserId,

    /// survey_results missing, not an array, or not exactly 10 entries
    #[error("Invalid survey_results: must contain exactly 10 objects.")]
    InvalidSurveyShape,

    /// question_number missing, not an integer, or outside 1..=10
    #[error("question_number must be between 1 and 10.")]
    QuestionNumberOutOfRange,

    /// The same question_number appeared twice; carries the first
    /// repeated number in submission order
    #[error("Duplicate question_number found: {0}.")]
    DuplicateQuestionNumber(u8),

    /// question_value missing, not an integer, or outside 1..=7
    #[error("question_value must be between 1 and 7.")]
    QuestionValueOutOfRange,
}

/// Validate a raw request payload into a `SurveySubmission`
///
/// Check order: user_id, survey_results shape, then per entry in
/// submission order: number range, duplicate number, value range.
pub fn validate(payload: &Value) -> Result<SurveySubmission, ValidationError> {
    let user_id = match payload.get("user_id").and_then(Value::as_str) {
        Some(id) if id.chars().count() >= MIN_USER_ID_LEN => id.to_string(),
        other => {
            warn!("Invalid user_id: {:?}", other);
            return Err(ValidationError::InvalidUserId);
        }
    };

    let results = match payload.get("survey_results").and_then(Value::as_array) {
        Some(list) if list.len() == SURVEY_LENGTH => list,
        other => {
            warn!("Invalid survey_results: {:?}", other);
            return Err(ValidationError::InvalidSurveyShape);
        }
    };

    let mut seen = HashSet::with_capacity(SURVEY_LENGTH);
    let mut answers = Vec::with_capacity(SURVEY_LENGTH);

    for entry in results {
        let number = match entry.get("question_number").and_then(Value::as_i64) {
            Some(n) if (1..=10).contains(&n) => n as u8,
            other => {
                warn!("Invalid question_number: {:?}", other);
                return Err(ValidationError::QuestionNumberOutOfRange);
            }
        };

        if !seen.insert(number) {
            warn!("Duplicate question_number found: {}.", number);
            return Err(ValidationError::DuplicateQuestionNumber(number));
        }

        let value = match entry.get("question_value").and_then(Value::as_i64) {
            Some(v) if (1..=7).contains(&v) => v as u8,
            other => {
                warn!("Invalid question_value: {:?}", other);
                return Err(ValidationError::QuestionValueOutOfRange);
            }
        };

        answers.push(AnswerEntry {
            question_number: number,
            question_value: value,
        });
    }

    Ok(SurveySubmission { user_id, answers })
}
