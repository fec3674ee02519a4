//! Data model for the survey insight pipeline

pub mod insight;
pub mod submission;

pub use insight::{CatDog, Certainty, HairLength, InsightRecord, Insights, SummaryStatistics};
pub use submission::{AnswerEntry, SurveySubmission};
