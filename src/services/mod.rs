//! Pipeline services
//!
//! Validator and insight engine are pure; the description generator is
//! the only component with external I/O. The pipeline sequences them.

pub mod description_generator;
pub mod insight_engine;
pub mod model_client;
pub mod pipeline;
pub mod validator;

pub use description_generator::DescriptionGenerator;
pub use model_client::{HttpTextGenerator, TextGenerator};
pub use pipeline::SurveyPipeline;
