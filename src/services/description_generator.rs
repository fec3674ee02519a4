//! Natural-language description generation
//!
//! Selects one of two static templates by the mean answer value,
//! prepends the system prompt, and asks the model for a single
//! continuation. Any template-read or model failure aborts the whole
//! request; no partial insight record survives it.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::services::model_client::{GenerationParams, GeneratorError, TextGenerator};

/// Template selected when the mean is above 4. The naming looks
/// inverted against the threshold; it matches the deployed template
/// pair and must stay as-is.
pub const SHORT_HAIR_TEMPLATE: &str = "the_value_of_short_hair.txt";
/// Template selected when the mean is 4 or below
pub const LONG_HAIR_TEMPLATE: &str = "the_value_of_long_hair.txt";
/// System prompt prepended to every model input
pub const SYSTEM_PROMPT: &str = "system_prompt.txt";

/// Description generation errors
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("Failed to read template {name}: {source}")]
    Template {
        name: String,
        source: std::io::Error,
    },

    #[error("Model invocation failed: {0}")]
    Model(#[from] GeneratorError),
}

/// Generates insight descriptions from static templates and a model
pub struct DescriptionGenerator {
    templates_dir: PathBuf,
    model: Arc<dyn TextGenerator>,
}

impl DescriptionGenerator {
    pub fn new(templates_dir: impl Into<PathBuf>, model: Arc<dyn TextGenerator>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            model,
        }
    }

    /// Template file name selected for a given mean (strict > 4 boundary)
    pub fn template_for_mean(mean: f64) -> &'static str {
        if mean > 4.0 {
            SHORT_HAIR_TEMPLATE
        } else {
            LONG_HAIR_TEMPLATE
        }
    }

    /// Produce a description for a submission whose answers average `mean`
    ///
    /// Model input is the system prompt, a newline, then the selected
    /// template. Returns the first generated sequence verbatim.
    pub async fn generate_description(&self, mean: f64) -> Result<String, DescriptionError> {
        let template_name = Self::template_for_mean(mean);
        let main_content = self.read_template(template_name).await?;
        let system_prompt = self.read_template(SYSTEM_PROMPT).await?;

        let input_text = format!("{}\n{}", system_prompt, main_content);

        let sequences = self
            .model
            .generate(&input_text, GenerationParams::default())
            .await
            .map_err(|e| {
                error!("Error generating description: {}", e);
                e
            })?;

        sequences
            .into_iter()
            .next()
            .ok_or(DescriptionError::Model(GeneratorError::EmptyResponse))
    }

    async fn read_template(&self, name: &str) -> Result<String, DescriptionError> {
        tokio::fs::read_to_string(self.templates_dir.join(name))
            .await
            .map_err(|source| {
                error!("Error generating description: failed to read {}: {}", name, source);
                DescriptionError::Template {
                    name: name.to_string(),
                    source,
                }
            })
    }
}

impl std::fmt::Debug for DescriptionGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionGenerator")
            .field("templates_dir", &self.templates_dir)
            .finish_non_exhaustive()
    }
}

/// Write the three template resources into `dir` (test fixtures)
#[cfg(test)]
pub fn write_test_templates(dir: &std::path::Path) {
    std::fs::write(dir.join(SHORT_HAIR_TEMPLATE), "Short hair is practical.").unwrap();
    std::fs::write(dir.join(LONG_HAIR_TEMPLATE), "Long hair is luxurious.").unwrap();
    std::fs::write(dir.join(SYSTEM_PROMPT), "Describe this pet owner.").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Records the prompt it was given and echoes a canned reply
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        reply: Result<Vec<String>, GeneratorError>,
    }

    impl RecordingGenerator {
        fn ok(reply: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Ok(vec![reply.to_string()]),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(
            &self,
            input_text: &str,
            params: GenerationParams,
        ) -> Result<Vec<String>, GeneratorError> {
            assert_eq!(params.max_length, 150);
            assert_eq!(params.num_return_sequences, 1);
            assert!(params.truncation);
            self.prompts.lock().unwrap().push(input_text.to_string());
            match &self.reply {
                Ok(texts) => Ok(texts.clone()),
                Err(_) => Err(GeneratorError::EmptyResponse),
            }
        }
    }

    #[test]
    fn template_selection_boundary_is_strict() {
        assert_eq!(
            DescriptionGenerator::template_for_mean(4.01),
            SHORT_HAIR_TEMPLATE
        );
        assert_eq!(
            DescriptionGenerator::template_for_mean(4.0),
            LONG_HAIR_TEMPLATE
        );
        assert_eq!(
            DescriptionGenerator::template_for_mean(3.2),
            LONG_HAIR_TEMPLATE
        );
    }

    #[tokio::test]
    async fn prompt_is_system_prompt_then_template() {
        let dir = tempdir().unwrap();
        write_test_templates(dir.path());

        let model = Arc::new(RecordingGenerator::ok("a generated description"));
        let generator = DescriptionGenerator::new(dir.path(), model.clone());

        let description = generator.generate_description(5.0).await.unwrap();
        assert_eq!(description, "a generated description");

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(
            prompts.as_slice(),
            ["Describe this pet owner.\nShort hair is practical."]
        );
    }

    #[tokio::test]
    async fn low_mean_reads_long_hair_template() {
        let dir = tempdir().unwrap();
        write_test_templates(dir.path());

        let model = Arc::new(RecordingGenerator::ok("text"));
        let generator = DescriptionGenerator::new(dir.path(), model.clone());

        generator.generate_description(4.0).await.unwrap();
        let prompts = model.prompts.lock().unwrap();
        assert!(prompts[0].ends_with("Long hair is luxurious."));
    }

    #[tokio::test]
    async fn missing_template_is_a_template_error() {
        let dir = tempdir().unwrap();
        // no templates written

        let model = Arc::new(RecordingGenerator::ok("text"));
        let generator = DescriptionGenerator::new(dir.path(), model);

        let err = generator.generate_description(5.0).await.unwrap_err();
        assert!(matches!(err, DescriptionError::Template { .. }));
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        let dir = tempdir().unwrap();
        write_test_templates(dir.path());

        let model = Arc::new(RecordingGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: Err(GeneratorError::EmptyResponse),
        });
        let generator = DescriptionGenerator::new(dir.path(), model);

        let err = generator.generate_description(5.0).await.unwrap_err();
        assert!(matches!(err, DescriptionError::Model(_)));
    }
}
