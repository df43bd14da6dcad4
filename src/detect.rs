//! Text language detection.
//!
//! The groupers only see the [`LanguageDetector`] trait; [`LinguaDetector`]
//! is the implementation used by the binary.

use lingua::{LanguageDetector as LinguaModel, LanguageDetectorBuilder};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("no text to detect a language from")]
    EmptyText,

    #[error("language could not be determined")]
    Undetermined,
}

pub trait LanguageDetector: Send + Sync {
    /// Returns the lowercase ISO 639-1 code of the language of `text`.
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

pub struct LinguaDetector {
    model: LinguaModel,
}

impl LinguaDetector {
    pub fn new() -> Self {
        Self {
            model: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for LinguaDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::EmptyText);
        }

        self.model
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string())
            .ok_or(DetectionError::Undetermined)
    }
}
