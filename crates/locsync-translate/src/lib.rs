//! Talking to the translation backend and cleaning up what it returns.

pub mod openai;
pub mod sanitize;

pub use locsync_core::BackendError;
pub use openai::{OpenAiOptions, OpenAiTranslator};
pub use sanitize::strip_code_fences;

/// One request per (text, locale) pair; no batching, no retries.
pub trait Translator {
    fn translate(&mut self, text: &str, locale: &str) -> Result<String, BackendError>;
}
