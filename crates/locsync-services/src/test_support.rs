use std::fs;
use std::path::Path;

use locsync_core::BackendError;
use locsync_translate::Translator;

pub fn write_rel(root: &Path, rel: &str, content: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().expect("relative path has a parent")).expect("create dirs");
    fs::write(p, content).expect("write fixture");
}

pub fn read_rel(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).expect("read output")
}

/// Answers `[locale] text` wrapped in a fenced block, the way chat models
/// tend to. Texts containing `fail_marker` get an empty answer.
#[derive(Default)]
pub struct ScriptedTranslator {
    pub fail_marker: Option<String>,
    pub calls: Vec<(String, String)>,
}

impl ScriptedTranslator {
    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.to_string()),
            calls: Vec::new(),
        }
    }
}

impl Translator for ScriptedTranslator {
    fn translate(&mut self, text: &str, locale: &str) -> Result<String, BackendError> {
        self.calls.push((text.to_string(), locale.to_string()));
        if let Some(marker) = &self.fail_marker {
            if text.contains(marker.as_str()) {
                return Err(BackendError::EmptyResponse);
            }
        }
        Ok(format!("```text\n[{locale}] {text}\n```"))
    }
}
