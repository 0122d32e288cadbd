use serde::Serialize;

use super::safety::SafetyPolicy;

/// Status of a single translation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Translated,
    Untranslated,
    Disallowed,
}

/// Classify one translation string.
///
/// The safety check wins over emptiness: an unsafe string is disallowed even
/// if it would otherwise count as untranslated.
pub fn classify(translation: &str, policy: &dyn SafetyPolicy) -> Classification {
    if !policy.is_safe(translation) {
        Classification::Disallowed
    } else if !translation.is_empty() {
        Classification::Translated
    } else {
        Classification::Untranslated
    }
}
