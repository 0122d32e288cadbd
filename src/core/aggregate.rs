use super::{
    catalog::TranslationItem,
    classify::{Classification, classify},
    report_set::FileRow,
    safety::SafetyPolicy,
};

/// Running counters for the file currently being scanned.
///
/// Created fresh for every file and sealed into a [`FileRow`] once the file's
/// items are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub translated: usize,
    pub untranslated: usize,
    pub disallowed: usize,
    pub total: usize,
}

impl FileCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Translated => self.translated += 1,
            Classification::Untranslated => self.untranslated += 1,
            Classification::Disallowed => self.disallowed += 1,
        }
        self.total += 1;
    }

    /// Classify every translation string of an item.
    ///
    /// Plural items contribute one classification per source form.
    pub fn add_item(&mut self, item: &TranslationItem, policy: &dyn SafetyPolicy) {
        for translation in item.translation_strings() {
            self.record(classify(translation, policy));
        }
    }

    pub fn seal(self, file_name: impl Into<String>) -> FileRow {
        FileRow {
            file_name: file_name.into(),
            translated: self.translated,
            untranslated: self.untranslated,
            disallowed: self.disallowed,
            total: self.total,
        }
    }
}
