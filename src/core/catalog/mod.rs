//! Catalog reading contract.
//!
//! The scan loop never touches catalog syntax directly. It asks a
//! [`CatalogSource`] to open a file, checks the reader's header, then pulls
//! [`TranslationItem`]s one at a time until the reader reports end-of-file.

use std::{collections::BTreeMap, fmt, io, path::Path};

mod po;

pub use po::{PoReader, PoSource};

/// One catalog entry, singular or plural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationItem {
    Singular {
        context: Option<String>,
        source: String,
        translation: String,
    },
    Plural {
        context: Option<String>,
        /// Source forms in declaration order (`msgid`, `msgid_plural`).
        /// The index of each form is its key into `translations`.
        source: Vec<String>,
        translations: BTreeMap<usize, String>,
    },
}

impl TranslationItem {
    pub fn is_plural(&self) -> bool {
        matches!(self, TranslationItem::Plural { .. })
    }

    /// Translation strings to classify, one per source form.
    ///
    /// A plural item yields one string per source-form key; a key without a
    /// matching translation yields the empty string.
    pub fn translation_strings(&self) -> Vec<&str> {
        match self {
            TranslationItem::Singular { translation, .. } => vec![translation.as_str()],
            TranslationItem::Plural {
                source,
                translations,
                ..
            } => (0..source.len())
                .map(|key| translations.get(&key).map(String::as_str).unwrap_or(""))
                .collect(),
        }
    }
}

/// Parsed catalog header (the metadata entry with an empty `msgid`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogHeader {
    fields: Vec<(String, String)>,
}

impl CatalogHeader {
    /// Parse `Key: Value` lines from a header translation.
    ///
    /// Lines without that shape are skipped, so an empty header translation
    /// gives a header with no fields.
    pub fn parse(text: &str) -> Self {
        let fields = text
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                let key = key.trim();
                if key.is_empty() || key.contains(char::is_whitespace) {
                    return None;
                }
                Some((key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { fields }
    }

    /// Case-insensitive field lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn language(&self) -> Option<&str> {
        self.get("Language").filter(|v| !v.is_empty())
    }
}

/// Error raised while pulling items from an open catalog.
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Syntax { line: usize, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "{}", err),
            CatalogError::Syntax { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Syntax { .. } => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

/// An opened catalog: a header check plus a lazy, finite item sequence.
pub trait CatalogReader {
    /// The catalog header, or `None` when it is missing or malformed.
    fn header(&self) -> Option<&CatalogHeader>;

    /// Next item, or `Ok(None)` at end-of-file.
    fn read_item(&mut self) -> Result<Option<TranslationItem>, CatalogError>;
}

/// Capability to open catalog files.
pub trait CatalogSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn CatalogReader>>;
}
