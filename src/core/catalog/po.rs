//! Streaming gettext `.po` reader.
//!
//! Entries are read lazily: only the header is parsed when the file is
//! opened, each call to [`CatalogReader::read_item`] consumes one more entry.
//!
//! Lines are decoded as UTF-8. A line that is not valid UTF-8 is decoded as
//! ISO-8859-1, the usual charset of legacy catalogs, so every byte maps to a
//! character and nothing aborts on encoding alone.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use super::{CatalogError, CatalogHeader, CatalogReader, CatalogSource, TranslationItem};

/// Opens `.po` files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoSource;

impl CatalogSource for PoSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn CatalogReader>> {
        Ok(Box::new(PoReader::open(path)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    IdPlural,
    Str,
    StrPlural(usize),
}

#[derive(Debug, Default)]
struct RawEntry {
    line: usize,
    context: Option<String>,
    msgid: Option<String>,
    msgid_plural: Option<String>,
    msgstr: Option<String>,
    msgstr_plural: BTreeMap<usize, String>,
}

impl RawEntry {
    fn has_translation(&self) -> bool {
        self.msgstr.is_some() || !self.msgstr_plural.is_empty()
    }

    fn is_header(&self) -> bool {
        self.context.is_none() && self.msgid.as_deref() == Some("") && self.msgid_plural.is_none()
    }

    fn push(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Context => self.context.get_or_insert_with(String::new),
            Field::Id => self.msgid.get_or_insert_with(String::new),
            Field::IdPlural => self.msgid_plural.get_or_insert_with(String::new),
            Field::Str => self.msgstr.get_or_insert_with(String::new),
            Field::StrPlural(index) => self.msgstr_plural.entry(index).or_default(),
        };
        target.push_str(text);
    }

    fn into_item(self) -> Result<TranslationItem, CatalogError> {
        let Some(msgid) = self.msgid else {
            return Err(syntax(self.line, "entry has no msgid"));
        };

        match self.msgid_plural {
            Some(msgid_plural) => {
                if self.msgstr.is_some() {
                    return Err(syntax(self.line, "plural entry uses msgstr instead of msgstr[N]"));
                }
                Ok(TranslationItem::Plural {
                    context: self.context,
                    source: vec![msgid, msgid_plural],
                    translations: self.msgstr_plural,
                })
            }
            None => {
                if !self.msgstr_plural.is_empty() {
                    return Err(syntax(self.line, "msgstr[N] without msgid_plural"));
                }
                Ok(TranslationItem::Singular {
                    context: self.context,
                    source: msgid,
                    translation: self.msgstr.unwrap_or_default(),
                })
            }
        }
    }
}

/// Lazy reader over a `.po` stream.
pub struct PoReader<R: BufRead> {
    reader: R,
    line_number: usize,
    pending_line: Option<String>,
    pending_item: Option<RawEntry>,
    header: Option<CatalogHeader>,
}

impl PoReader<BufReader<File>> {
    /// Open a catalog file and read its header.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: BufRead> PoReader<R> {
    /// Wrap a buffered stream and read its header.
    ///
    /// The first entry is the header when its `msgid` is empty, whatever its
    /// translation holds. A header that is absent or syntactically broken
    /// leaves [`CatalogReader::header`] returning `None`. Only I/O failures
    /// are returned as errors.
    pub fn from_reader(reader: R) -> io::Result<Self> {
        let mut po = Self {
            reader,
            line_number: 0,
            pending_line: None,
            pending_item: None,
            header: None,
        };

        match po.next_entry() {
            Ok(Some(entry)) if entry.is_header() => {
                po.header = Some(CatalogHeader::parse(entry.msgstr.as_deref().unwrap_or("")));
            }
            Ok(Some(entry)) => po.pending_item = Some(entry),
            Ok(None) | Err(CatalogError::Syntax { .. }) => {}
            Err(CatalogError::Io(err)) => return Err(err),
        }

        Ok(po)
    }

    fn next_line(&mut self) -> Result<Option<String>, CatalogError> {
        if let Some(line) = self.pending_line.take() {
            return Ok(Some(line));
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        let mut line = decode_line(buf);
        if self.line_number == 1 && line.starts_with(BOM) {
            line.remove(0);
        }
        Ok(Some(line))
    }

    fn next_entry(&mut self) -> Result<Option<RawEntry>, CatalogError> {
        let mut entry: Option<RawEntry> = None;
        let mut field: Option<Field> = None;

        while let Some(line) = self.next_line()? {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                if entry.is_some() {
                    break;
                }
                continue;
            }

            // Comments, flags, references and obsolete entries
            if trimmed.starts_with('#') {
                if entry.as_ref().is_some_and(RawEntry::has_translation) {
                    self.pending_line = Some(line);
                    break;
                }
                continue;
            }

            if trimmed.starts_with('"') {
                let (Some(current), Some(field)) = (entry.as_mut(), field) else {
                    return Err(syntax(self.line_number, "string continuation outside an entry"));
                };
                current.push(field, &unquote(trimmed, self.line_number)?);
                continue;
            }

            let (keyword, rest) = trimmed
                .split_once(char::is_whitespace)
                .unwrap_or((trimmed, ""));
            let next_field = parse_keyword(keyword)
                .ok_or_else(|| syntax(self.line_number, format!("unknown keyword '{}'", keyword)))?;

            let starts_entry = matches!(next_field, Field::Context | Field::Id);
            if starts_entry && entry.as_ref().is_some_and(RawEntry::has_translation) {
                self.pending_line = Some(line);
                break;
            }

            let current = entry.get_or_insert_with(|| RawEntry {
                line: self.line_number,
                ..Default::default()
            });
            current.push(next_field, &unquote(rest, self.line_number)?);
            field = Some(next_field);
        }

        match entry {
            Some(entry) if !entry.has_translation() => {
                Err(syntax(entry.line, "entry has no msgstr"))
            }
            entry => Ok(entry),
        }
    }
}

impl<R: BufRead> CatalogReader for PoReader<R> {
    fn header(&self) -> Option<&CatalogHeader> {
        self.header.as_ref()
    }

    fn read_item(&mut self) -> Result<Option<TranslationItem>, CatalogError> {
        let entry = match self.pending_item.take() {
            Some(entry) => Some(entry),
            None => self.next_entry()?,
        };
        entry.map(RawEntry::into_item).transpose()
    }
}

const BOM: char = '\u{feff}';

fn decode_line(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| err.into_bytes().into_iter().map(char::from).collect())
}

fn parse_keyword(keyword: &str) -> Option<Field> {
    match keyword {
        "msgctxt" => Some(Field::Context),
        "msgid" => Some(Field::Id),
        "msgid_plural" => Some(Field::IdPlural),
        "msgstr" => Some(Field::Str),
        _ => {
            let index = keyword.strip_prefix("msgstr[")?.strip_suffix(']')?;
            index.parse().ok().map(Field::StrPlural)
        }
    }
}

fn syntax(line: usize, message: impl Into<String>) -> CatalogError {
    CatalogError::Syntax {
        line,
        message: message.into(),
    }
}

/// Strip the surrounding quotes and resolve escape sequences in one pass.
fn unquote(raw: &str, line: usize) -> Result<String, CatalogError> {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| syntax(line, format!("expected a quoted string, found '{}'", raw)))?;

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => return Err(syntax(line, "dangling escape at end of string")),
        }
    }
    Ok(result)
}
