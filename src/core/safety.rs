//! Markup-safety policy for translation strings.
//!
//! A translation may carry a restricted subset of HTML. Anything outside
//! that subset (scripts, images, event handlers, inline styles, script
//! URLs) makes the string disallowed. A tag left open at the end of the
//! string still counts as a tag, and HTML comments are never allowed.

use std::sync::LazyLock;

use regex::Regex;

/// Decides whether a translation string may be shown to users.
pub trait SafetyPolicy {
    fn is_safe(&self, text: &str) -> bool;
}

impl<F> SafetyPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_safe(&self, text: &str) -> bool {
        self(text)
    }
}

/// HTML tags a translation is allowed to contain.
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "abbr",
    "acronym",
    "address",
    "b",
    "bdo",
    "big",
    "blockquote",
    "br",
    "caption",
    "cite",
    "code",
    "col",
    "colgroup",
    "dd",
    "del",
    "dfn",
    "dl",
    "dt",
    "em",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "ins",
    "kbd",
    "li",
    "ol",
    "p",
    "pre",
    "q",
    "samp",
    "small",
    "span",
    "strong",
    "sub",
    "sup",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "tt",
    "ul",
    "var",
];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/)?\s*([A-Za-z][A-Za-z0-9]*)\b([^>]*)(>|$)").expect("valid tag regex")
});

static EVENT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[\s/])on[a-z]+\s*=").expect("valid attribute regex"));

static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[\s/])style\s*=").expect("valid attribute regex"));

static SCRIPT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(javascript|vbscript|data)\s*:").expect("valid protocol regex")
});

/// Default policy: only tags from [`ALLOWED_TAGS`], without event handlers,
/// inline styles or script URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPolicy;

impl SafetyPolicy for MarkupPolicy {
    fn is_safe(&self, text: &str) -> bool {
        // Cheap path for plain text
        if !text.contains('<') {
            return true;
        }
        if text.contains("<!--") {
            return false;
        }

        TAG_RE.captures_iter(text).all(|caps| {
            let name = caps[2].to_ascii_lowercase();
            if !ALLOWED_TAGS.contains(&name.as_str()) {
                return false;
            }
            let is_closing = caps.get(1).is_some();
            let attributes = caps.get(3).map_or("", |m| m.as_str());
            is_closing || is_safe_attributes(attributes)
        })
    }
}

fn is_safe_attributes(attributes: &str) -> bool {
    !EVENT_ATTR_RE.is_match(attributes)
        && !STYLE_ATTR_RE.is_match(attributes)
        && !SCRIPT_URL_RE.is_match(attributes)
}
