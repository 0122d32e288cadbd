//! Common utility functions shared across the codebase.

/// Pick the singular or plural form for `count`, substituting `@count`.
///
/// # Examples
///
/// ```
/// use poreport::utils::format_plural;
///
/// assert_eq!(format_plural(1, "One file", "@count files"), "One file");
/// assert_eq!(format_plural(2, "One file", "@count files"), "2 files");
/// assert_eq!(format_plural(0, "One file", "@count files"), "0 files");
/// ```
pub fn format_plural(count: usize, singular: &str, plural: &str) -> String {
    let template = if count == 1 { singular } else { plural };
    template.replace("@count", &count.to_string())
}
