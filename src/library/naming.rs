//! Numbered filename convention (`pdf01.pdf`, `pdf7.PDF`, `pdf120.pdf`).

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};

use crate::config::ProbeSettings;

/// A filename that matched the convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedFile {
    /// Filename as found on disk
    pub filename: String,
    /// Digit run as written, leading zeros kept
    pub token: String,
}

impl NumberedFile {
    /// Compare by numeric value of the token, then by filename.
    ///
    /// Works on the digit string directly so arbitrarily long runs never overflow.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        let a = self.token.trim_start_matches('0');
        let b = other.token.trim_start_matches('0');
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.filename.cmp(&other.filename))
    }
}

/// Case-insensitive `^<prefix>([0-9]+)\.<ext>$` matcher
#[derive(Debug, Clone)]
pub struct NamingPattern {
    regex: Regex,
}

impl NamingPattern {
    /// Build the matcher for a prefix and extension
    pub fn new(prefix: &str, extension: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"^{}([0-9]+)\.{}$",
            regex::escape(prefix),
            regex::escape(extension.trim_start_matches('.'))
        );
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// Build the matcher from probe settings
    pub fn from_settings(settings: &ProbeSettings) -> Result<Self, regex::Error> {
        Self::new(&settings.prefix, &settings.extension)
    }

    /// Match a filename, extracting its number token
    pub fn parse(&self, filename: &str) -> Option<NumberedFile> {
        let captures = self.regex.captures(filename)?;
        Some(NumberedFile {
            filename: filename.to_string(),
            token: captures.get(1)?.as_str().to_string(),
        })
    }

    /// Keep matching names and sort them by number
    pub fn select_sorted<I, S>(&self, names: I) -> Vec<NumberedFile>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files: Vec<_> = names
            .into_iter()
            .filter_map(|name| self.parse(name.as_ref()))
            .collect();
        files.sort_by(NumberedFile::numeric_cmp);
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> NamingPattern {
        NamingPattern::new("pdf", "pdf").unwrap()
    }

    #[test]
    fn test_parse_matches_case_insensitive() {
        let p = pattern();

        assert_eq!(p.parse("pdf03.pdf").unwrap().token, "03");
        assert_eq!(p.parse("PDF10.Pdf").unwrap().token, "10");
        assert!(p.parse("pdf.pdf").is_none());
        assert!(p.parse("notes01.pdf").is_none());
        assert!(p.parse("pdf01.pdf.bak").is_none());
        assert!(p.parse("xpdf01.pdf").is_none());
        assert!(p.parse("pdf\u{0663}.pdf").is_none());
        assert!(p.parse("pdf\u{FF11}.pdf").is_none());
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        let files = pattern().select_sorted(["pdf\u{0663}.pdf", "pdf10.pdf", "pdf3.pdf"]);
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();

        assert_eq!(names, vec!["pdf3.pdf", "pdf10.pdf"]);
    }

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let files = pattern().select_sorted(["pdf10.pdf", "pdf9.pdf", "pdf02.pdf", "readme.txt"]);
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();

        assert_eq!(names, vec!["pdf02.pdf", "pdf9.pdf", "pdf10.pdf"]);
    }

    #[test]
    fn test_sort_handles_long_digit_runs() {
        let files = pattern().select_sorted([
            "pdf100000000000000000000000.pdf",
            "pdf99999999999999999999999.pdf",
        ]);

        assert_eq!(files[0].filename, "pdf99999999999999999999999.pdf");
    }

    #[test]
    fn test_prefix_is_escaped() {
        let p = NamingPattern::new("a.b", "pdf").unwrap();

        assert!(p.parse("a.b1.pdf").is_some());
        assert!(p.parse("axb1.pdf").is_none());
    }
}
