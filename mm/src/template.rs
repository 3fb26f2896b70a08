//! Template loading and placeholder substitution

use std::fs;
use std::path::Path;

use crate::csv::Record;

/// The four fixed placeholder tokens, in substitution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `%%1%%` → username
    Username,
    /// `%%2%%` → company name
    Company,
    /// `%%3%%` → email
    Email,
    /// `%%4%%` → city
    City,
}

impl Placeholder {
    /// All placeholders in the order they are substituted
    pub const ALL: [Placeholder; 4] = [Self::Username, Self::Company, Self::Email, Self::City];

    /// Literal token as it appears in a template
    pub fn token(&self) -> &'static str {
        match self {
            Self::Username => "%%1%%",
            Self::Company => "%%2%%",
            Self::Email => "%%3%%",
            Self::City => "%%4%%",
        }
    }

    /// Record field this placeholder is replaced with
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Self::Username => &record.username,
            Self::Company => &record.company,
            Self::Email => &record.email,
            Self::City => &record.city,
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Result of rendering one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Placeholders that were not found and therefore not substituted
    pub missing: Vec<Placeholder>,
}

/// Template text held in memory for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a template file, terminating every line with `\n`.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::new(normalize_lines(&String::from_utf8_lossy(&bytes))))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitute the record's fields into the template.
    ///
    /// Each token is checked against the text produced by the previous
    /// substitutions, so a field value containing a later token is itself
    /// substituted.
    pub fn render(&self, record: &Record) -> Rendered {
        let mut text = self.text.clone();
        let mut missing = Vec::new();

        for placeholder in Placeholder::ALL {
            let token = placeholder.token();
            if text.contains(token) {
                text = text.replace(token, placeholder.value(record));
            } else {
                missing.push(placeholder);
            }
        }

        Rendered { text, missing }
    }
}

// `\r\n`, `\r` and `\n` all end a line
fn normalize_lines(content: &str) -> String {
    let unified = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(unified.len() + 1);
    for line in unified.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}
