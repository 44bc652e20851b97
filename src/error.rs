//! Error enums
use serde_json::error::Category;

/// Failures that abort the run (or a whole subcommand).
///
/// Per-line failures never end up here: see [LineError].
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

/// Per-line failures. Logged and skipped at the call site,
/// never fatal to the file or the run.
#[derive(Debug)]
pub enum LineError {
    /// Line is not valid JSON. Holds a truncated preview of the line.
    Malformed(String),
    /// Line is valid JSON but does not match the raw case shape.
    Shape(serde_json::Error),
    /// Line could not be read at all.
    Io(std::io::Error),
}

impl LineError {
    /// Sort a serde_json failure into syntax (malformed line)
    /// or data (unexpected record shape).
    pub fn from_parse(e: serde_json::Error, line: &str) -> Self {
        match e.classify() {
            Category::Data => LineError::Shape(e),
            _ => LineError::Malformed(snippet(line)),
        }
    }
}

const SNIPPET_LEN: usize = 100;

/// Truncated, char-boundary-safe preview of an offending line.
fn snippet(line: &str) -> String {
    if line.chars().count() <= SNIPPET_LEN {
        line.to_string()
    } else {
        let head: String = line.chars().take(SNIPPET_LEN).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_short_line_untouched() {
        assert_eq!(snippet("{\"id\": 1}"), "{\"id\": 1}");
    }

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let line = "判".repeat(150);
        let s = snippet(&line);
        assert_eq!(s.chars().count(), SNIPPET_LEN + 3);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn parse_failure_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert!(matches!(
            LineError::from_parse(syntax, "{oops"),
            LineError::Malformed(_)
        ));

        let shape = serde_json::from_str::<u32>("\"ten\"").unwrap_err();
        assert!(matches!(
            LineError::from_parse(shape, "\"ten\""),
            LineError::Shape(_)
        ));
    }
}
