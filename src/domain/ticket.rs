use std::fmt;
use std::sync::LazyLock;

use regex::bytes::Regex;

/// Project key, hyphen, issue number. Matches `AB-123` and `AB12-345`.
static TICKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][A-Z0-9]+-[0-9]+").expect("ticket id pattern must compile")
});

/// An issue tracker identifier such as `AB-123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketId(String);

impl TicketId {
    /// Returns the leftmost ticket id in `haystack`, if any.
    ///
    /// The haystack is scanned as raw bytes, so commit messages that are not
    /// valid UTF-8 are still searched.
    pub fn find(haystack: &[u8]) -> Option<Self> {
        let found = TICKET_PATTERN.find(haystack)?;
        // The pattern only matches ASCII.
        let key = std::str::from_utf8(found.as_bytes()).ok()?;
        Some(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text appended to a commit message, e.g. ` [AB-123]`.
    pub fn annotation(&self) -> String {
        format!(" [{}]", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
