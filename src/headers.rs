//! Case-insensitive response header dictionary
//!
//! Checks look headers up by name many times; centralizing the
//! case-insensitivity here keeps lower-casing logic out of the check modules.

use std::collections::HashMap;

/// Case-insensitive mapping from header name to header value.
///
/// Keys are normalized to lowercase on insertion and on lookup, so
/// `get("Cache-Control")` and `get("cache-control")` are equivalent.
/// Duplicate names keep the last value inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDict {
    entries: HashMap<String, String>,
}

impl HeaderDict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, normalizing the name to lowercase
    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Look a header up by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether a header is present, case-insensitively
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of distinct headers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for HeaderDict {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut dict = Self::new();
        for (name, value) in iter {
            dict.insert(name.as_ref(), value.as_ref());
        }
        dict
    }
}

// ============================================================================
// Tests
// ============================================================================
