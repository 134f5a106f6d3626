//! Named string attributes forwarded to the host entry point.

/// Attribute naming the application title.
pub const APP_TITLE: &str = "app-title";

/// Attribute naming the base address of the host's own backend.
pub const API_ROOT: &str = "api-root";

/// Ordered, string-typed configuration attributes.
///
/// Portico never interprets these; it only carries them to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellAttributes {
    entries: Vec<(String, String)>,
}

impl ShellAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute (mutable version).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The application title, if set.
    pub fn app_title(&self) -> Option<&str> {
        self.get(APP_TITLE)
    }

    /// The backend base address, if set.
    pub fn api_root(&self) -> Option<&str> {
        self.get(API_ROOT)
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let attrs = ShellAttributes::new()
            .with(APP_TITLE, "Demo")
            .with(API_ROOT, "http://localhost:8080/")
            .with(APP_TITLE, "Demo-TT");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.app_title(), Some("Demo-TT"));
        assert_eq!(attrs.api_root(), Some("http://localhost:8080/"));
        assert_eq!(
            attrs.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            [APP_TITLE, API_ROOT]
        );
    }

    #[test]
    fn test_unknown_attribute() {
        assert_eq!(ShellAttributes::new().get("theme"), None);
    }
}
