//! Raw query-string parameters as supplied by the caller.

use std::collections::BTreeMap;

/// Multi-map of raw parameters, keyed exactly as they appear in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogParams(BTreeMap<String, Vec<String>>);

impl CatalogParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query string (without the leading `?`).
    pub fn from_query_str(query: &str) -> Result<Self, serde::de::value::Error> {
        let values: BTreeMap<String, Vec<String>> = serde_html_form::from_str(query)?;
        Ok(Self(values))
    }

    /// Appends a value for `key`, keeping earlier values.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value of `key`; repeated keys are joined with `,`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).map(|values| values.join(","))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CatalogParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
