//! Test utilities and helper functions for urlq tests
//!
//! This module provides common fixtures so unit, integration and property
//! tests can build query maps and raw query strings without repeating
//! themselves.

use crate::query::QueryMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except unreserved characters gets escaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Create a query map directly from `(key, value)` pairs
///
/// # Examples
/// ```
/// use urlq_core::testing::query_map;
///
/// let map = query_map(&[("tag", "a"), ("tag", "b")]);
/// assert_eq!(map.get_all("tag"), ["a", "b"]);
/// ```
pub fn query_map(pairs: &[(&str, &str)]) -> QueryMap {
    pairs.iter().copied().collect()
}

/// Owned copies of `values`, for comparing against [`QueryMap::get_all`]
pub fn values(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Builder for raw query strings used as tokenizer input
///
/// # Examples
/// ```
/// use urlq_core::testing::QueryBuilder;
///
/// let raw = QueryBuilder::new()
///     .param("q", "hello world")
///     .flag("debug")
///     .fragment("top")
///     .build();
///
/// assert_eq!(raw, "?q=hello%20world&debug#top");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    segments: Vec<String>,
    fragment: Option<String>,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an escaped `key=value` segment
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.segments.push(format!("{}={}", escape(key), escape(value)));
        self
    }

    /// Add an escaped key with no `=`
    pub fn flag(mut self, key: &str) -> Self {
        self.segments.push(escape(key));
        self
    }

    /// Add a segment exactly as given
    pub fn raw(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append a `#fragment`
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.to_string());
        self
    }

    /// Build the query string with a leading `?`
    pub fn build(self) -> String {
        let mut out = format!("?{}", self.segments.join("&"));
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(&fragment);
        }
        out
    }
}

fn escape(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}
