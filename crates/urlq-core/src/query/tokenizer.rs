//! Tokenizer for raw query strings
//!
//! The tokenizer splits a raw query component into `key=value` segments,
//! decodes each side and collects the pairs into a [`QueryMap`].

use super::decode::{decode_component, DecodeError};
use super::map::QueryMap;
use crate::parser::{Absence, Parser};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tokenize error
///
/// Only raised when input exceeds a configured limit. Malformed entries are
/// dropped individually and never fail the whole query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Query too long: {len} bytes exceeds limit of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("Too many query parameters: limit is {max}")]
    TooManyPairs { max: usize },
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Decode `+` as a space
    pub plus_as_space: bool,
    /// Maximum query length in bytes, after `?` and fragment stripping
    pub max_input_len: Option<usize>,
    /// Maximum number of non-empty `&`-separated segments
    pub max_pairs: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            plus_as_space: true,
            max_input_len: None,
            max_pairs: None,
        }
    }
}

impl TokenizerConfig {
    pub fn with_plus_as_space(mut self, enabled: bool) -> Self {
        self.plus_as_space = enabled;
        self
    }

    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    pub fn with_max_pairs(mut self, max: usize) -> Self {
        self.max_pairs = Some(max);
        self
    }

    /// Read settings from a JSON object; missing fields keep their defaults
    ///
    /// # Examples
    /// ```
    /// use urlq_core::TokenizerConfig;
    ///
    /// let config = TokenizerConfig::from_json(r#"{"max_pairs": 64}"#).unwrap();
    /// assert_eq!(config.max_pairs, Some(64));
    /// assert!(config.plus_as_space);
    /// ```
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Query string tokenizer
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the given settings
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize a raw query component.
    ///
    /// A leading `?` and anything from the first `#` on are ignored. Empty
    /// segments are skipped, a segment without `=` gets an empty value, and
    /// a segment that fails to decode is dropped on its own.
    pub fn tokenize(&self, raw: &str) -> Result<QueryMap, TokenizeError> {
        let query = strip_affixes(raw);

        if let Some(max) = self.config.max_input_len {
            if query.len() > max {
                tracing::warn!(len = query.len(), max, "Rejecting oversized query string");
                return Err(TokenizeError::InputTooLong {
                    len: query.len(),
                    max,
                });
            }
        }

        let mut map = QueryMap::new();
        let mut segments = 0usize;

        for segment in query.split('&').filter(|segment| !segment.is_empty()) {
            segments += 1;
            if let Some(max) = self.config.max_pairs {
                if segments > max {
                    tracing::warn!(max, "Rejecting query string with too many parameters");
                    return Err(TokenizeError::TooManyPairs { max });
                }
            }

            match self.decode_segment(segment) {
                Ok((key, _)) if key.is_empty() => {
                    tracing::trace!(segment, "Dropping query parameter with empty name");
                }
                Ok((key, value)) => map.push(key, value),
                Err(error) => {
                    tracing::trace!(segment, %error, "Dropping undecodable query parameter");
                }
            }
        }

        tracing::debug!(
            keys = map.len(),
            pairs = map.pair_count(),
            "Tokenized query string"
        );
        Ok(map)
    }

    /// Tokenize `raw` and run `parser` over the result
    pub fn parse<P: Parser + ?Sized>(&self, parser: &P, raw: &str) -> Option<P::Output> {
        match self.tokenize(raw) {
            Ok(map) => parser.apply(&map),
            Err(error) => {
                tracing::trace!(
                    reason = %Absence::TokenizeFailure,
                    %error,
                    "Query parameter absent"
                );
                None
            }
        }
    }

    fn decode_segment(&self, segment: &str) -> Result<(String, String), DecodeError> {
        let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
        let key = decode_component(raw_key, self.config.plus_as_space)?;
        let value = decode_component(raw_value, self.config.plus_as_space)?;
        Ok((key, value))
    }
}

/// Tokenize with the default settings
///
/// # Examples
/// ```
/// use urlq_core::tokenize;
///
/// let map = tokenize("?tag=a&tag=b&q=hello+world#top").unwrap();
/// assert_eq!(map.get_all("tag"), ["a", "b"]);
/// assert_eq!(map.get_all("q"), ["hello world"]);
/// ```
pub fn tokenize(raw: &str) -> Result<QueryMap, TokenizeError> {
    Tokenizer::default().tokenize(raw)
}

fn strip_affixes(raw: &str) -> &str {
    let without_fragment = raw.split_once('#').map_or(raw, |(query, _)| query);
    without_fragment
        .strip_prefix('?')
        .unwrap_or(without_fragment)
}
