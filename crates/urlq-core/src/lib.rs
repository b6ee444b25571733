//! Typed query-string parsing.
//!
//! A raw query string is tokenized into an ordered [`QueryMap`], and a
//! [`Parser`] built from primitives and combinators reduces that map to a
//! typed value. Every parser failure surfaces as `None`.
//!
//! ```
//! use urlq_core::{int, map2, parse, string};
//!
//! let page = map2(
//!     |name, page| Some((name?, page.unwrap_or(1))),
//!     string("q"),
//!     int("page"),
//! );
//!
//! assert_eq!(parse(&page, "?q=rust&page=3"), Some(("rust".to_string(), 3)));
//! assert_eq!(parse(&page, "q=rust"), Some(("rust".to_string(), 1)));
//! assert_eq!(parse(&page, "page=3"), None);
//! ```

pub mod parser;
pub mod query;

// Test utilities (available in tests and when used as a dependency with dev profile)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use parser::absence::{check_single, Absence};
pub use parser::combinators::{map, map2, map3, Map, Map2, Map3};
pub use parser::primitives::{
    custom, enumeration, int, number, string, Custom, Lookup, Reducer, Single,
};
pub use parser::{parse, BoxedParser, Parser};
pub use query::decode::DecodeError;
pub use query::map::QueryMap;
pub use query::tokenizer::{tokenize, TokenizeError, Tokenizer, TokenizerConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
