//! Parser algebra over tokenized queries
//!
//! A [`Parser`] reduces a [`QueryMap`] to a typed value or `None`. Parsers
//! hold no mutable state, so one parser built at startup can be applied to
//! any number of maps, from any number of threads.

pub mod absence;
pub mod combinators;
pub mod primitives;

pub use absence::{check_single, Absence};
pub use combinators::{map, map2, map3, Map, Map2, Map3};
pub use primitives::{custom, enumeration, int, number, string, Custom, Lookup, Reducer, Single};

use crate::query::{QueryMap, Tokenizer};

/// A pure function from a query map to an optional value
pub trait Parser {
    type Output;

    /// Run the parser; `None` is the absence signal
    fn apply(&self, query: &QueryMap) -> Option<Self::Output>;

    /// Method form of [`map`]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Option<Self::Output>) -> Option<B>,
    {
        combinators::map(f, self)
    }

    /// Erase the concrete parser type
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// Type-erased parser, for storing parsers of different shapes together
pub type BoxedParser<A> = Box<dyn Parser<Output = A> + Send + Sync>;

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn apply(&self, query: &QueryMap) -> Option<Self::Output> {
        (**self).apply(query)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn apply(&self, query: &QueryMap) -> Option<Self::Output> {
        (**self).apply(query)
    }
}

/// Tokenize `raw` with the default settings and apply `parser`.
///
/// Returns `None` when tokenization fails or the parser reports absence.
///
/// # Examples
/// ```
/// use urlq_core::{int, parse};
///
/// assert_eq!(parse(&int("page"), "page=2"), Some(2));
/// assert_eq!(parse(&int("page"), "page=2&page=3"), None);
/// ```
pub fn parse<P: Parser + ?Sized>(parser: &P, raw: &str) -> Option<P::Output> {
    Tokenizer::default().parse(parser, raw)
}
