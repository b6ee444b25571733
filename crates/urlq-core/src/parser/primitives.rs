//! Primitive parsers bound to a single query parameter
//!
//! [`custom`] is the general form: it hands every value of one key to a
//! [`Reducer`]. The other primitives are `Custom` parsers whose reducers
//! apply the exactly-one policy and a conversion.

use super::absence::{check_single, Absence};
use super::Parser;
use crate::query::QueryMap;
use ahash::AHashMap;
use std::fmt;

/// Reduces every value of one key to an optional result
pub trait Reducer {
    type Output;

    fn reduce(&self, values: &[String]) -> Option<Self::Output>;
}

impl<A, F> Reducer for F
where
    F: Fn(&[String]) -> Option<A>,
{
    type Output = A;

    fn reduce(&self, values: &[String]) -> Option<A> {
        self(values)
    }
}

/// Parser that reduces all values of one key
#[derive(Clone)]
pub struct Custom<R> {
    key: String,
    reducer: R,
}

impl<R> Custom<R> {
    /// The parameter this parser reads
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<R> fmt::Debug for Custom<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").field("key", &self.key).finish_non_exhaustive()
    }
}

impl<R: Reducer> Parser for Custom<R> {
    type Output = R::Output;

    fn apply(&self, query: &QueryMap) -> Option<R::Output> {
        self.reducer.reduce(query.get_all(&self.key))
    }
}

/// Build a parser from a key and a reducer over that key's values.
///
/// The reducer sees an empty slice when the key is missing and decides the
/// multiplicity policy itself.
///
/// # Examples
/// ```
/// use urlq_core::{custom, parse};
///
/// let posts = custom("post", |values: &[String]| {
///     Some(values.iter().filter_map(|v| v.parse::<i64>().ok()).collect::<Vec<_>>())
/// });
///
/// assert_eq!(parse(&posts, "post=2&post=x&post=7"), Some(vec![2, 7]));
/// assert_eq!(parse(&posts, "hats=2"), Some(vec![]));
/// ```
pub fn custom<A, F>(key: impl Into<String>, reducer: F) -> Custom<F>
where
    F: Fn(&[String]) -> Option<A>,
{
    Custom {
        key: key.into(),
        reducer,
    }
}

/// Exactly one value, run through a conversion
#[derive(Clone)]
pub struct Single<A> {
    name: String,
    convert: fn(&str) -> Result<A, Absence>,
}

impl<A> Reducer for Single<A> {
    type Output = A;

    fn reduce(&self, values: &[String]) -> Option<A> {
        settle(&self.name, check_single(values).and_then(self.convert))
    }
}

/// Exactly one value, looked up in a fixed table
#[derive(Clone)]
pub struct Lookup<T> {
    name: String,
    table: AHashMap<String, T>,
}

impl<T: Clone> Reducer for Lookup<T> {
    type Output = T;

    fn reduce(&self, values: &[String]) -> Option<T> {
        let outcome = check_single(values).and_then(|value| {
            self.table
                .get(value)
                .cloned()
                .ok_or_else(|| Absence::EnumMismatch {
                    value: value.to_string(),
                })
        });
        settle(&self.name, outcome)
    }
}

fn single<A>(key: String, convert: fn(&str) -> Result<A, Absence>) -> Custom<Single<A>> {
    Custom {
        reducer: Single {
            name: key.clone(),
            convert,
        },
        key,
    }
}

/// The single value of `key`, verbatim
pub fn string(key: impl Into<String>) -> Custom<Single<String>> {
    single(key.into(), |value| Ok(value.to_string()))
}

/// The single value of `key` as a base-10 integer.
///
/// A fractional part is accepted and truncated toward zero, so `17.1`
/// reads as `17` and `-2.9` as `-2`.
pub fn int(key: impl Into<String>) -> Custom<Single<i64>> {
    single(key.into(), parse_int)
}

/// The single value of `key` as a finite `f64`
pub fn number(key: impl Into<String>) -> Custom<Single<f64>> {
    single(key.into(), parse_number)
}

/// The single value of `key`, looked up in `table`.
///
/// Matching is exact and case-sensitive. The table is copied, so the
/// parser does not borrow from it.
///
/// # Examples
/// ```
/// use urlq_core::{enumeration, parse};
///
/// let debug = enumeration("debug", [("true", true), ("false", false)]);
/// assert_eq!(parse(&debug, "debug=true"), Some(true));
/// assert_eq!(parse(&debug, "debug=1"), None);
/// ```
pub fn enumeration<K, T, I>(key: impl Into<String>, table: I) -> Custom<Lookup<T>>
where
    I: IntoIterator<Item = (K, T)>,
    K: Into<String>,
    T: Clone,
{
    let key = key.into();
    let table = table
        .into_iter()
        .map(|(choice, value)| (choice.into(), value))
        .collect();

    Custom {
        reducer: Lookup {
            name: key.clone(),
            table,
        },
        key,
    }
}

fn settle<A>(key: &str, outcome: Result<A, Absence>) -> Option<A> {
    outcome
        .map_err(|reason| tracing::trace!(key, %reason, "Query parameter absent"))
        .ok()
}

fn parse_int(value: &str) -> Result<i64, Absence> {
    let failure = || Absence::ConversionFailure {
        value: value.to_string(),
        target: "integer",
    };

    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let digits = whole.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(whole);
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(digits) || !all_digits(fraction) || (digits.is_empty() && fraction.is_empty()) {
        return Err(failure());
    }

    // `.5` and `-.5` have no integer digits at all
    if digits.is_empty() {
        return Ok(0);
    }

    whole.parse::<i64>().map_err(|_| failure())
}

fn parse_number(value: &str) -> Result<f64, Absence> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| Absence::ConversionFailure {
            value: value.to_string(),
            target: "number",
        })
}
