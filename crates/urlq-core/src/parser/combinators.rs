//! Combinators lifting plain functions over parsers
//!
//! Every child parser runs against the same map, every time. A child's
//! `None` is handed to the combining function as-is: nothing here
//! short-circuits, so the function alone decides whether one missing field
//! makes the whole result absent.
//!
//! ```
//! use urlq_core::{int, map2, parse, string};
//!
//! // Fails when either field is absent
//! let strict = map2(|q, page| Some((q?, page?)), string("q"), int("page"));
//! // Falls back to page 1
//! let lenient = map2(|q, page| Some((q?, page.unwrap_or(1))), string("q"), int("page"));
//!
//! assert_eq!(parse(&strict, "q=rust"), None);
//! assert_eq!(parse(&lenient, "q=rust"), Some(("rust".to_string(), 1)));
//! ```

use super::Parser;
use crate::query::QueryMap;

/// Transform the result of one parser
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F, B> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(Option<P::Output>) -> Option<B>,
{
    type Output = B;

    fn apply(&self, query: &QueryMap) -> Option<B> {
        (self.f)(self.parser.apply(query))
    }
}

/// Constructor for [Map]
pub fn map<P, F, B>(f: F, parser: P) -> Map<P, F>
where
    P: Parser,
    F: Fn(Option<P::Output>) -> Option<B>,
{
    Map { parser, f }
}

/// Combine the results of two parsers
#[derive(Debug, Clone)]
pub struct Map2<P1, P2, F> {
    parsers: (P1, P2),
    f: F,
}

impl<P1, P2, F, C> Parser for Map2<P1, P2, F>
where
    P1: Parser,
    P2: Parser,
    F: Fn(Option<P1::Output>, Option<P2::Output>) -> Option<C>,
{
    type Output = C;

    fn apply(&self, query: &QueryMap) -> Option<C> {
        let a = self.parsers.0.apply(query);
        let b = self.parsers.1.apply(query);
        (self.f)(a, b)
    }
}

/// Constructor for [Map2]
pub fn map2<P1, P2, F, C>(f: F, p1: P1, p2: P2) -> Map2<P1, P2, F>
where
    P1: Parser,
    P2: Parser,
    F: Fn(Option<P1::Output>, Option<P2::Output>) -> Option<C>,
{
    Map2 {
        parsers: (p1, p2),
        f,
    }
}

/// Combine the results of three parsers
#[derive(Debug, Clone)]
pub struct Map3<P1, P2, P3, F> {
    parsers: (P1, P2, P3),
    f: F,
}

impl<P1, P2, P3, F, D> Parser for Map3<P1, P2, P3, F>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
    F: Fn(Option<P1::Output>, Option<P2::Output>, Option<P3::Output>) -> Option<D>,
{
    type Output = D;

    fn apply(&self, query: &QueryMap) -> Option<D> {
        let a = self.parsers.0.apply(query);
        let b = self.parsers.1.apply(query);
        let c = self.parsers.2.apply(query);
        (self.f)(a, b, c)
    }
}

/// Constructor for [Map3]
pub fn map3<P1, P2, P3, F, D>(f: F, p1: P1, p2: P2, p3: P3) -> Map3<P1, P2, P3, F>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
    F: Fn(Option<P1::Output>, Option<P2::Output>, Option<P3::Output>) -> Option<D>,
{
    Map3 {
        parsers: (p1, p2, p3),
        f,
    }
}
