//! End-to-end parser behaviour: raw string in, typed value out

use urlq_core::testing::query_map;
use urlq_core::{
    check_single, custom, enumeration, int, map, map2, map3, number, parse, string, Parser,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum View {
    Grid,
    List,
}

#[derive(Debug, PartialEq)]
struct Listing {
    page: i64,
    view: View,
    posts: Vec<i64>,
}

fn int_list(key: &str) -> impl Parser<Output = Vec<i64>> {
    custom(key, |values: &[String]| {
        Some(
            values
                .iter()
                .filter_map(|value| value.parse::<i64>().ok())
                .collect(),
        )
    })
}

fn listing() -> impl Parser<Output = Listing> {
    map3(
        |page, view, posts| {
            Some(Listing {
                page: page.unwrap_or(1),
                view: view?,
                posts: posts.unwrap_or_default(),
            })
        },
        int("page"),
        enumeration("view", [("grid", View::Grid), ("list", View::List)]),
        int_list("post"),
    )
}

#[test]
fn test_int_scenarios() {
    let page = int("page");
    assert_eq!(parse(&page, "page=2"), Some(2));
    assert_eq!(parse(&page, "page=17.1"), Some(17));
    assert_eq!(parse(&page, "page=two"), None);
    assert_eq!(parse(&page, "page=2&page=3"), None);
}

#[test]
fn test_number_scenarios() {
    let scale = number("scale");
    assert_eq!(parse(&scale, "scale=17.12"), Some(17.12));
    assert_eq!(parse(&scale, "scale=two"), None);
}

#[test]
fn test_enum_scenarios() {
    let debug = enumeration("debug", [("true", true), ("false", false)]);
    assert_eq!(parse(&debug, "debug=true"), Some(true));
    assert_eq!(parse(&debug, "debug=1"), None);
    assert_eq!(parse(&debug, "debug=true&debug=true"), None);
}

#[test]
fn test_custom_scenarios() {
    let posts = int_list("post");
    assert_eq!(parse(&posts, "post=2&post=7"), Some(vec![2, 7]));
    assert_eq!(parse(&posts, "post=2&post=x"), Some(vec![2]));
    assert_eq!(parse(&posts, "hats=2"), Some(vec![]));
}

#[test]
fn test_string_requires_exactly_one() {
    let name = string("name");
    assert_eq!(parse(&name, "name=ada"), Some("ada".to_string()));
    assert_eq!(parse(&name, ""), None);
    assert_eq!(parse(&name, "name=ada&name=grace"), None);
}

#[test]
fn test_exactly_one_primitives_on_empty_query() {
    assert_eq!(parse(&string("k"), ""), None);
    assert_eq!(parse(&int("k"), ""), None);
    assert_eq!(parse(&number("k"), ""), None);
    assert_eq!(parse(&enumeration("k", [("a", 1)]), ""), None);
}

#[test]
fn test_map2_does_not_short_circuit() {
    let pair = map2(|a: Option<i64>, b: Option<i64>| Some((a, b)), int("a"), int("b"));
    assert_eq!(parse(&pair, "a=1&b=oops"), Some((Some(1), None)));

    let sum = map2(|a: Option<i64>, b: Option<i64>| Some(a? + b?), int("a"), int("b"));
    assert_eq!(parse(&sum, "a=1&b=2"), Some(3));
    assert_eq!(parse(&sum, "a=1&b=oops"), None);
}

#[test]
fn test_composed_listing() {
    assert_eq!(
        parse(&listing(), "?view=grid&post=3&post=x&post=9&page=4"),
        Some(Listing {
            page: 4,
            view: View::Grid,
            posts: vec![3, 9],
        })
    );
    assert_eq!(
        parse(&listing(), "view=list"),
        Some(Listing {
            page: 1,
            view: View::List,
            posts: vec![],
        })
    );
    assert_eq!(parse(&listing(), "page=2"), None);
    assert_eq!(parse(&listing(), "view=grid&view=list"), None);
}

#[test]
fn test_parser_reused_across_maps() {
    let listing = listing();
    let first = query_map(&[("view", "grid")]);
    let second = query_map(&[("view", "list"), ("page", "3")]);

    assert_eq!(listing.apply(&first).map(|l| l.view), Some(View::Grid));
    assert_eq!(listing.apply(&second).map(|l| l.page), Some(3));
    assert_eq!(listing.apply(&first).map(|l| l.view), Some(View::Grid));
}

#[test]
fn test_custom_reducer_with_exactly_one_policy() {
    let upper = custom("code", |values: &[String]| {
        check_single(values).ok().map(str::to_uppercase)
    });
    assert_eq!(parse(&upper, "code=abc"), Some("ABC".to_string()));
    assert_eq!(parse(&upper, "code=a&code=b"), None);
}

#[test]
fn test_map_over_custom() {
    let count = map(|posts: Option<Vec<i64>>| posts.map(|p| p.len()), int_list("post"));
    assert_eq!(parse(&count, "post=1&post=2&post=3"), Some(3));
    assert_eq!(parse(&count, ""), Some(0));
}
