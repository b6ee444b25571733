//! Parsers and query maps shared across threads

use std::sync::Arc;
use std::thread;
use urlq_core::{int, map2, string, tokenize, BoxedParser, Parser, QueryMap};

#[test]
fn test_one_map_many_threads() {
    let map: Arc<QueryMap> = Arc::new(tokenize("user=ada&page=7").unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                let parser = map2(|user, page| Some((user?, page?)), string("user"), int("page"));
                parser.apply(&map)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(("ada".to_string(), 7)));
    }
}

#[test]
fn test_one_parser_many_threads() {
    let parser: Arc<BoxedParser<i64>> = Arc::new(int("page").boxed());

    let handles: Vec<_> = (0..8i64)
        .map(|n| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let map = tokenize(&format!("page={n}")).unwrap();
                parser.apply(&map)
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(n as i64));
    }
}
