//! Test utilities for namefilter integration tests

#![allow(dead_code)]

use namefilter::{Filter, FilterBuilder};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Build a filter from a regex rule string, panicking on bad input
pub fn chain(rules: &str) -> Filter {
    assert_ok!(FilterBuilder::parse(rules), "rule string should parse").build()
}

/// Candidate names used to compare two chains
pub const PROBES: &[&str] = &[
    "",
    "a",
    "a.b",
    "a.b.c",
    "a.pub",
    "a.secret.thing",
    "b.x",
    "foo.Bar",
    "foo.bar.Baz",
    "foo.barn.Baz",
    "com.example.Foo",
    "com.exampleX.Foo",
    "com.example.internal.Impl",
    "x.y.z",
];

/// Assert two filters agree on every probe name
pub fn assert_equivalent(left: &Filter, right: &Filter) {
    for probe in PROBES {
        assert_eq!(
            left.accepts(probe),
            right.accepts(probe),
            "filters disagree on '{}': [{}] vs [{}]",
            probe,
            left,
            right
        );
    }
}
