//! Contract Invariant Tests
//!
//! Behaviour release tooling relies on when sorting and comparing versions.

use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use semantic_version::{parse, InvalidReason, SemanticVersion};

fn v(s: &str) -> SemanticVersion {
    parse(s).unwrap()
}

#[test]
fn invariant_precedence_chain() {
    let ascending = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];

    for pair in ascending.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        assert!(v(pair[1]) > v(pair[0]), "{} > {}", pair[1], pair[0]);
    }

    let mut shuffled: Vec<_> = ascending.iter().rev().map(|s| v(s)).collect();
    shuffled.swap(1, 5);
    shuffled.sort();
    let sorted: Vec<_> = shuffled.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ascending);
}

#[test]
fn invariant_core_compared_numerically() {
    assert!(v("1.9.0") < v("1.10.0"));
    assert!(v("1.0.10") > v("1.0.9"));
    assert!(v("2.0.0-alpha") > v("1.99.99"));
    assert!(v("0.0.1") < v("0.1.0"));
}

#[test]
fn invariant_relational_operators_agree() {
    let a = v("1.0.0-rc.1");
    let b = v("1.0.0");

    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a != b);
    assert!(a <= a.clone());
    assert!(a >= a.clone());
    assert!(a == a.clone());
}

#[test]
fn invariant_build_metadata_ignored() {
    assert_eq!(v("1.0.0+build1"), v("1.0.0+build2"));
    assert_eq!(v("1.0.0+build1").cmp(&v("1.0.0+build2")), Ordering::Equal);
    assert!(v("1.0.0-alpha+zzz") < v("1.0.0-beta+aaa"));
    assert_eq!(v("1.0.0+build1").build_metadata(), "build1");
}

#[test]
fn invariant_prefix_stripped() {
    for input in ["v1.2.3", "V1.2.3"] {
        let ver = v(input);
        assert_eq!((ver.major(), ver.minor(), ver.patch()), (1, 2, 3));
        assert_eq!(ver.to_string(), "1.2.3");
    }
}

#[test]
fn invariant_malformed_rejected() {
    for input in ["1.2", "1.2.x", "", "1", "1.2.3.4", "v", "1.2.3-", "1.2.3+", "1.2.3-a_b", " 1.2.3", "-1.2.3"] {
        let err = parse(input).unwrap_err();
        assert!(
            matches!(err.reason, InvalidReason::Malformed { .. }),
            "{input:?} should be malformed, got {err}"
        );
    }
}

#[test]
fn invariant_leading_zero_rule() {
    assert!(parse("1.0.0-01").unwrap_err().is_leading_zero());
    assert!(parse("1.0.0-alpha.00").unwrap_err().is_leading_zero());
    assert!(parse("1.0.0-0").is_ok());
    assert!(parse("1.0.0-0a").is_ok());
    // build metadata is exempt
    assert!(parse("1.0.0+01").is_ok());
    assert!(parse("1.0.0-1+0001").is_ok());
}

#[test]
fn invariant_core_leading_zeros_permitted() {
    let ver = v("01.2.3");
    assert_eq!(ver.major(), 1);
    assert_eq!(ver.to_string(), "1.2.3");
    assert_eq!(ver, v("1.2.3"));
}

#[test]
fn invariant_error_messages_distinguish_causes() {
    let malformed = parse("1.2").unwrap_err().to_string();
    let leading = parse("1.0.0-01").unwrap_err().to_string();

    assert!(malformed.contains("malformed"));
    assert!(leading.contains("leading zeros"));
    assert!(leading.contains("\"01\""));
}

#[test]
fn invariant_to_dict_keys() {
    let dict = serde_json::to_value(v("3.1.4-pi+e").to_dict()).unwrap();
    let mut keys: Vec<_> = dict.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["build_metadata", "major", "minor", "patch", "pre_release"]);
    assert_eq!(dict["major"], 3);
    assert_eq!(dict["pre_release"], "pi");
}

#[test]
fn invariant_foreign_comparison_not_applicable() {
    let ver = v("1.0.0");
    assert_eq!(ver.partial_cmp_any(&"1.0.0"), None);
    assert_eq!(ver.eq_any(&42i32), None);
    assert_eq!(ver.eq_any(&v("1.0.0+meta")), Some(true));
}
