use std::cmp::Ordering;

use loose_version::{LooseVersion, Token, VersionError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn v(version: &str) -> LooseVersion {
    LooseVersion::new(version)
}

/// Version-like strings: dotted numbers with the odd letter run or suffix.
fn version_string() -> impl Strategy<Value = String> {
    "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}([a-c]{1,2}[0-9]?)?(-(alpha|rc)[0-9]?)?"
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        v("1.5.1b2").tokens().map(<[Token]>::to_vec),
        Some(vec![
            Token::from(1u128),
            Token::from(5u128),
            Token::from(1u128),
            Token::Text("b".into()),
            Token::from(2u128),
        ])
    );
    assert!(v("1.5.1") < v("1.5.2"));
    assert!(v("1.5.2") < v("1.6"));
    assert!(v("1.5.1") < v("1.6"));
    assert!(v("1.5") < v("1.5.1"));
    assert_eq!(v("1.05"), v("1.5"));
    assert_eq!(v("1.2.3-rc1").to_string(), "1.2.3-rc1");
}

#[test]
fn test_ordered_release_history() {
    let history = [
        "0.9",
        "0.9.1",
        "1.0",
        "1.0.1",
        "1.0-rc1",
        "1.0a",
        "1.1",
        "1.1.1b2",
        "1.2",
        "1.10",
        "2.0",
        "2011m",
    ];
    for pair in history.windows(2) {
        assert_eq!(
            v(pair[0]).compare(pair[1]),
            Ok(Ordering::Less),
            "{} should sort before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_both_empty_cannot_compare() {
    assert_eq!(
        v("").compare(&v("")),
        Err(VersionError::InvalidComparison {
            left: Some(String::new()),
            right: Some(String::new()),
        })
    );
    assert!(
        LooseVersion::default()
            .compare(&LooseVersion::default())
            .is_err()
    );
}

#[test]
fn test_serde_uses_original_string() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Module {
        name: String,
        version: LooseVersion,
    }

    let module: Module =
        serde_json::from_str(r#"{"name": "GCC", "version": "12.3.0-rc1"}"#).unwrap();
    assert_eq!(module.version, "12.3.0-rc1");
    assert!(module.version > "12.3.0");
    assert_eq!(
        serde_json::to_string(&module).unwrap(),
        r#"{"name":"GCC","version":"12.3.0-rc1"}"#
    );

    let empty: LooseVersion = serde_json::from_str(r#""""#).unwrap();
    assert!(!empty.is_parsed());
    assert_eq!(serde_json::to_string(&empty).unwrap(), r#""""#);
}

#[test]
fn test_parse_never_fails() {
    for input in ["junk", "1..2", "!!", " ", "v1.0", "ünïcødé-3", "\n1.0\n"] {
        let version: LooseVersion = input.parse().unwrap();
        assert!(version.is_parsed());
        assert_eq!(version.as_str(), Some(input));
    }
}

proptest! {
    #[test]
    fn equality_is_reflexive(s in "\\PC+") {
        prop_assert_eq!(v(&s).compare(&v(&s)), Ok(Ordering::Equal));
        prop_assert!(v(&s) == s.as_str());
    }

    #[test]
    fn raw_string_compares_like_parsed(a in version_string(), b in version_string()) {
        prop_assert_eq!(v(&a).compare(b.as_str()), v(&a).compare(&v(&b)));
    }

    #[test]
    fn comparison_is_antisymmetric(a in version_string(), b in version_string()) {
        let forward = v(&a).compare(&v(&b)).unwrap();
        let backward = v(&b).compare(&v(&a)).unwrap();
        prop_assert_eq!(forward, backward.reverse());
    }

    #[test]
    fn comparison_is_transitive(
        a in version_string(),
        b in version_string(),
        c in version_string(),
    ) {
        let (a, b, c) = (v(&a), v(&b), v(&c));
        if a < b && b < c {
            prop_assert!(a < c);
        }
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn render_round_trips(s in "\\PC*") {
        prop_assert_eq!(v(&s).to_string(), s);
    }

    #[test]
    fn sort_agrees_with_compare(versions in prop::collection::vec(version_string(), 1..8)) {
        let mut parsed: Vec<_> = versions.iter().map(|s| v(s)).collect();
        LooseVersion::sort(&mut parsed).unwrap();
        for pair in parsed.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }

        let all: Vec<_> = versions.iter().map(|s| v(s)).collect();
        let max = LooseVersion::max_of(&all).unwrap().unwrap();
        prop_assert_eq!(max.compare(parsed.last().unwrap()), Ok(Ordering::Equal));
    }
}
