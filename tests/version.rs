use std::cmp::Ordering;

use rstest::rstest;
use semver_value::{Document, SemverError, Version};
use serde_json::{Value, json};

/// Strictly valid versions covering core, prerelease and build variations
const VERSIONS: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-1",
    "1.0.0-2",
    "1.0.0-10",
    "1.0.0-1.2",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-alpha-b",
    "1.0.0-Alpha",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-rc.1+build.1",
    "1.0.0",
    "1.0.0+build1",
    "1.0.0+build2",
    "1.2.3",
    "1.2.4",
    "1.10.0",
    "2.0.0",
    "2.1.0-rc.1+exp",
    "10.0.0",
];

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

#[test]
fn parse_then_format_reproduces_input() {
    for input in VERSIONS {
        assert_eq!(v(input).to_string(), *input);
    }
}

#[test]
fn cmp_precedence_is_reflexive_and_antisymmetric() {
    for a in VERSIONS {
        assert_eq!(v(a).cmp_precedence(&v(a)), Ordering::Equal, "{}", a);
        for b in VERSIONS {
            assert_eq!(
                v(a).cmp_precedence(&v(b)),
                v(b).cmp_precedence(&v(a)).reverse(),
                "{} vs {}",
                a,
                b
            );
        }
    }
}

#[test]
fn cmp_precedence_is_transitive() {
    let versions: Vec<Version> = VERSIONS.iter().map(|s| v(s)).collect();
    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a.cmp_precedence(b).is_le() && b.cmp_precedence(c).is_le() {
                    assert!(a.cmp_precedence(c).is_le(), "{} <= {} <= {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn cmp_precedence_agrees_with_semver_crate() {
    let strip_build = |s: &str| {
        let mut version = semver::Version::parse(s).unwrap();
        version.build = semver::BuildMetadata::EMPTY;
        version
    };

    for a in VERSIONS {
        for b in VERSIONS {
            assert_eq!(
                v(a).cmp_precedence(&v(b)),
                strip_build(a).cmp(&strip_build(b)),
                "{} vs {}",
                a,
                b
            );
        }
    }
}

#[rstest]
#[case("1.0.0", "2.0.0")]
#[case("1.2.3", "1.2.4")]
#[case("1.0.0-alpha", "1.0.0")]
#[case("1.0.0-1", "1.0.0-alpha")]
#[case("1.0.0-alpha", "1.0.0-alpha.1")]
#[case("1.0.0-2", "1.0.0-10")]
fn lower_precedence_sorts_first(#[case] lower: &str, #[case] higher: &str) {
    assert_eq!(v(lower).cmp_precedence(&v(higher)), Ordering::Less);
    assert!(v(lower) < v(higher));
}

#[test]
fn build_metadata_is_ignored_for_precedence() {
    assert_eq!(
        v("1.0.0+build1").cmp_precedence(&v("1.0.0+build2")),
        Ordering::Equal
    );
}

#[rstest]
#[case("1.2")]
#[case("v1.2.3")]
#[case("1.2.x")]
fn parse_rejects_invalid_input(#[case] input: &str) {
    assert_eq!(
        Version::parse(input),
        Err(SemverError::InvalidFormat(input.to_string()))
    );
}

#[test]
fn structured_round_trip_from_semver_only_document() {
    let input = json!({ "semver": "2.1.0-rc.1+exp" });
    let version = Version::from_document(&doc(input)).unwrap();

    assert_eq!(version.major(), 2);
    assert_eq!(version.minor(), 1);
    assert_eq!(version.patch(), 0);
    assert_eq!(version.prerelease(), Some("rc.1"));
    assert_eq!(version.build(), Some("exp"));

    let expected = json!({
        "semver": "2.1.0-rc.1+exp",
        "major": 2,
        "minor": 1,
        "patch": 0,
        "prerelease": "rc.1",
        "build": "exp"
    });
    assert_eq!(Value::Object(version.to_document()), expected);

    let again = Version::from_document(&doc(expected)).unwrap();
    assert_eq!(again, version);
}

#[test]
fn structured_input_with_disagreeing_major_is_rejected() {
    let result = Version::from_document(&doc(json!({ "semver": "1.0.0", "major": 2 })));
    assert!(matches!(
        result,
        Err(SemverError::InconsistentFields { .. })
    ));
}

#[test]
fn serde_json_decodes_list_of_documents() {
    let input = r#"[
        {"semver": "1.0.0"},
        {"semver": "1.0.0-rc.1", "major": 1, "prerelease": "rc.1"},
        {"Semver": "0.9.0", "Minor": "9"}
    ]"#;

    let mut versions: Vec<Version> = serde_json::from_str(input).unwrap();
    versions.sort();

    let sorted: Vec<String> = versions.iter().map(Version::to_string).collect();
    assert_eq!(sorted, vec!["0.9.0", "1.0.0-rc.1", "1.0.0"]);
}

#[test]
fn sorted_versions_follow_precedence() {
    let mut shuffled: Vec<Version> = VERSIONS.iter().rev().map(|s| v(s)).collect();
    shuffled.sort();

    for pair in shuffled.windows(2) {
        assert!(pair[0].cmp_precedence(&pair[1]).is_le(), "{} > {}", pair[0], pair[1]);
    }
}
