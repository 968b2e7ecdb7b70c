//! Precedence ordering for semantic versions
//!
//! Precedence is decided by major, minor and patch (numerically), then by
//! the prerelease:
//! - a version with a prerelease sorts before the same version without one
//! - prerelease identifiers are compared pairwise, left to right
//! - numeric identifiers compare numerically and sort before alphanumeric ones
//! - alphanumeric identifiers compare in ASCII order
//! - when all shared identifiers are equal, the shorter prerelease sorts first
//!
//! Build metadata never affects precedence.

use std::cmp::Ordering;

use crate::version::semver::Version;

impl Version {
    /// Compare two versions by precedence, ignoring build metadata
    ///
    /// `1.0.0+build1` and `1.0.0+build2` have equal precedence.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| match (self.prerelease(), other.prerelease()) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => compare_prerelease(a, b),
            })
    }
}

/// Total order over versions.
///
/// Agrees with [`Version::cmp_precedence`] and breaks precedence ties on the
/// canonical text, so it stays consistent with `Eq`.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.as_str().cmp(other.as_str()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two dot-separated prerelease strings
pub fn compare_prerelease(a: &str, b: &str) -> Ordering {
    a.split('.')
        .zip(b.split('.'))
        .map(|(left, right)| compare_identifiers(left, right))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.split('.').count().cmp(&b.split('.').count()))
}

/// Compare a single pair of prerelease identifiers
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Digit runs too long for `u64` count as alphanumeric
fn numeric_value(identifier: &str) -> Option<u64> {
    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    identifier.parse().ok()
}
