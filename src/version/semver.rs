//! Semantic version value type
//!
//! Parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into an immutable
//! [`Version`] and formats them back to canonical text.
//!
//! Examples:
//! - "1.2.3" -> Version(1, 2, 3)
//! - "1.0.0-rc.1" -> Version(1, 0, 0, pre: "rc.1")
//! - "2.1.0-rc.1+exp" -> Version(2, 1, 0, pre: "rc.1", build: "exp")

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::SemverError;

/// Whole-string grammar. Core numerals may not carry leading zeros, so that
/// formatting a parsed value always reproduces its input.
static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z.-]+))?$",
    )
    .unwrap()
});

/// Dot-separated prerelease identifiers
static PRERELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$").unwrap());

/// Build metadata is a single opaque token
static BUILD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9A-Za-z.-]+$").unwrap());

/// A parsed semantic version.
///
/// Values are immutable: the canonical text is cached at construction and
/// always equals the formatted fields. Build a new value with
/// [`Version::parse`] or [`Version::new`] to change anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    text: String,
    major: i64,
    minor: i64,
    patch: i64,
    prerelease: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Parse a version string.
    ///
    /// The input must match the grammar exactly; no `v` prefix, no
    /// whitespace and no partial versions.
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        let caps = SEMVER_RE
            .captures(text)
            .ok_or_else(|| SemverError::InvalidFormat(text.to_string()))?;

        let version = Self {
            text: text.to_string(),
            major: parse_component("major", &caps[1])?,
            minor: parse_component("minor", &caps[2])?,
            patch: parse_component("patch", &caps[3])?,
            prerelease: caps.get(4).map(|m| m.as_str().to_string()),
            build: caps.get(5).map(|m| m.as_str().to_string()),
        };
        version.validate()?;
        Ok(version)
    }

    /// Construct a version from its parts.
    ///
    /// Empty prerelease or build strings are treated as unset.
    pub fn new(
        major: i64,
        minor: i64,
        patch: i64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, SemverError> {
        let version = Self::assemble(major, minor, patch, prerelease, build);
        version.validate()?;
        version.check_identifiers()?;
        Ok(version)
    }

    /// Build a value whose text is the formatted fields, without any checks
    pub(crate) fn assemble(
        major: i64,
        minor: i64,
        patch: i64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Self {
        let mut version = Self {
            text: String::new(),
            major,
            minor,
            patch,
            prerelease: non_empty(prerelease),
            build: non_empty(build),
        };
        version.text = version.to_string();
        version
    }

    /// Reject negative major, minor or patch numbers
    pub fn validate(&self) -> Result<(), SemverError> {
        if self.major < 0 || self.minor < 0 || self.patch < 0 {
            return Err(SemverError::NegativeComponent {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
            });
        }
        Ok(())
    }

    /// Reject prerelease or build strings that the grammar would not accept
    pub(crate) fn check_identifiers(&self) -> Result<(), SemverError> {
        let prerelease_ok = self
            .prerelease
            .as_deref()
            .is_none_or(|pre| PRERELEASE_RE.is_match(pre));
        let build_ok = self
            .build
            .as_deref()
            .is_none_or(|build| BUILD_RE.is_match(build));

        if prerelease_ok && build_ok {
            Ok(())
        } else {
            Err(SemverError::InvalidFormat(self.text.clone()))
        }
    }

    pub fn major(&self) -> i64 {
        self.major
    }

    pub fn minor(&self) -> i64 {
        self.minor
    }

    pub fn patch(&self) -> i64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// The canonical text this value was parsed from or formatted to
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Digits are guaranteed by the grammar, so the only failure is overflow
fn parse_component(component: &'static str, digits: &str) -> Result<i64, SemverError> {
    digits
        .parse()
        .map_err(|_| SemverError::ComponentOutOfRange {
            component,
            value: digits.to_string(),
        })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
