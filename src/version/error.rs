use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemverError {
    #[error("Invalid semver string: {0}")]
    InvalidFormat(String),

    #[error("{component} version number out of range: {value}")]
    ComponentOutOfRange {
        component: &'static str,
        value: String,
    },

    #[error(
        "Major, minor and patch version numbers must be non-negative (got {major}.{minor}.{patch})"
    )]
    NegativeComponent { major: i64, minor: i64, patch: i64 },

    #[error("Invalid type for field '{field}': expected {expected}, found {found}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("semver must not be empty")]
    MissingSemver,

    #[error("semver must match parsed version: '{semver}' != '{formatted}'")]
    InconsistentFields { semver: String, formatted: String },
}
