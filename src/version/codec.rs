//! Structured document bridge for [`Version`]
//!
//! A version serializes to a map:
//!
//! ```json
//! { "semver": "2.1.0-rc.1+exp", "major": 2, "minor": 1, "patch": 0,
//!   "prerelease": "rc.1", "build": "exp" }
//! ```
//!
//! `prerelease` and `build` are omitted when unset. Decoding accepts any map,
//! including one that only carries `semver`, and rejects documents whose
//! explicit fields disagree with the `semver` text.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::version::error::SemverError;
use crate::version::semver::Version;

/// Generic structured form of a version
pub type Document = Map<String, Value>;

/// Fields recognised in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Semver,
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Semver,
        Field::Major,
        Field::Minor,
        Field::Patch,
        Field::Prerelease,
        Field::Build,
    ];

    /// Key written by [`Version::to_document`]
    fn key(self) -> &'static str {
        match self {
            Field::Semver => "semver",
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::Prerelease => "prerelease",
            Field::Build => "build",
        }
    }

    fn capitalized(self) -> &'static str {
        match self {
            Field::Semver => "Semver",
            Field::Major => "Major",
            Field::Minor => "Minor",
            Field::Patch => "Patch",
            Field::Prerelease => "Prerelease",
            Field::Build => "Build",
        }
    }

    /// A key matches when upper-casing its first character yields the
    /// capitalized field name, so both `major` and `Major` resolve.
    fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let first = chars.next()?;
        let capitalized: String = first.to_uppercase().chain(chars).collect();
        Self::ALL
            .into_iter()
            .find(|field| field.capitalized() == capitalized)
    }
}

/// Field values collected from a document before any consistency checks
#[derive(Debug, Default)]
struct Draft {
    semver: String,
    major: i64,
    minor: i64,
    patch: i64,
    prerelease: String,
    build: String,
}

impl Draft {
    fn assign(&mut self, field: Field, value: &Value) -> Result<(), SemverError> {
        match field {
            Field::Semver => self.semver = text_value(field, value)?,
            Field::Major => self.major = integer_value(field, value)?,
            Field::Minor => self.minor = integer_value(field, value)?,
            Field::Patch => self.patch = integer_value(field, value)?,
            Field::Prerelease => self.prerelease = text_value(field, value)?,
            Field::Build => self.build = text_value(field, value)?,
        }
        Ok(())
    }

    fn has_version_numbers(&self) -> bool {
        self.major != 0 || self.minor != 0 || self.patch != 0
    }
}

impl Version {
    /// Produce the structured form of this version
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.insert(Field::Semver.key().to_string(), Value::from(self.as_str()));
        document.insert(Field::Major.key().to_string(), Value::from(self.major()));
        document.insert(Field::Minor.key().to_string(), Value::from(self.minor()));
        document.insert(Field::Patch.key().to_string(), Value::from(self.patch()));
        if let Some(pre) = self.prerelease() {
            document.insert(Field::Prerelease.key().to_string(), Value::from(pre));
        }
        if let Some(build) = self.build() {
            document.insert(Field::Build.key().to_string(), Value::from(build));
        }
        document
    }

    /// Reconstruct a version from its structured form.
    ///
    /// Unknown keys and `null` values are ignored. When `semver` is given but
    /// major, minor and patch are all zero, the whole value is re-derived by
    /// parsing `semver`; this also applies to a genuine `0.0.0`, which parses
    /// back to itself.
    pub fn from_document(document: &Document) -> Result<Self, SemverError> {
        let mut draft = Draft::default();
        for (key, value) in document {
            let Some(field) = Field::from_key(key) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            draft.assign(field, value)?;
        }

        if draft.semver.is_empty() {
            return Err(SemverError::MissingSemver);
        }

        if !draft.has_version_numbers() {
            debug!(semver = %draft.semver, "No version numbers in document, parsing semver text");
            return Version::parse(&draft.semver);
        }

        let version = Version::assemble(
            draft.major,
            draft.minor,
            draft.patch,
            Some(draft.prerelease.as_str()),
            Some(draft.build.as_str()),
        );
        if version.as_str() != draft.semver {
            return Err(SemverError::InconsistentFields {
                semver: draft.semver,
                formatted: version.as_str().to_string(),
            });
        }
        version.validate()?;
        version.check_identifiers()?;
        Ok(version)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Document::deserialize(deserializer)?;
        Version::from_document(&document).map_err(D::Error::custom)
    }
}

fn text_value(field: Field, value: &Value) -> Result<String, SemverError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_type(field, "a string", value))
}

/// Accepts integers, integral floats and numeral strings such as `"42"` or `"-1"`
fn integer_value(field: Field, value: &Value) -> Result<i64, SemverError> {
    match value {
        Value::Number(number) => number_value(field, number),
        Value::String(numeral) => numeral_value(field, numeral),
        other => Err(invalid_type(field, "an integer", other)),
    }
}

fn number_value(field: Field, number: &Number) -> Result<i64, SemverError> {
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    if number.is_u64() {
        return Err(out_of_range(field, number.to_string()));
    }

    match number.as_f64() {
        Some(f) if f.fract() != 0.0 || !f.is_finite() => {
            Err(invalid_type(field, "an integer", &Value::Number(number.clone())))
        }
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(out_of_range(field, number.to_string())),
    }
}

fn numeral_value(field: Field, numeral: &str) -> Result<i64, SemverError> {
    let digits = numeral.strip_prefix(['+', '-']).unwrap_or(numeral);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_type(
            field,
            "an integer",
            &Value::String(numeral.to_string()),
        ));
    }
    numeral
        .parse()
        .map_err(|_| out_of_range(field, numeral.to_string()))
}

fn invalid_type(field: Field, expected: &'static str, found: &Value) -> SemverError {
    let found = match found {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    };
    SemverError::InvalidFieldType {
        field: field.key(),
        expected,
        found,
    }
}

fn out_of_range(field: Field, value: String) -> SemverError {
    SemverError::ComponentOutOfRange {
        component: field.key(),
        value,
    }
}
