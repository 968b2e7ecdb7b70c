//! Semantic version value type and its operations
//!
//! This module turns version text into a structured [`Version`], formats it
//! back to canonical text, orders versions by precedence, and bridges them
//! to a generic structured document.
//!
//! # Architecture
//!
//! ```text
//!                   ┌─────────────┐
//!   "1.2.3-rc.1" ──▶│   semver    │──▶ Version
//!                   │(parse/fmt)  │       │
//!                   └─────────────┘       │
//!                          ▲              ├──────────────────┐
//!                          │              ▼                  ▼
//!                   ┌─────────────┐ ┌─────────────┐   ┌─────────────┐
//!   { "semver": … }◀▶│    codec    │ │   compare   │   │   Display   │
//!                   │ (documents) │ │ (precedence)│   │ (canonical) │
//!                   └─────────────┘ └─────────────┘   └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: `Version` type, parser, validator and formatter
//! - [`compare`]: Precedence ordering (`cmp_precedence`, `Ord`)
//! - [`codec`]: Structured document conversion and serde support
//! - [`error`]: Error type shared by all operations

pub mod codec;
pub mod compare;
pub mod error;
pub mod semver;

pub use codec::Document;
pub use compare::{compare_identifiers, compare_prerelease};
pub use error::SemverError;
pub use semver::Version;
