pub mod config;
pub mod version;

pub use version::{Document, SemverError, Version};
