//! Metadata preparation for wrapping Java applications as native Windows
//! executables.
//!
//! This library maps project configuration onto the descriptor the native
//! wrapper tool consumes:
//! - Version canonicalization to the 4-level numeric form Windows
//!   version-info resources require ([`FileVersion`])
//! - Default-value resolution for every blank version-info field, with one
//!   warning per dummy substitution ([`versioninfo::fill_out_by_defaults`])
//! - The full wrapper configuration schema ([`ExecutableConfig`]), built
//!   through a validating [`ConfigBuilder`]
//!
//! Artifact resolution and invoking the native builder itself are the
//! caller's business.

pub mod config;
pub mod error;
pub mod project;
pub mod version;
pub mod versioninfo;

// Re-export commonly used types
pub use config::{ConfigBuilder, ExecutableConfig, HeaderType, ProcessPriority};
pub use error::{LaunchwrapError, Result};
pub use project::ProjectFacts;
pub use version::FileVersion;
pub use versioninfo::{LanguageId, VersionInfo};
