//! Version-info resource descriptor and default-value resolution.
//!
//! [`VersionInfo`] holds the descriptive fields Windows Explorer shows for
//! an executable. Callers usually populate only a few of them; the
//! [`defaults`] pass derives the rest from [`ProjectFacts`](crate::ProjectFacts)
//! and hardcoded dummies, warning once per dummy actually used.

pub mod copyright;
mod defaults;
mod language;

pub use defaults::{fill_out_by_defaults, Resolution, Substitution};
pub use language::LanguageId;

/// Information that appears in the Windows Explorer file properties.
///
/// Every textual field is optional before resolution and guaranteed
/// non-blank afterwards. Fields already set are never overwritten.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionInfo {
    /// Version number in x.x.x.x format.
    ///
    /// Default: the normalized project version
    pub file_version: Option<String>,

    /// Free-form version number, like "1.20.RC1".
    ///
    /// Default: the project version as-is
    pub txt_file_version: Option<String>,

    /// File description shown to the user.
    ///
    /// Default: the project description
    pub file_description: Option<String>,

    /// Legal copyright.
    ///
    /// Default: generated from inception year and organization name
    pub copyright: Option<String>,

    /// Version number in x.x.x.x format.
    ///
    /// Default: the normalized project version
    pub product_version: Option<String>,

    /// Free-form version number, like "1.20.RC1".
    ///
    /// Default: the project version as-is
    pub txt_product_version: Option<String>,

    /// The product name.
    ///
    /// Default: the project name
    pub product_name: Option<String>,

    /// The company name.
    ///
    /// Default: the organization name
    pub company_name: Option<String>,

    /// The internal name. For instance the filename without extension or the
    /// module name.
    ///
    /// Default: the artifact id
    pub internal_name: Option<String>,

    /// The original filename without path. Lets Windows tell whether a user
    /// has renamed the file.
    ///
    /// Default: the output file base name
    pub original_filename: Option<String>,

    /// Resource language; a static construction-time default, not part of
    /// the per-build resolution pass.
    pub language: LanguageId,

    /// Trademarks of the product.
    ///
    /// Default: the organization name
    pub trademarks: Option<String>,
}
