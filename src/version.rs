//! Project version canonicalization.
//!
//! Windows version-info resources require a version of exactly 4 numeric
//! parts (major.minor.patch.build). Project versions are rarely in that
//! shape, so [`FileVersion`] normalizes a free-form dotted version:
//! - "1" -> "1.0.0.0"
//! - "3.14" -> "3.14.0.0"
//! - "302.08" -> "302.8.0.0" (leading zeros stripped)
//! - "1.2.3.4.5.6" -> "1.2.3.4" (truncates to first 4)
//! - "1.2.3-alpha+001" -> "1.2.3.0" (pre-release/build suffix cut off)

use crate::error::{LaunchwrapError, Result};
use std::fmt;

/// Number of numeric levels a Windows file version carries.
const VERSION_LEVELS: usize = 4;

/// A version normalized to the 4-level numeric form.
///
/// Parse with [`FileVersion::from_project_version`]; `Display` renders the
/// canonical dotted string, each level as its integer value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileVersion([u32; VERSION_LEVELS]);

impl FileVersion {
    /// Parses a free-form project version into the 4-level numeric form.
    ///
    /// The accepted grammar is one or more dot-separated unsigned integers,
    /// optionally followed by a single `-` or `+` and a pre-release/build
    /// suffix. The suffix is discarded entirely, including any further `-`
    /// or `+` inside it (so SemVer's `-pre+build` counts as one suffix).
    ///
    /// # Errors
    ///
    /// [`LaunchwrapError::InvalidVersionFormat`] when the string does not
    /// match the grammar: empty or non-numeric levels, a level outside the
    /// 32-bit range, an empty suffix, or a suffix with characters outside
    /// word/dot/dash.
    pub fn from_project_version(version: &str) -> Result<Self> {
        let (numeric, suffix) = split_off_text_flags(version);

        if let Some(suffix) = suffix {
            validate_suffix(version, suffix)?;
        }

        let mut levels = [0u32; VERSION_LEVELS];
        for (i, token) in numeric.split('.').enumerate() {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LaunchwrapError::invalid_version(
                    version,
                    format!("version level '{token}' is not an unsigned integer"),
                ));
            }
            // Levels past the 4th are validated but silently discarded.
            if i < VERSION_LEVELS {
                levels[i] = token.parse().map_err(|_| {
                    LaunchwrapError::invalid_version(
                        version,
                        format!("version level '{token}' exceeds the 32-bit range"),
                    )
                })?;
            }
        }

        Ok(Self(levels))
    }

    /// Returns the 4 numeric levels, most significant first.
    pub fn levels(&self) -> [u32; VERSION_LEVELS] {
        self.0
    }
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, build] = self.0;
        write!(f, "{major}.{minor}.{patch}.{build}")
    }
}

/// Normalizes a project version to its canonical 4-level string.
pub fn normalize(version: &str) -> Result<String> {
    FileVersion::from_project_version(version).map(|v| v.to_string())
}

/// Normalizes an optional project version; absent stays absent.
pub fn normalize_opt(version: Option<&str>) -> Result<Option<String>> {
    version.map(normalize).transpose()
}

/// Splits at the first `-` or `+`, separating the numeric prefix from the
/// pre-release/build suffix.
fn split_off_text_flags(version: &str) -> (&str, Option<&str>) {
    match version.find(['-', '+']) {
        Some(at) => (&version[..at], Some(&version[at + 1..])),
        None => (version, None),
    }
}

fn validate_suffix(version: &str, suffix: &str) -> Result<()> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '+');

    if suffix.is_empty() || !suffix.chars().all(allowed) {
        return Err(LaunchwrapError::invalid_version(
            version,
            "pre-release/build suffix may only contain word, dot and dash characters",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_separator_only() {
        assert_eq!(split_off_text_flags("1.2-a-b+c"), ("1.2", Some("a-b+c")));
        assert_eq!(split_off_text_flags("1.2+build"), ("1.2", Some("build")));
        assert_eq!(split_off_text_flags("1.2"), ("1.2", None));
    }

    #[test]
    fn rejects_empty_suffix() {
        assert!(FileVersion::from_project_version("1.2.3-").is_err());
        assert!(FileVersion::from_project_version("1.2.3+").is_err());
    }

    #[test]
    fn rejects_suffix_with_illegal_characters() {
        assert!(FileVersion::from_project_version("1.2.3-alpha beta").is_err());
        assert!(FileVersion::from_project_version("1.2.3-a;b").is_err());
    }

    #[test]
    fn exposes_numeric_levels() {
        let v = FileVersion::from_project_version("1.2.3").unwrap();
        assert_eq!(v.levels(), [1, 2, 3, 0]);
    }

    #[test]
    fn rejects_levels_outside_u32_range() {
        assert!(FileVersion::from_project_version("4294967296.0").is_err());
        assert!(FileVersion::from_project_version("4294967295.0").is_ok());
    }
}
