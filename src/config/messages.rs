//! Localized runtime message overrides.

/// Messages the wrapper executable shows to the user.
///
/// Every field is optional; blank fields keep the tool's built-in text.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessagesSettings {
    /// Shown when the application fails to start.
    pub startup_err: Option<String>,

    /// Shown when the found runtime does not satisfy the version bounds.
    pub jre_version_err: Option<String>,

    /// Shown when the launcher itself fails.
    pub launcher_err: Option<String>,

    /// Shown when a second instance is started and single-instance mode is
    /// active.
    pub instance_already_exists_msg: Option<String>,

    /// Shown when no runtime could be located at all.
    pub jre_not_found_err: Option<String>,
}
