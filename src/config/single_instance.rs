//! Single-instance settings.

/// Restricts the wrapped application to a single running instance.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SingleInstanceSettings {
    /// Name of the mutex guarding the instance; must be unique per
    /// application.
    pub mutex_name: Option<String>,

    /// Title of the window to bring to front when a second instance starts.
    ///
    /// Default: None (no window is raised)
    pub window_title: Option<String>,
}
