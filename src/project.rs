//! Project facts supplied by the surrounding build tooling.

/// Read-only snapshot of project metadata.
///
/// The build orchestration layer fills this from whatever manifest it reads
/// (a Maven POM, a Gradle project, a hand-written descriptor). Every field
/// is optional; the defaults resolver substitutes a dummy value, with a
/// warning, for each blank field it actually needs.
///
/// # Examples
///
/// ```
/// use launchwrap::ProjectFacts;
///
/// let facts = ProjectFacts {
///     version: Some("1.4.2".into()),
///     name: Some("Invoice Mailer".into()),
///     artifact_id: Some("invoice-mailer".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFacts {
    /// Project version string, free form (e.g. "1.2.3-SNAPSHOT").
    ///
    /// Default: None (dummy "1.0.0.0")
    pub version: Option<String>,

    /// Human-readable project name.
    ///
    /// Default: None (dummy "Java Project")
    pub name: Option<String>,

    /// Machine-readable artifact identifier.
    ///
    /// Default: None (dummy "java-project")
    pub artifact_id: Option<String>,

    /// Brief project description.
    ///
    /// Default: None (dummy "A Java project.")
    pub description: Option<String>,

    /// Year the project was started, as text.
    ///
    /// Default: None (dummy "2020")
    pub inception_year: Option<String>,

    /// Name of the owning organization.
    ///
    /// Default: None (dummy "Default organization")
    pub organization_name: Option<String>,
}

/// Returns true when the value is absent or whitespace-only.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
