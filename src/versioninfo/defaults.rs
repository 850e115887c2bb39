//! Default-value resolution for [`VersionInfo`].
//!
//! Resolution is a pure pass: the input descriptor is never mutated, the
//! fully populated copy comes back in a [`Resolution`] together with the
//! list of dummy substitutions that were actually needed. Six primary
//! project facts (version, name, artifact id, description, inception year,
//! organization name) plus the output file name are eligible for dummy
//! substitution; each blank one produces exactly one [`Substitution`].

use super::{copyright, VersionInfo};
use crate::error::{LaunchwrapError, Result};
use crate::project::{is_blank, ProjectFacts};
use crate::version;
use std::path::Path;

/// Dummy values used when a project fact is blank.
mod dummy {
    pub const VERSION: &str = "1.0.0.0";
    pub const NAME: &str = "Java Project";
    pub const ARTIFACT_ID: &str = "java-project";
    pub const DESCRIPTION: &str = "A Java project.";
    pub const INCEPTION_YEAR: &str = "2020";
    pub const ORGANIZATION_NAME: &str = "Default organization";
    pub const OUTFILE_NAME: &str = "app.exe";
}

/// A dummy value substituted for a blank project fact.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Substitution {
    /// Name of the blank parameter, e.g. "project.version".
    pub parameter: &'static str,
    /// The dummy value used in its place.
    pub value: &'static str,
}

/// Outcome of a defaults-resolution pass.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// The fully populated descriptor.
    pub version_info: VersionInfo,
    /// Dummy substitutions, in resolution order.
    pub substitutions: Vec<Substitution>,
}

impl Resolution {
    /// Emits one warning per dummy substitution.
    pub fn warn_substitutions(&self) {
        for s in &self.substitutions {
            log::warn!(
                "'{}' is blank, filling out version info with dummy value '{}'",
                s.parameter,
                s.value
            );
        }
    }
}

/// Fills every blank descriptor field from project facts and dummies.
///
/// Fields already set are kept verbatim, so re-running the pass on an
/// already-populated descriptor is a no-op. The `language` field is a
/// construction-time default and is carried through untouched.
///
/// # Errors
///
/// - [`LaunchwrapError::MissingRequiredInput`] when `facts` or `outfile`
///   is absent.
/// - [`LaunchwrapError::InvalidVersionFormat`] when a version field needs
///   filling and the working project version fails the version grammar.
pub fn fill_out_by_defaults(
    info: &VersionInfo,
    facts: Option<&ProjectFacts>,
    outfile: Option<&Path>,
) -> Result<Resolution> {
    let facts = facts.ok_or(LaunchwrapError::MissingRequiredInput {
        input: "project facts",
    })?;
    let outfile = outfile.ok_or(LaunchwrapError::MissingRequiredInput { input: "outfile" })?;

    let mut substitutions = Vec::new();
    let mut working = |value: Option<&str>, parameter, dummy: &'static str| {
        if is_blank(value) {
            substitutions.push(Substitution { parameter, value: dummy });
            dummy.to_string()
        } else {
            value.unwrap_or_default().to_string()
        }
    };

    let project_version = working(facts.version.as_deref(), "project.version", dummy::VERSION);
    let project_name = working(facts.name.as_deref(), "project.name", dummy::NAME);
    let artifact_id = working(
        facts.artifact_id.as_deref(),
        "project.artifactId",
        dummy::ARTIFACT_ID,
    );
    let description = working(
        facts.description.as_deref(),
        "project.description",
        dummy::DESCRIPTION,
    );
    let inception_year = working(
        facts.inception_year.as_deref(),
        "project.inceptionYear",
        dummy::INCEPTION_YEAR,
    );
    let organization_name = working(
        facts.organization_name.as_deref(),
        "project.organization.name",
        dummy::ORGANIZATION_NAME,
    );
    let outfile_name = working(outfile_base_name(outfile).as_deref(), "outfile", dummy::OUTFILE_NAME);

    let mut resolved = info.clone();

    if is_blank(resolved.file_version.as_deref()) {
        resolved.file_version = Some(version::normalize(&project_version)?);
    }
    if is_blank(resolved.product_version.as_deref()) {
        resolved.product_version = Some(version::normalize(&project_version)?);
    }
    if is_blank(resolved.copyright.as_deref()) {
        resolved.copyright = Some(copyright::generate(
            Some(&inception_year),
            Some(&organization_name),
        ));
    }
    if is_blank(resolved.company_name.as_deref()) {
        resolved.company_name = Some(organization_name.clone());
    }
    if is_blank(resolved.trademarks.as_deref()) {
        resolved.trademarks = Some(organization_name);
    }
    if is_blank(resolved.txt_file_version.as_deref()) {
        resolved.txt_file_version = Some(project_version.clone());
    }
    if is_blank(resolved.txt_product_version.as_deref()) {
        resolved.txt_product_version = Some(project_version);
    }
    if is_blank(resolved.product_name.as_deref()) {
        resolved.product_name = Some(project_name);
    }
    if is_blank(resolved.internal_name.as_deref()) {
        resolved.internal_name = Some(artifact_id);
    }
    if is_blank(resolved.file_description.as_deref()) {
        resolved.file_description = Some(description);
    }
    if is_blank(resolved.original_filename.as_deref()) {
        resolved.original_filename = Some(outfile_name);
    }

    Ok(Resolution {
        version_info: resolved,
        substitutions,
    })
}

fn outfile_base_name(outfile: &Path) -> Option<String> {
    outfile
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
