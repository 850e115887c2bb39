//! Defaults resolution over the version-info descriptor.

use chrono::Datelike;
use launchwrap::versioninfo::fill_out_by_defaults;
use launchwrap::{LanguageId, ProjectFacts, VersionInfo};
use std::path::Path;

fn populated_info() -> VersionInfo {
    VersionInfo {
        file_version: Some("1.0.0.0".into()),
        txt_file_version: Some("1.0.0.0".into()),
        file_description: Some("Launchwrap Test Application".into()),
        copyright: Some("Copyright Orphan OSS".into()),
        product_version: Some("1.0.0.0".into()),
        txt_product_version: Some("1.0.0.0".into()),
        product_name: Some("Test App".into()),
        company_name: Some("Orphan OSS Company".into()),
        internal_name: Some("app".into()),
        original_filename: Some("app.exe".into()),
        language: LanguageId::EnglishUs,
        trademarks: Some("Test ™".into()),
    }
}

fn populated_facts() -> ProjectFacts {
    ProjectFacts {
        version: Some("4.3.2.1".into()),
        name: Some("launchwrap-test-app".into()),
        artifact_id: Some("launchwrap-test".into()),
        description: Some("Launchwrap Test App".into()),
        inception_year: Some("2017".into()),
        organization_name: Some("Another OSS".into()),
    }
}

#[test]
fn keeps_already_filled_version_fields() {
    let info = populated_info();
    let facts = populated_facts();

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();
    let resolved = resolution.version_info;

    assert_eq!(resolved.file_version.as_deref(), Some("1.0.0.0"));
    assert_eq!(resolved.product_version.as_deref(), Some("1.0.0.0"));
    assert_ne!(resolved.file_version.as_deref(), Some("4.3.2.1"));
}

#[test]
fn fills_version_fields_from_project_version_when_empty() {
    let mut info = populated_info();
    info.file_version = None;
    info.product_version = None;

    let facts = ProjectFacts {
        version: Some("1.2.3.4".into()),
        ..populated_facts()
    };

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();
    let resolved = resolution.version_info;

    assert_eq!(resolved.file_version.as_deref(), Some("1.2.3.4"));
    assert_eq!(resolved.product_version.as_deref(), Some("1.2.3.4"));
}

#[test]
fn short_project_version_is_normalized_into_version_fields() {
    let mut info = populated_info();
    info.file_version = None;

    let facts = ProjectFacts {
        version: Some("1.21.1-SNAPSHOT".into()),
        ..populated_facts()
    };

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();

    assert_eq!(
        resolution.version_info.file_version.as_deref(),
        Some("1.21.1.0")
    );
    // txt versions stay free-form
    assert_eq!(
        resolution.version_info.txt_file_version.as_deref(),
        Some("1.0.0.0")
    );
}

#[test]
fn keeps_already_filled_copyright() {
    let info = populated_info();
    let facts = populated_facts();

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();
    let copyright = resolution.version_info.copyright.unwrap();

    assert_eq!(copyright, "Copyright Orphan OSS");
    assert!(!copyright.contains("2017"));
    assert!(!copyright.contains("Another OSS"));
}

#[test]
fn fills_copyright_from_inception_year_and_organization() {
    let mut info = populated_info();
    info.copyright = None;

    let facts = ProjectFacts {
        inception_year: Some("2019".into()),
        organization_name: Some("Some OSS".into()),
        ..populated_facts()
    };

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();
    let copyright = resolution.version_info.copyright.unwrap();

    assert!(copyright.contains("2019"));
    assert!(copyright.contains("Some OSS"));
}

#[test]
fn fills_company_name_and_trademarks_from_organization() {
    let mut info = populated_info();
    info.company_name = None;
    info.trademarks = None;

    let facts = ProjectFacts {
        organization_name: Some("Other OSS".into()),
        ..populated_facts()
    };

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();
    let resolved = resolution.version_info;

    assert_eq!(resolved.company_name.as_deref(), Some("Other OSS"));
    assert_eq!(resolved.trademarks.as_deref(), Some("Other OSS"));
}

#[test]
fn fills_simple_values_from_project_facts_when_empty() {
    let mut info = populated_info();
    info.txt_file_version = None;
    info.txt_product_version = None;
    info.product_name = None;
    info.internal_name = None;
    info.file_description = None;

    let facts = ProjectFacts {
        version: Some("1.21.1".into()),
        name: Some("launchwrap-test-app".into()),
        artifact_id: Some("launchwrap-test".into()),
        description: Some("Launchwrap Test App".into()),
        ..populated_facts()
    };

    let resolution =
        fill_out_by_defaults(&info, Some(&facts), Some(Path::new("testApp.exe"))).unwrap();
    let resolved = resolution.version_info;

    assert_eq!(resolved.txt_file_version.as_deref(), Some("1.21.1"));
    assert_eq!(resolved.txt_product_version.as_deref(), Some("1.21.1"));
    assert_eq!(resolved.product_name.as_deref(), Some("launchwrap-test-app"));
    assert_eq!(resolved.internal_name.as_deref(), Some("launchwrap-test"));
    assert_eq!(
        resolved.file_description.as_deref(),
        Some("Launchwrap Test App")
    );
}

#[test]
fn fills_original_filename_from_outfile_when_empty() {
    let mut info = populated_info();
    info.original_filename = None;

    let resolution = fill_out_by_defaults(
        &info,
        Some(&populated_facts()),
        Some(Path::new("target/testApp.exe")),
    )
    .unwrap();

    assert_eq!(
        resolution.version_info.original_filename.as_deref(),
        Some("testApp.exe")
    );
}

#[test]
fn keeps_original_filename_when_filled() {
    let resolution = fill_out_by_defaults(
        &populated_info(),
        Some(&populated_facts()),
        Some(Path::new("target/testApp.exe")),
    )
    .unwrap();

    assert_eq!(
        resolution.version_info.original_filename.as_deref(),
        Some("app.exe")
    );
}

#[test]
fn empty_descriptor_and_facts_resolve_to_dummies() {
    let build_year = chrono::Local::now().year();

    let resolution = fill_out_by_defaults(
        &VersionInfo::default(),
        Some(&ProjectFacts::default()),
        Some(Path::new("app.exe")),
    )
    .unwrap();
    let resolved = resolution.version_info;

    assert_eq!(resolved.file_version.as_deref(), Some("1.0.0.0"));
    assert_eq!(resolved.txt_file_version.as_deref(), Some("1.0.0.0"));
    assert_eq!(resolved.file_description.as_deref(), Some("A Java project."));
    assert_eq!(
        resolved.copyright.as_deref(),
        Some(
            format!("Copyright © 2020-{build_year} Default organization. All rights reserved.")
                .as_str()
        )
    );
    assert_eq!(resolved.product_version.as_deref(), Some("1.0.0.0"));
    assert_eq!(resolved.txt_product_version.as_deref(), Some("1.0.0.0"));
    assert_eq!(resolved.product_name.as_deref(), Some("Java Project"));
    assert_eq!(
        resolved.company_name.as_deref(),
        Some("Default organization")
    );
    assert_eq!(resolved.internal_name.as_deref(), Some("java-project"));
    assert_eq!(resolved.trademarks.as_deref(), Some("Default organization"));
    assert_eq!(resolved.original_filename.as_deref(), Some("app.exe"));
    assert_eq!(resolved.language, LanguageId::EnglishUs);
}

#[test]
fn one_substitution_per_blank_fact_in_resolution_order() {
    let resolution = fill_out_by_defaults(
        &VersionInfo::default(),
        Some(&ProjectFacts::default()),
        Some(Path::new("")),
    )
    .unwrap();

    let parameters: Vec<&str> = resolution
        .substitutions
        .iter()
        .map(|s| s.parameter)
        .collect();
    assert_eq!(
        parameters,
        [
            "project.version",
            "project.name",
            "project.artifactId",
            "project.description",
            "project.inceptionYear",
            "project.organization.name",
            "outfile",
        ]
    );
}

#[test]
fn no_substitutions_when_facts_are_fully_populated() {
    let resolution = fill_out_by_defaults(
        &populated_info(),
        Some(&populated_facts()),
        Some(Path::new("testApp.exe")),
    )
    .unwrap();

    assert!(resolution.substitutions.is_empty());
}

#[test]
fn whitespace_only_facts_count_as_blank() {
    let facts = ProjectFacts {
        version: Some("  ".into()),
        ..ProjectFacts::default()
    };

    let resolution = fill_out_by_defaults(
        &VersionInfo::default(),
        Some(&facts),
        Some(Path::new("app.exe")),
    )
    .unwrap();

    assert_eq!(
        resolution.version_info.file_version.as_deref(),
        Some("1.0.0.0")
    );
    assert!(resolution
        .substitutions
        .iter()
        .any(|s| s.parameter == "project.version"));
}

#[test]
fn resolution_is_a_merge_and_rerunning_changes_nothing() {
    let facts = ProjectFacts::default();
    let first = fill_out_by_defaults(
        &VersionInfo::default(),
        Some(&facts),
        Some(Path::new("app.exe")),
    )
    .unwrap();

    let second =
        fill_out_by_defaults(&first.version_info, Some(&facts), Some(Path::new("app.exe")))
            .unwrap();

    // The blank facts are still looked up (and notified), but no field of
    // the already-populated descriptor changes.
    assert_eq!(second.substitutions.len(), first.substitutions.len());
    assert_eq!(
        serde_json::to_value(&second.version_info).unwrap(),
        serde_json::to_value(&first.version_info).unwrap()
    );
}

#[test]
fn descriptor_round_trips_through_json() {
    let resolved = fill_out_by_defaults(
        &populated_info(),
        Some(&populated_facts()),
        Some(Path::new("testApp.exe")),
    )
    .unwrap()
    .version_info;

    let json = serde_json::to_string(&resolved).unwrap();
    let back: VersionInfo = serde_json::from_str(&json).unwrap();

    assert_eq!(back.product_name, resolved.product_name);
    assert_eq!(back.language, resolved.language);
    assert_eq!(back.copyright, resolved.copyright);
}
