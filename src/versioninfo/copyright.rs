//! Default copyright line generation.

use chrono::{Datelike, Local};

/// Builds the default copyright line from project facts.
///
/// Output shape is `Copyright © {inception}-{build_year} {organization}. All
/// rights reserved.` where the inception prefix and organization suffix are
/// each dropped when blank. The build year is the current calendar year at
/// resolution time.
pub fn generate(inception_year: Option<&str>, organization_name: Option<&str>) -> String {
    let build_year = Local::now().year();
    let inception = inception_prefix(inception_year);
    let organization = organization_suffix(organization_name);

    format!("Copyright © {inception}{build_year}{organization}. All rights reserved.")
}

fn inception_prefix(inception_year: Option<&str>) -> String {
    match inception_year {
        Some(year) if !year.trim().is_empty() => format!("{year}-"),
        _ => String::new(),
    }
}

fn organization_suffix(organization_name: Option<&str>) -> String {
    match organization_name {
        Some(name) if !name.trim().is_empty() => format!(" {name}"),
        _ => String::new(),
    }
}
