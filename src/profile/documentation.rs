use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::project::ProjectTables;
use crate::license::identify_license_text;
use crate::models::DocumentationProfile;

fn first_file(root: &Path, names: &[String]) -> Option<String> {
    names.iter().find(|n| root.join(n.as_str()).is_file()).cloned()
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Markdown ATX headings (`#` .. `######`), outside fenced code blocks.
fn count_headings(content: &str) -> usize {
    let mut fenced = false;
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                fenced = !fenced;
                return false;
            }
            let level = trimmed.chars().take_while(|c| *c == '#').count();
            !fenced && (1..=6).contains(&level) && trimmed[level..].starts_with([' ', '\t'])
        })
        .count()
}

pub fn analyze_documentation(root: &Path, tables: &ProjectTables) -> Result<DocumentationProfile> {
    let mut profile = DocumentationProfile {
        readme: first_file(root, &tables.readme_names),
        changelog: first_file(root, &tables.changelog_names),
        license_file: first_file(root, &tables.license_names),
        contributing: first_file(root, &tables.contributing_names),
        code_of_conduct: first_file(root, &tables.code_of_conduct_names),
        docs_directory: tables
            .docs_directories
            .iter()
            .find(|d| root.join(d.as_str()).is_dir())
            .cloned(),
        ..Default::default()
    };

    if let Some(readme) = &profile.readme {
        profile.readme_headings = count_headings(&read_lossy(&root.join(readme))?);
        profile.has_readme = true;
    }
    if let Some(license) = &profile.license_file {
        profile.license = identify_license_text(&read_lossy(&root.join(license))?);
    }

    let mut spec_dirs = vec![String::new()];
    spec_dirs.extend(profile.docs_directory.iter().map(|d| format!("{}/", d)));
    for dir in &spec_dirs {
        for name in &tables.api_spec_names {
            let rel = format!("{}{}", dir, name);
            if root.join(&rel).is_file() {
                profile.api_specs.push(rel);
            }
        }
    }
    Ok(profile)
}
