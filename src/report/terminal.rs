use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{
    ClassificationTier, ComponentKind, ComponentProfile, ComponentRef, Dependency, LanguageStat,
    LanguageTotal, WorkspaceProfile,
};

/// Render one root's profile.
pub fn render_profile(profile: &ComponentProfile, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}", summary_line(profile));
        return Ok(());
    }

    println!("\n {} v{}", "stackscan".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Scanning: {}\n", profile.root.display());
    if profile.cancelled {
        println!(" {} Analysis cancelled; showing partial results.\n", "[CANCELLED]".yellow().bold());
    }

    let name = if profile.metadata.name.is_empty() {
        "-"
    } else {
        profile.metadata.name.as_str()
    };
    let backend = match profile.backend.runtime {
        Some(runtime) => format!("{} ({})", profile.backend.framework.name, runtime),
        None => profile.backend.framework.name.clone(),
    };
    let testing: Vec<String> = profile
        .testing
        .unit
        .iter()
        .chain(&profile.testing.component)
        .chain(&profile.testing.e2e)
        .cloned()
        .collect();

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Project        : {}", name));
    println!(" │  {:<48} │", format!("Frontend       : {}", profile.frontend.framework.name));
    println!(" │  {:<48} │", format!("Backend        : {}", backend));
    println!(" │  {:<48} │", format!("Testing        : {}", list_or_dash(&testing)));
    println!(" │  {:<48} │", format!("Dependencies   : {}", profile.dependencies.total));
    println!(" │  {:<48} │", format!("Components     : {}", profile.components.len()));
    println!(" └────────────────────────────────────────────────────┘\n");

    if !profile.languages.is_empty() {
        println!(" {} Languages:\n", "[LANG]".cyan().bold());
        println!("{}\n", language_table(&profile.languages));
    }

    if !profile.backend.databases.is_empty() || !profile.backend.api_styles.is_empty() {
        println!(" {} Databases: {}", "[BACKEND]".blue().bold(), list_or_dash(&profile.backend.databases));
        println!(" {} API styles: {}\n", "[BACKEND]".blue().bold(), list_or_dash(&profile.backend.api_styles));
    }

    if !profile.dependencies.risks.is_empty() {
        println!(" {} Dependencies flagged:\n", "[WARN]".yellow().bold());
        for risk in &profile.dependencies.risks {
            println!("   {} {}@{} ({}): {}", "⚠".yellow(), risk.name, risk.version, risk.kind, risk.reason);
        }
        println!();
    }

    if verbose && !profile.dependencies.classified.all.is_empty() {
        println!(" {} All dependencies:\n", "[DEPS]".green().bold());
        println!("{}\n", dependency_table(&profile.dependencies.classified.all));
    }

    Ok(())
}

/// Render a workspace: one row per discovered root, then the summary.
pub fn render_workspace(workspace: &WorkspaceProfile, verbose: bool, quiet: bool) -> Result<()> {
    let summary = &workspace.summary;
    if quiet {
        println!(
            "Roots: {}  Frontend: {}  Backend: {}  Unknown: {}  Failed: {}",
            workspace.roots.len(),
            summary.frontend.len().to_string().green(),
            summary.backend.len().to_string().blue(),
            summary.unknown.len(),
            workspace.failures.len().to_string().red(),
        );
        return Ok(());
    }

    println!("\n {} v{}", "stackscan".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Workspace: {}\n", workspace.root.display());
    if workspace.cancelled {
        println!(" {} Analysis cancelled; showing partial results.\n", "[CANCELLED]".yellow().bold());
    }

    let mut components: Vec<(ComponentKind, &ComponentRef)> = Vec::new();
    components.extend(summary.frontend.iter().map(|c| (ComponentKind::Frontend, c)));
    components.extend(summary.backend.iter().map(|c| (ComponentKind::Backend, c)));
    components.extend(summary.unknown.iter().map(|c| (ComponentKind::Unknown, c)));
    if !components.is_empty() {
        println!(" {} Components:\n", "[ROOTS]".cyan().bold());
        println!("{}\n", component_table(&components));
    }

    if !summary.languages.is_empty() {
        println!(" {} Languages across roots:\n", "[LANG]".cyan().bold());
        println!("{}\n", language_total_table(&summary.languages));
    }

    for failure in &workspace.failures {
        println!(" {} {} ({}): {}", "[ERROR]".red().bold(), failure.root_id, failure.path.display(), failure.message);
    }

    if verbose {
        for profile in &workspace.profiles {
            render_profile(profile, verbose, false)?;
        }
    }

    Ok(())
}

/// One-line digest used by `--quiet`.
fn summary_line(profile: &ComponentProfile) -> String {
    let language = profile.languages.first().map(|l| l.name.as_str()).unwrap_or("-");
    format!(
        "Language: {}  Frontend: {}  Backend: {}  Dependencies: {}",
        language, profile.frontend.framework.name, profile.backend.framework.name, profile.dependencies.total
    )
}

fn header(table: &mut Table, names: &[&str]) {
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(names.iter().map(|n| Cell::new(n).add_attribute(Attribute::Bold)));
}

fn language_table(languages: &[LanguageStat]) -> Table {
    let mut table = Table::new();
    header(&mut table, &["Language", "Files", "Lines", "Extensions"]);
    for stat in languages {
        let extensions: Vec<&str> = stat.extensions.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(&stat.name),
            Cell::new(stat.files).set_alignment(CellAlignment::Right),
            Cell::new(stat.lines).set_alignment(CellAlignment::Right),
            Cell::new(extensions.join(", ")),
        ]);
    }
    table
}

fn language_total_table(languages: &[LanguageTotal]) -> Table {
    let mut table = Table::new();
    header(&mut table, &["Language", "Files", "Lines", "Roots"]);
    for total in languages {
        table.add_row(vec![
            Cell::new(&total.name),
            Cell::new(total.files).set_alignment(CellAlignment::Right),
            Cell::new(total.lines).set_alignment(CellAlignment::Right),
            Cell::new(total.roots).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn component_table(components: &[(ComponentKind, &ComponentRef)]) -> Table {
    let mut table = Table::new();
    header(&mut table, &["Root", "Component", "Kind", "Framework", "Path"]);
    for (kind, component) in components {
        let color = match kind {
            ComponentKind::Frontend => Color::Green,
            ComponentKind::Backend => Color::Blue,
            ComponentKind::Service | ComponentKind::Unknown => Color::DarkGrey,
        };
        table.add_row(vec![
            Cell::new(&component.root_id),
            Cell::new(&component.component_id),
            Cell::new(kind.to_string()).fg(color),
            Cell::new(&component.framework),
            Cell::new(component.path.display()),
        ]);
    }
    table
}

fn dependency_table(deps: &[Dependency]) -> Table {
    let mut table = Table::new();
    header(&mut table, &["Name", "Version", "Ecosystem", "Category", "Scope", "Match"]);
    for dep in deps {
        let tier_color = match dep.tier {
            ClassificationTier::Exact => Color::Green,
            ClassificationTier::Partial => Color::Yellow,
            ClassificationTier::Heuristic => Color::DarkGrey,
        };
        table.add_row(vec![
            Cell::new(&dep.name),
            Cell::new(&dep.version),
            Cell::new(dep.ecosystem.to_string()),
            Cell::new(dep.category.to_string()),
            Cell::new(format!("{:?}", dep.scope).to_lowercase()),
            Cell::new(format!("{:?}", dep.tier).to_lowercase()).fg(tier_color),
        ]);
    }
    table
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DependencyCategory, DependencyScope, Ecosystem};
    use std::collections::BTreeSet;

    #[test]
    fn test_language_table_lists_every_language() {
        let stats = vec![LanguageStat {
            name: "TypeScript".to_string(),
            files: 12,
            lines: 840,
            bytes: 20_000,
            extensions: BTreeSet::from(["ts".to_string(), "tsx".to_string()]),
            primary_extension: "ts".to_string(),
            score: 1.0,
        }];
        let rendered = language_table(&stats).to_string();
        assert!(rendered.contains("TypeScript"));
        assert!(rendered.contains("840"));
        assert!(rendered.contains("ts, tsx"));
    }

    #[test]
    fn test_dependency_table_shows_category_and_tier() {
        let deps = vec![Dependency {
            name: "vitest".to_string(),
            version: "^1.0.0".to_string(),
            category: DependencyCategory::Testing,
            tier: ClassificationTier::Exact,
            scope: DependencyScope::Development,
            ecosystem: Ecosystem::Npm,
        }];
        let rendered = dependency_table(&deps).to_string();
        assert!(rendered.contains("vitest"));
        assert!(rendered.contains("Testing"));
        assert!(rendered.contains("development"));
        assert!(rendered.contains("exact"));
    }

    #[test]
    fn test_list_or_dash() {
        assert_eq!(list_or_dash(&[]), "-");
        assert_eq!(list_or_dash(&["Jest".to_string(), "Cypress".to_string()]), "Jest, Cypress");
    }
}
