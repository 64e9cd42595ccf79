use std::path::Path;

use anyhow::Result;

use crate::catalog::project::{ConfigGroup, ProjectTables};
use crate::framework::merge_unique;
use crate::models::ConfigurationProfile;
use crate::scanner::{glob_files, relative_path};

/// Group the configuration files found under `root` by purpose.
pub fn detect_configuration(root: &Path, tables: &ProjectTables) -> Result<ConfigurationProfile> {
    let mut profile = ConfigurationProfile::default();

    for rule in &tables.config_rules {
        let found: Vec<String> = glob_files(root, &rule.glob)
            .iter()
            .map(|p| relative_path(root, p))
            .collect();
        if found.is_empty() {
            continue;
        }
        merge_unique(&mut profile.files, found.iter().cloned());

        let label = [rule.label.clone()];
        match rule.group {
            ConfigGroup::Linter => merge_unique(&mut profile.linters, label),
            ConfigGroup::Formatter => merge_unique(&mut profile.formatters, label),
            ConfigGroup::Build => merge_unique(&mut profile.build_configs, label),
            ConfigGroup::TypeScript => profile.has_typescript_config = true,
            ConfigGroup::Ci => merge_unique(&mut profile.ci, label),
            ConfigGroup::Container => merge_unique(&mut profile.containerization, label),
            ConfigGroup::Deployment => merge_unique(&mut profile.deployment, label),
            ConfigGroup::Env => merge_unique(&mut profile.env_files, found),
        }
    }

    profile.has_docker = !profile.containerization.is_empty();
    profile.has_ci = !profile.ci.is_empty();
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_groups_config_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
        fs::write(dir.path().join(".github/workflows/ci.yml"), "on: push\n").unwrap();
        fs::write(dir.path().join(".github/workflows/release.yaml"), "on: push\n").unwrap();
        fs::write(dir.path().join(".eslintrc.json"), "{}").unwrap();
        fs::write(dir.path().join(".prettierrc"), "{}").unwrap();
        fs::write(dir.path().join("vite.config.ts"), "").unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
        fs::write(dir.path().join("Dockerfile"), "FROM node:20\n").unwrap();
        fs::write(dir.path().join("docker-compose.yml"), "services: {}\n").unwrap();
        fs::write(dir.path().join(".env.example"), "PORT=3000\n").unwrap();

        let profile = detect_configuration(dir.path(), &ProjectTables::default()).unwrap();
        assert_eq!(profile.linters, vec!["ESLint"]);
        assert_eq!(profile.formatters, vec!["Prettier"]);
        assert_eq!(profile.build_configs, vec!["Vite"]);
        assert_eq!(profile.ci, vec!["GitHub Actions"]);
        assert_eq!(profile.containerization, vec!["Docker", "Docker Compose"]);
        assert_eq!(profile.env_files, vec![".env.example"]);
        assert!(profile.has_typescript_config && profile.has_docker && profile.has_ci);
        assert!(profile.files.contains(&".github/workflows/release.yaml".to_string()));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let profile = detect_configuration(dir.path(), &ProjectTables::default()).unwrap();
        assert_eq!(profile, ConfigurationProfile::default());
    }
}
