use std::path::{Path, PathBuf};

use anyhow::Result;
use regex::Regex;

use crate::models::{DependencyScope, Ecosystem, ManifestRecord};

use super::toml_lines::strip_comment;

pub struct GemfileReader;

impl super::ManifestReader for GemfileReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rubygems
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "Gemfile")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        parse_gemfile(path, &content)
    }
}

/// Parse a `Gemfile`. Gems inside `group :development`/`:test` blocks, or
/// declared with such a `group:` option, are development dependencies.
fn parse_gemfile(path: &Path, content: &str) -> Result<ManifestRecord> {
    let gem_re = Regex::new(r#"^gem\s+['"]([^'"]+)['"](?:\s*,\s*['"]([^'"]+)['"])?"#)?;
    let dev_re = Regex::new(r#":(development|test)\b|['"](development|test)['"]"#)?;

    let mut record = ManifestRecord::new(Ecosystem::Rubygems, path);
    // One entry per open `do` block: whether it is a dev group.
    let mut blocks: Vec<bool> = Vec::new();

    for line in content.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }
        if line == "end" {
            blocks.pop();
            continue;
        }
        if line.ends_with(" do") || line.contains(" do |") {
            blocks.push(line.starts_with("group") && dev_re.is_match(line));
            continue;
        }
        if let Some(caps) = gem_re.captures(line) {
            let in_dev_group = blocks.iter().any(|dev| *dev);
            let dev_option = line.contains("group") && dev_re.is_match(line);
            let scope = if in_dev_group || dev_option {
                DependencyScope::Development
            } else {
                DependencyScope::Production
            };
            let version = caps.get(2).map(|m| m.as_str()).unwrap_or("*");
            record.insert(scope, &caps[1], version);
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gemfile() {
        let content = r#"source "https://rubygems.org"

gem "rails", "~> 7.1.0"
gem 'pg', '~> 1.1'
gem "puma"
gem "rubocop", require: false, group: :development

group :development, :test do
  gem "rspec-rails"
end

platforms :jruby do
  gem "jdbc-adapter"
end
"#;
        let record = parse_gemfile(Path::new("Gemfile"), content).unwrap();
        assert_eq!(record.dependencies["rails"], "~> 7.1.0");
        assert_eq!(record.dependencies["pg"], "~> 1.1");
        assert_eq!(record.dependencies["puma"], "*");
        assert_eq!(record.dependencies["jdbc-adapter"], "*");
        assert_eq!(record.dev_dependencies["rspec-rails"], "*");
        assert_eq!(record.dev_dependencies["rubocop"], "*");
    }

    #[test]
    fn test_interpolated_version_keeps_hash() {
        let content = r##"rails_version = "7.1.0"
gem "rails", "~> #{rails_version}" # pinned with the app
gem "sidekiq" # jobs
group "test" do
  gem "capybara"
end
"##;
        let record = parse_gemfile(Path::new("Gemfile"), content).unwrap();
        assert_eq!(record.dependencies["rails"], "~> #{rails_version}");
        assert_eq!(record.dependencies["sidekiq"], "*");
        assert_eq!(record.dev_dependencies["capybara"], "*");
    }
}
