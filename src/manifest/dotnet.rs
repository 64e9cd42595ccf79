use std::path::{Path, PathBuf};

use anyhow::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::models::{DependencyScope, Ecosystem, ManifestRecord};

/// SDK-style `*.csproj` / `*.fsproj` directly under the root (first by name),
/// plus a legacy `packages.config` beside it.
pub struct ProjectFileReader;

impl super::ManifestReader for ProjectFileReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Nuget
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        let mut candidates: Vec<PathBuf> = std::fs::read_dir(root)
            .ok()?
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && matches!(
                        p.extension().and_then(|s| s.to_str()),
                        Some("csproj" | "fsproj")
                    )
            })
            .collect();
        candidates.sort();
        candidates.into_iter().next()
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        let mut record = parse_project_file(path, &content)?;

        if let Some(config) = path.parent().map(|d| d.join("packages.config")) {
            if config.is_file() {
                let content = std::fs::read_to_string(&config)?;
                parse_packages_config(&content, &mut record)?;
            }
        }
        Ok(record)
    }
}

fn attributes(e: &BytesStart<'_>) -> Vec<(String, String)> {
    e.attributes()
        .flatten()
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let val = attr.unescape_value().unwrap_or_default().into_owned();
            (key, val)
        })
        .collect()
}

fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Parse `<PackageReference Include="..." Version="..." />` plus the project
/// SDK and package metadata properties. A web SDK is recorded as a pseudo
/// dependency named after the SDK.
fn parse_project_file(path: &Path, content: &str) -> Result<ManifestRecord> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut record = ManifestRecord::new(Ecosystem::Nuget, path);
    let mut current_tag = String::new();

    loop {
        match reader.read_event()? {
            Event::Empty(ref e) | Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                let attrs = attributes(e);
                match tag.as_str() {
                    "Project" => {
                        if let Some(sdk) = attr(&attrs, "Sdk") {
                            if sdk != "Microsoft.NET.Sdk" {
                                record.insert(DependencyScope::Production, sdk, "*");
                            }
                        }
                    }
                    "PackageReference" => {
                        if let Some(name) = attr(&attrs, "Include") {
                            let version = attr(&attrs, "Version").unwrap_or("*");
                            let scope = if attr(&attrs, "PrivateAssets") == Some("all") {
                                DependencyScope::Development
                            } else {
                                DependencyScope::Production
                            };
                            record.insert(scope, name, version);
                        }
                    }
                    _ => {}
                }
                current_tag = tag;
            }
            Event::Text(e) => {
                let text = e.unescape().unwrap_or_default().into_owned();
                let package = &mut record.package;
                match current_tag.as_str() {
                    "AssemblyName" | "PackageId" => {
                        package.name.get_or_insert(text);
                    }
                    "Version" => package.version = Some(text),
                    "Description" => package.description = Some(text),
                    "PackageLicenseExpression" => package.license = Some(text),
                    "RepositoryUrl" => package.repository = Some(text),
                    "PackageProjectUrl" => package.homepage = Some(text),
                    "Authors" => {
                        package.authors = text.split([',', ';']).map(|a| a.trim().to_string()).collect()
                    }
                    "PackageTags" => {
                        package.keywords = text.split([',', ';', ' ']).filter(|t| !t.is_empty()).map(str::to_string).collect()
                    }
                    _ => {}
                }
            }
            Event::End(_) => current_tag.clear(),
            Event::Eof => break,
            _ => {}
        }
    }

    if record.package.name.is_none() {
        record.package.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    }
    Ok(record)
}

/// Parse `<package id="..." version="..." />` from `packages.config`.
fn parse_packages_config(content: &str, record: &mut ManifestRecord) -> Result<()> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Empty(ref e) | Event::Start(ref e) => {
                if e.name().local_name().as_ref() == b"package" {
                    let attrs = attributes(e);
                    if let Some(id) = attr(&attrs, "id") {
                        let version = attr(&attrs, "version").unwrap_or("*");
                        let scope = if attr(&attrs, "developmentDependency") == Some("true") {
                            DependencyScope::Development
                        } else {
                            DependencyScope::Production
                        };
                        record.insert(scope, id, version);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestReader;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_csproj() {
        let xml = r#"<Project Sdk="Microsoft.NET.Sdk.Web">
  <PropertyGroup>
    <Version>2.1.0</Version>
    <PackageLicenseExpression>MIT</PackageLicenseExpression>
  </PropertyGroup>
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" Version="13.0.1" />
    <PackageReference Include="Serilog" Version="2.12.0" />
    <PackageReference Include="StyleCop.Analyzers" Version="1.1.118" PrivateAssets="all" />
  </ItemGroup>
</Project>"#;
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Api.csproj"), xml).unwrap();
        fs::write(
            dir.path().join("packages.config"),
            r#"<?xml version="1.0" encoding="utf-8"?>
<packages>
  <package id="NUnit" version="3.13.3" targetFramework="net452" developmentDependency="true" />
</packages>"#,
        )
        .unwrap();

        let path = ProjectFileReader.locate(dir.path()).unwrap();
        let record = ProjectFileReader.read(&path).unwrap();
        assert_eq!(record.dependencies["Newtonsoft.Json"], "13.0.1");
        assert_eq!(record.dependencies["Serilog"], "2.12.0");
        assert_eq!(record.dependencies["Microsoft.NET.Sdk.Web"], "*");
        assert_eq!(record.dev_dependencies["StyleCop.Analyzers"], "1.1.118");
        assert_eq!(record.dev_dependencies["NUnit"], "3.13.3");
        assert_eq!(record.package.name.as_deref(), Some("Api"));
        assert_eq!(record.package.version.as_deref(), Some("2.1.0"));
        assert_eq!(record.package.license.as_deref(), Some("MIT"));
    }
}
