use std::path::{Path, PathBuf};

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

use crate::models::{DependencyScope, Ecosystem, ManifestRecord};

/// Maven `pom.xml`. Dependencies are named `groupId:artifactId`; `test`
/// scope maps to development and `<optional>true</optional>` to optional.
pub struct PomReader;

impl super::ManifestReader for PomReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Maven
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "pom.xml")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        parse_pom_xml(path, &content)
    }
}

fn coordinate(group_id: &str, artifact_id: &str) -> String {
    if group_id.is_empty() {
        artifact_id.to_string()
    } else {
        format!("{}:{}", group_id, artifact_id)
    }
}

#[derive(Default)]
struct PomDependency {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: String,
    optional: bool,
}

impl PomDependency {
    fn scope(&self) -> DependencyScope {
        if self.optional {
            DependencyScope::Optional
        } else if self.scope == "test" {
            DependencyScope::Development
        } else {
            DependencyScope::Production
        }
    }
}

/// Parse `pom.xml` using the quick-xml event API, tracking the element path so
/// project-level metadata and the parent POM are picked up as well.
fn parse_pom_xml(path: &Path, content: &str) -> Result<ManifestRecord> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut record = ManifestRecord::new(Ecosystem::Maven, path);
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<PomDependency> = None;
    let mut parent = PomDependency::default();
    let mut group_id = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                if name == "dependency" && stack.last().is_some_and(|p| p == "dependencies") {
                    current = Some(PomDependency::default());
                }
                stack.push(name);
            }
            Event::End(_) => {
                if let Some(name) = stack.pop() {
                    if name == "dependency" {
                        if let Some(dep) = current.take() {
                            if !dep.artifact_id.is_empty() {
                                let version = if dep.version.is_empty() { "*" } else { &dep.version };
                                record.insert(dep.scope(), coordinate(&dep.group_id, &dep.artifact_id), version);
                            }
                        }
                    }
                }
            }
            Event::Text(e) => {
                let text = e.unescape().unwrap_or_default().into_owned();
                let tag = stack.last().map(String::as_str).unwrap_or("");
                if let Some(dep) = current.as_mut() {
                    // Skip nested elements such as <exclusions>.
                    let direct = stack.len() >= 2 && stack[stack.len() - 2] == "dependency";
                    if !direct {
                        continue;
                    }
                    match tag {
                        "groupId" => dep.group_id = text,
                        "artifactId" => dep.artifact_id = text,
                        "version" => dep.version = text,
                        "scope" => dep.scope = text,
                        "optional" => dep.optional = text == "true",
                        _ => {}
                    }
                    continue;
                }
                let depth = stack.len();
                let in_project = stack.first().is_some_and(|r| r == "project");
                if in_project && depth == 2 {
                    let package = &mut record.package;
                    match tag {
                        "groupId" => group_id = text,
                        "artifactId" => package.name = Some(text),
                        "version" => package.version = Some(text),
                        "description" => package.description = Some(text),
                        "url" => package.homepage = Some(text),
                        _ => {}
                    }
                } else if in_project && depth == 3 && stack[1] == "parent" {
                    match tag {
                        "groupId" => parent.group_id = text,
                        "artifactId" => parent.artifact_id = text,
                        "version" => parent.version = text,
                        _ => {}
                    }
                } else if in_project && depth == 3 && stack[1] == "scm" && tag == "url" {
                    record.package.repository = Some(text);
                } else if in_project && depth == 4 && stack[1] == "licenses" && tag == "name" {
                    record.package.license.get_or_insert(text);
                } else if in_project && depth == 4 && stack[1] == "developers" && tag == "name" {
                    record.package.authors.push(text);
                } else if in_project && depth == 3 && stack[1] == "modules" {
                    record.package.workspace = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    // A parent POM such as spring-boot-starter-parent shapes the whole build.
    if !parent.artifact_id.is_empty() {
        let version = if parent.version.is_empty() { "*".to_string() } else { parent.version.clone() };
        record.insert(
            DependencyScope::Production,
            coordinate(&parent.group_id, &parent.artifact_id),
            version,
        );
    }
    if !group_id.is_empty() {
        if let Some(name) = record.package.name.take() {
            record.package.name = Some(coordinate(&group_id, &name));
        }
    }
    Ok(record)
}

/// Gradle build script, Groovy or Kotlin DSL.
pub struct GradleReader;

impl super::ManifestReader for GradleReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Gradle
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "build.gradle").or_else(|| super::existing(root, "build.gradle.kts"))
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        parse_build_gradle(path, &content)
    }
}

/// Parse `build.gradle` or `build.gradle.kts` with regex.
fn parse_build_gradle(path: &Path, content: &str) -> Result<ManifestRecord> {
    let mut record = ManifestRecord::new(Ecosystem::Gradle, path);

    // Matches: implementation 'group:artifact:version'
    //          testImplementation("group:artifact")
    let re_shorthand = Regex::new(
        r#"(?m)^\s*(implementation|api|compile|compileOnly|runtimeOnly|annotationProcessor|kapt|developmentOnly|testImplementation|testCompileOnly|testRuntimeOnly|androidTestImplementation)\s*\(?\s*['"]([^'":]+):([^'":]+)(?::([^'"]+))?['"]"#,
    )?;
    for caps in re_shorthand.captures_iter(content) {
        let version = caps.get(4).map(|m| m.as_str()).unwrap_or("*");
        record.insert(configuration_scope(&caps[1]), coordinate(&caps[2], &caps[3]), version);
    }

    // Matches: implementation group: 'com.example', name: 'foo', version: '1.0'
    let re_map = Regex::new(
        r#"(?m)^\s*(implementation|api|compile|compileOnly|runtimeOnly|testImplementation)\s*\(?\s*group:\s*['"]([^'"]+)['"]\s*,\s*name:\s*['"]([^'"]+)['"](?:\s*,\s*version:\s*['"]([^'"]+)['"])?"#,
    )?;
    for caps in re_map.captures_iter(content) {
        let version = caps.get(4).map(|m| m.as_str()).unwrap_or("*");
        record.insert(configuration_scope(&caps[1]), coordinate(&caps[2], &caps[3]), version);
    }

    // Plugins: id 'org.springframework.boot' version '3.2.0'
    let re_plugin = Regex::new(r#"id\s*\(?\s*['"]([A-Za-z0-9_.-]+)['"]\s*\)?(?:\s*version\s*\(?\s*['"]([^'"]+)['"])?"#)?;
    for caps in re_plugin.captures_iter(content) {
        let id = &caps[1];
        if id.contains('.') {
            let version = caps.get(2).map(|m| m.as_str()).unwrap_or("*");
            record.insert(DependencyScope::Development, format!("{}:{}.gradle.plugin", id, id), version);
        }
    }

    Ok(record)
}

fn configuration_scope(configuration: &str) -> DependencyScope {
    if configuration.starts_with("test") || configuration.starts_with("androidTest") {
        DependencyScope::Development
    } else {
        DependencyScope::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pom_xml() {
        let xml = r#"<?xml version="1.0"?>
<project>
  <parent>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-boot-starter-parent</artifactId>
    <version>3.2.0</version>
  </parent>
  <groupId>com.acme</groupId>
  <artifactId>orders</artifactId>
  <version>1.4.0</version>
  <licenses>
    <license><name>Apache-2.0</name></license>
  </licenses>
  <dependencies>
    <dependency>
      <groupId>org.apache.commons</groupId>
      <artifactId>commons-lang3</artifactId>
      <version>3.12.0</version>
    </dependency>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.13.2</version>
      <scope>test</scope>
    </dependency>
  </dependencies>
</project>"#;

        let record = parse_pom_xml(Path::new("pom.xml"), xml).unwrap();
        assert_eq!(record.dependencies["org.apache.commons:commons-lang3"], "3.12.0");
        assert_eq!(
            record.dependencies["org.springframework.boot:spring-boot-starter-parent"],
            "3.2.0"
        );
        assert_eq!(record.dev_dependencies["junit:junit"], "4.13.2");
        assert_eq!(record.package.name.as_deref(), Some("com.acme:orders"));
        assert_eq!(record.package.version.as_deref(), Some("1.4.0"));
        assert_eq!(record.package.license.as_deref(), Some("Apache-2.0"));
    }

    #[test]
    fn test_parse_build_gradle() {
        let content = r#"
plugins {
    id 'org.springframework.boot' version '3.2.0'
    id 'java'
}

dependencies {
    implementation 'org.springframework:spring-core:5.3.23'
    implementation "com.google.guava:guava:31.1-jre"
    implementation("org.springframework.boot:spring-boot-starter-web")
    testImplementation 'junit:junit:4.13.2'
}
"#;
        let record = parse_build_gradle(Path::new("build.gradle"), content).unwrap();
        assert_eq!(record.dependencies["org.springframework:spring-core"], "5.3.23");
        assert_eq!(record.dependencies["com.google.guava:guava"], "31.1-jre");
        assert_eq!(
            record.dependencies["org.springframework.boot:spring-boot-starter-web"],
            "*"
        );
        assert_eq!(record.dev_dependencies["junit:junit"], "4.13.2");
        assert!(record
            .dev_dependencies
            .contains_key("org.springframework.boot:org.springframework.boot.gradle.plugin"));
    }
}
