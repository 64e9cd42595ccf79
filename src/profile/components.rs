use std::path::Path;

use crate::models::{
    BackendProfile, Component, ComponentKind, FrontendProfile, LanguageStat, Runtime, UNKNOWN_FRAMEWORK,
};

/// Lowercase, alphanumeric runs joined by `-`: `@acme/Web App` → `acme-web-app`.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "project".to_string()
    } else {
        trimmed.to_string()
    }
}

fn component_id(name: &str, kind: ComponentKind) -> String {
    format!("{}-{}-1", sanitize_name(name), kind)
}

/// Languages a runtime's code is usually written in.
fn runtime_languages(runtime: Runtime) -> &'static [&'static str] {
    match runtime {
        Runtime::NodeJs => &["TypeScript", "JavaScript"],
        Runtime::Python => &["Python"],
        Runtime::Java => &["Java", "Kotlin", "Scala", "Groovy"],
        Runtime::Go => &["Go"],
        Runtime::Rust => &["Rust"],
        Runtime::Php => &["PHP"],
        Runtime::Ruby => &["Ruby"],
        Runtime::DotNet => &["C#", "F#", "Visual Basic"],
    }
}

/// Highest-ranked language belonging to `runtime`, else the top language.
fn backend_language(runtime: Option<Runtime>, languages: &[LanguageStat]) -> Option<String> {
    runtime
        .and_then(|r| {
            languages
                .iter()
                .find(|l| runtime_languages(r).contains(&l.name.as_str()))
        })
        .or_else(|| languages.first())
        .map(|l| l.name.clone())
}

/// Components of one root: a frontend and/or a backend when a framework was
/// identified for them, otherwise a single unknown-kind component.
pub fn derive_components(
    root: &Path,
    name: &str,
    frontend: &FrontendProfile,
    backend: &BackendProfile,
    languages: &[LanguageStat],
) -> Vec<Component> {
    let mut components = Vec::new();

    if !frontend.framework.is_unknown() {
        components.push(Component {
            id: component_id(name, ComponentKind::Frontend),
            name: name.to_string(),
            kind: ComponentKind::Frontend,
            framework: frontend.framework.name.clone(),
            runtime: backend.runtimes.contains(&Runtime::NodeJs).then_some(Runtime::NodeJs),
            language: frontend.language.clone(),
            path: root.to_path_buf(),
        });
    }
    if !backend.framework.is_unknown() {
        components.push(Component {
            id: component_id(name, ComponentKind::Backend),
            name: name.to_string(),
            kind: ComponentKind::Backend,
            framework: backend.framework.name.clone(),
            runtime: backend.runtime,
            language: backend_language(backend.runtime, languages),
            path: root.to_path_buf(),
        });
    }
    if components.is_empty() {
        components.push(Component {
            id: component_id(name, ComponentKind::Unknown),
            name: name.to_string(),
            kind: ComponentKind::Unknown,
            framework: UNKNOWN_FRAMEWORK.to_string(),
            runtime: backend.runtime,
            language: backend_language(backend.runtime, languages),
            path: root.to_path_buf(),
        });
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FrameworkSignal, SignalOrigin};
    use std::collections::BTreeSet;

    fn language(name: &str) -> LanguageStat {
        LanguageStat {
            name: name.to_string(),
            files: 1,
            lines: 1,
            bytes: 1,
            extensions: BTreeSet::from(["x".to_string()]),
            primary_extension: "x".to_string(),
            score: 1.0,
        }
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("@acme/Web App"), "acme-web-app");
        assert_eq!(sanitize_name("my_service--v2"), "my-service-v2");
        assert_eq!(sanitize_name("@@"), "project");
    }

    #[test]
    fn test_fullstack_root_yields_two_components() {
        let frontend = FrontendProfile {
            framework: FrameworkSignal::new("React", SignalOrigin::Manifest),
            language: Some("TypeScript".to_string()),
            ..Default::default()
        };
        let backend = BackendProfile {
            runtime: Some(Runtime::Python),
            runtimes: vec![Runtime::NodeJs, Runtime::Python],
            framework: FrameworkSignal::new("FastAPI", SignalOrigin::Manifest),
            ..Default::default()
        };
        let languages = vec![language("TypeScript"), language("Python")];

        let components = derive_components(Path::new("/w/app"), "app", &frontend, &backend, &languages);
        let ids: Vec<&str> = components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["app-frontend-1", "app-backend-1"]);
        assert_eq!(components[1].language.as_deref(), Some("Python"));
        assert_eq!(components[0].runtime, Some(Runtime::NodeJs));
    }

    #[test]
    fn test_unknown_component_when_nothing_detected() {
        let components = derive_components(
            Path::new("/w/lib"),
            "lib",
            &FrontendProfile::default(),
            &BackendProfile::default(),
            &[],
        );
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].id, "lib-unknown-1");
        assert_eq!(components[0].framework, UNKNOWN_FRAMEWORK);
        assert_eq!(components[0].language, None);
    }
}
