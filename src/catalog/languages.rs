use std::collections::HashMap;

use super::{owned_list, owned_pairs};

const EXTENSIONS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("mjs", "JavaScript"),
    ("cjs", "JavaScript"),
    ("jsx", "JavaScript"),
    ("ts", "TypeScript"),
    ("mts", "TypeScript"),
    ("cts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("py", "Python"),
    ("pyw", "Python"),
    ("pyi", "Python"),
    ("rb", "Ruby"),
    ("erb", "Ruby"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("java", "Java"),
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("scala", "Scala"),
    ("groovy", "Groovy"),
    ("cs", "C#"),
    ("fs", "F#"),
    ("vb", "Visual Basic"),
    ("php", "PHP"),
    ("swift", "Swift"),
    ("m", "Objective-C"),
    ("c", "C"),
    ("h", "C"),
    ("cpp", "C++"),
    ("cc", "C++"),
    ("cxx", "C++"),
    ("hpp", "C++"),
    ("hh", "C++"),
    ("dart", "Dart"),
    ("lua", "Lua"),
    ("pl", "Perl"),
    ("r", "R"),
    ("ex", "Elixir"),
    ("exs", "Elixir"),
    ("erl", "Erlang"),
    ("hs", "Haskell"),
    ("clj", "Clojure"),
    ("elm", "Elm"),
    ("zig", "Zig"),
    ("sol", "Solidity"),
    ("vue", "Vue"),
    ("svelte", "Svelte"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("sass", "Sass"),
    ("less", "Less"),
    ("json", "JSON"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("toml", "TOML"),
    ("xml", "XML"),
    ("md", "Markdown"),
    ("mdx", "Markdown"),
    ("sql", "SQL"),
    ("sh", "Shell"),
    ("bash", "Shell"),
    ("zsh", "Shell"),
    ("ps1", "PowerShell"),
    ("graphql", "GraphQL"),
    ("gql", "GraphQL"),
    ("proto", "Protocol Buffers"),
    ("tf", "Terraform"),
];

/// Matched against the lowercase file name with its extension removed.
const SPECIAL_FILES: &[(&str, &str)] = &[
    ("dockerfile", "Dockerfile"),
    ("containerfile", "Dockerfile"),
    ("makefile", "Makefile"),
    ("gnumakefile", "Makefile"),
    ("rakefile", "Ruby"),
    ("gemfile", "Ruby"),
    ("jenkinsfile", "Groovy"),
];

/// Interpreter tokens sniffed from a `#!` line, checked in order.
const SHEBANGS: &[(&str, &str)] = &[
    ("python", "Python"),
    ("node", "JavaScript"),
    ("bash", "Shell"),
    ("sh", "Shell"),
];

const PRIORITY: &[(&str, f64)] = &[
    ("TypeScript", 10.0),
    ("JavaScript", 9.0),
    ("Python", 8.0),
    ("Java", 7.0),
    ("Go", 7.0),
    ("Rust", 7.0),
    ("Kotlin", 6.0),
    ("C#", 6.0),
    ("PHP", 6.0),
    ("Ruby", 6.0),
    ("Swift", 6.0),
    ("C++", 5.0),
    ("C", 5.0),
    ("Dart", 5.0),
    ("Scala", 5.0),
    ("Vue", 5.0),
    ("Svelte", 5.0),
    ("Elixir", 4.0),
    ("HTML", 3.0),
    ("CSS", 3.0),
    ("SCSS", 3.0),
    ("Shell", 2.0),
];

/// Constant-time presence checks used when the tree cannot be walked.
const MANIFEST_HINTS: &[(&str, &str)] = &[
    ("package.json", "JavaScript"),
    ("tsconfig.json", "TypeScript"),
    ("Cargo.toml", "Rust"),
    ("go.mod", "Go"),
    ("requirements.txt", "Python"),
    ("pyproject.toml", "Python"),
    ("setup.py", "Python"),
    ("composer.json", "PHP"),
    ("Gemfile", "Ruby"),
    ("pom.xml", "Java"),
    ("build.gradle", "Java"),
    ("build.gradle.kts", "Kotlin"),
    ("Package.swift", "Swift"),
    ("pubspec.yaml", "Dart"),
    ("mix.exs", "Elixir"),
];

#[derive(Debug, Clone)]
pub struct LanguageTables {
    /// Lowercase extension (no dot) → language.
    pub extensions: HashMap<String, String>,
    pub special_files: Vec<(String, String)>,
    /// File names starting with this prefix are environment files.
    pub dotenv_prefix: String,
    pub dotenv_language: String,
    pub shebangs: Vec<(String, String)>,
    pub priority: HashMap<String, f64>,
    pub default_priority: f64,
    pub manifest_hints: Vec<(String, String)>,
    /// Languages kept in the ranking even when they fall outside the top N.
    pub always_include: Vec<String>,
    pub top_n: usize,
}

impl Default for LanguageTables {
    fn default() -> Self {
        Self {
            extensions: owned_pairs(EXTENSIONS).into_iter().collect(),
            special_files: owned_pairs(SPECIAL_FILES),
            dotenv_prefix: ".env".to_string(),
            dotenv_language: "Dotenv".to_string(),
            shebangs: owned_pairs(SHEBANGS),
            priority: PRIORITY
                .iter()
                .map(|(lang, p)| (lang.to_string(), *p))
                .collect(),
            default_priority: 1.0,
            manifest_hints: owned_pairs(MANIFEST_HINTS),
            always_include: owned_list(&["TypeScript", "JavaScript"]),
            top_n: 5,
        }
    }
}

impl LanguageTables {
    pub fn priority_of(&self, language: &str) -> f64 {
        self.priority
            .get(language)
            .copied()
            .unwrap_or(self.default_priority)
    }
}
