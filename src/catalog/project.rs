use crate::models::{ComponentKind, PackageManager};

use super::owned_list;

/// Group a configuration file is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigGroup {
    Linter,
    Formatter,
    Build,
    TypeScript,
    Ci,
    Container,
    Deployment,
    Env,
}

#[derive(Debug, Clone)]
pub struct ConfigRule {
    /// Glob matched against paths relative to the project root.
    pub glob: String,
    pub group: ConfigGroup,
    pub label: String,
}

const CONFIG_RULES: &[(&str, ConfigGroup, &str)] = &[
    (".eslintrc*", ConfigGroup::Linter, "ESLint"),
    ("eslint.config.*", ConfigGroup::Linter, "ESLint"),
    (".stylelintrc*", ConfigGroup::Linter, "Stylelint"),
    (".flake8", ConfigGroup::Linter, "Flake8"),
    (".pylintrc", ConfigGroup::Linter, "Pylint"),
    ("ruff.toml", ConfigGroup::Linter, "Ruff"),
    (".rubocop.yml", ConfigGroup::Linter, "RuboCop"),
    ("clippy.toml", ConfigGroup::Linter, "Clippy"),
    (".golangci.y*ml", ConfigGroup::Linter, "golangci-lint"),
    ("phpstan.neon*", ConfigGroup::Linter, "PHPStan"),
    (".prettierrc*", ConfigGroup::Formatter, "Prettier"),
    ("prettier.config.*", ConfigGroup::Formatter, "Prettier"),
    (".editorconfig", ConfigGroup::Formatter, "EditorConfig"),
    ("rustfmt.toml", ConfigGroup::Formatter, "rustfmt"),
    (".rustfmt.toml", ConfigGroup::Formatter, "rustfmt"),
    ("biome.json", ConfigGroup::Formatter, "Biome"),
    ("webpack.config.*", ConfigGroup::Build, "Webpack"),
    ("vite.config.*", ConfigGroup::Build, "Vite"),
    ("rollup.config.*", ConfigGroup::Build, "Rollup"),
    ("babel.config.*", ConfigGroup::Build, "Babel"),
    (".babelrc*", ConfigGroup::Build, "Babel"),
    ("tailwind.config.*", ConfigGroup::Build, "Tailwind CSS"),
    ("postcss.config.*", ConfigGroup::Build, "PostCSS"),
    ("next.config.*", ConfigGroup::Build, "Next.js"),
    ("nuxt.config.*", ConfigGroup::Build, "Nuxt"),
    ("svelte.config.*", ConfigGroup::Build, "Svelte"),
    ("angular.json", ConfigGroup::Build, "Angular CLI"),
    ("turbo.json", ConfigGroup::Build, "Turborepo"),
    ("nx.json", ConfigGroup::Build, "Nx"),
    ("Makefile", ConfigGroup::Build, "Make"),
    ("tsconfig*.json", ConfigGroup::TypeScript, "TypeScript"),
    ("jsconfig.json", ConfigGroup::TypeScript, "JavaScript"),
    (".github/workflows/*.y*ml", ConfigGroup::Ci, "GitHub Actions"),
    (".gitlab-ci.yml", ConfigGroup::Ci, "GitLab CI"),
    (".circleci/config.yml", ConfigGroup::Ci, "CircleCI"),
    ("Jenkinsfile", ConfigGroup::Ci, "Jenkins"),
    (".travis.yml", ConfigGroup::Ci, "Travis CI"),
    ("azure-pipelines.yml", ConfigGroup::Ci, "Azure Pipelines"),
    ("bitbucket-pipelines.yml", ConfigGroup::Ci, "Bitbucket Pipelines"),
    ("Dockerfile*", ConfigGroup::Container, "Docker"),
    ("docker-compose*.y*ml", ConfigGroup::Container, "Docker Compose"),
    ("compose.y*ml", ConfigGroup::Container, "Docker Compose"),
    (".dockerignore", ConfigGroup::Container, "Docker"),
    ("vercel.json", ConfigGroup::Deployment, "Vercel"),
    ("netlify.toml", ConfigGroup::Deployment, "Netlify"),
    ("Procfile", ConfigGroup::Deployment, "Heroku"),
    ("app.yaml", ConfigGroup::Deployment, "Google App Engine"),
    ("fly.toml", ConfigGroup::Deployment, "Fly.io"),
    ("serverless.y*ml", ConfigGroup::Deployment, "Serverless Framework"),
    ("render.yaml", ConfigGroup::Deployment, "Render"),
    ("k8s/*.y*ml", ConfigGroup::Deployment, "Kubernetes"),
    ("kubernetes/*.y*ml", ConfigGroup::Deployment, "Kubernetes"),
    ("*.tf", ConfigGroup::Deployment, "Terraform"),
    (".env*", ConfigGroup::Env, "dotenv"),
];

/// Lock file → package manager, checked in this order.
const LOCK_FILES: &[(&str, PackageManager)] = &[
    ("package-lock.json", PackageManager::Npm),
    ("npm-shrinkwrap.json", PackageManager::Npm),
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("Cargo.lock", PackageManager::Cargo),
    ("poetry.lock", PackageManager::Poetry),
    ("Pipfile.lock", PackageManager::Pipenv),
    ("uv.lock", PackageManager::Uv),
    ("composer.lock", PackageManager::Composer),
    ("Gemfile.lock", PackageManager::Bundler),
    ("go.sum", PackageManager::Go),
    ("gradle.lockfile", PackageManager::Gradle),
    ("packages.lock.json", PackageManager::Nuget),
];

/// Manager implied by a manifest when no lock file or script names one.
const MANIFEST_MANAGERS: &[(&str, PackageManager)] = &[
    ("package.json", PackageManager::Npm),
    ("Cargo.toml", PackageManager::Cargo),
    ("Pipfile", PackageManager::Pipenv),
    ("requirements.txt", PackageManager::Pip),
    ("setup.py", PackageManager::Pip),
    ("composer.json", PackageManager::Composer),
    ("Gemfile", PackageManager::Bundler),
    ("go.mod", PackageManager::Go),
    ("pom.xml", PackageManager::Maven),
    ("build.gradle", PackageManager::Gradle),
    ("build.gradle.kts", PackageManager::Gradle),
    ("*.csproj", PackageManager::Nuget),
];

/// Command prefixes looked for in package.json scripts.
const SCRIPT_HINTS: &[(&str, PackageManager)] = &[
    ("yarn ", PackageManager::Yarn),
    ("pnpm ", PackageManager::Pnpm),
    ("bun ", PackageManager::Bun),
    ("bunx ", PackageManager::Bun),
    ("npm ", PackageManager::Npm),
    ("npx ", PackageManager::Npm),
];

/// File names that make a directory a workspace root.
const MANIFESTS: &[&str] = &[
    "package.json",
    "Cargo.toml",
    "pyproject.toml",
    "requirements.txt",
    "setup.py",
    "composer.json",
    "go.mod",
    "Gemfile",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "*.csproj",
];

const TYPE_HINTS: &[(&str, ComponentKind)] = &[
    ("frontend", ComponentKind::Frontend),
    ("client", ComponentKind::Frontend),
    ("web", ComponentKind::Frontend),
    ("ui", ComponentKind::Frontend),
    ("app", ComponentKind::Frontend),
    ("backend", ComponentKind::Backend),
    ("server", ComponentKind::Backend),
    ("api", ComponentKind::Backend),
    ("service", ComponentKind::Service),
    ("worker", ComponentKind::Service),
];

const README_NAMES: &[&str] = &["README.md", "README.rst", "README.txt", "README", "readme.md", "Readme.md"];
const CHANGELOG_NAMES: &[&str] = &["CHANGELOG.md", "CHANGELOG", "HISTORY.md", "CHANGES.md", "RELEASES.md"];
const LICENSE_NAMES: &[&str] = &["LICENSE", "LICENSE.md", "LICENSE.txt", "LICENCE", "COPYING", "license"];
const CONTRIBUTING_NAMES: &[&str] = &["CONTRIBUTING.md", ".github/CONTRIBUTING.md", "CONTRIBUTING"];
const CODE_OF_CONDUCT_NAMES: &[&str] = &["CODE_OF_CONDUCT.md", ".github/CODE_OF_CONDUCT.md"];
const DOCS_DIRECTORIES: &[&str] = &["docs", "doc", "documentation", "wiki"];
const API_SPEC_NAMES: &[&str] = &[
    "openapi.yaml",
    "openapi.yml",
    "openapi.json",
    "swagger.yaml",
    "swagger.yml",
    "swagger.json",
    "api.yaml",
    "schema.graphql",
];

const SOURCE_DIRECTORIES: &[&str] = &[
    "src", "lib", "app", "pkg", "cmd", "internal", "components", "pages", "server", "client", "api",
];

const ENTRY_POINTS: &[&str] = &[
    "index.js",
    "index.ts",
    "main.js",
    "main.ts",
    "server.js",
    "server.ts",
    "app.js",
    "app.ts",
    "src/index.js",
    "src/index.ts",
    "src/index.tsx",
    "src/main.js",
    "src/main.ts",
    "src/main.tsx",
    "src/App.jsx",
    "src/App.tsx",
    "src/main.rs",
    "src/lib.rs",
    "main.py",
    "app.py",
    "manage.py",
    "wsgi.py",
    "asgi.py",
    "main.go",
    "cmd/main.go",
    "index.php",
    "public/index.php",
    "artisan",
    "config.ru",
    "Program.cs",
];

const PUBLIC_DIRECTORIES: &[&str] = &["public", "static", "assets", "www"];

const MONOREPO_MARKERS: &[&str] = &[
    "lerna.json",
    "pnpm-workspace.yaml",
    "nx.json",
    "turbo.json",
    "rush.json",
];

#[derive(Debug, Clone)]
pub struct ProjectTables {
    pub config_rules: Vec<ConfigRule>,
    pub lock_files: Vec<(String, PackageManager)>,
    pub script_hints: Vec<(String, PackageManager)>,
    /// Globs of manifests, relative to the root.
    pub manifest_managers: Vec<(String, PackageManager)>,
    pub manifests: Vec<String>,
    pub type_hints: Vec<(String, ComponentKind)>,
    pub readme_names: Vec<String>,
    pub changelog_names: Vec<String>,
    pub license_names: Vec<String>,
    pub contributing_names: Vec<String>,
    pub code_of_conduct_names: Vec<String>,
    pub docs_directories: Vec<String>,
    pub api_spec_names: Vec<String>,
    pub source_directories: Vec<String>,
    pub entry_points: Vec<String>,
    pub public_directories: Vec<String>,
    /// Files whose presence marks a monorepo root.
    pub monorepo_markers: Vec<String>,
}

impl Default for ProjectTables {
    fn default() -> Self {
        Self {
            config_rules: CONFIG_RULES
                .iter()
                .map(|(glob, group, label)| ConfigRule {
                    glob: glob.to_string(),
                    group: *group,
                    label: label.to_string(),
                })
                .collect(),
            lock_files: LOCK_FILES
                .iter()
                .map(|(file, pm)| (file.to_string(), *pm))
                .collect(),
            script_hints: SCRIPT_HINTS
                .iter()
                .map(|(hint, pm)| (hint.to_string(), *pm))
                .collect(),
            manifest_managers: MANIFEST_MANAGERS
                .iter()
                .map(|(file, pm)| (file.to_string(), *pm))
                .collect(),
            manifests: owned_list(MANIFESTS),
            type_hints: TYPE_HINTS
                .iter()
                .map(|(token, kind)| (token.to_string(), *kind))
                .collect(),
            readme_names: owned_list(README_NAMES),
            changelog_names: owned_list(CHANGELOG_NAMES),
            license_names: owned_list(LICENSE_NAMES),
            contributing_names: owned_list(CONTRIBUTING_NAMES),
            code_of_conduct_names: owned_list(CODE_OF_CONDUCT_NAMES),
            docs_directories: owned_list(DOCS_DIRECTORIES),
            api_spec_names: owned_list(API_SPEC_NAMES),
            source_directories: owned_list(SOURCE_DIRECTORIES),
            entry_points: owned_list(ENTRY_POINTS),
            public_directories: owned_list(PUBLIC_DIRECTORIES),
            monorepo_markers: owned_list(MONOREPO_MARKERS),
        }
    }
}
