use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder name used wherever no framework could be identified.
pub const UNKNOWN_FRAMEWORK: &str = "Unknown";

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

/// Aggregated counts for one language across a project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub name: String,
    pub files: usize,
    pub lines: u64,
    pub bytes: u64,
    /// Every extension key seen for this language. Always contains `primary_extension`.
    pub extensions: BTreeSet<String>,
    pub primary_extension: String,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Manifests and dependencies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Npm,
    Cargo,
    Pypi,
    Composer,
    Go,
    Rubygems,
    Maven,
    Gradle,
    Nuget,
}

impl Ecosystem {
    /// The runtime a manifest of this ecosystem implies.
    pub fn runtime(&self) -> Runtime {
        match self {
            Ecosystem::Npm => Runtime::NodeJs,
            Ecosystem::Cargo => Runtime::Rust,
            Ecosystem::Pypi => Runtime::Python,
            Ecosystem::Composer => Runtime::Php,
            Ecosystem::Go => Runtime::Go,
            Ecosystem::Rubygems => Runtime::Ruby,
            Ecosystem::Maven | Ecosystem::Gradle => Runtime::Java,
            Ecosystem::Nuget => Runtime::DotNet,
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Npm => write!(f, "npm"),
            Ecosystem::Cargo => write!(f, "Cargo"),
            Ecosystem::Pypi => write!(f, "PyPI"),
            Ecosystem::Composer => write!(f, "Composer"),
            Ecosystem::Go => write!(f, "Go modules"),
            Ecosystem::Rubygems => write!(f, "RubyGems"),
            Ecosystem::Maven => write!(f, "Maven"),
            Ecosystem::Gradle => write!(f, "Gradle"),
            Ecosystem::Nuget => write!(f, "NuGet"),
        }
    }
}

/// Package-level metadata declared by a manifest, when it has any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub repository: Option<String>,
    pub homepage: Option<String>,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
    /// The manifest declares workspace members (npm workspaces, `[workspace]`, ...).
    pub workspace: bool,
}

/// One manifest normalized into the common dependency shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    pub ecosystem: Ecosystem,
    pub path: PathBuf,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub peer_dependencies: BTreeMap<String, String>,
    pub optional_dependencies: BTreeMap<String, String>,
    pub package: PackageInfo,
}

impl ManifestRecord {
    pub fn new(ecosystem: Ecosystem, path: impl Into<PathBuf>) -> Self {
        Self {
            ecosystem,
            path: path.into(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            peer_dependencies: BTreeMap::new(),
            optional_dependencies: BTreeMap::new(),
            package: PackageInfo::default(),
        }
    }

    /// Insert a dependency into the map that matches `scope`.
    pub fn insert(&mut self, scope: DependencyScope, name: impl Into<String>, version: impl Into<String>) {
        let map = match scope {
            DependencyScope::Production => &mut self.dependencies,
            DependencyScope::Development => &mut self.dev_dependencies,
            DependencyScope::Peer => &mut self.peer_dependencies,
            DependencyScope::Optional => &mut self.optional_dependencies,
        };
        map.entry(name.into()).or_insert_with(|| version.into());
    }

    /// All `(name, version, scope)` entries, production first.
    pub fn entries(&self) -> Vec<(&str, &str, DependencyScope)> {
        let sections = [
            (&self.dependencies, DependencyScope::Production),
            (&self.dev_dependencies, DependencyScope::Development),
            (&self.peer_dependencies, DependencyScope::Peer),
            (&self.optional_dependencies, DependencyScope::Optional),
        ];
        sections
            .into_iter()
            .flat_map(|(map, scope)| map.iter().map(move |(n, v)| (n.as_str(), v.as_str(), scope)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
            && self.dev_dependencies.is_empty()
            && self.peer_dependencies.is_empty()
            && self.optional_dependencies.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Production,
    Development,
    Peer,
    Optional,
}

/// The single category a dependency is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyCategory {
    UiFramework,
    MetaFramework,
    UiComponents,
    Styling,
    StateManagement,
    Routing,
    Forms,
    DataFetching,
    HttpClient,
    WebFramework,
    Database,
    Orm,
    Authentication,
    Validation,
    Testing,
    Mocking,
    Linting,
    Formatting,
    BuildTool,
    Compiler,
    TypeDefinitions,
    DateTime,
    Utility,
    Logging,
    Monitoring,
    Security,
    Cloud,
    Messaging,
    Caching,
    Documentation,
    Icons,
    Animation,
    Charts,
    Internationalization,
    #[serde(rename = "graphql")]
    GraphQl,
    RealTime,
    Cli,
    Configuration,
    DevTools,
    Serialization,
    Async,
    Other,
}

impl std::fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DependencyCategory::UiFramework => "UI Framework",
            DependencyCategory::MetaFramework => "Meta Framework",
            DependencyCategory::UiComponents => "UI Components",
            DependencyCategory::Styling => "Styling",
            DependencyCategory::StateManagement => "State Management",
            DependencyCategory::Routing => "Routing",
            DependencyCategory::Forms => "Forms",
            DependencyCategory::DataFetching => "Data Fetching",
            DependencyCategory::HttpClient => "HTTP Client",
            DependencyCategory::WebFramework => "Web Framework",
            DependencyCategory::Database => "Database",
            DependencyCategory::Orm => "ORM",
            DependencyCategory::Authentication => "Authentication",
            DependencyCategory::Validation => "Validation",
            DependencyCategory::Testing => "Testing",
            DependencyCategory::Mocking => "Mocking",
            DependencyCategory::Linting => "Linting",
            DependencyCategory::Formatting => "Formatting",
            DependencyCategory::BuildTool => "Build Tool",
            DependencyCategory::Compiler => "Compiler",
            DependencyCategory::TypeDefinitions => "Type Definitions",
            DependencyCategory::DateTime => "Date & Time",
            DependencyCategory::Utility => "Utility",
            DependencyCategory::Logging => "Logging",
            DependencyCategory::Monitoring => "Monitoring",
            DependencyCategory::Security => "Security",
            DependencyCategory::Cloud => "Cloud",
            DependencyCategory::Messaging => "Messaging",
            DependencyCategory::Caching => "Caching",
            DependencyCategory::Documentation => "Documentation",
            DependencyCategory::Icons => "Icons",
            DependencyCategory::Animation => "Animation",
            DependencyCategory::Charts => "Charts",
            DependencyCategory::Internationalization => "Internationalization",
            DependencyCategory::GraphQl => "GraphQL",
            DependencyCategory::RealTime => "Real-time",
            DependencyCategory::Cli => "CLI",
            DependencyCategory::Configuration => "Configuration",
            DependencyCategory::DevTools => "Dev Tools",
            DependencyCategory::Serialization => "Serialization",
            DependencyCategory::Async => "Async",
            DependencyCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Which classifier tier produced a dependency's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationTier {
    Exact,
    Partial,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub category: DependencyCategory,
    pub tier: ClassificationTier,
    pub scope: DependencyScope,
    pub ecosystem: Ecosystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskKind {
    OutdatedPattern,
    Deprecated,
}

impl std::fmt::Display for RiskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskKind::OutdatedPattern => write!(f, "outdated-pattern"),
            RiskKind::Deprecated => write!(f, "deprecated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFinding {
    pub name: String,
    pub version: String,
    pub kind: RiskKind,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Cargo,
    Pip,
    Poetry,
    Pipenv,
    Uv,
    Composer,
    Bundler,
    Go,
    Maven,
    Gradle,
    Nuget,
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Cargo => "cargo",
            PackageManager::Pip => "pip",
            PackageManager::Poetry => "poetry",
            PackageManager::Pipenv => "pipenv",
            PackageManager::Uv => "uv",
            PackageManager::Composer => "composer",
            PackageManager::Bundler => "bundler",
            PackageManager::Go => "go",
            PackageManager::Maven => "maven",
            PackageManager::Gradle => "gradle",
            PackageManager::Nuget => "nuget",
        };
        f.write_str(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedDependencies {
    pub all: Vec<Dependency>,
    pub by_category: BTreeMap<DependencyCategory, Vec<String>>,
    pub production: Vec<String>,
    pub development: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyProfile {
    pub manifest: Option<ManifestRecord>,
    pub package_managers: BTreeSet<PackageManager>,
    pub classified: ClassifiedDependencies,
    pub risks: Vec<RiskFinding>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Frameworks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Runtime {
    #[serde(rename = "Node.js")]
    NodeJs,
    Python,
    Java,
    Go,
    Rust,
    #[serde(rename = "PHP")]
    Php,
    Ruby,
    #[serde(rename = ".NET")]
    DotNet,
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::NodeJs => write!(f, "Node.js"),
            Runtime::Python => write!(f, "Python"),
            Runtime::Java => write!(f, "Java"),
            Runtime::Go => write!(f, "Go"),
            Runtime::Rust => write!(f, "Rust"),
            Runtime::Php => write!(f, "PHP"),
            Runtime::Ruby => write!(f, "Ruby"),
            Runtime::DotNet => write!(f, ".NET"),
        }
    }
}

/// Where a framework signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalOrigin {
    Manifest,
    ConfigFile,
    Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSignal {
    pub name: String,
    pub version: Option<String>,
    pub server: Option<String>,
    pub origin: Option<SignalOrigin>,
}

impl FrameworkSignal {
    pub fn new(name: impl Into<String>, origin: SignalOrigin) -> Self {
        Self {
            name: name.into(),
            version: None,
            server: None,
            origin: Some(origin),
        }
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_FRAMEWORK
    }
}

impl Default for FrameworkSignal {
    fn default() -> Self {
        Self {
            name: UNKNOWN_FRAMEWORK.to_string(),
            version: None,
            server: None,
            origin: None,
        }
    }
}

/// How far a detector progressed for its runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionStage {
    #[default]
    Unknown,
    RuntimeIdentified,
    FrameworkCandidatesCollected,
    PrimarySelected,
    FeaturesVerified,
}

/// Component-file evidence counted by the verification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFileCounts {
    pub jsx: usize,
    pub vue: usize,
    pub svelte: usize,
    pub angular: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendProfile {
    pub stage: DetectionStage,
    pub framework: FrameworkSignal,
    pub frameworks: Vec<FrameworkSignal>,
    pub language: Option<String>,
    pub build_tools: Vec<String>,
    pub styling: Vec<String>,
    pub state_management: Vec<String>,
    pub ui_libraries: Vec<String>,
    pub file_counts: ComponentFileCounts,
    pub has_router: bool,
    pub has_ssr: bool,
    pub has_typescript: bool,
    pub has_pwa: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendProfile {
    pub stage: DetectionStage,
    pub runtime: Option<Runtime>,
    pub runtimes: Vec<Runtime>,
    pub framework: FrameworkSignal,
    pub frameworks: Vec<FrameworkSignal>,
    pub databases: Vec<String>,
    pub orms: Vec<String>,
    pub api_styles: Vec<String>,
    pub auth: Vec<String>,
    pub caching: Vec<String>,
    pub message_queues: Vec<String>,
    pub has_api: bool,
    pub has_database: bool,
    pub has_auth: bool,
}

// ---------------------------------------------------------------------------
// Testing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingProfile {
    pub unit: Vec<String>,
    pub component: Vec<String>,
    pub e2e: Vec<String>,
    pub coverage: Vec<String>,
    pub performance: Vec<String>,
    pub security: Vec<String>,
    pub visual: Vec<String>,
    pub config_files: Vec<String>,
    pub test_directories: Vec<String>,
    pub test_file_count: usize,
    pub sampled_files: usize,
    pub has_tests: bool,
    pub has_snapshot_tests: bool,
    pub has_visual_tests: bool,
    pub has_performance_tests: bool,
    pub has_security_tests: bool,
}

// ---------------------------------------------------------------------------
// Configuration, structure, documentation, metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationProfile {
    pub files: Vec<String>,
    pub linters: Vec<String>,
    pub formatters: Vec<String>,
    pub build_configs: Vec<String>,
    pub ci: Vec<String>,
    pub containerization: Vec<String>,
    pub deployment: Vec<String>,
    pub env_files: Vec<String>,
    pub has_typescript_config: bool,
    pub has_docker: bool,
    pub has_ci: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureProfile {
    pub total_files: usize,
    pub total_directories: usize,
    pub max_depth: usize,
    pub top_level_directories: Vec<String>,
    pub source_directories: Vec<String>,
    pub entry_points: Vec<String>,
    pub has_src: bool,
    pub has_tests: bool,
    pub has_docs: bool,
    pub has_public_assets: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationProfile {
    pub readme: Option<String>,
    pub readme_headings: usize,
    pub changelog: Option<String>,
    pub license_file: Option<String>,
    pub license: Option<String>,
    pub contributing: Option<String>,
    pub code_of_conduct: Option<String>,
    pub docs_directory: Option<String>,
    pub api_specs: Vec<String>,
    pub has_readme: bool,
}

/// Broad license family, used to flag copyleft or proprietary projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseKind {
    Permissive,
    WeakCopyleft,
    StrongCopyleft,
    Proprietary,
    Unknown,
}

impl std::fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseKind::Permissive => write!(f, "Permissive"),
            LicenseKind::WeakCopyleft => write!(f, "Weak Copyleft"),
            LicenseKind::StrongCopyleft => write!(f, "Strong Copyleft"),
            LicenseKind::Proprietary => write!(f, "Proprietary"),
            LicenseKind::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub license_kind: Option<LicenseKind>,
    pub repository: Option<String>,
    pub homepage: Option<String>,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
    pub ecosystem: Option<Ecosystem>,
    pub is_git_repo: bool,
    pub is_monorepo: bool,
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// The eight analysis phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Language,
    Configuration,
    Framework,
    Testing,
    Dependency,
    ProjectStructure,
    Documentation,
    Metadata,
}

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::Language,
        Phase::Configuration,
        Phase::Framework,
        Phase::Testing,
        Phase::Dependency,
        Phase::ProjectStructure,
        Phase::Documentation,
        Phase::Metadata,
    ];
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Language => "LANGUAGE",
            Phase::Configuration => "CONFIGURATION",
            Phase::Framework => "FRAMEWORK",
            Phase::Testing => "TESTING",
            Phase::Dependency => "DEPENDENCY",
            Phase::ProjectStructure => "PROJECT_STRUCTURE",
            Phase::Documentation => "DOCUMENTATION",
            Phase::Metadata => "METADATA",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Frontend,
    Backend,
    Service,
    Unknown,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Frontend => write!(f, "frontend"),
            ComponentKind::Backend => write!(f, "backend"),
            ComponentKind::Service => write!(f, "service"),
            ComponentKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// A frontend, backend or unknown-kind slice of one project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    pub framework: String,
    pub runtime: Option<Runtime>,
    pub language: Option<String>,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProfile {
    pub root: PathBuf,
    pub languages: Vec<LanguageStat>,
    pub configuration: ConfigurationProfile,
    pub frontend: FrontendProfile,
    pub backend: BackendProfile,
    pub testing: TestingProfile,
    pub dependencies: DependencyProfile,
    pub structure: StructureProfile,
    pub documentation: DocumentationProfile,
    pub metadata: ProjectMetadata,
    pub components: Vec<Component>,
    pub completed_phases: Vec<Phase>,
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Workspaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRoot {
    /// `proj-NNN`, assigned in sorted path order.
    pub id: String,
    pub path: PathBuf,
    /// Path relative to the workspace root; `.` for the workspace root itself.
    pub relative_path: String,
    pub manifests: Vec<PathBuf>,
    pub package_managers: BTreeSet<PackageManager>,
    pub type_hints: BTreeSet<ComponentKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    pub root_id: String,
    pub component_id: String,
    pub name: String,
    pub framework: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTotal {
    pub name: String,
    pub files: usize,
    pub lines: u64,
    pub roots: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub frontend: Vec<ComponentRef>,
    pub backend: Vec<ComponentRef>,
    pub unknown: Vec<ComponentRef>,
    pub languages: Vec<LanguageTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFailure {
    pub root_id: String,
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProfile {
    pub root: PathBuf,
    pub roots: Vec<WorkspaceRoot>,
    pub profiles: Vec<ComponentProfile>,
    pub summary: WorkspaceSummary,
    pub failures: Vec<RootFailure>,
    pub cancelled: bool,
}
