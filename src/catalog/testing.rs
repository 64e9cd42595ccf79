use super::owned_list;

/// Which list of the testing profile a tool is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Unit,
    Component,
    E2e,
    Coverage,
    Performance,
    Security,
    Visual,
}

/// Keyword families looked for in sampled test files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMarker {
    Snapshot,
    Visual,
    Performance,
    Security,
}

#[derive(Debug, Clone)]
pub struct TestTool {
    pub name: String,
    pub kind: TestKind,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ConfigPattern {
    /// File-name glob, matched against entries of the project root.
    pub glob: String,
    pub tool: String,
    pub kind: TestKind,
}

const TOOLS: &[(&str, TestKind, &[&str])] = &[
    // Unit
    ("Jest", TestKind::Unit, &["jest", "ts-jest", "@jest/*"]),
    ("Vitest", TestKind::Unit, &["vitest"]),
    ("Mocha", TestKind::Unit, &["mocha"]),
    ("Jasmine", TestKind::Unit, &["jasmine", "jasmine-core"]),
    ("AVA", TestKind::Unit, &["ava"]),
    ("Karma", TestKind::Unit, &["karma"]),
    ("Chai", TestKind::Unit, &["chai"]),
    ("pytest", TestKind::Unit, &["pytest", "pytest-django", "pytest-asyncio"]),
    ("nose2", TestKind::Unit, &["nose2"]),
    ("Hypothesis", TestKind::Unit, &["hypothesis"]),
    ("proptest", TestKind::Unit, &["proptest"]),
    ("rstest", TestKind::Unit, &["rstest"]),
    ("PHPUnit", TestKind::Unit, &["phpunit/phpunit"]),
    ("Pest", TestKind::Unit, &["pestphp/pest"]),
    ("RSpec", TestKind::Unit, &["rspec", "rspec-rails"]),
    ("Minitest", TestKind::Unit, &["minitest"]),
    ("Testify", TestKind::Unit, &["github.com/stretchr/testify"]),
    ("JUnit", TestKind::Unit, &["junit:junit", "org.junit.jupiter:*", "org.springframework.boot:spring-boot-starter-test"]),
    ("xUnit", TestKind::Unit, &["xunit", "xunit.*"]),
    ("NUnit", TestKind::Unit, &["NUnit"]),
    // Component
    ("Testing Library", TestKind::Component, &["@testing-library/*"]),
    ("Enzyme", TestKind::Component, &["enzyme"]),
    ("Vue Test Utils", TestKind::Component, &["@vue/test-utils"]),
    ("Angular TestBed", TestKind::Component, &["@angular/core/testing"]),
    // End-to-end
    ("Cypress", TestKind::E2e, &["cypress"]),
    ("Playwright", TestKind::E2e, &["@playwright/test", "playwright", "pytest-playwright"]),
    ("Puppeteer", TestKind::E2e, &["puppeteer"]),
    ("WebdriverIO", TestKind::E2e, &["webdriverio", "@wdio/*"]),
    ("Selenium", TestKind::E2e, &["selenium-webdriver", "selenium", "org.seleniumhq.selenium:*"]),
    ("TestCafe", TestKind::E2e, &["testcafe"]),
    ("Nightwatch", TestKind::E2e, &["nightwatch"]),
    ("Protractor", TestKind::E2e, &["protractor"]),
    ("Capybara", TestKind::E2e, &["capybara"]),
    ("Behat", TestKind::E2e, &["behat/behat"]),
    ("Supertest", TestKind::E2e, &["supertest"]),
    // Coverage
    ("nyc", TestKind::Coverage, &["nyc"]),
    ("c8", TestKind::Coverage, &["c8"]),
    ("Istanbul", TestKind::Coverage, &["istanbul", "babel-plugin-istanbul"]),
    ("Vitest Coverage", TestKind::Coverage, &["@vitest/coverage-*"]),
    ("Coverage.py", TestKind::Coverage, &["coverage", "pytest-cov"]),
    ("SimpleCov", TestKind::Coverage, &["simplecov"]),
    ("JaCoCo", TestKind::Coverage, &["org.jacoco:*"]),
    ("Coverlet", TestKind::Coverage, &["coverlet.collector", "coverlet.msbuild"]),
    // Performance
    ("k6", TestKind::Performance, &["k6"]),
    ("Artillery", TestKind::Performance, &["artillery"]),
    ("Lighthouse CI", TestKind::Performance, &["lighthouse", "@lhci/cli"]),
    ("autocannon", TestKind::Performance, &["autocannon"]),
    ("Locust", TestKind::Performance, &["locust"]),
    ("pytest-benchmark", TestKind::Performance, &["pytest-benchmark"]),
    ("Criterion", TestKind::Performance, &["criterion"]),
    ("JMH", TestKind::Performance, &["org.openjdk.jmh:*"]),
    ("BenchmarkDotNet", TestKind::Performance, &["BenchmarkDotNet"]),
    // Security
    ("Snyk", TestKind::Security, &["snyk"]),
    ("eslint-plugin-security", TestKind::Security, &["eslint-plugin-security"]),
    ("Bandit", TestKind::Security, &["bandit"]),
    ("Safety", TestKind::Security, &["safety"]),
    ("Brakeman", TestKind::Security, &["brakeman"]),
    ("OWASP ZAP", TestKind::Security, &["zaproxy", "@zaproxy/*"]),
    ("cargo-audit", TestKind::Security, &["cargo-audit"]),
    // Visual
    ("Storybook Test Runner", TestKind::Visual, &["@storybook/test-runner"]),
    ("Chromatic", TestKind::Visual, &["chromatic"]),
    ("BackstopJS", TestKind::Visual, &["backstopjs"]),
    ("Percy", TestKind::Visual, &["@percy/*"]),
    ("Loki", TestKind::Visual, &["loki"]),
    ("reg-suit", TestKind::Visual, &["reg-suit"]),
    ("jest-image-snapshot", TestKind::Visual, &["jest-image-snapshot"]),
];

const CONFIG_PATTERNS: &[(&str, &str, TestKind)] = &[
    ("jest.config.*", "Jest", TestKind::Unit),
    ("vitest.config.*", "Vitest", TestKind::Unit),
    (".mocharc*", "Mocha", TestKind::Unit),
    ("karma.conf.*", "Karma", TestKind::Unit),
    ("pytest.ini", "pytest", TestKind::Unit),
    ("conftest.py", "pytest", TestKind::Unit),
    ("tox.ini", "tox", TestKind::Unit),
    ("phpunit.xml*", "PHPUnit", TestKind::Unit),
    (".rspec", "RSpec", TestKind::Unit),
    ("cypress.config.*", "Cypress", TestKind::E2e),
    ("cypress.json", "Cypress", TestKind::E2e),
    ("playwright.config.*", "Playwright", TestKind::E2e),
    ("wdio.conf.*", "WebdriverIO", TestKind::E2e),
    ("nightwatch.conf.*", "Nightwatch", TestKind::E2e),
    ("protractor.conf.*", "Protractor", TestKind::E2e),
    (".nycrc*", "nyc", TestKind::Coverage),
    (".c8rc*", "c8", TestKind::Coverage),
    (".coveragerc", "Coverage.py", TestKind::Coverage),
    ("codecov.yml", "Codecov", TestKind::Coverage),
    (".codecov.yml", "Codecov", TestKind::Coverage),
    ("lighthouserc.*", "Lighthouse CI", TestKind::Performance),
    (".lighthouserc*", "Lighthouse CI", TestKind::Performance),
    ("k6.config.*", "k6", TestKind::Performance),
    (".snyk", "Snyk", TestKind::Security),
    (".bandit", "Bandit", TestKind::Security),
    ("backstop.json", "BackstopJS", TestKind::Visual),
    (".percy.*", "Percy", TestKind::Visual),
];

/// Conventional test directory names, in preference order.
const DIRECTORIES: &[&str] = &[
    "test",
    "tests",
    "__tests__",
    "spec",
    "specs",
    "e2e",
    "cypress",
    "__spec__",
];

/// File-name globs that mark a test file.
const FILE_PATTERNS: &[&str] = &[
    "*.test.*",
    "*.spec.*",
    "*_test.py",
    "test_*.py",
    "*_test.go",
    "*Test.java",
    "*Tests.cs",
    "*_spec.rb",
    "*_test.rs",
];

const MARKERS: &[(TestMarker, &[&str])] = &[
    (TestMarker::Snapshot, &["tomatchsnapshot", "tomatchinlinesnapshot", "snapshot"]),
    (TestMarker::Visual, &["tohavescreenshot", "screenshot", "percysnapshot", "visual regression"]),
    (TestMarker::Performance, &["performance.now", "benchmark", "lighthouse", "load test"]),
    (TestMarker::Security, &["xss", "csrf", "sql injection", "security"]),
];

#[derive(Debug, Clone)]
pub struct TestingTables {
    pub tools: Vec<TestTool>,
    pub config_patterns: Vec<ConfigPattern>,
    pub directories: Vec<String>,
    pub file_patterns: Vec<String>,
    /// Lowercase keywords per marker family.
    pub markers: Vec<(TestMarker, Vec<String>)>,
}

impl Default for TestingTables {
    fn default() -> Self {
        Self {
            tools: TOOLS
                .iter()
                .map(|(name, kind, patterns)| TestTool {
                    name: name.to_string(),
                    kind: *kind,
                    patterns: owned_list(patterns),
                })
                .collect(),
            config_patterns: CONFIG_PATTERNS
                .iter()
                .map(|(glob, tool, kind)| ConfigPattern {
                    glob: glob.to_string(),
                    tool: tool.to_string(),
                    kind: *kind,
                })
                .collect(),
            directories: owned_list(DIRECTORIES),
            file_patterns: owned_list(FILE_PATTERNS),
            markers: MARKERS
                .iter()
                .map(|(marker, words)| (*marker, owned_list(words)))
                .collect(),
        }
    }
}
