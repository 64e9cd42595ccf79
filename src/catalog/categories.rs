use std::collections::{HashMap, HashSet};

use crate::models::DependencyCategory as C;

/// Exact-name category table. Also the source of tier-2 prefix matches.
const EXACT: &[(&str, C)] = &[
    // UI frameworks
    ("react", C::UiFramework),
    ("react-dom", C::UiFramework),
    ("react-native", C::UiFramework),
    ("vue", C::UiFramework),
    ("@angular/core", C::UiFramework),
    ("@angular/", C::UiFramework),
    ("svelte", C::UiFramework),
    ("solid-js", C::UiFramework),
    ("preact", C::UiFramework),
    ("lit", C::UiFramework),
    ("ember-source", C::UiFramework),
    ("alpinejs", C::UiFramework),
    ("jquery", C::UiFramework),
    ("@builder.io/qwik", C::UiFramework),
    // Meta frameworks
    ("next", C::MetaFramework),
    ("nuxt", C::MetaFramework),
    ("@remix-run/react", C::MetaFramework),
    ("@remix-run/", C::MetaFramework),
    ("gatsby", C::MetaFramework),
    ("@sveltejs/kit", C::MetaFramework),
    ("astro", C::MetaFramework),
    ("expo", C::MetaFramework),
    // UI components
    ("@mui/material", C::UiComponents),
    ("@mui/", C::UiComponents),
    ("@material-ui/core", C::UiComponents),
    ("antd", C::UiComponents),
    ("@chakra-ui/react", C::UiComponents),
    ("@chakra-ui/", C::UiComponents),
    ("@headlessui/react", C::UiComponents),
    ("@radix-ui/", C::UiComponents),
    ("@mantine/core", C::UiComponents),
    ("react-bootstrap", C::UiComponents),
    ("vuetify", C::UiComponents),
    ("element-plus", C::UiComponents),
    ("primevue", C::UiComponents),
    ("quasar", C::UiComponents),
    ("@angular/material", C::UiComponents),
    ("semantic-ui-react", C::UiComponents),
    // Styling
    ("tailwindcss", C::Styling),
    ("styled-components", C::Styling),
    ("@emotion/react", C::Styling),
    ("@emotion/styled", C::Styling),
    ("@emotion/", C::Styling),
    ("sass", C::Styling),
    ("node-sass", C::Styling),
    ("less", C::Styling),
    ("postcss", C::Styling),
    ("autoprefixer", C::Styling),
    ("bootstrap", C::Styling),
    ("bulma", C::Styling),
    ("clsx", C::Styling),
    ("classnames", C::Styling),
    ("@vanilla-extract/css", C::Styling),
    // State management
    ("redux", C::StateManagement),
    ("@reduxjs/toolkit", C::StateManagement),
    ("react-redux", C::StateManagement),
    ("zustand", C::StateManagement),
    ("mobx", C::StateManagement),
    ("recoil", C::StateManagement),
    ("jotai", C::StateManagement),
    ("pinia", C::StateManagement),
    ("vuex", C::StateManagement),
    ("@ngrx/store", C::StateManagement),
    ("@ngrx/", C::StateManagement),
    ("xstate", C::StateManagement),
    // Routing
    ("react-router", C::Routing),
    ("react-router-dom", C::Routing),
    ("vue-router", C::Routing),
    ("@angular/router", C::Routing),
    ("@tanstack/react-router", C::Routing),
    ("wouter", C::Routing),
    // Forms
    ("formik", C::Forms),
    ("react-hook-form", C::Forms),
    ("@angular/forms", C::Forms),
    ("vee-validate", C::Forms),
    ("final-form", C::Forms),
    // Data fetching
    ("@tanstack/react-query", C::DataFetching),
    ("react-query", C::DataFetching),
    ("swr", C::DataFetching),
    ("@trpc/client", C::DataFetching),
    ("@trpc/", C::DataFetching),
    // HTTP clients
    ("axios", C::HttpClient),
    ("node-fetch", C::HttpClient),
    ("got", C::HttpClient),
    ("ky", C::HttpClient),
    ("superagent", C::HttpClient),
    ("undici", C::HttpClient),
    ("requests", C::HttpClient),
    ("httpx", C::HttpClient),
    ("aiohttp", C::HttpClient),
    ("reqwest", C::HttpClient),
    ("hyper", C::HttpClient),
    ("guzzlehttp/guzzle", C::HttpClient),
    ("faraday", C::HttpClient),
    // Web frameworks
    ("express", C::WebFramework),
    ("fastify", C::WebFramework),
    ("koa", C::WebFramework),
    ("@nestjs/core", C::WebFramework),
    ("@nestjs/", C::WebFramework),
    ("@hapi/hapi", C::WebFramework),
    ("hono", C::WebFramework),
    ("@adonisjs/core", C::WebFramework),
    ("django", C::WebFramework),
    ("flask", C::WebFramework),
    ("fastapi", C::WebFramework),
    ("tornado", C::WebFramework),
    ("starlette", C::WebFramework),
    ("sanic", C::WebFramework),
    ("pyramid", C::WebFramework),
    ("actix-web", C::WebFramework),
    ("axum", C::WebFramework),
    ("rocket", C::WebFramework),
    ("warp", C::WebFramework),
    ("laravel/framework", C::WebFramework),
    ("symfony/framework-bundle", C::WebFramework),
    ("slim/slim", C::WebFramework),
    ("rails", C::WebFramework),
    ("sinatra", C::WebFramework),
    ("github.com/gin-gonic/gin", C::WebFramework),
    ("github.com/gofiber/fiber", C::WebFramework),
    ("github.com/labstack/echo", C::WebFramework),
    ("org.springframework.boot", C::WebFramework),
    // Databases
    ("pg", C::Database),
    ("mysql", C::Database),
    ("mysql2", C::Database),
    ("mongodb", C::Database),
    ("sqlite3", C::Database),
    ("better-sqlite3", C::Database),
    ("psycopg2", C::Database),
    ("psycopg2-binary", C::Database),
    ("psycopg", C::Database),
    ("asyncpg", C::Database),
    ("pymysql", C::Database),
    ("mysqlclient", C::Database),
    ("pymongo", C::Database),
    ("motor", C::Database),
    ("rusqlite", C::Database),
    ("tokio-postgres", C::Database),
    ("sqlx", C::Database),
    ("github.com/lib/pq", C::Database),
    ("github.com/jackc/pgx", C::Database),
    // ORMs
    ("prisma", C::Orm),
    ("@prisma/client", C::Orm),
    ("typeorm", C::Orm),
    ("sequelize", C::Orm),
    ("mongoose", C::Orm),
    ("drizzle-orm", C::Orm),
    ("knex", C::Orm),
    ("@mikro-orm/core", C::Orm),
    ("sqlalchemy", C::Orm),
    ("peewee", C::Orm),
    ("tortoise-orm", C::Orm),
    ("diesel", C::Orm),
    ("sea-orm", C::Orm),
    ("doctrine/orm", C::Orm),
    ("activerecord", C::Orm),
    ("gorm.io/gorm", C::Orm),
    // Authentication
    ("passport", C::Authentication),
    ("passport-jwt", C::Authentication),
    ("jsonwebtoken", C::Authentication),
    ("next-auth", C::Authentication),
    ("@auth0/auth0-react", C::Authentication),
    ("firebase-auth", C::Authentication),
    ("bcrypt", C::Authentication),
    ("bcryptjs", C::Authentication),
    ("pyjwt", C::Authentication),
    ("django-allauth", C::Authentication),
    ("flask-login", C::Authentication),
    ("devise", C::Authentication),
    ("laravel/sanctum", C::Authentication),
    // Validation
    ("zod", C::Validation),
    ("yup", C::Validation),
    ("joi", C::Validation),
    ("class-validator", C::Validation),
    ("ajv", C::Validation),
    ("pydantic", C::Validation),
    ("marshmallow", C::Validation),
    ("validator", C::Validation),
    // Testing
    ("jest", C::Testing),
    ("vitest", C::Testing),
    ("mocha", C::Testing),
    ("chai", C::Testing),
    ("jasmine", C::Testing),
    ("ava", C::Testing),
    ("cypress", C::Testing),
    ("@playwright/test", C::Testing),
    ("playwright", C::Testing),
    ("puppeteer", C::Testing),
    ("@testing-library/", C::Testing),
    ("enzyme", C::Testing),
    ("supertest", C::Testing),
    ("karma", C::Testing),
    ("pytest", C::Testing),
    ("hypothesis", C::Testing),
    ("proptest", C::Testing),
    ("rstest", C::Testing),
    ("criterion", C::Testing),
    ("phpunit/phpunit", C::Testing),
    ("pestphp/pest", C::Testing),
    ("rspec", C::Testing),
    ("minitest", C::Testing),
    ("github.com/stretchr/testify", C::Testing),
    ("junit", C::Testing),
    // Mocking
    ("sinon", C::Mocking),
    ("nock", C::Mocking),
    ("msw", C::Mocking),
    ("@faker-js/faker", C::Mocking),
    ("faker", C::Mocking),
    ("mockall", C::Mocking),
    ("responses", C::Mocking),
    ("mockery/mockery", C::Mocking),
    // Linting
    ("eslint", C::Linting),
    ("tslint", C::Linting),
    ("@typescript-eslint/", C::Linting),
    ("eslint-config-", C::Linting),
    ("eslint-plugin-", C::Linting),
    ("stylelint", C::Linting),
    ("flake8", C::Linting),
    ("pylint", C::Linting),
    ("ruff", C::Linting),
    ("mypy", C::Linting),
    ("rubocop", C::Linting),
    ("phpstan/phpstan", C::Linting),
    // Formatting
    ("prettier", C::Formatting),
    ("black", C::Formatting),
    ("isort", C::Formatting),
    ("autopep8", C::Formatting),
    ("yapf", C::Formatting),
    // Build tools
    ("webpack", C::BuildTool),
    ("webpack-cli", C::BuildTool),
    ("vite", C::BuildTool),
    ("@vitejs/", C::BuildTool),
    ("rollup", C::BuildTool),
    ("parcel", C::BuildTool),
    ("esbuild", C::BuildTool),
    ("turbo", C::BuildTool),
    ("gulp", C::BuildTool),
    ("grunt", C::BuildTool),
    ("react-scripts", C::BuildTool),
    ("@angular/cli", C::BuildTool),
    ("@vue/cli-service", C::BuildTool),
    ("setuptools", C::BuildTool),
    ("wheel", C::BuildTool),
    ("cc", C::BuildTool),
    // Compilers / transpilers
    ("typescript", C::Compiler),
    ("@babel/core", C::Compiler),
    ("@babel/", C::Compiler),
    ("babel-loader", C::Compiler),
    ("@swc/core", C::Compiler),
    ("ts-node", C::Compiler),
    ("tsx", C::Compiler),
    ("cython", C::Compiler),
    // Date and time
    ("moment", C::DateTime),
    ("dayjs", C::DateTime),
    ("date-fns", C::DateTime),
    ("luxon", C::DateTime),
    ("chrono", C::DateTime),
    ("arrow", C::DateTime),
    ("pendulum", C::DateTime),
    ("python-dateutil", C::DateTime),
    ("nesbot/carbon", C::DateTime),
    // Utilities
    ("lodash", C::Utility),
    ("underscore", C::Utility),
    ("ramda", C::Utility),
    ("uuid", C::Utility),
    ("nanoid", C::Utility),
    ("rxjs", C::Utility),
    ("immer", C::Utility),
    ("itertools", C::Utility),
    ("regex", C::Utility),
    ("numpy", C::Utility),
    ("pandas", C::Utility),
    // Logging
    ("winston", C::Logging),
    ("pino", C::Logging),
    ("morgan", C::Logging),
    ("bunyan", C::Logging),
    ("loglevel", C::Logging),
    ("log", C::Logging),
    ("tracing", C::Logging),
    ("tracing-subscriber", C::Logging),
    ("env_logger", C::Logging),
    ("loguru", C::Logging),
    ("structlog", C::Logging),
    ("monolog/monolog", C::Logging),
    ("github.com/sirupsen/logrus", C::Logging),
    ("go.uber.org/zap", C::Logging),
    // Monitoring
    ("@sentry/node", C::Monitoring),
    ("@sentry/", C::Monitoring),
    ("sentry-sdk", C::Monitoring),
    ("newrelic", C::Monitoring),
    ("dd-trace", C::Monitoring),
    ("prom-client", C::Monitoring),
    ("@opentelemetry/", C::Monitoring),
    ("opentelemetry", C::Monitoring),
    ("prometheus", C::Monitoring),
    // Security
    ("helmet", C::Security),
    ("cors", C::Security),
    ("csurf", C::Security),
    ("express-rate-limit", C::Security),
    ("dompurify", C::Security),
    ("cryptography", C::Security),
    ("ring", C::Security),
    ("rustls", C::Security),
    // Cloud
    ("aws-sdk", C::Cloud),
    ("@aws-sdk/", C::Cloud),
    ("boto3", C::Cloud),
    ("botocore", C::Cloud),
    ("firebase", C::Cloud),
    ("firebase-admin", C::Cloud),
    ("@google-cloud/", C::Cloud),
    ("@azure/", C::Cloud),
    ("@supabase/supabase-js", C::Cloud),
    ("aws-config", C::Cloud),
    // Messaging
    ("amqplib", C::Messaging),
    ("kafkajs", C::Messaging),
    ("bull", C::Messaging),
    ("bullmq", C::Messaging),
    ("celery", C::Messaging),
    ("kombu", C::Messaging),
    ("pika", C::Messaging),
    ("rq", C::Messaging),
    ("lapin", C::Messaging),
    ("rdkafka", C::Messaging),
    ("sidekiq", C::Messaging),
    // Caching
    ("redis", C::Caching),
    ("ioredis", C::Caching),
    ("memcached", C::Caching),
    ("node-cache", C::Caching),
    ("lru-cache", C::Caching),
    ("django-redis", C::Caching),
    ("moka", C::Caching),
    ("predis/predis", C::Caching),
    // Documentation
    ("typedoc", C::Documentation),
    ("jsdoc", C::Documentation),
    ("@storybook/react", C::Documentation),
    ("@storybook/", C::Documentation),
    ("storybook", C::Documentation),
    ("swagger-ui-express", C::Documentation),
    ("swagger-jsdoc", C::Documentation),
    ("sphinx", C::Documentation),
    ("mkdocs", C::Documentation),
    ("utoipa", C::Documentation),
    // Icons
    ("@fortawesome/fontawesome-svg-core", C::Icons),
    ("@fortawesome/", C::Icons),
    ("react-icons", C::Icons),
    ("lucide-react", C::Icons),
    ("@heroicons/react", C::Icons),
    ("@mui/icons-material", C::Icons),
    // Animation
    ("framer-motion", C::Animation),
    ("gsap", C::Animation),
    ("animejs", C::Animation),
    ("lottie-web", C::Animation),
    ("react-spring", C::Animation),
    // Charts
    ("chart.js", C::Charts),
    ("react-chartjs-2", C::Charts),
    ("d3", C::Charts),
    ("recharts", C::Charts),
    ("echarts", C::Charts),
    ("highcharts", C::Charts),
    ("apexcharts", C::Charts),
    ("matplotlib", C::Charts),
    ("plotly", C::Charts),
    ("plotters", C::Charts),
    // i18n
    ("i18next", C::Internationalization),
    ("react-i18next", C::Internationalization),
    ("vue-i18n", C::Internationalization),
    ("react-intl", C::Internationalization),
    ("@ngx-translate/core", C::Internationalization),
    ("babel", C::Internationalization),
    // GraphQL
    ("graphql", C::GraphQl),
    ("@apollo/client", C::GraphQl),
    ("@apollo/server", C::GraphQl),
    ("apollo-server", C::GraphQl),
    ("apollo-server-express", C::GraphQl),
    ("urql", C::GraphQl),
    ("graphene", C::GraphQl),
    ("strawberry-graphql", C::GraphQl),
    ("async-graphql", C::GraphQl),
    ("juniper", C::GraphQl),
    // Real-time
    ("socket.io", C::RealTime),
    ("socket.io-client", C::RealTime),
    ("ws", C::RealTime),
    ("pusher", C::RealTime),
    ("channels", C::RealTime),
    ("websockets", C::RealTime),
    ("tokio-tungstenite", C::RealTime),
    // CLI
    ("commander", C::Cli),
    ("yargs", C::Cli),
    ("inquirer", C::Cli),
    ("chalk", C::Cli),
    ("ora", C::Cli),
    ("click", C::Cli),
    ("typer", C::Cli),
    ("argparse", C::Cli),
    ("clap", C::Cli),
    ("colored", C::Cli),
    ("indicatif", C::Cli),
    ("comfy-table", C::Cli),
    ("github.com/spf13/cobra", C::Cli),
    ("symfony/console", C::Cli),
    // Configuration
    ("dotenv", C::Configuration),
    ("config", C::Configuration),
    ("convict", C::Configuration),
    ("python-dotenv", C::Configuration),
    ("dynaconf", C::Configuration),
    ("dotenvy", C::Configuration),
    ("figment", C::Configuration),
    ("vlucas/phpdotenv", C::Configuration),
    ("github.com/spf13/viper", C::Configuration),
    // Dev tools
    ("nodemon", C::DevTools),
    ("concurrently", C::DevTools),
    ("husky", C::DevTools),
    ("lint-staged", C::DevTools),
    ("cross-env", C::DevTools),
    ("rimraf", C::DevTools),
    ("npm-run-all", C::DevTools),
    ("pre-commit", C::DevTools),
    ("tox", C::DevTools),
    ("ipython", C::DevTools),
    ("tempfile", C::DevTools),
    // Serialization
    ("serde", C::Serialization),
    ("serde_json", C::Serialization),
    ("toml", C::Serialization),
    ("quick-xml", C::Serialization),
    ("protobufjs", C::Serialization),
    ("msgpack", C::Serialization),
    ("js-yaml", C::Serialization),
    ("yaml", C::Serialization),
    ("pyyaml", C::Serialization),
    ("orjson", C::Serialization),
    ("prost", C::Serialization),
    // Async
    ("tokio", C::Async),
    ("async-std", C::Async),
    ("futures", C::Async),
    ("async-trait", C::Async),
    ("bluebird", C::Async),
    ("p-limit", C::Async),
    ("async", C::Async),
    ("trio", C::Async),
    ("anyio", C::Async),
    ("uvloop", C::Async),
];

/// Keyword heuristics, checked in this order over the lowercase name.
/// A trailing `/` marks a name-prefix rule instead of a token rule.
const KEYWORDS: &[(&str, C)] = &[
    ("test", C::Testing),
    ("mock", C::Mocking),
    ("auth", C::Authentication),
    ("date", C::DateTime),
    ("http", C::HttpClient),
    ("db", C::Database),
    ("ui", C::UiComponents),
    ("icon", C::Icons),
    ("css", C::Styling),
    ("build", C::BuildTool),
    ("dev", C::DevTools),
    ("@types/", C::TypeDefinitions),
];

/// Packages that are deprecated or unmaintained upstream.
const DEPRECATED: &[&str] = &[
    "request",
    "request-promise",
    "node-sass",
    "tslint",
    "babel-eslint",
    "gulp-util",
    "istanbul",
    "left-pad",
    "querystring",
    "react-scripts",
    "protractor",
    "enzyme",
    "moment",
    "nose",
    "pycrypto",
    "failure",
    "tempdir",
    "error-chain",
    "fzaninotto/faker",
    "swiftmailer/swiftmailer",
];

#[derive(Debug, Clone)]
pub struct CategoryTables {
    pub exact: HashMap<String, C>,
    /// Keys of `exact`, longest first, for tier-2 prefix matching.
    pub prefix_order: Vec<String>,
    pub keywords: Vec<(String, C)>,
    pub deprecated: HashSet<String>,
}

impl Default for CategoryTables {
    fn default() -> Self {
        let exact: HashMap<String, C> = EXACT
            .iter()
            .map(|(name, category)| (name.to_string(), *category))
            .collect();
        let mut prefix_order: Vec<String> = exact.keys().cloned().collect();
        sort_longest_first(&mut prefix_order);
        Self {
            exact,
            prefix_order,
            keywords: KEYWORDS
                .iter()
                .map(|(k, c)| (k.to_string(), *c))
                .collect(),
            deprecated: DEPRECATED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryTables {
    /// Add or replace an exact-name entry, keeping the prefix order sorted.
    pub fn insert_exact(&mut self, name: &str, category: C) {
        let key = name.to_lowercase();
        if self.exact.insert(key.clone(), category).is_none() {
            self.prefix_order.push(key);
            sort_longest_first(&mut self.prefix_order);
        }
    }
}

fn sort_longest_first(keys: &mut [String]) {
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
}
