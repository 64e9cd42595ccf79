use std::collections::HashMap;

use crate::models::Runtime;

use super::owned_list;

/// A named framework and the dependency patterns that reveal it.
#[derive(Debug, Clone)]
pub struct FrameworkRule {
    pub name: String,
    pub patterns: Vec<String>,
}

/// A feature label (database, styling library, ...) and its dependency patterns.
pub type FeatureRule = FrameworkRule;

fn rules(table: &[(&str, &[&str])]) -> Vec<FrameworkRule> {
    table
        .iter()
        .map(|(name, patterns)| FrameworkRule {
            name: name.to_string(),
            patterns: owned_list(patterns),
        })
        .collect()
}

/// Marker files, checked in this order. `*` entries are file-name globs.
const RUNTIME_MARKERS: &[(Runtime, &[&str])] = &[
    (Runtime::NodeJs, &["package.json"]),
    (Runtime::Python, &["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"]),
    (Runtime::Go, &["go.mod"]),
    (Runtime::Rust, &["Cargo.toml"]),
    (Runtime::Php, &["composer.json"]),
    (Runtime::Ruby, &["Gemfile"]),
    (Runtime::Java, &["pom.xml", "build.gradle", "build.gradle.kts"]),
    (Runtime::DotNet, &["*.csproj", "*.fsproj", "*.sln"]),
];

const RUNTIME_PRIORITY: &[Runtime] = &[
    Runtime::NodeJs,
    Runtime::Python,
    Runtime::Java,
    Runtime::Go,
    Runtime::Rust,
    Runtime::Php,
    Runtime::Ruby,
    Runtime::DotNet,
];

// Frontend ---------------------------------------------------------------

/// Frontend frameworks in primary-selection priority order.
const FRONTEND: &[(&str, &[&str])] = &[
    ("Next.js", &["next"]),
    ("Nuxt", &["nuxt", "nuxt3"]),
    ("Remix", &["@remix-run/*"]),
    ("Gatsby", &["gatsby"]),
    ("SvelteKit", &["@sveltejs/kit"]),
    ("Astro", &["astro"]),
    ("Angular", &["@angular/core"]),
    ("Vue", &["vue"]),
    ("React", &["react", "react-dom"]),
    ("React Native", &["react-native"]),
    ("Svelte", &["svelte"]),
    ("SolidJS", &["solid-js"]),
    ("Preact", &["preact"]),
    ("Qwik", &["@builder.io/qwik"]),
    ("Ember", &["ember-source", "ember-cli"]),
    ("Lit", &["lit", "lit-element"]),
    ("Alpine.js", &["alpinejs"]),
];

const ROUTERS: &[&str] = &[
    "react-router",
    "react-router-dom",
    "vue-router",
    "@angular/router",
    "@tanstack/react-router",
    "wouter",
    "next",
    "nuxt",
    "@remix-run/*",
    "@sveltejs/kit",
    "gatsby",
    "astro",
];

const STATE_MANAGEMENT: &[(&str, &[&str])] = &[
    ("Redux", &["redux", "@reduxjs/toolkit", "react-redux"]),
    ("Zustand", &["zustand"]),
    ("MobX", &["mobx", "mobx-react"]),
    ("Recoil", &["recoil"]),
    ("Jotai", &["jotai"]),
    ("Pinia", &["pinia"]),
    ("Vuex", &["vuex"]),
    ("NgRx", &["@ngrx/*"]),
    ("XState", &["xstate"]),
    ("React Query", &["@tanstack/react-query", "react-query"]),
];

const STYLING: &[(&str, &[&str])] = &[
    ("Tailwind CSS", &["tailwindcss"]),
    ("styled-components", &["styled-components"]),
    ("Emotion", &["@emotion/*"]),
    ("Sass", &["sass", "node-sass"]),
    ("Less", &["less"]),
    ("PostCSS", &["postcss"]),
    ("Bootstrap", &["bootstrap", "react-bootstrap"]),
    ("Bulma", &["bulma"]),
    ("vanilla-extract", &["@vanilla-extract/*"]),
];

const UI_LIBRARIES: &[(&str, &[&str])] = &[
    ("Material UI", &["@mui/material", "@material-ui/core"]),
    ("Ant Design", &["antd"]),
    ("Chakra UI", &["@chakra-ui/*"]),
    ("Headless UI", &["@headlessui/*"]),
    ("Radix UI", &["@radix-ui/*"]),
    ("Mantine", &["@mantine/*"]),
    ("Vuetify", &["vuetify"]),
    ("Element Plus", &["element-plus"]),
    ("PrimeVue", &["primevue"]),
    ("Quasar", &["quasar"]),
    ("Angular Material", &["@angular/material"]),
    ("Semantic UI", &["semantic-ui-react"]),
];

const BUILD_TOOLS: &[(&str, &[&str])] = &[
    ("Vite", &["vite"]),
    ("Webpack", &["webpack"]),
    ("Parcel", &["parcel"]),
    ("Rollup", &["rollup"]),
    ("esbuild", &["esbuild"]),
    ("Turbopack", &["@next/turbopack"]),
    ("Create React App", &["react-scripts"]),
    ("Angular CLI", &["@angular/cli"]),
    ("Vue CLI", &["@vue/cli-service"]),
    ("Gulp", &["gulp"]),
];

const SSR: &[&str] = &["next", "nuxt", "@remix-run/*", "@sveltejs/kit", "astro", "gatsby", "@angular/ssr", "@nguniversal/*"];

const PWA: &[&str] = &["workbox-*", "vite-plugin-pwa", "next-pwa", "@vite-pwa/*", "@angular/service-worker", "register-service-worker"];

// Backend ----------------------------------------------------------------

const NODE_BACKEND: &[(&str, &[&str])] = &[
    ("NestJS", &["@nestjs/core"]),
    ("Express", &["express"]),
    ("Fastify", &["fastify"]),
    ("Koa", &["koa"]),
    ("Hapi", &["@hapi/hapi", "hapi"]),
    ("Hono", &["hono"]),
    ("AdonisJS", &["@adonisjs/core"]),
    ("Sails.js", &["sails"]),
    ("Meteor", &["meteor-node-stubs"]),
    ("LoopBack", &["@loopback/core", "loopback"]),
    ("Apollo Server", &["@apollo/server", "apollo-server", "apollo-server-express"]),
];

const PYTHON_BACKEND: &[(&str, &[&str])] = &[
    ("Django", &["django"]),
    ("FastAPI", &["fastapi"]),
    ("Flask", &["flask"]),
    ("Tornado", &["tornado"]),
    ("Pyramid", &["pyramid"]),
    ("Sanic", &["sanic"]),
    ("Starlette", &["starlette"]),
    ("aiohttp", &["aiohttp"]),
    ("Falcon", &["falcon"]),
    ("Quart", &["quart"]),
    ("Bottle", &["bottle"]),
];

const JAVA_BACKEND: &[(&str, &[&str])] = &[
    ("Spring Boot", &["org.springframework.boot:*"]),
    ("Spring", &["org.springframework:*"]),
    ("Quarkus", &["io.quarkus:*"]),
    ("Micronaut", &["io.micronaut:*"]),
    ("Dropwizard", &["io.dropwizard:*"]),
    ("Vert.x", &["io.vertx:*"]),
    ("Play", &["com.typesafe.play:*"]),
    ("Jakarta EE", &["jakarta.platform:*", "javax:javaee-api"]),
];

const GO_BACKEND: &[(&str, &[&str])] = &[
    ("Gin", &["github.com/gin-gonic/gin"]),
    ("Echo", &["github.com/labstack/echo*"]),
    ("Fiber", &["github.com/gofiber/fiber*"]),
    ("Chi", &["github.com/go-chi/chi*"]),
    ("Gorilla Mux", &["github.com/gorilla/mux"]),
    ("Beego", &["github.com/beego/beego*", "github.com/astaxie/beego"]),
    ("Revel", &["github.com/revel/revel"]),
];

const RUST_BACKEND: &[(&str, &[&str])] = &[
    ("Actix Web", &["actix-web"]),
    ("Axum", &["axum"]),
    ("Rocket", &["rocket"]),
    ("Warp", &["warp"]),
    ("Poem", &["poem"]),
    ("Salvo", &["salvo"]),
    ("Tide", &["tide"]),
    ("Loco", &["loco-rs"]),
];

const PHP_BACKEND: &[(&str, &[&str])] = &[
    ("Laravel", &["laravel/framework"]),
    ("Symfony", &["symfony/framework-bundle", "symfony/symfony"]),
    ("Slim", &["slim/slim"]),
    ("CakePHP", &["cakephp/cakephp"]),
    ("CodeIgniter", &["codeigniter4/framework", "codeigniter/framework"]),
    ("Yii", &["yiisoft/yii2"]),
    ("Laminas", &["laminas/laminas-mvc"]),
];

const RUBY_BACKEND: &[(&str, &[&str])] = &[
    ("Ruby on Rails", &["rails"]),
    ("Sinatra", &["sinatra"]),
    ("Hanami", &["hanami"]),
    ("Grape", &["grape"]),
    ("Roda", &["roda"]),
];

const DOTNET_BACKEND: &[(&str, &[&str])] = &[
    ("ASP.NET Core", &["Microsoft.NET.Sdk.Web", "Microsoft.AspNetCore.*"]),
    ("Nancy", &["Nancy"]),
    ("ServiceStack", &["ServiceStack"]),
];

/// Entry-point files that confirm a backend framework without a manifest hit.
const BACKEND_ENTRY_POINTS: &[(&str, Runtime, &str)] = &[
    ("manage.py", Runtime::Python, "Django"),
    ("artisan", Runtime::Php, "Laravel"),
    ("bin/rails", Runtime::Ruby, "Ruby on Rails"),
    ("config.ru", Runtime::Ruby, "Rack"),
    ("nest-cli.json", Runtime::NodeJs, "NestJS"),
];

const SERVERS: &[(&str, &[&str])] = &[
    ("Gunicorn", &["gunicorn"]),
    ("Uvicorn", &["uvicorn"]),
    ("Hypercorn", &["hypercorn"]),
    ("Daphne", &["daphne"]),
    ("Waitress", &["waitress"]),
    ("Puma", &["puma"]),
    ("Unicorn", &["unicorn"]),
    ("Tomcat", &["org.springframework.boot:spring-boot-starter-tomcat", "org.apache.tomcat*"]),
    ("Jetty", &["org.springframework.boot:spring-boot-starter-jetty", "org.eclipse.jetty*"]),
    ("Undertow", &["org.springframework.boot:spring-boot-starter-undertow", "io.undertow*"]),
    ("PM2", &["pm2"]),
];

const DATABASES: &[(&str, &[&str])] = &[
    (
        "PostgreSQL",
        &[
            "pg",
            "postgres",
            "pg-promise",
            "psycopg2",
            "psycopg2-binary",
            "psycopg",
            "asyncpg",
            "tokio-postgres",
            "github.com/lib/pq",
            "github.com/jackc/pgx*",
            "org.postgresql:postgresql",
            "Npgsql*",
        ],
    ),
    (
        "MySQL",
        &[
            "mysql",
            "mysql2",
            "pymysql",
            "mysqlclient",
            "aiomysql",
            "mysql_async",
            "github.com/go-sql-driver/mysql",
            "mysql:mysql-connector-java",
            "com.mysql:mysql-connector-j",
            "MySql.Data",
        ],
    ),
    (
        "MongoDB",
        &["mongodb", "mongoose", "pymongo", "motor", "mongoengine", "go.mongodb.org/mongo-driver", "mongoid", "MongoDB.Driver"],
    ),
    ("SQLite", &["sqlite3", "better-sqlite3", "sqlite", "rusqlite", "github.com/mattn/go-sqlite3"]),
    ("Redis", &["redis", "ioredis", "github.com/go-redis/redis*", "github.com/redis/go-redis*", "StackExchange.Redis"]),
    ("Elasticsearch", &["@elastic/elasticsearch", "elasticsearch", "elasticsearch-dsl"]),
    ("Cassandra", &["cassandra-driver", "scylla"]),
    ("DynamoDB", &["@aws-sdk/client-dynamodb", "dynamoose"]),
    ("SQL Server", &["mssql", "tedious", "pyodbc", "Microsoft.Data.SqlClient"]),
];

const ORMS: &[(&str, &[&str])] = &[
    ("Prisma", &["prisma", "@prisma/client"]),
    ("TypeORM", &["typeorm"]),
    ("Sequelize", &["sequelize"]),
    ("Mongoose", &["mongoose"]),
    ("Drizzle", &["drizzle-orm"]),
    ("Knex", &["knex"]),
    ("MikroORM", &["@mikro-orm/*"]),
    ("SQLAlchemy", &["sqlalchemy", "flask-sqlalchemy"]),
    ("Peewee", &["peewee"]),
    ("Tortoise ORM", &["tortoise-orm"]),
    ("Diesel", &["diesel"]),
    ("SeaORM", &["sea-orm"]),
    ("SQLx", &["sqlx"]),
    ("GORM", &["gorm.io/gorm"]),
    ("Doctrine", &["doctrine/orm"]),
    ("Eloquent", &["illuminate/database"]),
    ("ActiveRecord", &["activerecord"]),
    ("Hibernate", &["org.hibernate*", "org.springframework.boot:spring-boot-starter-data-jpa"]),
    ("Entity Framework", &["Microsoft.EntityFrameworkCore*"]),
];

const API_STYLES: &[(&str, &[&str])] = &[
    (
        "GraphQL",
        &["graphql", "@apollo/server", "apollo-server*", "type-graphql", "@nestjs/graphql", "graphene*", "strawberry-graphql", "async-graphql", "juniper", "github.com/99designs/gqlgen"],
    ),
    ("gRPC", &["@grpc/grpc-js", "grpcio", "tonic", "google.golang.org/grpc", "Grpc.AspNetCore", "io.grpc*"]),
    ("WebSocket", &["socket.io", "ws", "channels", "websockets", "tokio-tungstenite", "github.com/gorilla/websocket", "@nestjs/websockets"]),
    ("OpenAPI", &["swagger-ui-express", "@nestjs/swagger", "drf-yasg", "drf-spectacular", "utoipa", "springdoc-openapi*", "Swashbuckle.AspNetCore"]),
    ("REST", &["djangorestframework", "flask-restful", "express-openapi-validator"]),
];

const AUTH: &[(&str, &[&str])] = &[
    ("Passport", &["passport", "@nestjs/passport"]),
    ("JWT", &["jsonwebtoken", "pyjwt", "djangorestframework-simplejwt", "github.com/golang-jwt/jwt*", "tymon/jwt-auth"]),
    ("NextAuth", &["next-auth", "@auth/core"]),
    ("OAuth", &["oauthlib", "authlib", "oauth2", "league/oauth2-server"]),
    ("bcrypt", &["bcrypt", "bcryptjs"]),
    ("Django Allauth", &["django-allauth"]),
    ("Flask-Login", &["flask-login"]),
    ("Devise", &["devise"]),
    ("Laravel Sanctum", &["laravel/sanctum"]),
    ("Spring Security", &["org.springframework.boot:spring-boot-starter-security", "org.springframework.security*"]),
];

const CACHING: &[(&str, &[&str])] = &[
    ("Redis", &["redis", "ioredis", "django-redis", "predis/predis", "github.com/go-redis/redis*"]),
    ("Memcached", &["memcached", "pymemcache", "python-memcached"]),
    ("In-memory", &["node-cache", "lru-cache", "cachetools", "moka"]),
];

const MESSAGE_QUEUES: &[(&str, &[&str])] = &[
    ("RabbitMQ", &["amqplib", "pika", "lapin", "kombu", "github.com/streadway/amqp", "php-amqplib/php-amqplib"]),
    ("Kafka", &["kafkajs", "kafka-python", "confluent-kafka", "rdkafka", "github.com/segmentio/kafka-go", "org.apache.kafka*"]),
    ("Bull", &["bull", "bullmq"]),
    ("Celery", &["celery"]),
    ("RQ", &["rq"]),
    ("Sidekiq", &["sidekiq"]),
    ("NATS", &["nats", "github.com/nats-io/nats.go"]),
    ("SQS", &["@aws-sdk/client-sqs"]),
];

/// Component-file evidence → framework credited by the verification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEvidence {
    Jsx,
    Vue,
    Svelte,
    AngularComponent,
}

#[derive(Debug, Clone)]
pub struct FrameworkTables {
    pub runtime_markers: Vec<(Runtime, Vec<String>)>,
    pub runtime_priority: Vec<Runtime>,
    pub frontend: Vec<FrameworkRule>,
    pub routers: Vec<String>,
    pub state_management: Vec<FeatureRule>,
    pub styling: Vec<FeatureRule>,
    pub ui_libraries: Vec<FeatureRule>,
    pub build_tools: Vec<FeatureRule>,
    pub ssr: Vec<String>,
    pub pwa: Vec<String>,
    /// Verification order: evidence kind and the framework it implies.
    pub content_evidence: Vec<(ContentEvidence, String)>,
    pub backend: HashMap<Runtime, Vec<FrameworkRule>>,
    pub backend_entry_points: Vec<(String, Runtime, String)>,
    pub servers: Vec<FeatureRule>,
    pub databases: Vec<FeatureRule>,
    pub orms: Vec<FeatureRule>,
    pub api_styles: Vec<FeatureRule>,
    pub auth: Vec<FeatureRule>,
    pub caching: Vec<FeatureRule>,
    pub message_queues: Vec<FeatureRule>,
}

impl Default for FrameworkTables {
    fn default() -> Self {
        let backend = [
            (Runtime::NodeJs, NODE_BACKEND),
            (Runtime::Python, PYTHON_BACKEND),
            (Runtime::Java, JAVA_BACKEND),
            (Runtime::Go, GO_BACKEND),
            (Runtime::Rust, RUST_BACKEND),
            (Runtime::Php, PHP_BACKEND),
            (Runtime::Ruby, RUBY_BACKEND),
            (Runtime::DotNet, DOTNET_BACKEND),
        ]
        .into_iter()
        .map(|(runtime, table)| (runtime, rules(table)))
        .collect();

        Self {
            runtime_markers: RUNTIME_MARKERS
                .iter()
                .map(|(runtime, files)| (*runtime, owned_list(files)))
                .collect(),
            runtime_priority: RUNTIME_PRIORITY.to_vec(),
            frontend: rules(FRONTEND),
            routers: owned_list(ROUTERS),
            state_management: rules(STATE_MANAGEMENT),
            styling: rules(STYLING),
            ui_libraries: rules(UI_LIBRARIES),
            build_tools: rules(BUILD_TOOLS),
            ssr: owned_list(SSR),
            pwa: owned_list(PWA),
            content_evidence: vec![
                (ContentEvidence::AngularComponent, "Angular".to_string()),
                (ContentEvidence::Vue, "Vue".to_string()),
                (ContentEvidence::Svelte, "Svelte".to_string()),
                (ContentEvidence::Jsx, "React".to_string()),
            ],
            backend,
            backend_entry_points: BACKEND_ENTRY_POINTS
                .iter()
                .map(|(file, runtime, name)| (file.to_string(), *runtime, name.to_string()))
                .collect(),
            servers: rules(SERVERS),
            databases: rules(DATABASES),
            orms: rules(ORMS),
            api_styles: rules(API_STYLES),
            auth: rules(AUTH),
            caching: rules(CACHING),
            message_queues: rules(MESSAGE_QUEUES),
        }
    }
}
