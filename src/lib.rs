//! Multi-signal project profiling.
//!
//! [`profile::ProjectAnalyzer`] runs eight phases over one project root and
//! returns a [`models::ComponentProfile`]; [`workspace::WorkspaceAnalyzer`]
//! discovers every root in a tree and profiles each. Detection tables live in
//! [`catalog::Catalog`] and can be extended from [`config`].

pub mod catalog;
pub mod config;
pub mod dependency;
pub mod error;
pub mod framework;
pub mod languages;
pub mod license;
pub mod manifest;
pub mod models;
pub mod profile;
pub mod report;
pub mod scanner;
pub mod testing;
pub mod workspace;
