//! `stackscan`: profile a project tree and report what it is built with.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`stackscan::config::load_config`]) and build the catalog.
//! 3. Profile the root, or every discovered root with `--workspace`.
//! 4. Render the requested report ([`stackscan::report`]).
//! 5. Exit `0` (including cancelled runs) or `1` when the root is unusable.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use stackscan::catalog::Catalog;
use stackscan::config::load_config;
use stackscan::models::Phase;
use stackscan::profile::{AnalysisOptions, CancelToken, ProgressSink, ProjectAnalyzer};
use stackscan::report;
use stackscan::workspace::WorkspaceAnalyzer;

/// Feeds phase progress into an indicatif bar.
struct BarSink(ProgressBar);

impl ProgressSink for BarSink {
    fn report(&self, phase: Phase, percent: u8) {
        self.0.set_position(percent as u64);
        self.0.set_message(phase.to_string());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let mut config = load_config(&path, cli.config.as_deref())?;
    config.scan.ignore.extend(cli.ignore.iter().cloned());
    let catalog = Arc::new(Catalog::from_config(&config));

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received, finishing current phase");
                cancel.cancel();
            }
        });
    }

    let bar = if cli.quiet { None } else { Some(progress_bar()?) };
    let options = AnalysisOptions {
        progress: bar
            .clone()
            .map(|b| Arc::new(BarSink(b)) as Arc<dyn ProgressSink>),
        cancel,
    };

    if cli.workspace {
        let analyzer = WorkspaceAnalyzer::new(catalog, config.scan);
        let outcome = analyzer.analyze(&path, &options).await;
        finish(bar);
        let workspace = outcome.unwrap_or_else(|e| fail(e));
        match cli.report {
            ReportFormat::Terminal => report::terminal::render_workspace(&workspace, cli.verbose, cli.quiet),
            ReportFormat::Json => report::to_json(&workspace).map(|json| println!("{}", json)),
        }
    } else {
        let analyzer = ProjectAnalyzer::new(catalog, config.scan);
        let outcome = analyzer.analyze(&path, &options).await;
        finish(bar);
        let profile = outcome.unwrap_or_else(|e| fail(e));
        match cli.report {
            ReportFormat::Terminal => report::terminal::render_profile(&profile, cli.verbose, cli.quiet),
            ReportFormat::Json => report::to_json(&profile).map(|json| println!("{}", json)),
        }
    }
}

/// stderr logging; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "stackscan=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn finish(bar: Option<ProgressBar>) {
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }
}

fn fail(error: stackscan::error::ScanError) -> ! {
    eprintln!("{} {}", "error:".red().bold(), error);
    std::process::exit(1);
}
