//! CLI entry point for profileguard.
//!
//! This module is thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `profileguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use profileguard_app::{
    AuditLog, EnforceInput, ExplainOutput, append_jsonl, load_config, parse_report_json,
    render_markdown, render_rule_table, run_enforce, run_explain, serialize_report,
};
use profileguard_settings::Overrides;
use profileguard_types::EnforcementReport;
use time::OffsetDateTime;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "profileguard",
    version,
    about = "Parental-control rule enforcement for streaming profiles"
)]
struct Cli {
    /// Path to profileguard config TOML (missing file means defaults).
    #[arg(long, default_value = "profileguard.toml", global = true)]
    config: Utf8PathBuf,

    /// Override preset (default|strict|off).
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enforce the rule catalog against profiles and write artifacts.
    Enforce {
        /// JSON array of profiles (defaults to the built-in seed household).
        #[arg(long)]
        profiles: Option<Utf8PathBuf>,

        /// Flip a rule's enabled state after config resolution (repeatable).
        #[arg(long = "toggle", value_name = "CATEGORY")]
        toggles: Vec<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/profileguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/profileguard/report.md")]
        markdown_out: Utf8PathBuf,

        /// Append the report to a JSON-lines audit history.
        #[arg(long)]
        history: Option<Utf8PathBuf>,
    },

    /// Print the resolved rule catalog grouped by category.
    Rules {
        /// Flip a rule's enabled state before printing (repeatable).
        #[arg(long = "toggle", value_name = "CATEGORY")]
        toggles: Vec<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/profileguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule category with configuration guidance.
    Explain {
        /// The rule category (e.g., "content.maturity_ceiling").
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::Enforce {
            profiles,
            toggles,
            report_out,
            write_markdown,
            markdown_out,
            history,
        } => cmd_enforce(
            &cli,
            profiles.as_deref(),
            toggles.clone(),
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
            history.as_deref(),
        ),
        Commands::Rules { toggles } => cmd_rules(&cli, toggles.clone()),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Explain { category } => cmd_explain(category),
    };

    if let Err(err) = result {
        eprintln!("profileguard error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

/// Read the config file; a missing file means defaults.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(path = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn overrides(cli: &Cli, toggles: Vec<String>) -> Overrides {
    Overrides {
        preset: cli.preset.clone(),
        toggles,
    }
}

fn cmd_enforce(
    cli: &Cli,
    profiles: Option<&Utf8Path>,
    toggles: Vec<String>,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    history: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let profiles_text = profiles
        .map(|p| std::fs::read_to_string(p).with_context(|| format!("read profiles: {}", p)))
        .transpose()?;

    let output = run_enforce(EnforceInput {
        config_text: &cfg_text,
        profiles_json: profiles_text.as_deref(),
        overrides: overrides(cli, toggles),
    })?;

    write_report_file(report_out, &output.report).context("write report json")?;

    if let Some(md_path) = markdown_out {
        let md = render_markdown(&output.report);
        write_text_file(md_path, &md).context("write markdown")?;
    }

    if let Some(history_path) = history {
        let mut log = AuditLog::new();
        let entry = log.record(output.report, OffsetDateTime::now_utc());
        append_jsonl(history_path, entry).context("append history")?;
    }

    Ok(())
}

fn cmd_rules(cli: &Cli, toggles: Vec<String>) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let resolved = load_config(&cfg_text, overrides(cli, toggles))?;
    print!("{}", render_rule_table(resolved.catalog.list_rules()));
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &EnforcementReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(category: &str) -> anyhow::Result<()> {
    match run_explain(category) {
        ExplainOutput::Found(exp) => {
            print!("{}", profileguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            category,
            available,
        } => {
            eprint!(
                "{}",
                profileguard_app::format_not_found(&category, available)
            );
            std::process::exit(2);
        }
    }
}
