//! Command-line front-end
//!
//! ```bash
//! # Run the HTTP service (default)
//! cohort-dashboard serve
//!
//! # One fetch, KPI lines and batch distribution on stdout
//! cohort-dashboard summary
//! cohort-dashboard summary --search jane --tab unassigned
//! ```

use crate::config::Config;
use crate::core::loader::{RestStudentSource, StudentSource, run_fetch};
use crate::core::notifications::Notifier;
use crate::core::presentation::{DashboardPage, StudentsPage, Tab, summary_text};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Admin dashboard over the student records table.
#[derive(Debug, Parser)]
#[command(name = "cohort-dashboard", version, about)]
pub struct Cli {
    /// Configuration file (default: config/dashboard.yaml when present)
    #[arg(short, long, global = true, env = "DASHBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve,
    /// Fetch once and print the dashboard
    Summary {
        /// Also list students whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Which tab to list when searching
        #[arg(long, default_value = "all", value_parser = parse_tab)]
        tab: Tab,

        /// Print the dashboard payload (and the student list when
        /// searching) as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// `serve` when no subcommand is given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

fn parse_tab(raw: &str) -> std::result::Result<Tab, String> {
    raw.parse::<Tab>().map_err(|e| e.to_string())
}

/// Run the `summary` command against the configured source
pub async fn run_summary(
    config: &Config,
    search: Option<&str>,
    tab: Tab,
    json: bool,
) -> Result<String> {
    let source = RestStudentSource::new(config.source())
        .context("Failed to create the student source")?;
    let notifier = Notifier::new(config.views().notification_history);

    summarize(&source, &notifier, search, tab, json).await
}

/// `summary --json` document
#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    dashboard: &'a DashboardPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    students: Option<StudentsPage>,
}

/// Fetch once and render the summary text (or JSON)
pub async fn summarize(
    source: &dyn StudentSource,
    notifier: &Notifier,
    search: Option<&str>,
    tab: Tab,
    json: bool,
) -> Result<String> {
    let state = run_fetch(source, notifier).await;
    let dashboard = DashboardPage::render(&state);

    if json {
        let document = SummaryJson {
            dashboard: &dashboard,
            students: search.map(|term| StudentsPage::render(&state, term, tab)),
        };
        return serde_json::to_string_pretty(&document).context("Failed to encode summary");
    }

    let mut out = summary_text(&dashboard);

    if let Some(term) = search {
        if let StudentsPage::Ready { rows, counts, .. } = StudentsPage::render(&state, term, tab) {
            out.push_str(&format!(
                "\nStudents matching \"{}\" ({}: {}, unassigned: {})\n",
                term,
                tab,
                counts.all,
                counts.unassigned
            ));
            for row in rows {
                out.push_str(&format!(
                    "  {}  {}  <{}>  {}  {}  {}\n",
                    row.id, row.name, row.email, row.phone, row.city, row.batch
                ));
            }
        }
    }

    Ok(out)
}
