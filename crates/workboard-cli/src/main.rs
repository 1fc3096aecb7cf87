mod cmd;
mod context;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wb",
    about = "File-based kanban board — move work-package documents between lanes with a consistent audit trail",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from workboard/ or .git/)
    #[arg(long, global = true, env = "WORKBOARD_ROOT")]
    root: Option<PathBuf>,

    /// Feature name (default: current git branch, then the workboard/<feature> path segment)
    #[arg(long, global = true, env = "WORKBOARD_FEATURE")]
    feature: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every lane and the work packages it holds
    List,

    /// Move a work package to another lane
    Move {
        /// Work package identifier
        #[arg(long)]
        wp: String,

        /// Target lane (planned, doing, for_review, done)
        #[arg(long)]
        to: String,

        /// Activity note (default: "Moved to <lane>")
        #[arg(long)]
        note: Option<String>,
    },

    /// Record an activity-log entry without moving the package
    History {
        /// Work package identifier
        #[arg(long)]
        wp: String,

        /// Activity note (default: "Activity recorded")
        #[arg(long)]
        note: Option<String>,
    },

    /// Check that every work package has reached the done lane
    Accept,

    /// Undo the last move (not implemented)
    Rollback,

    /// Merge the feature branch after a clean working-tree check
    Merge {
        /// Merge strategy
        #[arg(long)]
        strategy: Option<String>,

        /// Target branch
        #[arg(long)]
        target: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = root::resolve_root(cli.root.as_deref())?;
    let feature = context::resolve_feature(&root, cli.feature.as_deref())?;

    match cli.command {
        Commands::List => cmd::list::run(&root, &feature, cli.json),
        Commands::Move { wp, to, note } => {
            cmd::mv::run(&root, &feature, &wp, &to, note.as_deref(), cli.json)
        }
        Commands::History { wp, note } => {
            cmd::history::run(&root, &feature, &wp, note.as_deref(), cli.json)
        }
        Commands::Accept => cmd::accept::run(&root, &feature, cli.json),
        Commands::Rollback => cmd::rollback::run(),
        Commands::Merge { strategy, target } => cmd::merge::run(
            &root,
            &feature,
            strategy.as_deref(),
            target.as_deref(),
            cli.json,
        ),
    }
}
