use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(version, about = "CI toolkit for a curated directory of docker run commands")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root. Defaults to the current directory.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate submitted docker-run.md files
    Validate {
        /// Changed file paths, relative to the repository root
        files: Vec<String>,

        /// Skip the GitHub repository existence check
        #[arg(long)]
        offline: bool,

        /// Where to write the results artifact (defaults to
        /// .github/validation-results.json under the root)
        #[arg(long)]
        results: Option<PathBuf>,
    },
    /// Refresh the repository index from changed docker-run.md files
    UpdateIndex {
        /// Space-separated changed files from the workflow. Falls back
        /// to a git diff against HEAD~1, then to a full tree scan.
        #[arg(long)]
        changed: Option<String>,
    },
    /// Regenerate the README application list and table of contents
    UpdateReadme,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "deckhand=debug"
    } else {
        "deckhand=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match &cli.command {
        Commands::Validate {
            files,
            offline,
            results,
        } => {
            let valid = cmd::cmd_validate(&root, files, *offline, results.as_deref()).await?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::UpdateIndex { changed } => {
            cmd::cmd_update_index(&root, changed.as_deref()).await?;
        }
        Commands::UpdateReadme => {
            cmd::cmd_update_readme(&root)?;
        }
    }

    Ok(())
}
