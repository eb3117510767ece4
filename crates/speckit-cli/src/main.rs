mod backend;
mod cmd;
mod report;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "speckit",
    about = "Spec-driven feature workflow — numbered branches, generated specs, checklists",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .speckit/ or .git/)
    #[arg(long, global = true, env = "SPECKIT_ROOT")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize speckit in the current project
    Init,

    /// Create a numbered feature workspace and generate its specification
    Specify {
        /// Free-text feature description
        #[arg(required = true, trailing_var_arg = true)]
        description: Vec<String>,
    },

    /// Populate the project constitution from its template
    Constitution {
        /// Guidance for the constitution content
        #[arg(trailing_var_arg = true)]
        guidance: Vec<String>,
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

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Specify { description } => cmd::specify::run(&root, &description.join(" ")),
        Commands::Constitution { guidance } => cmd::constitution::run(&root, &guidance.join(" ")),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
