use crate::backend::ClaudeCliBackend;
use crate::report::ConsoleReporter;
use anyhow::Context;
use speckit_core::config::Config;
use speckit_core::git::GitRunner;
use speckit_core::specify::SpecifyWorkflow;
use std::path::Path;

pub fn run(root: &Path, description: &str) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let backend = ClaudeCliBackend::from_config(&config.backend);
    let git = GitRunner::new(root, config.remote.clone());
    let reporter = ConsoleReporter;
    let workflow = SpecifyWorkflow::new(root, &backend, &git, &reporter);

    // The workflow reports its own diagnostics; a failed run only needs
    // the non-zero exit.
    match workflow.run(description) {
        Some(_) => Ok(()),
        None => std::process::exit(1),
    }
}
