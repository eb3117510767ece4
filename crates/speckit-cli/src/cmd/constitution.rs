use crate::backend::ClaudeCliBackend;
use crate::report::ConsoleReporter;
use anyhow::Context;
use speckit_core::config::Config;
use speckit_core::constitution::ConstitutionWorkflow;
use std::path::Path;

pub fn run(root: &Path, guidance: &str) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let backend = ClaudeCliBackend::from_config(&config.backend);
    let reporter = ConsoleReporter;
    let workflow = ConstitutionWorkflow::new(root, &backend, &reporter);

    match workflow.run(guidance) {
        Some(_) => Ok(()),
        None => std::process::exit(1),
    }
}
