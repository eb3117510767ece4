//! Blocking driver for the `claude` CLI as the generation backend.
//!
//! One request per invocation: the prompt goes over stdin, the response
//! comes back on stdout (`--print` mode). Model selection comes from
//! config.

use speckit_core::backend::SpecBackend;
use speckit_core::config::BackendConfig;
use speckit_core::error::{Result, SpeckitError};
use std::io::Write;
use std::process::{Command, Stdio};

pub struct ClaudeCliBackend {
    command: String,
    model: Option<String>,
}

impl ClaudeCliBackend {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            command: config.command.clone(),
            model: config.model.clone(),
        }
    }
}

impl SpecBackend for ClaudeCliBackend {
    fn run(&self, prompt: &str) -> Result<String> {
        which::which(&self.command).map_err(|_| {
            SpeckitError::Backend(format!("'{}' not found on PATH", self.command))
        })?;

        let mut cmd = Command::new(&self.command);
        cmd.arg("--print");
        if let Some(model) = &self.model {
            cmd.arg("--model").arg(model);
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(command = %self.command, "spawning backend subprocess");
        let mut child = cmd
            .spawn()
            .map_err(|e| SpeckitError::Backend(format!("failed to spawn backend: {e}")))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(prompt.as_bytes())
                .map_err(|e| SpeckitError::Backend(format!("failed to write prompt: {e}")))?;
        }
        // Close stdin so the backend knows the prompt is complete.
        drop(child.stdin.take());

        let output = child
            .wait_with_output()
            .map_err(|e| SpeckitError::Backend(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let hint = stderr.trim().chars().take(500).collect::<String>();
            return Err(SpeckitError::Backend(format!(
                "exited with {}: {hint}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_a_backend_error() {
        let backend = ClaudeCliBackend {
            command: "definitely-not-a-real-binary".to_string(),
            model: None,
        };
        let err = backend.run("hello").unwrap_err();
        assert!(matches!(err, SpeckitError::Backend(_)));
    }
}
