//! Diagnostics surface for the workflows.
//!
//! Three severities, each a plain text line: informational output,
//! non-fatal warning, fatal error. Workflows report through this trait
//! instead of printing, so callers decide where lines go.

use std::sync::Mutex;

pub trait Reporter {
    fn output(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Output,
    Warning,
    Error,
}

/// Reporter that records every line, for tests and embedders.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self, severity: Severity) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.lines(Severity::Output)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines(Severity::Error)
    }

    fn push(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn output(&self, message: &str) {
        self.push(Severity::Output, message);
    }

    fn warning(&self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_reporter_keeps_severities_apart() {
        let reporter = RecordingReporter::new();
        reporter.output("written");
        reporter.warning("stderr noise");
        reporter.error("boom");

        assert_eq!(reporter.outputs(), vec!["written"]);
        assert_eq!(reporter.warnings(), vec!["stderr noise"]);
        assert_eq!(reporter.errors(), vec!["boom"]);
    }
}
