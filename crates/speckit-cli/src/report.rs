use speckit_core::report::Reporter;

/// Terminal reporter: informational lines to stdout, warnings and
/// errors to stderr.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn output(&self, message: &str) {
        println!("{message}");
    }

    fn warning(&self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
