use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing messages to
/// stderr so they never mix with the listing on stdout. Progress messages
/// are only shown when requested; warnings are always shown.
pub struct StderrProgressReporter {
    show_progress: bool,
}

impl StderrProgressReporter {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    fn format_warning(message: &str) -> String {
        format!("{}{} {}", "warning".yellow().bold(), ":".bold(), message)
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.show_progress {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", Self::format_warning(message));
    }
}
