/// Console adapters for user-facing messages on stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
