/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing messages (e.g., to stderr) so they
/// never interleave with the listing written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a non-fatal warning
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_warning(&self, message: &str);
}
