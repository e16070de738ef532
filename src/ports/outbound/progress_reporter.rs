/// ProgressReporter port for reporting progress while a scenario runs
///
/// Implementations must never write to stdout: stdout carries only the
/// recovered file contents.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports how many steps have completed
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Steps in the scenario
    /// * `message` - Optional description of the step just completed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports that the scenario finished
    fn report_completion(&self, message: &str);
}
