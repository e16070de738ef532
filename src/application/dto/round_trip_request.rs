use crate::file_lifecycle::domain::Scenario;

/// RoundTripRequest - what to run and how to react to a failing step
#[derive(Debug, Clone)]
pub struct RoundTripRequest {
    /// Steps to execute, in order
    pub scenario: Scenario,
    /// Remove files this run created (and has not removed yet) if a step fails
    pub cleanup_on_failure: bool,
}

impl RoundTripRequest {
    pub fn new(scenario: Scenario, cleanup_on_failure: bool) -> Self {
        Self {
            scenario,
            cleanup_on_failure,
        }
    }
}

impl Default for RoundTripRequest {
    /// The three-file demonstration with no rollback on failure
    fn default() -> Self {
        Self::new(Scenario::demo(), false)
    }
}
