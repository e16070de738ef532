use std::path::PathBuf;

/// One file read back and printed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedFile {
    pub path: PathBuf,
    pub content: String,
}

/// RoundTripResponse - record of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTripResponse {
    /// Files read back, in print order
    pub printed: Vec<PrintedFile>,
    /// Paths removed by cleanup steps, in removal order
    pub removed: Vec<PathBuf>,
}

impl RoundTripResponse {
    /// Printed contents only, in print order
    pub fn printed_contents(&self) -> Vec<&str> {
        self.printed.iter().map(|p| p.content.as_str()).collect()
    }
}
