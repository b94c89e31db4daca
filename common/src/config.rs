use std::path::PathBuf;

/// Runtime options resolved from the command line.
pub struct Config {
    /// Path of the server list to check.
    pub file: PathBuf,
    /// Skips the "wait for Enter" step after the report.
    ///
    /// Does not change anything about the report itself.
    pub disable_input: bool,
    /// Suppresses diagnostics, leaving only the report.
    pub quiet: bool,
}
