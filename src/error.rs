use std::io;
use std::path::PathBuf;

/// Manual alternatives printed when the converter tool cannot be run.
pub const REMEDIATION: &[&str] = &[
    "1. Install librsvg: brew install librsvg",
    "2. Or use online tool: https://cloudconvert.com/svg-to-png",
];

/// Errors that abort a conversion run.
///
/// A tool that runs and exits non-zero for one size is not an error;
/// see [`crate::tool::ToolOutcome::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input icon does not exist (or has no usable file name)
    #[error("{} not found", .0.display())]
    MissingInput(PathBuf),

    /// Converter binary could not be started
    #[error("failed to run {}: {source}", .program.display())]
    ToolUnavailable {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Whether the manual alternatives should be shown for this error.
    pub fn needs_remediation(&self) -> bool {
        matches!(self, ConvertError::ToolUnavailable { .. })
    }
}
