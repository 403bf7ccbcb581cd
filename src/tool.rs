//! The external image conversion tool.
//!
//! Rasterisation is delegated entirely to a converter binary that follows
//! the macOS `sips` calling convention:
//!
//! ```text
//! sips -s format png -z <height> <width> <input> --out <output>
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::sizes::OUTPUT_FORMAT;

/// Program used when no other converter is configured.
pub const DEFAULT_TOOL: &str = "sips";

/// Result of one converter invocation that actually ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool exited with status zero.
    Success,
    /// The tool exited non-zero (or was killed by a signal).
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },
}

/// A converter binary invoked once per icon size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertTool {
    program: PathBuf,
}

impl Default for ConvertTool {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl ConvertTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command for a square `size`x`size` PNG conversion.
    pub fn command(&self, size: u32, input: &Path, output: &Path) -> Command {
        let size = size.to_string();
        let mut cmd = Command::new(&self.program);
        cmd.args(["-s", "format", OUTPUT_FORMAT, "-z", size.as_str(), size.as_str()])
            .arg(input)
            .arg("--out")
            .arg(output);
        cmd
    }

    /// Run the tool synchronously for one size.
    ///
    /// Returns `Err` only when the process could not be started at all.
    /// A tool that ran and exited non-zero yields `Ok(ToolOutcome::Failed)`.
    pub fn convert(&self, size: u32, input: &Path, output: &Path) -> io::Result<ToolOutcome> {
        tracing::debug!(
            program = %self.program.display(),
            size,
            output = %output.display(),
            "invoking converter"
        );

        let result = self.command(size, input, output).output()?;

        if result.status.success() {
            Ok(ToolOutcome::Success)
        } else {
            Ok(ToolOutcome::Failed {
                exit_code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).to_string(),
            })
        }
    }
}
