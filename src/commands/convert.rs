//! Render one SVG icon into every size in [`ICON_SIZES`].
//!
//! Each size is an independent invocation of the converter tool. A size
//! whose conversion fails is reported and skipped; only a tool that cannot
//! be started at all aborts the run.

use std::path::PathBuf;

use crate::error::ConvertError;
use crate::sizes::{self, ICON_SIZES};
use crate::tool::{ConvertTool, ToolOutcome};

/// Icon rendered when no input is given.
pub const DEFAULT_INPUT: &str = "src/main/resources/icons/jpostman.svg";

/// Directory receiving the rendered icons when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "src/main/resources/icons";

/// What to convert and where to put it.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Progress events emitted while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertEvent<'a> {
    /// Input was found; conversions are about to start.
    Started,
    /// One size was written.
    Created { size: u32 },
    /// The tool ran but reported failure for one size.
    Failed { size: u32, stderr: &'a str },
}

/// Outcome for a single size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeResult {
    pub size: u32,
    pub outcome: ToolOutcome,
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub output_dir: PathBuf,
    pub results: Vec<SizeResult>,
}

impl ConvertReport {
    /// Sizes the tool failed to convert.
    pub fn failed(&self) -> impl Iterator<Item = u32> + '_ {
        self.results
            .iter()
            .filter(|r| r.outcome != ToolOutcome::Success)
            .map(|r| r.size)
    }
}

/// Convert `options.input` into one PNG per entry of [`ICON_SIZES`].
///
/// # Arguments
/// * `options` - Input icon and output directory
/// * `tool` - Converter binary to invoke for each size
/// * `on_progress` - Called for each [`ConvertEvent`], in order
///
/// # Errors
/// * [`ConvertError::MissingInput`] before any conversion if the input is absent
/// * [`ConvertError::ToolUnavailable`] if the tool cannot be started; no
///   further sizes are attempted
pub fn run<F>(
    options: &ConvertOptions,
    tool: &ConvertTool,
    mut on_progress: F,
) -> Result<ConvertReport, ConvertError>
where
    F: FnMut(ConvertEvent<'_>),
{
    if !options.input.exists() {
        return Err(ConvertError::MissingInput(options.input.clone()));
    }
    let base = sizes::base_name(&options.input)
        .ok_or_else(|| ConvertError::MissingInput(options.input.clone()))?;

    on_progress(ConvertEvent::Started);

    let mut results = Vec::with_capacity(ICON_SIZES.len());
    for &size in ICON_SIZES {
        let output = sizes::output_path(&options.output_dir, &base, size);

        let outcome = tool
            .convert(size, &options.input, &output)
            .map_err(|source| {
                tracing::debug!(
                    program = %tool.program().display(),
                    error = %source,
                    "converter could not be started"
                );
                ConvertError::ToolUnavailable {
                    program: tool.program().to_path_buf(),
                    source,
                }
            })?;

        match &outcome {
            ToolOutcome::Success => on_progress(ConvertEvent::Created { size }),
            ToolOutcome::Failed { exit_code, stderr } => {
                tracing::debug!(size, ?exit_code, "conversion failed");
                on_progress(ConvertEvent::Failed {
                    size,
                    stderr: stderr.as_str(),
                });
            }
        }

        results.push(SizeResult { size, outcome });
    }

    Ok(ConvertReport {
        output_dir: options.output_dir.clone(),
        results,
    })
}
