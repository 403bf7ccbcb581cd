//! Icon size table and output file naming.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Square pixel sizes rendered for every icon, in reporting order.
pub const ICON_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256, 512];

/// Extension (and `sips` format name) of every rendered icon.
pub const OUTPUT_FORMAT: &str = "png";

/// Base name used for output files: the input's file stem.
///
/// Names need not be UTF-8. Returns `None` only when the path has no stem
/// (e.g. `..` or `/`).
pub fn base_name(input: &Path) -> Option<OsString> {
    let stem = input.file_stem()?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_os_string())
    }
}

/// Output file name for one size, e.g. `jpostman_16.png`.
pub fn output_filename(base: &OsStr, size: u32) -> OsString {
    let mut name = base.to_os_string();
    name.push(format!("_{}.{}", size, OUTPUT_FORMAT));
    name
}

/// Full output path for one size inside `output_dir`.
pub fn output_path(output_dir: &Path, base: &OsStr, size: u32) -> PathBuf {
    output_dir.join(output_filename(base, size))
}
