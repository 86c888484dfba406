//! The file update sequence: back up, parse, rebuild, overwrite.

use crate::Result;
use crate::spec::LegacySpec;

use anyhow::Context;
use std::fs;

/// Rewrite the spec file at `path` in the current nested shape.
///
/// The on-disk bytes are copied to `<path>.bak` before anything is parsed,
/// so a malformed file still gets backed up; a file that cannot be opened
/// leaves no backup behind. A stale backup at that path is overwritten.
///
/// The rewrite truncates the file in place. If it fails midway the backup
/// is the only recovery path.
pub fn update(path: &str) -> Result<()> {
    let backup = format!("{}.bak", path);
    fs::copy(path, &backup).with_context(|| format!("back up spec file {} to {}", path, backup))?;

    let text = fs::read_to_string(path).with_context(|| format!("read spec file {}", path))?;
    let legacy: LegacySpec =
        serde_json::from_str(&text).with_context(|| format!("parse spec file {}", path))?;

    let spec = legacy.migrate();

    let json = serde_json::to_string_pretty(&spec)?;
    fs::write(path, json).with_context(|| format!("write spec file {}", path))?;

    Ok(())
}
