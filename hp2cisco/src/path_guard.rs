//! Keeps `convert --output` from clobbering a file the command reads.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::source::is_stdin;

/// Fail when `output` names the same file as one of the on-disk sources.
///
/// Sources read from stdin never clash.
pub fn ensure_output_not_source(output: &Path, sources: &[&Path]) -> Result<()> {
    let target = resolve(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;

    for source in sources.iter().copied().filter(|source| !is_stdin(source)) {
        let Ok(source_path) = source.canonicalize() else {
            // A missing source is reported when it is read.
            continue;
        };
        if source_path == target {
            bail!(
                "refusing to overwrite source file: output {} is the same file as {}",
                output.display(),
                source.display()
            );
        }
    }
    Ok(())
}

/// Resolve a path that may not exist yet through its parent directory.
fn resolve(path: &Path) -> Result<PathBuf> {
    if let Ok(existing) = path.canonicalize() {
        return Ok(existing);
    }
    let file_name = path
        .file_name()
        .with_context(|| format!("{} does not name a file", path.display()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = parent
        .canonicalize()
        .with_context(|| format!("output directory {} does not exist", parent.display()))?;
    Ok(parent.join(file_name))
}
