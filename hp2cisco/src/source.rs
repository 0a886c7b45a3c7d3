use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// True when `path` is the `-` placeholder for standard input.
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read configuration text from a file, or from stdin for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read configuration from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Name used for `path` in messages.
pub fn describe(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
