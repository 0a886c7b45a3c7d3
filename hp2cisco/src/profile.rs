use std::fs;
use std::path::Path;

use serde::Deserialize;
use switchcfg_core::RenderOptions;
use thiserror::Error;

/// Profile used when none is requested.
pub const DEFAULT_PROFILE: &str = "ios-fastethernet";

/// Named interface naming scheme for a family of target switches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub render: RenderOptions,
}

/// Errors returned when loading render profiles.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("unknown profile '{name}' (available: {available})")]
    Unknown { name: String, available: String },
}

const EMBEDDED: &[(&str, &str)] = &[
    (
        "ios-fastethernet",
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/profiles/ios-fastethernet.toml"
        )),
    ),
    (
        "ios-gigabit",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/ios-gigabit.toml")),
    ),
    (
        "ios-xe-stack",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/ios-xe-stack.toml")),
    ),
];

/// Names of the embedded profiles, in listing order.
pub fn builtin_profile_names() -> Vec<&'static str> {
    EMBEDDED.iter().map(|(name, _)| *name).collect()
}

/// Load one embedded profile by name.
pub fn load_builtin_profile(name: &str) -> Result<RenderProfile, ProfileLoadError> {
    let raw = EMBEDDED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, raw)| *raw)
        .ok_or_else(|| ProfileLoadError::Unknown {
            name: name.to_string(),
            available: builtin_profile_names().join(", "),
        })?;
    parse_profile(raw, format!("embedded:{name}"), name)
}

/// Load a profile from a TOML file.
///
/// A file without a `name` key is named after its file stem.
pub fn load_profile_file(path: &Path) -> Result<RenderProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let fallback_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_profile(&raw, path.display().to_string(), &fallback_name)
}

/// Pick the profile requested on the command line and report where it came
/// from (`embedded` or `file:<path>`).
pub fn resolve_profile(
    name: Option<&str>,
    file: Option<&Path>,
) -> Result<(RenderProfile, String), ProfileLoadError> {
    if let Some(path) = file {
        let profile = load_profile_file(path)?;
        return Ok((profile, format!("file:{}", path.display())));
    }
    let profile = load_builtin_profile(name.unwrap_or(DEFAULT_PROFILE))?;
    Ok((profile, "embedded".to_string()))
}

fn parse_profile(
    raw: &str,
    path: String,
    fallback_name: &str,
) -> Result<RenderProfile, ProfileLoadError> {
    let mut profile: RenderProfile =
        toml::from_str(raw).map_err(|source| ProfileLoadError::Parse { path, source })?;
    if profile.name.trim().is_empty() {
        profile.name = fallback_name.to_string();
    }
    Ok(profile)
}
