//! Configuration conversion command.
//!
//! Reads one HP/Aruba configuration, translates it with the selected render
//! profile and writes the Cisco IOS text to a file or stdout.
//!
//! ## Outcomes
//!
//! - Parse errors stop the command and name the failing line. No output is
//!   written, since a partial model would render an incomplete configuration.
//! - A source with no VLAN memberships and no VLAN addresses is reported as
//!   "nothing to convert" unless `--allow-empty` is given.
//! - When writing to a file, a `convert_summary` line is printed on stdout.

use std::fs;

use anyhow::{bail, Context, Result};
use hp2cisco::profile::resolve_profile;
use hp2cisco::report::render_conversion_summary;
use switchcfg_core::{resolve_roles, summarize, translate_with};
use tracing::{debug, info};

use crate::cli::ConvertArgs;
use crate::path_guard::ensure_output_not_source;
use crate::source::{describe, read_source};

/// Execute the `convert` command.
///
/// # Errors
///
/// Returns error if:
/// - Output path names the input or profile file
/// - The render profile cannot be loaded
/// - The source cannot be read or fails to parse
/// - The source holds no VLAN data and `--allow-empty` was not given
/// - The output file cannot be written
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        let mut sources = vec![args.input.as_path()];
        sources.extend(args.profile.profile_file.as_deref());
        ensure_output_not_source(output, &sources)?;
    }

    let (profile, profile_source) = resolve_profile(
        args.profile.profile.as_deref(),
        args.profile.profile_file.as_deref(),
    )?;
    debug!(profile = %profile.name, source = %profile_source, "using render profile");

    let input_name = describe(&args.input);
    let source = read_source(&args.input)?;
    let translation = translate_with(&source, &profile.render)
        .with_context(|| format!("failed to parse {input_name}"))?;

    if translation.is_empty() {
        if !args.allow_empty {
            bail!("nothing to convert: no VLAN data found in {input_name}");
        }
        eprintln!("warning: no VLAN data found in {input_name}; writing global settings only");
    }

    let Some(output) = &args.output else {
        print!("{}", translation.text);
        return Ok(());
    };

    fs::write(output, &translation.text)
        .with_context(|| format!("failed to write output {}", output.display()))?;
    info!(output = %output.display(), "wrote converted configuration");

    let plan = resolve_roles(&translation.model);
    let summary = summarize(&translation.model, &plan);
    println!("{}", render_conversion_summary(&summary));
    Ok(())
}
