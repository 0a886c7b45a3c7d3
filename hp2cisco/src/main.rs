use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use hp2cisco::profile::{
    builtin_profile_names, load_builtin_profile, resolve_profile, RenderProfile, DEFAULT_PROFILE,
};
use hp2cisco::report::{render_model, render_profiles};
use switchcfg_core::{
    format_json, parse, resolve_roles, summarize, ModelSummary, NetworkModel, PortPlan,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod convert;
mod path_guard;
mod source;

use cli::{Cli, Command, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Profiles => run_profiles(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let (profile, profile_source) = resolve_profile(
        args.profile.profile.as_deref(),
        args.profile.profile_file.as_deref(),
    )?;
    let input_name = source::describe(&args.input);
    let text = source::read_source(&args.input)?;
    let model = parse(&text).with_context(|| format!("failed to parse {input_name}"))?;
    let plan = resolve_roles(&model);
    let summary = summarize(&model, &plan);

    match args.format {
        OutputFormat::Text => {
            println!("profile={} source={}", profile.name, profile_source);
            println!("{}", render_model(&model, &plan, &summary, &profile.render));
        }
        OutputFormat::Json => {
            let report = InspectReport {
                profile: profile.name,
                model: &model,
                roles: &plan,
                summary,
            };
            println!("{}", format_json(&report));
        }
    }
    Ok(())
}

fn run_profiles() -> Result<()> {
    let profiles = builtin_profile_names()
        .into_iter()
        .map(load_builtin_profile)
        .collect::<Result<Vec<RenderProfile>, _>>()?;
    println!("{}", render_profiles(&profiles, DEFAULT_PROFILE));
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct InspectReport<'a> {
    profile: String,
    model: &'a NetworkModel,
    roles: &'a PortPlan,
    summary: ModelSummary,
}
