mod cli;

use clap::Parser;
use cli::{Cli, Commands, GetArgs, ListArgs};
use color_eyre::eyre::{Result, eyre};
use feature_flags::{Defaults, Flag, FlagDescriptor, Registry, catalog};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    init_logging(cli.verbose);

    println!("{}", run(catalog::init(), cli.command)?);

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(registry: &Registry, command: Commands) -> Result<String> {
    match command {
        Commands::List(args) => list(registry, &args),
        Commands::Get(args) => get(registry, &args),
        Commands::Defaults => Ok(serde_json::to_string_pretty(
            &registry.evaluate_all(&Defaults),
        )?),
    }
}

fn list(registry: &Registry, args: &ListArgs) -> Result<String> {
    let flags: Vec<&dyn Flag> = registry.filtered(args.lifecycle, args.oss).collect();

    tracing::debug!(shown = flags.len(), total = registry.len(), "Listing flags");

    if args.json {
        let descriptors: Vec<FlagDescriptor> =
            flags.into_iter().map(FlagDescriptor::of).collect();
        return Ok(serde_json::to_string_pretty(&descriptors)?);
    }

    let mut lines = vec![format!(
        "{:<32} {:<6} {:<8} {:<10} {:<4} NAME (OWNER)",
        "KEY", "TYPE", "DEFAULT", "LIFECYCLE", "OSS"
    )];
    for flag in flags {
        lines.push(format!(
            "{:<32} {:<6} {:<8} {:<10} {:<4} {} ({})",
            flag.key(),
            flag.kind().as_str(),
            flag.default_json().to_string(),
            flag.lifecycle().as_str(),
            if flag.enabled_in_oss() { "yes" } else { "no" },
            flag.name(),
            flag.owner(),
        ));
    }

    Ok(lines.join("\n"))
}

fn get(registry: &Registry, args: &GetArgs) -> Result<String> {
    let Some(flag) = registry.lookup(&args.key) else {
        return Err(eyre!("Unknown feature flag key '{}'", args.key));
    };

    if args.json {
        Ok(serde_json::to_string_pretty(&flag.descriptor())?)
    } else {
        Ok(flag.descriptor().to_string())
    }
}
