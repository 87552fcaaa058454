use clap::{Args, Parser, Subcommand};
use feature_flags::Lifecycle;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the declared feature flags.
    List(ListArgs),
    /// Show one feature flag by key.
    Get(GetArgs),
    /// Print every flag's default value as a JSON object.
    Defaults,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list flags with this lifecycle (temporary or permanent).
    #[clap(long)]
    pub lifecycle: Option<Lifecycle>,

    /// Only list flags enabled in the open source distribution.
    #[clap(long, action)]
    pub oss: bool,

    /// Print JSON instead of a table.
    #[clap(long, action)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// The flag key, for example `appMetrics`.
    pub key: String,

    /// Print JSON instead of text.
    #[clap(long, action)]
    pub json: bool,
}
