use clap::{Args, Parser, Subcommand};

use crate::core::{axis::AxisId, value::Value};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "chart-domain",
    about = "Resolve chart axis domains from explicit bounds or data"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); falls back to `RUST_LOG`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve domains from a JSON configuration
    Resolve(ResolveArgs),
    /// Resolve domains from `x,y` CSV rows
    Csv(CsvArgs),
    /// Print example invocations
    Examples,
}

/// Options shared by every resolving subcommand.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Axis to resolve (repeatable; both when omitted)
    #[arg(short, long = "axis", value_name = "x|y")]
    pub axes: Vec<AxisId>,

    /// Stretch data-derived domains to contain zero
    #[arg(short = 'z', long)]
    pub include_zero: bool,

    /// One JSON object per axis instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn axes(&self) -> Vec<AxisId> {
        if self.axes.is_empty() {
            AxisId::ALL.to_vec()
        } else {
            self.axes.clone()
        }
    }
}

/// `chart-domain resolve …`
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// JSON configuration path (use `-` for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub config: String,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// `chart-domain csv …`
#[derive(Args, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Lower bound for both axes (only applies together with `--max`)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<Value>,
    /// Upper bound for both axes (only applies together with `--min`)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<Value>,

    #[command(flatten)]
    pub out: OutputArgs,
}
