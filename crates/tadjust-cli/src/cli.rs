use clap::{ArgAction, Parser, Subcommand};

/// Weekday-relative date adjustment tool
#[derive(Parser, Debug)]
#[command(name = "tadjust")]
#[command(about = "Weekday-relative date adjustment tool")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a named date operation to one or more dates
    Adjust(AdjustArgs),
    /// Forward clock distance between two times of day
    Diff(DiffArgs),
    /// Round a time of day to a multiple of some seconds
    Round(RoundArgs),
    /// List the available operations and their parameters
    Ops(OpsArgs),
}

#[derive(clap::Args, Debug)]
pub struct AdjustArgs {
    /// Operation name (see `tadjust ops`)
    #[arg(short, long)]
    pub op: String,

    /// Weekday: a name (saturday) or a zero-based number (0 = monday)
    #[arg(short, long)]
    pub weekday: Option<String>,

    /// Occurrence or day number for operations that take one
    #[arg(short, long, allow_hyphen_values = true)]
    pub n: Option<i64>,

    /// Date (YYYY-MM-DD) or datetime (YYYY-MM-DDTHH:MM:SS); repeatable
    #[arg(short, long)]
    pub date: Vec<String>,

    /// Adjust all dates as one batch: list, set, fixed, deque
    #[arg(short, long)]
    pub container: Option<String>,

    /// Input file path with one date per line (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct DiffArgs {
    /// Start time (HH:MM[:SS[.f]])
    #[arg(long)]
    pub from: String,

    /// End time (HH:MM[:SS[.f]])
    #[arg(long)]
    pub to: String,

    /// Average days per month used to express the difference
    #[arg(long, default_value_t = 30.436875)]
    pub days_in_month: f64,

    /// Average days per year used to express the difference
    #[arg(long, default_value_t = 365.25)]
    pub days_in_year: f64,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct RoundArgs {
    /// Time (HH:MM[:SS[.f]]) or datetime (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    pub time: String,

    /// Round to a multiple of this many seconds
    #[arg(long, default_value_t = 60)]
    pub to: u32,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct OpsArgs {
    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
