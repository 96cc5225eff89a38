use super::{Algorithm, OutputStyle};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "make-prefetch")]
#[command(about = "Create a prefetch statement for IBM Endpoint Manager ActionScript")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(args_override_self = true)]
#[command(infer_long_args = true)]
pub struct Cli {
    /// File to hash
    #[arg(required_unless_present = "describe")]
    pub file: Option<PathBuf>,

    /// Hash algorithm to use (all, sha1, sha256)
    #[arg(short, long, value_name = "ALGORITHM", default_value = "all", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Output format (prefetch, davis, value)
    #[arg(short, long, value_name = "OUTPUT", default_value = "prefetch", value_parser = parse_output_style)]
    pub output: OutputStyle,

    /// Print this help message and exit
    ///
    /// `run_with_args` answers `-h`/`--help` before parsing; this field serves
    /// callers that build a `Cli` directly.
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Raise stderr log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print operator.json and exit
    #[arg(long)]
    pub describe: bool,
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    value.parse()
}

fn parse_output_style(value: &str) -> Result<OutputStyle, String> {
    value.parse()
}
