pub mod algorithm;
pub mod args;
pub mod exit;
pub mod output_style;
pub mod usage;

pub use algorithm::Algorithm;
pub use args::Cli;
pub use exit::{Outcome, exit_code};
pub use output_style::OutputStyle;
pub use usage::{USAGE, requests_help};
