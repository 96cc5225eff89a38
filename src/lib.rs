#![forbid(unsafe_code)]

use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::{debug, info, warn};

pub mod cli;
pub mod hash;
pub mod logging;
pub mod output;
pub mod refusal;

use cli::{Algorithm, Outcome, OutputStyle};
use hash::FileDigest;
use refusal::{PrefetchError, RefusalCode};

/// Main entry point that handles all errors internally and returns exit code
pub fn run() -> u8 {
    run_with_args(std::env::args_os())
}

/// Runs against an explicit argument list, program name first.
pub fn run_with_args<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // Help wins over every other argument, valid or not
    if cli::requests_help(&args) {
        println!("{}", cli::USAGE);
        return cli::exit_code(Outcome::Success);
    }

    match cli::Cli::try_parse_from(&args) {
        Ok(cli) => run_with_cli(cli),
        Err(err) => {
            // --version is reported through the error path with exit code 0
            let _ = err.print();
            u8::try_from(err.exit_code()).unwrap_or(Outcome::Refusal.exit_code())
        }
    }
}

pub fn run_with_cli(cli: cli::Cli) -> u8 {
    // Handle immediate flags that don't require hashing
    if cli.help {
        println!("{}", cli::USAGE);
        return cli::exit_code(Outcome::Success);
    }

    if cli.describe {
        return match print_operator_json(&mut io::stdout().lock()) {
            Ok(()) => cli::exit_code(Outcome::Success),
            Err(err) => report(&PrefetchError::Output(err)),
        };
    }

    logging::initialize(cli.verbose);

    let mut stdout = io::stdout().lock();
    match handle_main_workflow(&cli, &mut stdout) {
        Ok(()) => cli::exit_code(Outcome::Success),
        Err(err) if err.code() == RefusalCode::Unsupported => report_refusal(&mut stdout, &err),
        Err(err) => report(&err),
    }
}

/// Writes a combination refusal to `out` and returns its exit code.
///
/// The exit code stays that of the refusal even when the message cannot be
/// written; the write failure is reported on stderr.
pub fn report_refusal<W: Write>(out: &mut W, err: &PrefetchError) -> u8 {
    if let Err(write_err) = writeln!(out, "{err}").and_then(|()| out.flush()) {
        warn!(error = %write_err, "refusal message was not written");
        report(&PrefetchError::Output(write_err));
    }
    err.exit_code()
}

/// Hashes the file named on the command line and writes its statement.
pub fn handle_main_workflow<W: Write>(cli: &cli::Cli, out: &mut W) -> Result<(), PrefetchError> {
    let path = cli.file.as_deref().ok_or(PrefetchError::MissingFile)?;

    // Both digests are computed even when the combination is refused below
    let digest = hash::hash_file(path)?;
    let statement = prefetch_statement(cli.output, cli.algorithm, &digest)?;
    info!(name = %digest.name, size = digest.size, "prefetch statement ready");

    output::write_statement(out, &statement).map_err(PrefetchError::Output)
}

/// Renders the statement for `digest`, or refuses an unsupported combination.
pub fn prefetch_statement(
    style: OutputStyle,
    algorithm: Algorithm,
    digest: &FileDigest,
) -> Result<String, PrefetchError> {
    let template = output::select_template(style, algorithm)?;
    Ok(output::render(template, digest))
}

fn report(err: &PrefetchError) -> u8 {
    debug!(code = %err.code(), "run failed");
    match err.code() {
        RefusalCode::Usage => eprintln!("error: {err}\n\nUsage: {}", usage_synopsis()),
        _ => eprintln!("make-prefetch: {err}"),
    }
    err.exit_code()
}

fn usage_synopsis() -> &'static str {
    cli::USAGE.lines().next().unwrap_or_default()
}

pub fn print_operator_json<W: Write>(out: &mut W) -> io::Result<()> {
    let refusals: Vec<_> = RefusalCode::ALL
        .iter()
        .map(|code| {
            serde_json::json!({
                "code": code.as_str(),
                "message": code.default_message(),
                "exit_code": code.outcome().exit_code()
            })
        })
        .collect();

    let operator = serde_json::json!({
        "schema_version": "operator.v0",
        "name": "make-prefetch",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Creates a prefetch statement (name, size, SHA-1 and SHA-256) for a single file",
        "invocation": {
            "binary": "make-prefetch",
            "output_mode": "text"
        },
        "arguments": [
            {
                "name": "file",
                "type": "file_path",
                "required": true,
                "position": 0,
                "description": "File to hash"
            }
        ],
        "options": [
            {
                "name": "algorithm",
                "flag": "--algorithm",
                "short": "-a",
                "type": "string",
                "choices": Algorithm::NAMES,
                "default": Algorithm::default().as_str(),
                "description": "Hash algorithm to use"
            },
            {
                "name": "output",
                "flag": "--output",
                "short": "-o",
                "type": "string",
                "choices": OutputStyle::NAMES,
                "default": OutputStyle::default().as_str(),
                "description": "Output format"
            }
        ],
        "exit_codes": {
            "0": { "meaning": "SUCCESS" },
            "1": { "meaning": "IO_FAILURE" },
            "2": { "meaning": "REFUSAL" }
        },
        "refusals": refusals
    });

    let text = serde_json::to_string_pretty(&operator).map_err(io::Error::other)?;
    writeln!(out, "{text}")
}
