//! Command-line parsing and execution for the `tour` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use tour_foundation::{Error, Result};
use tour_lessons::{Checkpoint, Lesson, RunThrough, Tour, TourConfig, TourOutcome};

use crate::editor::{RustylineEditor, StepCheckpoint};
use crate::logging::LogLevel;
use crate::serialize;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
    /// Explicit subscriber level from `--log-level`.
    pub log_level: Option<LogLevel>,
    /// Settings handed to the tour itself.
    pub tour: TourConfig,
}

/// Parses command-line arguments. `args[0]` is the program name.
///
/// # Errors
///
/// Returns an error for unknown options, stray positional arguments, and
/// options missing their value.
pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.tour.trace = true,
            "--step" => config.tour.step = true,
            "--log-level" => {
                config.log_level = Some(option_value(args, &mut i)?.parse()?);
            }
            "--stop-after" => {
                config.tour.stop_after = Some(option_value(args, &mut i)?.parse::<Lesson>()?);
            }
            "--snapshot" => {
                config.tour.snapshot = Some(PathBuf::from(option_value(args, &mut i)?));
            }
            arg if arg.starts_with('-') => {
                return Err(Error::invalid_argument(format!("unknown option: {arg}")));
            }
            arg => {
                return Err(Error::invalid_argument(format!(
                    "unexpected argument: {arg}"
                )));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn option_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let option = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid_argument(format!("{option} requires a value")))
}

/// Runs the tour described by `config`, writing lesson output to `out`.
///
/// Uses a rustyline-backed checkpoint when stepping is enabled and writes
/// the types snapshot when a path is configured.
///
/// # Errors
///
/// Returns an error if output, the line editor, or the snapshot fails.
pub fn run_tour<W: Write + ?Sized>(config: &TourConfig, out: &mut W) -> Result<TourOutcome> {
    if config.step {
        let mut checkpoint = StepCheckpoint::new(RustylineEditor::new()?);
        run_with(config, out, &mut checkpoint)
    } else {
        run_with(config, out, &mut RunThrough)
    }
}

/// Runs the tour with a caller-supplied checkpoint, then writes the
/// snapshot if one was requested.
///
/// # Errors
///
/// Returns an error if output, the checkpoint, or the snapshot fails.
pub fn run_with<W: Write + ?Sized>(
    config: &TourConfig,
    out: &mut W,
    checkpoint: &mut dyn Checkpoint,
) -> Result<TourOutcome> {
    let outcome = Tour::new(config.clone()).run(out, checkpoint)?;

    if let Some(path) = &config.snapshot {
        match &outcome.types {
            Some(report) => serialize::save_to_file(report, path)?,
            None => tracing::warn!(
                path = %path.display(),
                "types lesson did not run; no snapshot written"
            ),
        }
    }

    Ok(outcome)
}

/// Carries out a parsed command line: prints help or the version, or runs
/// the tour, writing to `out`.
///
/// # Errors
///
/// Returns an error if output, the line editor, or the snapshot fails.
pub fn execute<W: Write + ?Sized>(config: &CliConfig, out: &mut W) -> Result<()> {
    if config.show_help {
        return write_help(out);
    }

    if config.show_version {
        writeln!(out, "tour {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let outcome = run_tour(&config.tour, out)?;
    tracing::info!(
        completed = outcome.completed.len(),
        stopped_early = outcome.stopped_early,
        "tour finished"
    );
    Ok(())
}

/// Maps the result of [`execute`] to the process exit code, reporting a
/// failure and its context on `stderr`.
pub fn exit_code<W: Write + ?Sized>(result: &Result<()>, stderr: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing else to report to if stderr itself is gone.
            let _ = writeln!(stderr, "\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = &e.context {
                let _ = writeln!(stderr, "{context}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Writes usage information.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_help<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\x1b[1mSyntax Tour\x1b[0m - A guided walk through core language syntax

\x1b[1mUSAGE:\x1b[0m
    tour [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    --step                  Pause before each lesson
    --stop-after LESSON     End the tour after LESSON
    --snapshot PATH         Save the types lesson state as MessagePack

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                 Log lesson progress to stderr
    --log-level LEVEL       error, warn, info, debug, or trace

\x1b[1mLESSONS:\x1b[0m
    hello, beyond-hello, types, flow-control

\x1b[1mEXAMPLES:\x1b[0m
    tour                            Run the whole tour
    tour --step                     Step through one lesson at a time
    tour --stop-after types         Skip the control-flow handoff
    tour --snapshot types.msgpack   Save what the types lesson declared"
    )?;
    Ok(())
}
