//! Syntax tour CLI entry point.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use tour_runtime::cli::{self, CliConfig};
use tour_runtime::logging;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    cli::exit_code(&run(&args), &mut io::stderr())
}

fn run(args: &[String]) -> tour_foundation::Result<()> {
    let config: CliConfig = cli::parse_args(args)?;

    if !config.show_help && !config.show_version {
        logging::init(config.log_level, config.tour.trace)?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    cli::execute(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
