//! Command-line entry point.
//!
//! Reads one response from a file or stdin, styles it line by line and writes
//! it to stdout in the configured format.
//!
//! ```text
//! $ game-client --dump | linedisplay --ascii --format html
//! <p class="line ascii-line"> /\_/\ </p>
//! <p class="line">You are in Room 1</p>
//! ...
//! ```
//!
//! Exits with status 1 and a message on stderr when the configuration or
//! input cannot be read or output cannot be written.

use clap::Parser;
use linedisplay::cli::{read_input, Cli};
use linedisplay::{initialize, observability, ui, Result};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "linedisplay failed");
            eprintln!("linedisplay: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    observability::init_tracing(&config);

    let _span = tracing::info_span!("linedisplay", format = %config.format).entered();

    let mut state = initialize(&config);
    let response = read_input(cli.input_path().as_deref())?;
    state.set_response(response);

    let vm = state.compute_viewmodel();
    let mut stdout = io::stdout().lock();
    ui::render(&vm, &state.theme, config.format, &mut stdout)
}
