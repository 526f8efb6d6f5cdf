//! depview - Cargo.toml dependency viewer
//!
//! Reads a `key = value` config file, locates the manifest it points at
//! (local directory or URL) and prints the `[dependencies]` table.

use clap::Parser;
use depview::cli::{CliArgs, Command, USAGE};
use depview::config::{write_default_config, DEFAULT_CONFIG_PATH};
use depview::runner::Runner;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depview v{}", env!("CARGO_PKG_VERSION"));
    }

    if args.init {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        init_config(&path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let runner = Runner::new(args.output_config())?;

    match &args.config {
        Some(path) => Ok(run_once(&runner, path).await),
        None => {
            run_interactive(&runner).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Write the default config unless the file already exists
fn init_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        eprintln!("{} already exists", path.display());
        return Ok(());
    }
    write_default_config(path)?;
    eprintln!("Created {}", path.display());
    Ok(())
}

/// Run a single config file and map the result to an exit code
async fn run_once(runner: &Runner, path: &Path) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let result = runner.run(path, &mut stdout).await;

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read commands from stdin until `exit` or end of input
///
/// A failed run is reported and the loop keeps going.
async fn run_interactive(runner: &Runner) -> anyhow::Result<()> {
    eprintln!("Enter `config [path]` to list dependencies, `exit` to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        eprint!("> ");
        io::stderr().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match Command::parse_line(&line) {
            Command::Config(path) => {
                let _ = run_once(runner, &path).await;
            }
            Command::Exit => break,
            Command::Empty => {}
            Command::Invalid(input) => {
                eprintln!("Unknown command '{}' ({})", input, USAGE);
            }
        }
    }

    Ok(())
}
