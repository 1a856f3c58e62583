use anyhow::Context;
use clap::Parser;
use rangeguess::error::InputError;
use rangeguess::input::{TokenReader, parse_target, prompt_for_target};
use rangeguess::logging;
use rangeguess::search::{SearchConfig, run_range_search};
use std::io;
use std::process::ExitCode;
use tracing::warn;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "rangeguess")]
#[command(about = "rangeguess - find a number by scanning [0, 999999999999999] on parallel threads")]
#[command(version)]
struct Args {
    /// Number to search for (prompted on the console when omitted)
    #[arg(long, allow_hyphen_values = true)]
    target: Option<String>,
    /// Log filter for stderr logging (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

// --- Target Input ---

/// Prompt on the console until an in-range number is entered.
///
/// Returns `None` when the user typed something that is not a number; the
/// run ends there without searching.
fn read_target_from_console(max: u64) -> anyhow::Result<Option<u64>> {
    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());
    let mut stdout = io::stdout();

    match prompt_for_target(&mut reader, &mut stdout, max) {
        Ok(target) => Ok(Some(target)),
        Err(InputError::Malformed(token)) => {
            warn!(%token, "malformed input");
            println!("invalid input! Please start the program again.");
            Ok(None)
        }
        Err(e) => Err(e).context("failed to read a number from the console"),
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = SearchConfig::default();

    let target = match &args.target {
        Some(token) => parse_target(token, config.max).context("invalid --target")?,
        None => match read_target_from_console(config.max)? {
            Some(target) => target,
            None => return Ok(()),
        },
    };

    println!(
        "\nCounting iterations and time to find {} using {} threads...",
        target, config.workers
    );

    let report = run_range_search(target, &config).context("range search failed")?;
    print!("{}", report);

    Ok(())
}

// --- Main Function ---
fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(&args.log_level) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
