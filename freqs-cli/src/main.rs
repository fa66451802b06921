//! `freqs` — count word frequencies in a UTF-8 text file
//!
//! Reads the input file, counts case-insensitive word occurrences over
//! the Latin and Cyrillic alphabets, and writes the words to the output
//! file sorted by descending frequency with lexicographic tie-breaks.

use clap::error::ErrorKind;
use clap::Parser;
use freqs_cli::exit_code;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "freqs",
    version,
    about = "Count word frequencies in a UTF-8 text file"
)]
struct Cli {
    /// Input text file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file for the ranked word list
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are not usage errors
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_code::SUCCESS,
                _ => exit_code::INVALID_ARGS,
            };
            let _ = err.print();
            return ExitCode::from(code as u8);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match freqs_cli::run(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("freqs: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
