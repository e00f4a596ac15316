//! The `blockfill` binary. All of the CLI lives in `cli/`; this file only runs it and
//! turns a failure into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
