// src/bin/cli.rs
use tourdex::cli;

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Failed to install error handler: {e}");
    }
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
