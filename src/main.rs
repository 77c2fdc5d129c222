mod cli;
mod core;
mod models;
mod options;
mod progress;
mod runlog;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = cli::run(cli) {
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}
