use clap::Parser;

use line_tally::cli::Cli;
use line_tally::commands::run_tally;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_tally(&cli));
}
