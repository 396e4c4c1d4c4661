mod gap;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "alnstats";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for computing statistics over multiple sequence alignments.")
        .subcommand(gap::cli::create_gap_cli())
}

fn main() -> Result<()> {
    let matches = build_parser().get_matches();

    match matches.subcommand() {
        //
        // GAP-RUN STATISTICS
        //
        Some((gap::cli::GAP_CMD, matches)) => match matches.subcommand() {
            Some((gap::cli::GAP_HISTOGRAM, matches)) => {
                gap::handlers::run_histogram(matches)?;
            }
            Some((gap::cli::GAP_FRAMESHIFT, matches)) => {
                gap::handlers::run_frameshift(matches)?;
            }
            Some((gap::cli::GAP_PHASE, matches)) => {
                gap::handlers::run_phase(matches)?;
            }
            _ => {
                gap::cli::create_gap_cli().print_help()?;
            }
        },
        None => {
            build_parser().print_help()?;
        }
        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
