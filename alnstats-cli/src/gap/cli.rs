use clap::{arg, Arg, ArgAction, Command};

pub const GAP_CMD: &str = "gap";
pub const GAP_HISTOGRAM: &str = "histogram";
pub const GAP_FRAMESHIFT: &str = "frameshift";
pub const GAP_PHASE: &str = "phase";

pub fn create_gap_cli() -> Command {
    Command::new(GAP_CMD)
        .about("Gap-run statistics for multiple sequence alignments.")
        .subcommand(create_report_cli(
            GAP_HISTOGRAM,
            "Histogram of gap-run lengths across the input alignments.",
        ))
        .subcommand(create_report_cli(
            GAP_FRAMESHIFT,
            "Count gap runs whose length is not a multiple of 3.",
        ))
        .subcommand(create_report_cli(
            GAP_PHASE,
            "Distribution of the reading-frame phase at which gap runs start.",
        ))
}

fn create_report_cli(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("fasta")
                .value_name("FASTA")
                .num_args(0..)
                .help("FASTA alignment file(s), plain or gzip'd"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output report path (default: stdout)"),
        )
        .arg(
            arg!(--json)
                .required(false)
                .action(ArgAction::SetTrue)
                .help("Emit the report as JSON instead of text"),
        )
}

/// Print the help of one `gap` subcommand.
///
/// Used as the usage prompt when a report subcommand is invoked without
/// input files.
pub fn print_report_help(name: &str) -> std::io::Result<()> {
    let mut cmd = create_gap_cli();
    if let Some(subcommand) = cmd.find_subcommand_mut(name) {
        subcommand.print_help()?;
    }

    Ok(())
}
