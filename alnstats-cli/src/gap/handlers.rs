use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use alnstats_core::models::Alignment;
use alnstats_gaps::{GapLengthHistogram, GapPhases, GapRunStatistics};

use super::cli;

#[derive(Serialize)]
struct HistogramOutput<'a> {
    counts: &'a [u64],
    total_runs: u64,
}

#[derive(Serialize)]
struct FrameshiftOutput {
    frameshifts: u64,
    total_gaps: u64,
    ratio: f64,
}

#[derive(Serialize)]
struct PhaseOutput {
    counts: [u64; 3],
    fractions: [f64; 3],
}

pub fn run_histogram(matches: &ArgMatches) -> Result<()> {
    let files = input_files(matches);
    if files.is_empty() {
        cli::print_report_help(cli::GAP_HISTOGRAM)?;
        return Ok(());
    }

    let histogram = fold_histogram(&files)?;

    let mut out = get_writer(matches)?;
    if matches.get_flag("json") {
        write_json(
            &mut out,
            &HistogramOutput {
                counts: histogram.counts(),
                total_runs: histogram.total_runs(),
            },
        )?;
    } else {
        for (length, count) in histogram.iter() {
            writeln!(out, "{}\t{}", length, count)?;
        }
    }

    Ok(())
}

pub fn run_frameshift(matches: &ArgMatches) -> Result<()> {
    let files = input_files(matches);
    if files.is_empty() {
        cli::print_report_help(cli::GAP_FRAMESHIFT)?;
        return Ok(());
    }

    let histogram = fold_histogram(&files)?;
    let summary = histogram
        .frameshift_summary()
        .context("No gap runs found in the input alignments")?;

    let mut out = get_writer(matches)?;
    if matches.get_flag("json") {
        write_json(
            &mut out,
            &FrameshiftOutput {
                frameshifts: summary.frameshifts,
                total_gaps: summary.total,
                ratio: summary.ratio(),
            },
        )?;
    } else {
        writeln!(
            out,
            "number of gaps with length not multiple of 3: {} ({}/{})",
            summary.frameshifts, summary.frameshifts, summary.total
        )?;
    }

    Ok(())
}

pub fn run_phase(matches: &ArgMatches) -> Result<()> {
    let files = input_files(matches);
    if files.is_empty() {
        cli::print_report_help(cli::GAP_PHASE)?;
        return Ok(());
    }

    let mut phases = GapPhases::new();
    for file in &files {
        let alignment = load_alignment(file)?;
        alignment.fold_gap_phases(&mut phases);
    }

    let fractions = phases
        .fractions()
        .context("No gap runs found in the input alignments")?;

    let mut out = get_writer(matches)?;
    if matches.get_flag("json") {
        write_json(
            &mut out,
            &PhaseOutput {
                counts: phases.counts(),
                fractions,
            },
        )?;
    } else {
        for (phase, fraction) in fractions.iter().enumerate() {
            writeln!(out, "phase {}: {}", phase, fraction)?;
        }
    }

    Ok(())
}

fn input_files(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("fasta")
        .map(|files| files.cloned().collect())
        .unwrap_or_default()
}

// A failed file aborts the whole batch.
fn load_alignment(file: &str) -> Result<Alignment> {
    Alignment::try_from(file).with_context(|| format!("Failed to load alignment: {}", file))
}

fn fold_histogram(files: &[String]) -> Result<GapLengthHistogram> {
    let mut histogram = GapLengthHistogram::new();
    for file in files {
        let alignment = load_alignment(file)?;
        alignment.fold_gap_lengths(&mut histogram);
    }

    Ok(histogram)
}

fn get_writer(matches: &ArgMatches) -> Result<Box<dyn Write>> {
    match matches.get_one::<String>("output") {
        Some(p) => {
            let file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn write_json<T: Serialize>(out: &mut Box<dyn Write>, report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize output to JSON")?;
    out.write_all(json.as_bytes())?;
    writeln!(out)?;

    Ok(())
}
