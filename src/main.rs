// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use shufsearch::verify::{verify_lengths, VerifyOptions};
use shufsearch::{deshuffle_index, probes, search, shuffle, shuffle_index, Sequence, VerificationReport};

mod cli;
use cli::display::{self, BOLD, DIM};
use cli::{Cli, Commands};

#[derive(Serialize)]
struct LayoutOutput {
    sorted: Vec<i64>,
    shuffled: Vec<i64>,
}

#[derive(Serialize)]
struct MapEntry {
    position: usize,
    rank: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Shuffle { values, json } => run_shuffle(values, json),
        Commands::Trace { key, values } => run_trace(key, values),
        Commands::Map { count, json } => run_map(count, json),
        Commands::Verify {
            max_count,
            seed,
            mutations,
            json,
        } => run_verify(max_count, seed, mutations, json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            display::failure(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "serde_json")]
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    println!("{}", text);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json<T: Serialize>(_value: &T) -> Result<()> {
    bail!("JSON output needs the `serde_json` feature")
}

// ═══════════════════════════════════════════════════════════════════════════
// SHUFFLE
// ═══════════════════════════════════════════════════════════════════════════

fn run_shuffle(mut values: Vec<i64>, json: bool) -> Result<bool> {
    values.sort_unstable();
    let sorted = values.clone();
    let len = values.len();

    let mut sequence =
        Sequence::from_sorted(&mut values, len).context("sorted input was rejected")?;
    sequence.shuffle();
    let shuffled = sequence.as_slice().to_vec();

    if json {
        print_json(&LayoutOutput { sorted, shuffled })?;
        return Ok(true);
    }

    display::section_top(&format!("LAYOUT ({} elements)", len));
    display::row(&format!(
        " {}  {}  {}",
        display::themed(display::YELLOW, &[], "median"),
        display::themed(display::BLUE, &[], "lower half"),
        display::themed(display::MAGENTA, &[], "upper half")
    ));
    display::row("");
    for (position, value) in shuffled.iter().enumerate() {
        let rank = deshuffle_index(position, len).unwrap_or(position);
        display::row(&format!(
            " {} {}  {}",
            display::themed(display::GRAY, &[DIM], &format!("[{:>4}]", position)),
            display::layout_cell(&display::pad_left(&value.to_string(), 12), position, len),
            display::themed(display::GRAY, &[], &format!("rank {}", rank))
        ));
    }
    display::section_bot();
    Ok(true)
}

// ═══════════════════════════════════════════════════════════════════════════
// TRACE
// ═══════════════════════════════════════════════════════════════════════════

fn run_trace(key: i64, mut values: Vec<i64>) -> Result<bool> {
    values.sort_unstable();
    shuffle(&mut values);
    let len = values.len();

    display::section_top(&format!("SEARCH {} IN {} ELEMENTS", key, len));
    for (step, probe) in probes(&values, &key).enumerate() {
        display::row(&format!(
            " {:>2}. position {:>6}  value {:>12}  {}",
            step + 1,
            probe.position,
            values[probe.position],
            display::ordering_badge(probe.ordering)
        ));
    }
    display::section_bot();

    match search(&values, &key) {
        Some(position) => {
            let rank = deshuffle_index(position, len)
                .context("search returned a position past the end")?;
            display::success(&format!(
                "found {} at position {} (sorted rank {})",
                key, position, rank
            ));
        }
        None => println!("{} not present", display::themed(display::YELLOW, &[BOLD], "∅")),
    }
    Ok(true)
}

// ═══════════════════════════════════════════════════════════════════════════
// MAP
// ═══════════════════════════════════════════════════════════════════════════

fn run_map(count: usize, json: bool) -> Result<bool> {
    let mut entries = Vec::with_capacity(count);
    for position in 0..count {
        let rank = deshuffle_index(position, count)
            .with_context(|| format!("no rank for position {} of {}", position, count))?;
        if shuffle_index(rank, count) != Some(position) {
            bail!("rank {} does not map back to position {}", rank, position);
        }
        entries.push(MapEntry { position, rank });
    }

    if json {
        print_json(&entries)?;
        return Ok(true);
    }

    display::section_top(&format!("POSITION → RANK ({} elements)", count));
    for entry in &entries {
        display::row(&format!(
            " {}  →  {}",
            display::layout_cell(&display::pad_left(&entry.position.to_string(), 8), entry.position, count),
            display::pad_left(&entry.rank.to_string(), 8)
        ));
    }
    display::section_bot();
    Ok(true)
}

// ═══════════════════════════════════════════════════════════════════════════
// VERIFY
// ═══════════════════════════════════════════════════════════════════════════

fn run_verify(max_count: usize, seed: Option<u64>, mutations: bool, json: bool) -> Result<bool> {
    let seed = match seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the Unix epoch")?
            .as_nanos() as u64,
    };
    let options = VerifyOptions {
        max_count,
        seed,
        mutations,
    };

    let started = Instant::now();
    let report = run_with_progress(&options, json);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        print_json(&report)?;
    } else {
        print_report(&report, elapsed_ms);
    }
    Ok(report.passed())
}

#[cfg(feature = "parallel")]
fn run_with_progress(options: &VerifyOptions, quiet: bool) -> VerificationReport {
    use indicatif::{ProgressBar, ProgressStyle};

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(options.max_count as u64 + 1)
    };
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} lengths") {
        bar.set_style(style.progress_chars("=> "));
    }
    let report = verify_lengths(options, |_| bar.inc(1));
    bar.finish_and_clear();
    report
}

#[cfg(not(feature = "parallel"))]
fn run_with_progress(options: &VerifyOptions, _quiet: bool) -> VerificationReport {
    verify_lengths(options, |_| {})
}

fn print_report(report: &VerificationReport, elapsed_ms: f64) {
    display::section_top("VERIFICATION");
    display::row(&format!(" seed        {}", report.seed));
    display::row(&format!(" lengths     {}", report.lengths_checked));
    display::row(&format!(" lookups     {}", report.lookups));
    display::row(&format!(" mutations   {}", report.mutations));
    display::row(&format!(" time        {}", display::timing_ms(elapsed_ms)));
    display::section_bot();

    if report.passed() {
        display::success("all checks passed");
        return;
    }
    for failure in &report.failures {
        display::failure(&format!(
            "len {} {:?}: {}",
            failure.len, failure.check, failure.detail
        ));
    }
    display::failure(&format!(
        "{} failures (rerun with --seed {})",
        report.failures.len(),
        report.seed
    ));
}
