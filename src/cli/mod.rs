// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shufsearch command-line interface.
//!
//! Four subcommands: `shuffle` shows the layout of a set of integers, `trace`
//! walks one search through it probe by probe, `map` prints the position to
//! rank table for a length, and `verify` runs the randomized differential
//! check over every length up to a bound.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shufsearch",
    about = "Median-first search layouts: inspect, trace and verify",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the values and print their shuffled layout
    Shuffle {
        /// Values to lay out (duplicates are kept)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Print JSON instead of a diagram
        #[arg(long)]
        json: bool,
    },

    /// Shuffle the values and trace the probes of one search
    Trace {
        /// Key to look for
        #[arg(allow_negative_numbers = true)]
        key: i64,

        /// Values to search
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the shuffled-position to sorted-rank table for a length
    Map {
        /// Number of elements
        #[arg(short, long)]
        count: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check search, rank translation and round trips on random data
    Verify {
        /// Largest length to check (every length from 0 up is checked)
        #[arg(long, default_value = "1024")]
        max_count: usize,

        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Also check remove and insert at every length
        #[arg(long)]
        mutations: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
