//! Custom cargo commands for shufsearch.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short time
//!   cargo xtask kani      - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["round_trip", "search_rank", "mutation", "index_translation"];

/// Functions kept in sync between the crate and the Kani proofs crate.
const MIRRORED: &[(&str, &str)] = &[
    ("src/index.rs", "deshuffle_index"),
    ("src/index.rs", "shuffle_index"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + driver + mirrors)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for SECONDS (default 30)
  kani      Run Kani proofs in kani-proofs/
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("shufsearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Running randomized driver (all lengths to 4096, with mutations)...");
    run_cargo(&[
        "run",
        "--quiet",
        "--release",
        "--",
        "verify",
        "--max-count",
        "4096",
        "--mutations",
    ])?;
    println!("✓ Driver passed\n");

    println!("[4/4] Checking Kani copies match the crate...");
    verify_mirrors()?;
    println!("✓ Mirrored functions aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a bounded time (needs cargo-fuzz and nightly)
fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s
            .parse()
            .with_context(|| format!("Invalid fuzz duration {:?}", s))?,
        None => 30,
    };
    let max_time = format!("-max_total_time={}", seconds);
    let fuzz_dir = project_root()?.join("fuzz");

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, seconds);
        run_in(
            &fuzz_dir,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    let installed = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    if !installed {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }
    run_in(&proofs_dir, "cargo", &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;
    run_in(&root, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

/// The Kani crate carries its own copies of the position arithmetic. They
/// must match the crate's, apart from the debug contract calls.
fn verify_mirrors() -> Result<()> {
    let root = project_root()?;
    let kani_src = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for (file, name) in MIRRORED {
        let crate_src = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;

        let ours = extract_fn_body(&crate_src, name)
            .with_context(|| format!("{} not found in {}", name, file))?;
        let theirs = extract_fn_body(&kani_src, name)
            .with_context(|| format!("{} not found in kani-proofs", name))?;

        if normalize(&ours) != normalize(&theirs) {
            bail!("{} in {} differs from the Kani copy", name, file);
        }
    }

    Ok(())
}

/// Text of `pub fn name(...) { ... }` up to its matching closing brace.
fn extract_fn_body(source: &str, name: &str) -> Option<String> {
    let start = source.find(&format!("pub fn {}(", name))?;
    let open = start + source[start..].find('{')?;

    let mut depth = 0usize;
    for (offset, c) in source[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(source[open..=open + offset].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Drop contract calls, comments and whitespace; unqualify `Ordering`.
fn normalize(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("check_") && !line.starts_with("//"))
        .collect::<String>()
        .replace("std::cmp::Ordering::", "Ordering::")
        .split_whitespace()
        .collect()
}
