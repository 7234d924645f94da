//! Custom cargo commands for mintsearch.
//!
//! Usage:
//!   cargo xtask verify         - Run full verification suite
//!   cargo xtask test           - Run all tests
//!   cargo xtask check          - Quick check (check + test + clippy)
//!   cargo xtask bench          - Run benchmarks
//!   cargo xtask fuzz <target>  - Run a fuzz target for 60 seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify           Run full verification suite (markers + tests + clippy + weight table)
  test             Run all Rust tests
  check            Quick check (cargo check + test + clippy)
  bench            Run benchmarks
  fuzz <target>    Run one fuzz target (highlight_markup, score_calculation)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("mintsearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed (parallel and sequential)\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking README weight table against scoring constants...");
    verify_weights()?;
    println!("✓ Weights aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// `cargo +nightly fuzz run <target>` from the fuzz directory.
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <target>");
    };
    let fuzz_dir = project_root()?.join("fuzz");

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&fuzz_dir)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("No current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 3 {
        bail!(
            "Expected at least 3 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The README documents the field weights; make sure they match the code.
fn verify_weights() -> Result<()> {
    let root = project_root()?;

    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;
    let readme = std::fs::read_to_string(root.join("README.md")).context("Failed to read README.md")?;

    for (constant, field) in [
        ("NAME_WEIGHT", "name"),
        ("DESCRIPTION_WEIGHT", "description"),
        ("MODULE_WEIGHT", "module"),
        ("KEYWORDS_WEIGHT", "keywords"),
    ] {
        let Some(code) = extract_constant(&core_rs, constant) else {
            bail!("{} not found in src/scoring/core.rs", constant);
        };
        let Some(documented) = extract_readme_weight(&readme, field) else {
            bail!("no `{}` row in the README weight table", field);
        };
        if (code - documented).abs() > f64::EPSILON {
            bail!("{}={} but README says {}", constant, code, documented);
        }
    }

    Ok(())
}

fn extract_constant(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const NAME_WEIGHT: f64 = 10.0;"
    let prefix = format!("pub const {}: f64 =", name);
    content.lines().find_map(|line| {
        let value = line.trim().strip_prefix(&prefix)?;
        value.trim().trim_end_matches(';').trim().parse().ok()
    })
}

fn extract_readme_weight(content: &str, field: &str) -> Option<f64> {
    // Look for "| `name` | 10 | ..."
    let cell = format!("`{}`", field);
    content.lines().find_map(|line| {
        let mut cells = line.split('|').map(str::trim).filter(|c| !c.is_empty());
        if cells.next()? != cell {
            return None;
        }
        cells.next()?.parse().ok()
    })
}
