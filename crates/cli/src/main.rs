//! Thin loader/printer around the robustnet core.
//!
//! Reads `N x1 y1 ... xN yN` (whitespace-delimited integers) from a file
//! and prints the minimal squared broadcast radius on stdout. Logs go to
//! stderr so stdout stays a single integer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use robustnet::{min_robust_cost, Site, Vec2};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "robustnet")]
#[command(about = "Minimum squared broadcast radius for a robust site network")]
struct Cmd {
    /// Input file: `N x1 y1 ... xN yN`, whitespace-delimited.
    input: PathBuf,

    /// Log search probes to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let sites = load_sites(&cmd.input)?;
    tracing::debug!(n = sites.len(), "loaded sites");
    let cost = min_robust_cost(&sites)?;
    println!("{cost}");
    Ok(())
}

/// Parse the token format of the input file into sites.
fn load_sites(path: &Path) -> Result<Vec<Site>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut tokens = text.split_ascii_whitespace();
    let n: usize = tokens
        .next()
        .context("missing site count")?
        .parse()
        .context("site count is not an integer")?;
    if n < 1 {
        bail!("network must contain at least one site");
    }
    let mut sites = Vec::with_capacity(n);
    for i in 0..n {
        let x: i32 = tokens
            .next()
            .with_context(|| format!("missing x coordinate for site {i}"))?
            .parse()
            .with_context(|| format!("bad x coordinate for site {i}"))?;
        let y: i32 = tokens
            .next()
            .with_context(|| format!("missing y coordinate for site {i}"))?
            .parse()
            .with_context(|| format!("bad y coordinate for site {i}"))?;
        sites.push(Vec2::new(x, y));
    }
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_token_file_across_lines() {
        let f = write_input("3\n0 0\n1 0\n2 0\n");
        let sites = load_sites(f.path()).unwrap();
        assert_eq!(sites, vec![Vec2::new(0, 0), Vec2::new(1, 0), Vec2::new(2, 0)]);
        assert_eq!(min_robust_cost(&sites).unwrap(), 4);
    }

    #[test]
    fn accepts_negative_coordinates() {
        let f = write_input("2 -3 4 0 0");
        let sites = load_sites(f.path()).unwrap();
        assert_eq!(min_robust_cost(&sites).unwrap(), 25);
    }

    #[test]
    fn rejects_short_and_malformed_input() {
        let f = write_input("3 0 0 1 0");
        assert!(load_sites(f.path())
            .unwrap_err()
            .to_string()
            .contains("missing x coordinate for site 2"));

        let f = write_input("2 0 zero 1 1");
        assert!(load_sites(f.path())
            .unwrap_err()
            .to_string()
            .contains("bad y coordinate for site 0"));

        let f = write_input("0");
        assert!(load_sites(f.path()).is_err());

        let f = write_input("");
        assert!(load_sites(f.path()).is_err());
    }
}
