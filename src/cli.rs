//! Command-line inspector for the publication style.
//!
//! Without flags, prints the paper style table as JSON. With
//! `--generate-samples`, writes the two sample plots into the current
//! directory.

use std::io::Write;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{Level, LevelFilter};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::render::generate_sample_plots;
use crate::style::PAPER_STYLE_PARAMS;

const SEPARATOR_WIDTH: usize = 50;

/// Manage and inspect publication-quality plot styles.
#[derive(Debug, Parser)]
#[command(name = "pubstyle-cli", version, about)]
pub struct Cli {
    /// Generate sample plots to visualize the current style.
    #[arg(long)]
    pub generate_samples: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by the `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Runs the selected action, writing user-facing output to `out`.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.generate_samples {
            let written = generate_sample_plots().context("failed to generate sample plots")?;
            log::debug!("{} sample files written", written.len());
            return Ok(());
        }
        write_style_report(out)
    }
}

/// Installs the logger used by the binary.
///
/// Info records print bare, since they are the confirmations users read;
/// other levels carry a level prefix.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            other => writeln!(
                buf,
                "{}: {}",
                other.as_str().to_ascii_lowercase(),
                record.args()
            ),
        })
        .init();
}

/// Serializes the paper style table with four-space indentation.
pub fn paper_style_json() -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    PAPER_STYLE_PARAMS.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the style inspection report.
pub fn write_style_report(out: &mut impl Write) -> anyhow::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(
        out,
        "{}",
        console::style("Current 'paper_style' render configuration:").bold()
    )?;
    writeln!(out, "{}", separator)?;
    writeln!(out, "{}", paper_style_json()?)?;
    writeln!(out, "{}", separator)?;
    writeln!(
        out,
        "These settings are applied when 'apply_paper_style()' is called."
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Use {} to create example plots.",
        console::style("--generate-samples").cyan()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::try_parse_from(["pubstyle-cli"]).unwrap();
        assert!(!cli.generate_samples);
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_parse_generate_samples() {
        let cli = Cli::try_parse_from(["pubstyle-cli", "--generate-samples"]).unwrap();
        assert!(cli.generate_samples);
    }

    #[test]
    fn test_verbose_levels() {
        let cli = Cli::try_parse_from(["pubstyle-cli", "-v"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        let cli = Cli::try_parse_from(["pubstyle-cli", "-vvv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["pubstyle-cli", "extra"]).is_err());
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let json = paper_style_json().unwrap();
        assert!(json.starts_with("{\n    \"font.family\": \"serif\","));
        assert!(json.contains("\"figure.figsize\": [\n        5,\n        4\n    ]"));
        assert!(json.contains("\"savefig.format\": \"png\""));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_json_round_trips_to_table() {
        let parsed: crate::StyleParams = serde_json::from_str(&paper_style_json().unwrap()).unwrap();
        assert_eq!(parsed, *PAPER_STYLE_PARAMS);
    }

    #[test]
    fn test_report_layout() {
        let mut out = Vec::new();
        write_style_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Current 'paper_style' render configuration:"));
        assert_eq!(text.matches(&"=".repeat(SEPARATOR_WIDTH)).count(), 2);
        assert!(text.contains("\"axes.labelsize\": 11"));
        assert!(text.contains("applied when 'apply_paper_style()' is called"));
        assert!(text.contains("--generate-samples"));
    }
}
