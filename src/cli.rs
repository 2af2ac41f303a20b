use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// ulstools - Finnish identity codes and desktop script helpers
#[derive(Parser, Debug)]
#[command(name = "ulstools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate Finnish personal identity codes (hetu)
    Hetu {
        #[command(subcommand)]
        command: HetuCommands,
    },

    /// Check whether another instance of a console script is running
    Running {
        /// Console script name; matches `<prefix>-script.py`
        script_prefix: String,

        /// Substring expected in the interpreter path
        #[arg(long)]
        interpreter: Option<String>,

        /// Matching processes needed to count as running
        #[arg(long)]
        threshold: Option<usize>,
    },

    /// Reserve a unique file name in the temp directory
    Tempname {
        /// File name prefix
        #[arg(long)]
        prefix: Option<String>,

        /// File name suffix, e.g. `.pdf`
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum HetuCommands {
    /// Check one or more codes (exit 1 if any is invalid)
    Check {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Print the age in whole years
    Age {
        code: String,

        /// Reference date instead of today
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
        on: Option<NaiveDate>,
    },

    /// Print the fields encoded in a code
    Info {
        code: String,

        /// Reference date for the age instead of today
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
        on: Option<NaiveDate>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
