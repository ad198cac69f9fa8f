use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "csdlreq",
    about = "Browse the OData CSDL requirement catalog used for model validation",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text or json (defaults to $CSDLREQ_FORMAT, then text)
    #[arg(short, long, global = true)]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List requirements
    List {
        /// Only list requirements from this CSDL section number (3-11)
        #[arg(short, long)]
        section: Option<u8>,

        /// Only list requirements with this status
        /// (enforced, untested, pending, superseded, not_validated)
        #[arg(long)]
        status: Option<String>,

        /// Regular expression matched against keys and messages
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show everything known about one requirement
    Show {
        /// Requirement key, e.g. et_cycle_s
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Render a requirement message with its context value
    Render {
        /// Requirement key, e.g. et_cycle_s
        #[arg(value_name = "KEY")]
        key: String,

        /// Name or path of the offending element
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Also render the citation
        #[arg(long)]
        citation: bool,
    },

    /// Export the catalog as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the catalog for inconsistencies
    Check,
}
