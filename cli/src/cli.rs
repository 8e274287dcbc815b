use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vitals")]
#[command(
    author,
    version,
    about = "Patient vitals triage tool that flags high-risk patients"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch patient vitals, classify risk and submit the triage report
    Run {
        /// Path to the configuration file; environment variables are used
        /// when the file does not exist
        #[clap(short, long, default_value = "vitals.toml")]
        config: String,

        /// Override the number of pages to fetch
        #[clap(long)]
        pages: Option<u32>,

        /// Override the retry budget for each request
        #[clap(long)]
        max_retries: Option<u32>,

        /// Classify without submitting the report
        #[clap(long, default_value_t = false)]
        dry_run: bool,

        /// Create a default configuration file if one does not exist
        #[clap(long, default_value_t = false)]
        init: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Validate the configuration without issuing any requests
    CheckConfig {
        /// Path to the configuration file
        #[clap(short, long, default_value = "vitals.toml")]
        config: String,
    },
}
