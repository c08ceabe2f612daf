use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brainscan")]
#[command(about = "Upload MRI scans to the brain tumor classifier and show the result", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the effective request URL and other diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload one image and print the classification result
    Predict {
        /// Path to the image file
        #[arg(required = true)]
        image: PathBuf,

        /// Save the raw JSON reply to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print only the raw reply, without the ranked summary
        #[arg(long)]
        raw: bool,
    },

    /// Check that the remote service is reachable
    Health,

    /// Show or edit the configuration
    Config {
        /// Set the service base URL
        #[arg(long)]
        set_base_url: Option<String>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },
}
