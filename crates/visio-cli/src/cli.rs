//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use visio_types::{Bound, OutputFormat};

#[derive(Parser)]
#[command(name = "visio-damage")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Estimate the environmental damage of a videoconference meeting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Reference database directory (hardware.toml, software.toml, transport.toml)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the damage of a meeting request
    Estimate {
        /// Path to the request JSON
        request: PathBuf,

        /// Meeting duration in minutes
        #[arg(long)]
        duration: Option<f64>,

        /// Number of software instances
        #[arg(long)]
        instances: Option<u32>,

        /// Bound for hardware damage
        #[arg(long, value_enum)]
        hardware_bound: Option<Bound>,

        /// Bound for software bandwidth
        #[arg(long, value_enum)]
        bandwidth_bound: Option<Bound>,

        /// Bound for network intensity
        #[arg(long, value_enum)]
        network_bound: Option<Bound>,

        /// Write the damage breakdown to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// List hardware records, or show one
    Hardware {
        /// Hardware name (e.g. DESKTOP)
        name: Option<String>,
    },

    /// List software with their bandwidth tables
    Software,

    /// List transportation means
    Transport,

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the reference database directory
        #[arg(long)]
        set_database_dir: Option<PathBuf>,

        /// Go back to the builtin reference database
        #[arg(long)]
        clear_database_dir: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default hardware bound
        #[arg(long, value_enum)]
        set_hardware_bound: Option<Bound>,

        /// Set default bandwidth bound
        #[arg(long, value_enum)]
        set_bandwidth_bound: Option<Bound>,

        /// Set default network bound
        #[arg(long, value_enum)]
        set_network_bound: Option<Bound>,
    },
}
