//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "purpleline")]
#[command(about = "Edit and render the Purple Line alumni newsletter", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new newsletter workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Render the saved content
    Render {
        /// What to render (domestic, international, web)
        target: String,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap the web fragment in the archive page for previewing
        #[arg(short, long)]
        preview: bool,
    },

    /// Show how many items each section contributes to each email
    Status,

    /// Rebuild the content from an editor form snapshot and save it
    Sync {
        /// JSON snapshot of the editor form
        form: PathBuf,
    },

    /// Back up the current issue to last-purpleline.json and start a blank one
    Reset,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Serve the editor endpoints over HTTP
    Serve {
        /// Address to listen on (default: server.address from config)
        #[arg(short, long)]
        address: Option<String>,
    },
}
