//! CLI argument parsing for mailmerge

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mm")]
#[command(author, version, about = "Render a text template once per CSV row", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV input file (id,company,city,email,username)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Template file with %%1%%..%%4%% placeholders
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output directory (cleared before writing)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}
