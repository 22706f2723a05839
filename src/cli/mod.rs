//! CLI module - Command-line interface for Cookbook
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Cookbook - a small recipe catalog served over HTTP
#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default when no command is given)
    #[command(alias = "web", alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Load and validate the configuration, then print a summary
    CheckConfig,

    /// List stored recipes, optionally only one category
    #[command(alias = "ls")]
    List {
        /// Exact category to filter on
        #[arg(long)]
        category: Option<String>,
    },
}

pub use commands::*;
