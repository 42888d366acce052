//! CLI for the Usuários API

pub mod serve;

use clap::{Parser, Subcommand};

/// Usuários API - minimal in-memory user registry
#[derive(Parser)]
#[command(name = "usuarios-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
