//! Clipper — web-clip commit service CLI.
//!
//! # Usage
//!
//! ```text
//! clipper serve [--config <path>] [--bind <addr>]
//! clipper clip [FILE] [--config <path>]
//! clipper render [FILE]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{clip::ClipArgs, render::RenderArgs, serve::ServeArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "clipper",
    version,
    about = "Commit clipped web passages to a GitHub repository",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the clip gateway in the foreground.
    Serve(ServeArgs),

    /// Commit a single clip payload from a file or stdin.
    Clip(ClipArgs),

    /// Render a clip payload locally without committing anything.
    Render(RenderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => args.run(),
        Commands::Clip(args) => args.run(),
        Commands::Render(args) => args.run(),
    }
}
