//! Command line entry point

pub mod serve;

use clap::{Parser, Subcommand};

/// Enrollment API - tracks learner enrollments in courses
#[derive(Parser)]
#[command(name = "enrollment-api")]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["enrollment-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["enrollment-api"]).is_err());
    }
}
