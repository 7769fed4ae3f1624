//! Command-line argument parsing for MedAssyst
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};

/// MedAssyst - terminal client for the symptom-consultation service
#[derive(Parser, Debug)]
#[command(name = "medassyst")]
#[command(version = "0.3.0")]
#[command(about = "Symptom assistant, consultation history and doctor directory", long_about = None)]
pub struct Args {
    /// Override the backend base URL for this invocation
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Verbosity level: default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except results)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request a diagnosis for a symptom description
    Consult {
        /// Free-text symptom description
        symptoms: String,

        /// Bypass retries and server demo shortcuts, one direct attempt
        #[arg(long)]
        direct: bool,
    },

    /// Interactive symptom-assistant session
    Chat,

    /// Show consultation history
    History,

    /// Delete one consultation by id
    Delete {
        /// Consultation id as shown by `history`
        id: String,
    },

    /// Delete the entire consultation history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List doctors from the directory
    Doctors {
        /// Filter by specialization code (e.g. cardiologist)
        #[arg(short, long)]
        specialization: Option<String>,
    },

    /// Show the consultation analytics dashboard
    Analytics,

    /// Run connectivity and environment diagnostics
    Status,

    /// Set the theme preference (light or dark)
    Theme {
        /// Theme mode
        mode: String,
    },

    /// Sign in with a demo account
    Login {
        /// Account email
        email: String,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Display the effective configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show request-level detail
    pub fn show_requests(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> Args {
        Args {
            api_url: None,
            verbose,
            quiet,
            command: Commands::History,
        }
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(args_with(0, true).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        assert_eq!(args_with(0, false).verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        assert_eq!(args_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(args_with(2, false).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());

        assert!(!Verbosity::Normal.show_requests());
        assert!(Verbosity::Verbose.show_requests());
    }

    #[test]
    fn test_parse_consult() {
        let args = Args::try_parse_from(["medassyst", "consult", "болит голова", "--direct"])
            .unwrap();
        match args.command {
            Commands::Consult { symptoms, direct } => {
                assert_eq!(symptoms, "болит голова");
                assert!(direct);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_doctors_filter() {
        let args =
            Args::try_parse_from(["medassyst", "doctors", "--specialization", "neurologist"])
                .unwrap();
        match args.command {
            Commands::Doctors { specialization } => {
                assert_eq!(specialization.as_deref(), Some("neurologist"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["medassyst"]).is_err());
    }
}
