//! Command-line argument definitions for the Diagra CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The subcommand picks what to render, the global options
//! control configuration file selection and logging verbosity.

use clap::{Parser, Subcommand};

/// Directory scanned by `render-all` when none is given.
pub const DEFAULT_INPUT_DIR: &str = "example";
/// Directory SVG files are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Command-line arguments for the Diagra diagram tool
#[derive(Parser, Debug)]
#[command(name = "diagra", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a diagram from a .diag file
    Render {
        /// Path to the input .diag file
        input: String,

        /// Directory the SVG file is written to
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: String,
    },

    /// Render every .diag file in a directory
    RenderAll {
        /// Directory to scan for .diag files
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input: String,

        /// Directory the SVG files are written to
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let args = Args::try_parse_from(["diagra", "render", "flow.diag"]).unwrap();

        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        match args.command {
            Command::Render { input, output } => {
                assert_eq!(input, "flow.diag");
                assert_eq!(output, DEFAULT_OUTPUT_DIR);
            }
            Command::RenderAll { .. } => panic!("Expected render"),
        }
    }

    #[test]
    fn test_render_all_with_global_options() {
        let args = Args::try_parse_from([
            "diagra",
            "render-all",
            "-i",
            "diagrams",
            "--config",
            "diagra.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.config.as_deref(), Some("diagra.toml"));
        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::RenderAll { input, output } => {
                assert_eq!(input, "diagrams");
                assert_eq!(output, DEFAULT_OUTPUT_DIR);
            }
            Command::Render { .. } => panic!("Expected render-all"),
        }
    }

    #[test]
    fn test_render_requires_input() {
        assert!(Args::try_parse_from(["diagra", "render"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["diagra"]).is_err());
    }
}
