//! Flags shared by `generate` and `register`.
//!
//! `-v` belongs to `--version`, so verbosity has no short form.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Repeat for more detail: INFO, then DEBUG (SQL and file operations), then TRACE.
    #[arg(
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (repeatable)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// `NO_COLOR` set to anything but a false literal (`0`, `false`, `no`,
    /// `off`) also disables colour.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Replaces `./schemaforge.toml` and the per-user config file.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Console style for progress messages"
    )]
    pub output_format: OutputFormat,
}

/// Console style. `auto` picks `human` on a terminal and `plain` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured symbols.
    Human,
    /// No escape codes, for pipes and log files.
    Plain,
}
