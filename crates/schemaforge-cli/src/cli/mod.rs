//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "schemaforge",
    bin_name = "schemaforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Express REST resources from MySQL tables",
    long_about = "schemaforge reads a table definition from MySQL and generates \
                  the route, model and controller modules for an Express API, \
                  then wires the new route into the application.",
    after_help = "EXAMPLES:\n\
        \x20 schemaforge generate route product\n\
        \x20 schemaforge generate route order --database shop --dry-run\n\
        \x20 schemaforge register route product\n\
        \x20 schemaforge register route product --manifest routes.json",
    disable_version_flag   = true,
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate files for a resource.
    #[command(
        visible_alias = "g",
        about = "Generate files for a resource",
        subcommand
    )]
    Generate(GenerateCommands),

    /// Register a generated resource with the application.
    #[command(
        about = "Register a resource with the application",
        subcommand
    )]
    Register(RegisterCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum GenerateCommands {
    /// Generate route, model and controller modules from the `<name>s` table.
    #[command(after_help = "EXAMPLES:\n\
        \x20 schemaforge generate route product\n\
        \x20 schemaforge generate route product --host db.local --user api --database shop\n\
        \x20 schemaforge generate route product --routes-dir src/routes --dry-run")]
    Route(GenerateRouteArgs),
}

/// Arguments for `schemaforge generate route`.
#[derive(Debug, Args)]
pub struct GenerateRouteArgs {
    /// Singular resource name; the table read is `<name>s`.
    #[arg(value_name = "NAME", help = "Resource name (singular)")]
    pub name: String,

    /// Render and report, but write nothing.
    #[arg(long = "dry-run", help = "Show what would be created without writing")]
    pub dry_run: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Output directories for generated modules.
#[derive(Debug, Clone, Default, Args)]
pub struct LayoutArgs {
    #[arg(long = "routes-dir", value_name = "DIR", help = "Directory for route modules")]
    pub routes_dir: Option<PathBuf>,

    #[arg(long = "models-dir", value_name = "DIR", help = "Directory for model modules")]
    pub models_dir: Option<PathBuf>,

    #[arg(
        long = "controllers-dir",
        value_name = "DIR",
        help = "Directory for controller modules"
    )]
    pub controllers_dir: Option<PathBuf>,
}

/// Catalog connection overrides. Each wins over env and config file.
#[derive(Debug, Clone, Default, Args)]
pub struct DatabaseArgs {
    #[arg(long = "host", value_name = "HOST", help = "Database host")]
    pub host: Option<String>,

    #[arg(long = "port", value_name = "PORT", help = "Database port")]
    pub port: Option<u16>,

    #[arg(long = "user", value_name = "USER", help = "Database user")]
    pub user: Option<String>,

    #[arg(long = "password", value_name = "PASSWORD", help = "Database password")]
    pub password: Option<String>,

    #[arg(long = "database", value_name = "NAME", help = "Database (schema) name")]
    pub database: Option<String>,

    #[arg(
        long = "connect-timeout",
        value_name = "SECONDS",
        help = "Seconds to wait for a connection"
    )]
    pub connect_timeout: Option<u64>,
}

// ── register ──────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum RegisterCommands {
    /// Add the route import and mount for a resource.
    #[command(after_help = "EXAMPLES:\n\
        \x20 schemaforge register route product\n\
        \x20 schemaforge register route product --app-path src/app.js\n\
        \x20 schemaforge register route product --manifest routes.json --routes-dir routes")]
    Route(RegisterRouteArgs),
}

/// Arguments for `schemaforge register route`.
#[derive(Debug, Args)]
pub struct RegisterRouteArgs {
    #[arg(value_name = "NAME", help = "Resource name (singular)")]
    pub name: String,

    /// Application file edited in place.
    #[arg(long = "app-path", value_name = "FILE", help = "Path to app.js")]
    pub app_path: Option<PathBuf>,

    /// Record the route in a JSON manifest instead of editing app.js.
    #[arg(
        long = "manifest",
        value_name = "FILE",
        conflicts_with = "app_path",
        help = "Register in a JSON route manifest"
    )]
    pub manifest: Option<PathBuf>,

    /// Where the manifest loader (`index.js`) is written.
    #[arg(
        long = "routes-dir",
        value_name = "DIR",
        help = "Directory for the manifest loader"
    )]
    pub routes_dir: Option<PathBuf>,
}
