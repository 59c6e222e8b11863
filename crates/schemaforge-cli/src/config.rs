//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command handlers via [`DatabaseConfig::apply`]
//!    and [`PathsConfig::layout`])
//! 2. Environment variables (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`,
//!    `DB_NAME`, `DB_CONNECT_TIMEOUT`)
//! 3. Config file (`--config`, else `./schemaforge.toml`, else the per-user
//!    config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use schemaforge_adapters::ConnectionSettings;
use schemaforge_core::domain::OutputLayout;

use crate::cli::{DatabaseArgs, LayoutArgs};

/// Name of the project-local config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "schemaforge.toml";

/// Environment variable -> config key.
const ENV_OVERRIDES: [(&str, &str); 6] = [
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DB_CONNECT_TIMEOUT", "database.connect_timeout_secs"),
];

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog connection.
    pub database: DatabaseConfig,
    /// Where generated files go and which files registration edits.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub routes_dir: PathBuf,
    pub models_dir: PathBuf,
    pub controllers_dir: PathBuf,
    pub app_path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: "root".into(),
            password: String::new(),
            name: "api_mvc".into(),
            connect_timeout_secs: 10,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    /// Layer CLI overrides on top and convert to adapter settings.
    pub fn apply(&self, args: &DatabaseArgs) -> ConnectionSettings {
        ConnectionSettings {
            host: args.host.clone().unwrap_or_else(|| self.host.clone()),
            port: args.port.unwrap_or(self.port),
            user: args.user.clone().unwrap_or_else(|| self.user.clone()),
            password: args
                .password
                .clone()
                .unwrap_or_else(|| self.password.clone()),
            database: args.database.clone().unwrap_or_else(|| self.name.clone()),
            connect_timeout: Duration::from_secs(
                args.connect_timeout.unwrap_or(self.connect_timeout_secs),
            ),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            routes_dir: PathBuf::from("./routes"),
            models_dir: PathBuf::from("./models"),
            controllers_dir: PathBuf::from("./controllers"),
            app_path: PathBuf::from("./app.js"),
        }
    }
}

impl PathsConfig {
    /// Output directories with CLI overrides applied.
    pub fn layout(&self, args: &LayoutArgs) -> OutputLayout {
        OutputLayout {
            routes_dir: args
                .routes_dir
                .clone()
                .unwrap_or_else(|| self.routes_dir.clone()),
            models_dir: args
                .models_dir
                .clone()
                .unwrap_or_else(|| self.models_dir.clone()),
            controllers_dir: args
                .controllers_dir
                .clone()
                .unwrap_or_else(|| self.controllers_dir.clone()),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist. Otherwise the first of `./schemaforge.toml` and
    /// [`AppConfig::config_path`] that exists is read.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with an injectable environment lookup.
    pub fn load_with<F>(config_file: Option<&PathBuf>, env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("database.host", defaults.database.host)?
            .set_default("database.port", i64::from(defaults.database.port))?
            .set_default("database.user", defaults.database.user)?
            .set_default("database.password", defaults.database.password)?
            .set_default("database.name", defaults.database.name)?
            .set_default(
                "database.connect_timeout_secs",
                defaults.database.connect_timeout_secs as i64,
            )?
            .set_default("paths.routes_dir", path_value(&defaults.paths.routes_dir))?
            .set_default("paths.models_dir", path_value(&defaults.paths.models_dir))?
            .set_default(
                "paths.controllers_dir",
                path_value(&defaults.paths.controllers_dir),
            )?
            .set_default("paths.app_path", path_value(&defaults.paths.app_path))?
            .set_default("output.no_color", false)?;

        match config_file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("config file {} does not exist", path.display());
                }
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(path) = Self::discover() {
                    tracing::debug!(path = %path.display(), "Using config file");
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                }
            }
        }

        for (var, key) in ENV_OVERRIDES {
            // Empty values fall through to the next layer.
            let value = env(var).filter(|v| !v.is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `./schemaforge.toml`.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "schemaforge", "schemaforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    fn discover() -> Option<PathBuf> {
        [PathBuf::from(LOCAL_CONFIG_FILE), Self::config_path()]
            .into_iter()
            .find(|p| p.is_file())
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("schemaforge.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.database.host, "localhost");
        assert_eq!(cfg.database.port, 3306);
        assert_eq!(cfg.database.user, "root");
        assert_eq!(cfg.database.password, "");
        assert_eq!(cfg.database.name, "api_mvc");
        assert_eq!(cfg.paths.app_path, PathBuf::from("./app.js"));
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[database]\nhost = \"db.internal\"\nname = \"shop\"\n\n[paths]\nroutes_dir = \"src/routes\"\n",
        );

        let cfg = AppConfig::load_with(Some(&path), no_env).unwrap();
        assert_eq!(cfg.database.host, "db.internal");
        assert_eq!(cfg.database.name, "shop");
        assert_eq!(cfg.database.port, 3306);
        assert_eq!(cfg.paths.routes_dir, PathBuf::from("src/routes"));
        assert_eq!(cfg.paths.models_dir, PathBuf::from("./models"));
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[database]\nhost = \"db.internal\"\nport = 3307\n");

        let cfg = AppConfig::load_with(
            Some(&path),
            env_from(&[("DB_HOST", "10.0.0.5"), ("DB_PORT", "3310"), ("DB_NAME", "")]),
        )
        .unwrap();
        assert_eq!(cfg.database.host, "10.0.0.5");
        assert_eq!(cfg.database.port, 3310);
        // Empty env value does not clobber the default.
        assert_eq!(cfg.database.name, "api_mvc");
    }

    #[test]
    fn cli_overrides_everything() {
        let cfg = AppConfig::load_with(None, env_from(&[("DB_USER", "svc")])).unwrap();
        let args = DatabaseArgs {
            user: Some("admin".into()),
            database: Some("inventory".into()),
            ..DatabaseArgs::default()
        };

        let settings = cfg.database.apply(&args);
        assert_eq!(settings.user, "admin");
        assert_eq!(settings.database, "inventory");
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/schemaforge.toml");
        assert!(AppConfig::load_with(Some(&missing), no_env).is_err());
    }

    #[test]
    fn malformed_port_is_an_error() {
        let result = AppConfig::load_with(None, env_from(&[("DB_PORT", "not-a-port")]));
        assert!(result.is_err());
    }

    #[test]
    fn layout_prefers_cli_dirs() {
        let paths = PathsConfig::default();
        let layout = paths.layout(&LayoutArgs {
            controllers_dir: Some(PathBuf::from("src/controllers")),
            ..LayoutArgs::default()
        });
        assert_eq!(layout.routes_dir, PathBuf::from("./routes"));
        assert_eq!(layout.controllers_dir, PathBuf::from("src/controllers"));
    }

    #[test]
    fn debug_hides_password() {
        let db = DatabaseConfig {
            password: "s3cret".into(),
            ..DatabaseConfig::default()
        };
        assert!(!format!("{db:?}").contains("s3cret"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
