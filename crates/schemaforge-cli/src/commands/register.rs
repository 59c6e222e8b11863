//! Implementation of `schemaforge register route`.

use std::path::PathBuf;

use tracing::{debug, instrument};

use schemaforge_adapters::LocalFilesystem;
use schemaforge_core::{application::RegisterService, domain::ResourceName};

use crate::{
    cli::RegisterRouteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// File name of the loader generated next to the route modules.
const LOADER_FILE: &str = "index.js";

/// Execute `schemaforge register route <name>`.
///
/// Without `--manifest` the import and mount lines are spliced into the
/// application file. With it, the resource is recorded in the manifest and
/// the loader module is regenerated; the application file is not touched.
#[instrument(skip_all, fields(resource = %args.name))]
pub fn execute(args: RegisterRouteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let resource = ResourceName::parse(&args.name).map_err(CliError::invalid_input)?;

    let service = RegisterService::new(Box::new(LocalFilesystem::new()), Box::new(output.clone()));

    match args.manifest {
        Some(manifest) => {
            let loader = loader_path(args.routes_dir, &config);
            debug!(manifest = %manifest.display(), loader = %loader.display(), "Manifest mode");

            let added = service.register_manifest(&resource, &manifest, &loader)?;
            if added && !output.is_quiet() {
                output.print("")?;
                output.print(&format!(
                    "Mount the loader once in your app: app.use(require('./{}'));",
                    loader
                        .parent()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "routes".into())
                ))?;
            }
        }
        None => {
            let app_path = args.app_path.unwrap_or(config.paths.app_path);
            debug!(app = %app_path.display(), "Wiring file mode");

            let outcome = service.register(&resource, &app_path)?;
            if outcome.changed() && !output.is_quiet() {
                output.print("Restart your server to pick up the new route.")?;
            }
        }
    }

    Ok(())
}

fn loader_path(routes_dir: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    routes_dir
        .unwrap_or_else(|| config.paths.routes_dir.clone())
        .join(LOADER_FILE)
}
