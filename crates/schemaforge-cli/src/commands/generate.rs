//! Implementation of `schemaforge generate route`.

use tracing::{debug, info, instrument};

use schemaforge_adapters::{ExpressRenderer, LocalFilesystem, MySqlInspector};
use schemaforge_core::{application::GenerateService, domain::ResourceName};

use crate::{
    cli::GenerateRouteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `schemaforge generate route <name>`.
///
/// 1. Validate the resource name
/// 2. Resolve catalog settings and output directories (flags > env > file > defaults)
/// 3. Preview on `--dry-run`, otherwise generate all three modules
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(resource = %args.name))]
pub fn execute(args: GenerateRouteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let resource = ResourceName::parse(&args.name).map_err(CliError::invalid_input)?;

    let layout = config.paths.layout(&args.layout);
    let settings = config.database.apply(&args.database);
    debug!(?settings, ?layout, "Generation inputs resolved");

    let service = GenerateService::new(
        Box::new(MySqlInspector::new(settings)),
        Box::new(ExpressRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(output.clone()),
    );

    if args.dry_run {
        output.header(&format!(
            "Dry run: '{resource}' from table '{}'",
            resource.table_name()
        ))?;
        let set = service.preview(&resource, &layout)?;
        output.info(&format!("{} file(s) would be written", set.len()))?;
        return Ok(());
    }

    output.header(&format!(
        "Generating '{resource}' from table '{}'...",
        resource.table_name()
    ))?;

    let written = service.generate(&resource, &layout)?;

    info!(files = written.len(), "Generation completed");

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  1. Register route: schemaforge register route {resource}"
        ))?;
        output.print("  2. Restart your server")?;
        output.print("  3. Test at /api-docs")?;
    }

    Ok(())
}

