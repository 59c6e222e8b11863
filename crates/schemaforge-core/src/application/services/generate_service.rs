//! Generate Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Inspect the resource's table in the catalog
//! 2. Render the route, model and controller artifacts
//! 3. Check every target for conflicts, then write them all
//!
//! Nothing is written unless every target is free. Files created during a
//! run are removed again if a later write fails.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactRenderer, Filesystem, Reporter, SchemaInspector},
    },
    domain::{
        ArtifactSet, DomainValidator as validator, GeneratedArtifact, OutputLayout,
        ResourceDescriptor, ResourceName,
    },
    error::{ForgeError, ForgeResult},
};

/// Generates the three source files for one resource.
pub struct GenerateService {
    inspector: Box<dyn SchemaInspector>,
    renderer: Box<dyn ArtifactRenderer>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        inspector: Box<dyn SchemaInspector>,
        renderer: Box<dyn ArtifactRenderer>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            inspector,
            renderer,
            filesystem,
            reporter,
        }
    }

    /// Inspect, render and write. Returns the written paths in write order.
    #[instrument(skip_all, fields(resource = %resource, table = %resource.table_name()))]
    pub fn generate(
        &self,
        resource: &ResourceName,
        layout: &OutputLayout,
    ) -> ForgeResult<Vec<PathBuf>> {
        info!("Generating artifacts");

        let artifacts = self.render(resource, layout)?;
        self.ensure_no_conflicts(&artifacts)?;
        let written = self.commit(&artifacts)?;

        for path in &written {
            self.reporter
                .success(&format!("Created {}", path.display()));
        }
        info!(files = written.len(), "Generation completed successfully");
        Ok(written)
    }

    /// Inspect and render without touching the filesystem.
    ///
    /// Conflicts are reported as warnings rather than errors so a dry run
    /// always shows the full plan.
    #[instrument(skip_all, fields(resource = %resource))]
    pub fn preview(
        &self,
        resource: &ResourceName,
        layout: &OutputLayout,
    ) -> ForgeResult<ArtifactSet> {
        let artifacts = self.render(resource, layout)?;

        for artifact in artifacts.iter() {
            if self.filesystem.exists(&artifact.target_path) {
                self.reporter.warning(&format!(
                    "{} already exists and would block generation",
                    artifact.target_path.display()
                ));
            } else {
                self.reporter.info(&format!(
                    "Would create {} ({} bytes)",
                    artifact.target_path.display(),
                    artifact.size()
                ));
            }
        }

        Ok(artifacts)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(&self, resource: &ResourceName, layout: &OutputLayout) -> ForgeResult<ArtifactSet> {
        let descriptor = self.describe(resource)?;
        validator::validate_descriptor(&descriptor).map_err(ForgeError::Domain)?;

        let artifacts = self.renderer.render(&descriptor, layout)?;
        validator::validate_artifact_set(&artifacts).map_err(ForgeError::Domain)?;
        debug!(artifacts = artifacts.len(), "Artifacts rendered");

        Ok(artifacts)
    }

    fn describe(&self, resource: &ResourceName) -> ForgeResult<ResourceDescriptor> {
        let table = resource.table_name();

        let schema = match self.inspector.inspect(&table)? {
            Some(schema) if !schema.is_empty() => schema,
            Some(_) => {
                warn!(table = %table, "Table exists but has no columns");
                return Err(ApplicationError::TableNotFound { table }.into());
            }
            None => return Err(ApplicationError::TableNotFound { table }.into()),
        };

        debug!(
            columns = schema.columns.len(),
            foreign_keys = schema.foreign_keys.len(),
            "Schema inspected"
        );
        self.reporter.success(&format!(
            "Table '{table}' found with {} columns",
            schema.columns.len()
        ));
        if !schema.foreign_keys.is_empty() {
            self.reporter.info(&format!(
                "{} foreign key(s) detected",
                schema.foreign_keys.len()
            ));
        }
        Ok(ResourceDescriptor::new(resource.clone(), schema))
    }

    /// Stage: fail on the first target that already exists.
    fn ensure_no_conflicts(&self, artifacts: &ArtifactSet) -> ForgeResult<()> {
        if let Some(path) = artifacts.paths().find(|p| self.filesystem.exists(p)) {
            return Err(ApplicationError::ArtifactExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Commit: write every artifact, undoing this run's files on failure.
    fn commit(&self, artifacts: &ArtifactSet) -> ForgeResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts.iter() {
            if let Err(e) = self.write_artifact(artifact) {
                warn!(
                    error = %e,
                    path = %artifact.target_path.display(),
                    "Write failed, attempting rollback"
                );
                self.rollback(&written);
                return Err(e);
            }
            written.push(artifact.target_path.clone());
        }

        Ok(written)
    }

    fn write_artifact(&self, artifact: &GeneratedArtifact) -> ForgeResult<()> {
        if let Some(parent) = artifact.target_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem
            .create_file(&artifact.target_path, &artifact.body)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, written: &[PathBuf]) {
        for path in written.iter().rev() {
            match self.filesystem.remove_file(path) {
                Ok(()) => debug!(path = %path.display(), "Rolled back"),
                Err(e) => warn!(
                    error = %e,
                    path = %path.display(),
                    "Rollback failed"
                ),
            }
        }
    }
}
