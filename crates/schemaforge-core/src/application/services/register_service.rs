//! Register Service - wires a generated route module into the application.
//!
//! Two strategies:
//! - [`RegisterService::register`] splices an import and a mount statement
//!   into the Express application file.
//! - [`RegisterService::register_manifest`] records the resource in a JSON
//!   route manifest and regenerates the loader module from it.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter},
    },
    domain::{RegistrationOutcome, ResourceName, RouteManifest, splice_registration},
    error::{ForgeError, ForgeResult},
};

pub struct RegisterService {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl RegisterService {
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Splice `resource` into the wiring file at `wiring_path`.
    ///
    /// Idempotent: a second call finds the mount path and leaves the file
    /// untouched. Missing insertion points are reported as a warning, not
    /// an error.
    #[instrument(skip_all, fields(resource = %resource, wiring = %wiring_path.display()))]
    pub fn register(
        &self,
        resource: &ResourceName,
        wiring_path: &Path,
    ) -> ForgeResult<RegistrationOutcome> {
        if !self.filesystem.exists(wiring_path) {
            return Err(ApplicationError::WiringFileMissing {
                path: wiring_path.to_path_buf(),
            }
            .into());
        }

        let content = self.filesystem.read_to_string(wiring_path)?;
        let splice = splice_registration(&content, resource);

        if splice.outcome.changed() && splice.content != content {
            self.filesystem.write_file(wiring_path, &splice.content)?;
            debug!(bytes = splice.content.len(), "Wiring file rewritten");
        }

        let file = wiring_path.display();
        match splice.outcome {
            RegistrationOutcome::AlreadyRegistered => {
                info!("Route already registered");
                self.reporter.info(&format!(
                    "{} is already registered in {}",
                    resource.mount_path(),
                    file
                ));
            }
            RegistrationOutcome::Registered => {
                info!("Route registered");
                self.reporter.success(&format!(
                    "Registered {} in {}",
                    resource.mount_path(),
                    file
                ));
            }
            RegistrationOutcome::Partial {
                import_inserted,
                mount_inserted,
            } => {
                warn!(import_inserted, mount_inserted, "Partial registration");
                if !import_inserted {
                    self.reporter.warning(&format!(
                        "No route import found in {}; add it by hand: {}",
                        file,
                        crate::domain::wiring::import_line(resource)
                    ));
                }
                if !mount_inserted {
                    self.reporter.warning(&format!(
                        "No app.use(...) mount found in {}; add it by hand: {}",
                        file,
                        crate::domain::wiring::mount_line(resource)
                    ));
                }
            }
        }

        Ok(splice.outcome)
    }

    /// Record `resource` in the manifest and regenerate the loader.
    ///
    /// A missing manifest is created. Returns `true` if the resource was
    /// newly added. Both files are rewritten only when their content changes.
    #[instrument(
        skip_all,
        fields(
            resource = %resource,
            manifest = %manifest_path.display(),
            loader = %loader_path.display()
        )
    )]
    pub fn register_manifest(
        &self,
        resource: &ResourceName,
        manifest_path: &Path,
        loader_path: &Path,
    ) -> ForgeResult<bool> {
        let existing = if self.filesystem.exists(manifest_path) {
            self.filesystem.read_to_string(manifest_path)?
        } else {
            String::new()
        };

        let mut manifest = RouteManifest::parse(&existing).map_err(ForgeError::Domain)?;
        let added = manifest.register(resource);

        let json = manifest.to_json().map_err(ForgeError::Domain)?;
        self.write_if_changed(manifest_path, &existing, &json)?;

        let loader = manifest.render_loader();
        let current_loader = if self.filesystem.exists(loader_path) {
            self.filesystem.read_to_string(loader_path)?
        } else {
            String::new()
        };
        self.write_if_changed(loader_path, &current_loader, &loader)?;

        if added {
            info!(routes = manifest.routes.len(), "Route added to manifest");
            self.reporter.success(&format!(
                "Registered {} in {}",
                resource.mount_path(),
                manifest_path.display()
            ));
        } else {
            self.reporter.info(&format!(
                "{} is already registered in {}",
                resource.mount_path(),
                manifest_path.display()
            ));
        }

        Ok(added)
    }

    fn write_if_changed(&self, path: &Path, current: &str, next: &str) -> ForgeResult<()> {
        if current == next {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(path, next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockReporter};
    use crate::error::ErrorCategory;

    const APP: &str = "\
const express = require('express');
const userRoutes = require('./routes/user.routes');

const app = express();

app.use('/api/v1/users', userRoutes);

app.listen(3000);
";

    fn product() -> ResourceName {
        ResourceName::parse("product").unwrap()
    }

    fn any_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_success().return_const(());
        reporter.expect_info().return_const(());
        reporter.expect_warning().return_const(());
        reporter
    }

    /// Filesystem mock backed by one shared file body.
    fn single_file(initial: &str) -> (MockFilesystem, Arc<Mutex<String>>) {
        let body = Arc::new(Mutex::new(initial.to_string()));
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);

        let read = Arc::clone(&body);
        fs.expect_read_to_string()
            .returning(move |_| Ok(read.lock().unwrap().clone()));

        let write = Arc::clone(&body);
        fs.expect_write_file().returning(move |_, content| {
            *write.lock().unwrap() = content.to_string();
            Ok(())
        });
        (fs, body)
    }

    #[test]
    fn register_inserts_both_lines() {
        let (fs, body) = single_file(APP);
        let svc = RegisterService::new(Box::new(fs), Box::new(any_reporter()));

        let outcome = svc.register(&product(), Path::new("app.js")).unwrap();

        assert_eq!(outcome, RegistrationOutcome::Registered);
        let text = body.lock().unwrap().clone();
        assert!(text.contains("const productRoutes = require('./routes/product.routes');"));
        assert!(text.contains("app.use('/api/v1/products', productRoutes);"));
    }

    #[test]
    fn already_registered_does_not_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok(APP.replace("users", "products")));
        fs.expect_write_file().never();

        let svc = RegisterService::new(Box::new(fs), Box::new(any_reporter()));
        let outcome = svc.register(&product(), Path::new("app.js")).unwrap();
        assert_eq!(outcome, RegistrationOutcome::AlreadyRegistered);
    }

    #[test]
    fn second_registration_is_byte_identical() {
        let (fs, body) = single_file(APP);
        let svc = RegisterService::new(Box::new(fs), Box::new(any_reporter()));

        svc.register(&product(), Path::new("app.js")).unwrap();
        let once = body.lock().unwrap().clone();
        let outcome = svc.register(&product(), Path::new("app.js")).unwrap();

        assert_eq!(outcome, RegistrationOutcome::AlreadyRegistered);
        assert_eq!(*body.lock().unwrap(), once);
    }

    #[test]
    fn partial_registration_warns_without_failing() {
        let app = "const userRoutes = require('./routes/user.routes');\n";
        let (fs, body) = single_file(app);

        let mut reporter = MockReporter::new();
        reporter
            .expect_warning()
            .withf(|m| m.contains("app.use('/api/v1/products', productRoutes);"))
            .times(1)
            .return_const(());

        let svc = RegisterService::new(Box::new(fs), Box::new(reporter));
        let outcome = svc.register(&product(), Path::new("app.js")).unwrap();

        assert_eq!(
            outcome,
            RegistrationOutcome::Partial {
                import_inserted: true,
                mount_inserted: false
            }
        );
        assert!(body.lock().unwrap().contains("productRoutes = require"));
    }

    #[test]
    fn missing_wiring_file_is_precondition_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string().never();

        let svc = RegisterService::new(Box::new(fs), Box::new(any_reporter()));
        let err = svc
            .register(&product(), Path::new("missing/app.js"))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Precondition);
    }

    #[test]
    fn manifest_registration_creates_both_files() {
        let files: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let sink = Arc::clone(&files);
        fs.expect_write_file().times(2).returning(move |path, content| {
            sink.lock()
                .unwrap()
                .push((path.display().to_string(), content.to_string()));
            Ok(())
        });

        let svc = RegisterService::new(Box::new(fs), Box::new(any_reporter()));
        let added = svc
            .register_manifest(
                &product(),
                Path::new("routes.json"),
                Path::new("routes/index.js"),
            )
            .unwrap();

        assert!(added);
        let files = files.lock().unwrap();
        assert_eq!(files[0].0, "routes.json");
        assert!(files[0].1.contains("\"mount_path\": \"/api/v1/products\""));
        assert_eq!(files[1].0, "routes/index.js");
        assert!(
            files[1]
                .1
                .contains("router.use('/api/v1/products', require('./product.routes'));")
        );
    }

    #[test]
    fn malformed_manifest_is_precondition_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("{ broken".to_string()));
        fs.expect_write_file().never();

        let svc = RegisterService::new(Box::new(fs), Box::new(any_reporter()));
        let err = svc
            .register_manifest(
                &product(),
                Path::new("routes.json"),
                Path::new("routes/index.js"),
            )
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Precondition);
    }
}
