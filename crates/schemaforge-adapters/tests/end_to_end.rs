//! Generation and registration wired through the real adapters.

use std::fs;
use std::path::Path;

use schemaforge_adapters::{
    ExpressRenderer, InMemoryCatalog, LocalFilesystem, MemoryFilesystem, MemoryReporter,
    reporter::Level,
};
use schemaforge_core::prelude::*;
use tempfile::TempDir;

fn generate_service(
    catalog: InMemoryCatalog,
    fs: MemoryFilesystem,
    reporter: MemoryReporter,
) -> GenerateService {
    GenerateService::new(
        Box::new(catalog),
        Box::new(ExpressRenderer::new()),
        Box::new(fs),
        Box::new(reporter),
    )
}

fn name(s: &str) -> ResourceName {
    ResourceName::parse(s).unwrap()
}

fn product_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new().with_table(
        "products",
        TableSchema::default()
            .with_column(ColumnMetadata::from_catalog("id", "int", "NO"))
            .with_column(ColumnMetadata::from_catalog("name", "varchar", "NO"))
            .with_column(ColumnMetadata::from_catalog("price", "decimal", "NO"))
            .with_column(ColumnMetadata::from_catalog("user_id", "int", "YES")),
    )
}

#[test]
fn product_with_owner_column() {
    let fs = MemoryFilesystem::new();
    let reporter = MemoryReporter::new();
    let svc = generate_service(product_catalog(), fs.clone(), reporter.clone());

    let written = svc
        .generate(&name("product"), &OutputLayout::under("/app"))
        .unwrap();
    assert_eq!(written.len(), 3);
    let successes = reporter.at(Level::Success);
    assert_eq!(successes.len(), 4);
    assert_eq!(successes[0], "Table 'products' found with 4 columns");
    assert!(reporter.at(Level::Info).is_empty());

    let model = fs
        .read_file(Path::new("/app/models/product.model.js"))
        .unwrap();
    assert!(model.contains("data.user_id = userId;"));
    assert!(model.contains("WHERE id = ? AND user_id = ?"));
    assert!(model.contains("delete data.user_id;"));

    let route = fs
        .read_file(Path::new("/app/routes/product.routes.js"))
        .unwrap();
    assert!(route.contains(" *               name:\n *                 type: string\n"));
    assert!(route.contains(" *               price:\n *                 type: number\n *                 example: 99.99\n"));
    assert!(!route.contains("user_id"));
    assert!(!route.contains(" *               id:\n"));

    let controller = fs
        .read_file(Path::new("/app/controllers/product.controller.js"))
        .unwrap();
    assert!(controller.contains("Product.create(req.body, req.user?.id)"));
}

#[test]
fn order_checks_category_before_insert() {
    let catalog = InMemoryCatalog::new().with_table(
        "orders",
        TableSchema::default()
            .with_column(ColumnMetadata::new("id", "int", false))
            .with_column(ColumnMetadata::new("quantity", "int", false))
            .with_column(ColumnMetadata::new("category_id", "int", false))
            .with_foreign_key(ForeignKeyMetadata::new("category_id", "categories", "id")),
    );
    let fs = MemoryFilesystem::new();
    let svc = generate_service(catalog, fs.clone(), MemoryReporter::new());

    svc.generate(&name("order"), &OutputLayout::under("/app"))
        .unwrap();

    let model = fs.read_file(Path::new("/app/models/order.model.js")).unwrap();
    let check = model
        .find("SELECT id FROM categories WHERE id = ?")
        .expect("create validates category_id");
    let insert = model.find("INSERT INTO orders").unwrap();
    assert!(check < insert);
    assert!(model.contains("throw new Error('category_id invalid or not found');"));
    assert!(model.contains("if (data.category_id !== undefined) {"));

    let route = fs.read_file(Path::new("/app/routes/order.routes.js")).unwrap();
    assert_eq!(route.matches(" *               - category_id\n").count(), 2);
}

#[test]
fn existing_file_blocks_every_write() {
    let fs = MemoryFilesystem::new().with_file("/app/controllers/product.controller.js", "// mine");
    let svc = generate_service(product_catalog(), fs.clone(), MemoryReporter::new());

    let err = svc
        .generate(&name("product"), &OutputLayout::under("/app"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Conflict);
    assert_eq!(fs.list_files().len(), 1);
    assert_eq!(
        fs.read_file(Path::new("/app/controllers/product.controller.js"))
            .as_deref(),
        Some("// mine")
    );
}

#[test]
fn failed_write_leaves_nothing_behind() {
    let fs = MemoryFilesystem::new().fail_writes_to("/app/controllers/product.controller.js");
    let svc = generate_service(product_catalog(), fs.clone(), MemoryReporter::new());

    assert!(
        svc.generate(&name("product"), &OutputLayout::under("/app"))
            .is_err()
    );
    assert!(fs.list_files().is_empty());
}

#[test]
fn unknown_table_is_not_found() {
    let svc = generate_service(
        InMemoryCatalog::new(),
        MemoryFilesystem::new(),
        MemoryReporter::new(),
    );
    let err = svc
        .generate(&name("widget"), &OutputLayout::under("/app"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Table 'widgets' not found in database");
}

// ── Registration ─────────────────────────────────────────────────────────────

const APP: &str = "\
const express = require('express');
const userRoutes = require('./routes/user.routes');

const app = express();
app.use(express.json());

app.use('/api/v1/users', userRoutes);

module.exports = app;
";

fn register_service(reporter: MemoryReporter) -> RegisterService {
    RegisterService::new(Box::new(LocalFilesystem::new()), Box::new(reporter))
}

#[test]
fn registering_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let app = dir.path().join("app.js");
    fs::write(&app, APP).unwrap();
    let svc = register_service(MemoryReporter::new());

    assert_eq!(
        svc.register(&name("product"), &app).unwrap(),
        RegistrationOutcome::Registered
    );
    let once = fs::read_to_string(&app).unwrap();
    assert_eq!(
        svc.register(&name("product"), &app).unwrap(),
        RegistrationOutcome::AlreadyRegistered
    );
    assert_eq!(fs::read_to_string(&app).unwrap(), once);
    assert_eq!(once.matches("productRoutes = require").count(), 1);
    assert_eq!(once.matches("app.use('/api/v1/products'").count(), 1);
}

#[test]
fn no_mount_statements_gives_partial_registration() {
    let dir = TempDir::new().unwrap();
    let app = dir.path().join("app.js");
    fs::write(
        &app,
        "const userRoutes = require('./routes/user.routes');\nconst app = express();\n",
    )
    .unwrap();
    let reporter = MemoryReporter::new();

    let outcome = register_service(reporter.clone())
        .register(&name("product"), &app)
        .unwrap();

    assert_eq!(
        outcome,
        RegistrationOutcome::Partial {
            import_inserted: true,
            mount_inserted: false
        }
    );
    let text = fs::read_to_string(&app).unwrap();
    assert!(text.contains("const productRoutes = require('./routes/product.routes');"));
    assert!(!text.contains("app.use('/api/v1/products'"));
    assert_eq!(reporter.at(Level::Warning).len(), 1);
}

#[test]
fn manifest_registration_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("routes.json");
    let loader = dir.path().join("routes/index.js");
    let svc = register_service(MemoryReporter::new());

    assert!(
        svc.register_manifest(&name("product"), &manifest, &loader)
            .unwrap()
    );
    assert!(
        svc.register_manifest(&name("category"), &manifest, &loader)
            .unwrap()
    );
    let json = fs::read_to_string(&manifest).unwrap();
    let index = fs::read_to_string(&loader).unwrap();

    assert!(
        !svc.register_manifest(&name("product"), &manifest, &loader)
            .unwrap()
    );
    assert_eq!(fs::read_to_string(&manifest).unwrap(), json);
    assert_eq!(fs::read_to_string(&loader).unwrap(), index);
    assert!(index.contains("router.use('/api/v1/categorys', require('./category.routes'));"));
}
