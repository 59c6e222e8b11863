//! Express + mysql2 renderer.
//!
//! Produces `<resource>.routes.js`, `<resource>.model.js` and
//! `<resource>.controller.js` from a [`ResourceDescriptor`].

use schemaforge_core::{
    application::ports::ArtifactRenderer,
    domain::{
        ArtifactKind, ArtifactSet, DomainValidator as validator, DocumentationSchema,
        ForeignKeyMetadata, GeneratedArtifact, OutputLayout, RenderContext, ResourceDescriptor,
    },
    error::{ForgeError, ForgeResult},
};
use tracing::{debug, instrument};

use super::templates;

/// Column of `properties:` inside the request body schema, after ` *`.
const SCHEMA_INDENT: usize = 13;

const EXTENSION: &str = "js";

/// Renderer for Express route/model/controller modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressRenderer;

impl ExpressRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render context with every placeholder the templates use.
    pub fn context(&self, resource: &ResourceDescriptor) -> RenderContext {
        let table = resource.table_name();
        let scoped = resource.has_user_id();
        let checks = resource.checked_foreign_keys();

        let body_schema = DocumentationSchema::from_resource(resource).render_jsdoc(SCHEMA_INDENT);

        let (find_all, find_by_id, delete) = if scoped {
            (
                format!(
                    "    const [rows] = await connection.query('SELECT * FROM {table} WHERE user_id = ?', [userId]);\n"
                ),
                format!(
                    "    const [rows] = await connection.query('SELECT * FROM {table} WHERE id = ? AND user_id = ?', [id, userId]);\n"
                ),
                format!(
                    "    await connection.query('DELETE FROM {table} WHERE id = ? AND user_id = ?', [id, userId]);\n"
                ),
            )
        } else {
            (
                format!("    const [rows] = await connection.query('SELECT * FROM {table}');\n"),
                format!(
                    "    const [rows] = await connection.query('SELECT * FROM {table} WHERE id = ?', [id]);\n"
                ),
                format!("    await connection.query('DELETE FROM {table} WHERE id = ?', [id]);\n"),
            )
        };

        let (assign_user_id, strip_user_id, user_arg, user_only) = if scoped {
            (
                "    // user_id always comes from the authenticated user\n    data.user_id = userId;\n\n",
                "    delete data.user_id;\n\n",
                ", req.user?.id",
                "req.user?.id",
            )
        } else {
            ("", "", "", "")
        };

        RenderContext::for_resource(resource)
            .with_variable("BODY_SCHEMA", body_schema)
            .with_variable("FIND_ALL", find_all)
            .with_variable("FIND_BY_ID", find_by_id)
            .with_variable("DELETE", delete)
            .with_variable("ASSIGN_USER_ID", assign_user_id)
            .with_variable("STRIP_USER_ID", strip_user_id)
            .with_variable("CREATE_CHECKS", create_checks(&checks))
            .with_variable("UPDATE_CHECKS", update_checks(&checks))
            .with_variable("USER_ARG", user_arg)
            .with_variable("USER_ONLY", user_only)
    }
}

impl ArtifactRenderer for ExpressRenderer {
    #[instrument(skip_all, fields(resource = %resource.name()))]
    fn render(
        &self,
        resource: &ResourceDescriptor,
        layout: &OutputLayout,
    ) -> ForgeResult<ArtifactSet> {
        let context = self.context(resource);

        let mut set = ArtifactSet::new();
        for kind in ArtifactKind::ALL {
            let template = match kind {
                ArtifactKind::Route => templates::ROUTE,
                ArtifactKind::Model => templates::MODEL,
                ArtifactKind::Controller => templates::CONTROLLER,
            };
            let path = layout
                .dir_for(kind)
                .join(kind.file_name(resource.name(), EXTENSION));
            set.add(GeneratedArtifact::new(kind, path, context.render(template)));
        }

        validator::validate_artifact_set(&set).map_err(ForgeError::Domain)?;
        debug!(artifacts = set.len(), "Rendered Express artifacts");
        Ok(set)
    }
}

/// Unconditional existence checks run before an insert.
fn create_checks(foreign_keys: &[&ForeignKeyMetadata]) -> String {
    foreign_keys
        .iter()
        .map(|fk| {
            format!(
                "    // Validate {} exists\n{}\n",
                fk.column_name,
                existence_check(fk, "    ")
            )
        })
        .collect()
}

/// Existence checks for foreign keys present in an update payload.
fn update_checks(foreign_keys: &[&ForeignKeyMetadata]) -> String {
    foreign_keys
        .iter()
        .map(|fk| {
            format!(
                "    if (data.{} !== undefined) {{\n{}    }}\n\n",
                fk.column_name,
                existence_check(fk, "      ")
            )
        })
        .collect()
}

fn existence_check(fk: &ForeignKeyMetadata, indent: &str) -> String {
    let column = &fk.column_name;
    let table = &fk.referenced_table;
    let key = &fk.referenced_column;
    format!(
        "{indent}const [{column}Check] = await connection.query('SELECT {key} FROM {table} WHERE {key} = ?', [data.{column}]);\n\
         {indent}if ({column}Check.length === 0) {{\n\
         {indent}  throw new Error('{column} invalid or not found');\n\
         {indent}}}\n"
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use schemaforge_core::domain::{ColumnMetadata, ResourceName, TableSchema};

    fn render(name: &str, schema: TableSchema) -> ArtifactSet {
        let resource = ResourceDescriptor::new(ResourceName::parse(name).unwrap(), schema);
        ExpressRenderer::new()
            .render(&resource, &OutputLayout::under("/srv"))
            .unwrap()
    }

    fn body(set: &ArtifactSet, kind: ArtifactKind) -> &str {
        &set.get(kind).unwrap().body
    }

    fn product() -> TableSchema {
        TableSchema::default()
            .with_column(ColumnMetadata::from_catalog("id", "int", "NO"))
            .with_column(ColumnMetadata::from_catalog("name", "varchar", "NO"))
            .with_column(ColumnMetadata::from_catalog("price", "decimal", "NO"))
    }

    #[test]
    fn targets_follow_layout() {
        let set = render("product", product());
        let paths: Vec<_> = set.paths().map(|p| p.to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/srv/routes/product.routes.js"),
                PathBuf::from("/srv/models/product.model.js"),
                PathBuf::from("/srv/controllers/product.controller.js"),
            ]
        );
    }

    #[test]
    fn no_placeholders_survive() {
        let schema = product()
            .with_column(ColumnMetadata::new("user_id", "int", true))
            .with_column(ColumnMetadata::new("category_id", "int", false))
            .with_foreign_key(ForeignKeyMetadata::new("category_id", "categories", "id"));
        let set = render("product", schema);
        for artifact in set.iter() {
            assert!(
                !artifact.body.contains("{{"),
                "{} has unreplaced placeholders",
                artifact.target_path.display()
            );
        }
    }

    #[test]
    fn unscoped_resource_has_no_identity_filter() {
        let set = render("product", product());
        let model = body(&set, ArtifactKind::Model);
        assert!(model.contains("connection.query('SELECT * FROM products');"));
        assert!(!model.contains("user_id"));
        let controller = body(&set, ArtifactKind::Controller);
        assert!(controller.contains("Product.findAll();"));
        assert!(controller.contains("Product.findById(req.params.id);"));
    }

    #[test]
    fn route_documents_body_schema_in_both_write_endpoints() {
        let set = render("product", product());
        let route = body(&set, ArtifactKind::Route);
        assert_eq!(route.matches(" *             properties:\n").count(), 2);
        assert!(route.contains(" *             type: object\n *             properties:\n"));
        assert!(route.contains(" *                 type: number\n *                 example: 99.99\n"));
        assert!(route.contains(" * /api/v1/products/{id}:\n"));
        assert!(route.contains("router.delete('/:id', authMiddleware, logger, ProductController.delete);"));
    }

    #[test]
    fn empty_schema_block_leaves_valid_comment() {
        let set = render(
            "tag",
            TableSchema::default().with_column(ColumnMetadata::new("id", "int", false)),
        );
        let route = body(&set, ArtifactKind::Route);
        assert!(route.contains(" *             type: object\n *     responses:\n"));
        assert!(!route.contains("properties:"));
        assert!(!route.contains(" *             required:\n"));
        assert_eq!(route.matches(" *       required: true\n").count(), 2);
    }

    #[test]
    fn controller_maps_missing_rows_to_404() {
        let set = render("product", product());
        let controller = body(&set, ArtifactKind::Controller);
        assert_eq!(
            controller
                .matches("return res.status(404).json({ message: 'product not found' });")
                .count(),
            3
        );
        assert!(controller.contains("res.status(201).json(newItem);"));
        assert!(controller.contains("res.json({ message: 'product deleted', item });"));
    }
}
