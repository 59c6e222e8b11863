use crate::domain::{
    entities::schema::{ColumnMetadata, ForeignKeyMetadata, TableSchema},
    value_objects::ResourceName,
};

/// Column that scopes rows to the authenticated caller.
pub const USER_ID_COLUMN: &str = "user_id";

/// Everything the renderer needs to know about one resource.
///
/// Built once per generation run from a [`ResourceName`] and the
/// [`TableSchema`] returned by the catalog; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    name: ResourceName,
    table_name: String,
    capitalized: String,
    schema: TableSchema,
}

impl ResourceDescriptor {
    pub fn new(name: ResourceName, schema: TableSchema) -> Self {
        Self {
            table_name: name.table_name(),
            capitalized: name.capitalized(),
            name,
            schema,
        }
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.schema.columns
    }

    pub fn foreign_keys(&self) -> &[ForeignKeyMetadata] {
        &self.schema.foreign_keys
    }

    /// Whether rows are owned by a caller identity.
    pub fn has_user_id(&self) -> bool {
        self.schema.column(USER_ID_COLUMN).is_some()
    }

    /// Whether `column` participates in any foreign key.
    pub fn is_foreign_key(&self, column: &str) -> bool {
        self.schema
            .foreign_keys
            .iter()
            .any(|fk| fk.column_name == column)
    }

    /// Foreign keys whose existence must be checked before writes.
    ///
    /// `user_id` is excluded (it is filled from the caller identity), and a
    /// column referenced by several constraints is reported once.
    pub fn checked_foreign_keys(&self) -> Vec<&ForeignKeyMetadata> {
        let mut seen: Vec<&str> = Vec::new();
        self.schema
            .foreign_keys
            .iter()
            .filter(|fk| fk.column_name != USER_ID_COLUMN)
            .filter(|fk| {
                if seen.contains(&fk.column_name.as_str()) {
                    false
                } else {
                    seen.push(&fk.column_name);
                    true
                }
            })
            .collect()
    }
}
