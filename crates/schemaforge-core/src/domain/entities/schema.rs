//! Catalog metadata for a single table.
//!
//! These are plain data carriers filled in once by a `SchemaInspector`
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One column as reported by the metadata catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    /// Type name reported by the catalog (`int`, `varchar`, `decimal`, ...).
    pub data_type: String,
    pub nullable: bool,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
        }
    }

    /// Build from the catalog's textual `IS_NULLABLE` flag (`YES` / `NO`).
    pub fn from_catalog(
        name: impl Into<String>,
        data_type: impl Into<String>,
        is_nullable: &str,
    ) -> Self {
        Self::new(name, data_type, !is_nullable.trim().eq_ignore_ascii_case("NO"))
    }
}

/// A single-column foreign key reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyMetadata {
    pub column_name: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

impl ForeignKeyMetadata {
    pub fn new(
        column_name: impl Into<String>,
        referenced_table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            referenced_table: referenced_table.into(),
            referenced_column: referenced_column.into(),
        }
    }
}

/// Columns and foreign keys of one table, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub columns: Vec<ColumnMetadata>,
    pub foreign_keys: Vec<ForeignKeyMetadata>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnMetadata>, foreign_keys: Vec<ForeignKeyMetadata>) -> Self {
        Self {
            columns,
            foreign_keys,
        }
    }

    pub fn with_column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_foreign_key(mut self, fk: ForeignKeyMetadata) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
