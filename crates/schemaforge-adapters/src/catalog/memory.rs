//! In-memory catalog for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use schemaforge_core::{
    application::{ApplicationError, ports::SchemaInspector},
    domain::TableSchema,
    error::ForgeResult,
};

/// Fixed set of tables keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<HashMap<String, TableSchema>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, name: impl Into<String>, schema: TableSchema) -> Self {
        self.insert(name, schema);
        self
    }

    pub fn insert(&self, name: impl Into<String>, schema: TableSchema) {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(name.into(), schema);
        }
    }
}

impl SchemaInspector for InMemoryCatalog {
    fn inspect(&self, table: &str) -> ForgeResult<Option<TableSchema>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(tables.get(table).cloned())
    }
}
