//! MySQL catalog adapter backed by `INFORMATION_SCHEMA`.

use std::fmt;
use std::time::Duration;

use schemaforge_core::{
    application::{ApplicationError, ports::SchemaInspector},
    domain::{ColumnMetadata, ForeignKeyMetadata, TableSchema},
    error::{ForgeError, ForgeResult},
};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions};
use tracing::{debug, instrument};

const TABLE_EXISTS: &str = "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES \
     WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?";

const TABLE_COLUMNS: &str = "SELECT CAST(COLUMN_NAME AS CHAR), CAST(DATA_TYPE AS CHAR), \
     CAST(IS_NULLABLE AS CHAR) \
     FROM INFORMATION_SCHEMA.COLUMNS \
     WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

const TABLE_FOREIGN_KEYS: &str = "SELECT CAST(COLUMN_NAME AS CHAR), \
     CAST(REFERENCED_TABLE_NAME AS CHAR), CAST(REFERENCED_COLUMN_NAME AS CHAR) \
     FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE \
     WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? AND REFERENCED_TABLE_NAME IS NOT NULL \
     ORDER BY ORDINAL_POSITION";

/// Where and how to reach the catalog.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub connect_timeout: Duration,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: "root".into(),
            password: String::new(),
            database: "api_mvc".into(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl ConnectionSettings {
    fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// Reads table metadata from a MySQL server.
///
/// Each call opens a single-connection pool on a private current-thread
/// runtime and closes it before returning, so no connection outlives the
/// call and the rest of the program stays synchronous.
#[derive(Debug, Clone)]
pub struct MySqlInspector {
    settings: ConnectionSettings,
}

impl MySqlInspector {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    async fn fetch(&self, table: &str) -> Result<Option<TableSchema>, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(self.settings.connect_timeout)
            .connect_with(self.settings.connect_options())
            .await?;

        let result = match pool.acquire().await {
            Ok(mut conn) => self.query_schema(&mut conn, table).await,
            Err(e) => Err(e),
        };

        pool.close().await;
        result
    }

    async fn query_schema(
        &self,
        conn: &mut MySqlConnection,
        table: &str,
    ) -> Result<Option<TableSchema>, sqlx::Error> {
        let schema_name = self.settings.database.as_str();

        let (count,): (i64,) = sqlx::query_as(TABLE_EXISTS)
            .bind(schema_name)
            .bind(table)
            .fetch_one(&mut *conn)
            .await?;
        if count == 0 {
            return Ok(None);
        }

        let columns: Vec<(String, String, String)> = sqlx::query_as(TABLE_COLUMNS)
            .bind(schema_name)
            .bind(table)
            .fetch_all(&mut *conn)
            .await?;

        let foreign_keys: Vec<(String, String, String)> = sqlx::query_as(TABLE_FOREIGN_KEYS)
            .bind(schema_name)
            .bind(table)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(TableSchema::new(
            columns
                .into_iter()
                .map(|(name, data_type, nullable)| {
                    ColumnMetadata::from_catalog(name, data_type, &nullable)
                })
                .collect(),
            foreign_keys
                .into_iter()
                .map(|(column, ref_table, ref_column)| {
                    ForeignKeyMetadata::new(column, ref_table, ref_column)
                })
                .collect(),
        )))
    }
}

impl SchemaInspector for MySqlInspector {
    #[instrument(skip(self), fields(host = %self.settings.host, database = %self.settings.database))]
    fn inspect(&self, table: &str) -> ForgeResult<Option<TableSchema>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ForgeError::Internal {
                message: format!("failed to start catalog runtime: {e}"),
            })?;

        let schema = runtime
            .block_on(self.fetch(table))
            .map_err(|e| ApplicationError::CatalogUnavailable {
                reason: e.to_string(),
            })?;

        debug!(found = schema.is_some(), "Catalog queried");
        Ok(schema)
    }
}
