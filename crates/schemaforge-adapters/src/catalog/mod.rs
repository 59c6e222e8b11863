//! Schema catalog adapters.

mod memory;
mod mysql;

pub use memory::InMemoryCatalog;
pub use mysql::{ConnectionSettings, MySqlInspector};
