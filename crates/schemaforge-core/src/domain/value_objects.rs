//! Domain value objects: ResourceName, DocType, DocExample.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! They hold no policy logic. Field inclusion and type inference live in
//! `documentation.rs`. This file's only job is to define the types, their
//! string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suffix appended to a resource name to obtain its table name.
pub const TABLE_SUFFIX: &str = "s";

/// URL prefix every generated resource is mounted under.
pub const MOUNT_PREFIX: &str = "/api/v1";

// ── ResourceName ─────────────────────────────────────────────────────────────

/// The singular, lower-case name of a resource (e.g. `product`).
///
/// Invariant: non-empty, ASCII, starts with a letter, contains only
/// letters, digits and underscores, and is lower case. Enforced at
/// construction, so every derived symbol (`productRoutes`, `Product`,
/// `products`) is a valid JavaScript identifier and SQL table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Parse and normalise a raw resource name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        let invalid = |reason: &str| DomainError::InvalidResourceName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let first = trimmed.chars().next().ok_or_else(|| invalid("name cannot be empty"))?;
        if !first.is_ascii_alphabetic() {
            return Err(invalid("name must start with a letter"));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pluralised table name (`product` -> `products`).
    pub fn table_name(&self) -> String {
        format!("{}{TABLE_SUFFIX}", self.0)
    }

    /// Capitalised symbol name (`product` -> `Product`).
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// URL path the resource is mounted under (`/api/v1/products`).
    pub fn mount_path(&self) -> String {
        format!("{MOUNT_PREFIX}/{}", self.table_name())
    }

    /// Identifier of the route module in the wiring file (`productRoutes`).
    pub fn routes_symbol(&self) -> String {
        format!("{}Routes", self.0)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

// ── DocType ──────────────────────────────────────────────────────────────────

/// Coarse documentation type of a field, as it appears in the OpenAPI block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    Integer,
    Number,
    String,
}

impl DocType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DocExample ───────────────────────────────────────────────────────────────

/// Sample value shown next to a documented field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocExample {
    Integer(i64),
    Number(f64),
    Text(&'static str),
}

impl fmt::Display for DocExample {
    /// Text examples are quoted; numeric examples are written bare.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "\"{v}\""),
        }
    }
}
