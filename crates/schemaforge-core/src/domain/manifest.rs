//! Declarative route manifest.
//!
//! A structured alternative to splicing text into the application file:
//! registered resources live in a small JSON document, and the Express
//! loader module that mounts them is regenerated from it. Registration is
//! a map insert, so it is idempotent and independent of file formatting
//! and registration order.
//!
//! ```json
//! {
//!   "version": 1,
//!   "routes": {
//!     "product": {
//!       "table": "products",
//!       "mount_path": "/api/v1/products",
//!       "module": "./product.routes"
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ResourceName};

pub const MANIFEST_VERSION: u32 = 1;

/// One mounted resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub table: String,
    pub mount_path: String,
    /// Module path relative to the loader file.
    pub module: String,
}

impl RouteEntry {
    pub fn for_resource(resource: &ResourceName) -> Self {
        Self {
            table: resource.table_name(),
            mount_path: resource.mount_path(),
            module: format!("./{resource}.routes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    pub version: u32,
    #[serde(default)]
    pub routes: BTreeMap<String, RouteEntry>,
}

impl Default for RouteManifest {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            routes: BTreeMap::new(),
        }
    }
}

impl RouteManifest {
    /// Parse manifest text. Blank text is an empty manifest.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self =
            serde_json::from_str(text).map_err(|e| DomainError::MalformedManifest {
                reason: e.to_string(),
            })?;

        if manifest.version != MANIFEST_VERSION {
            return Err(DomainError::UnsupportedManifestVersion {
                found: manifest.version,
                expected: MANIFEST_VERSION,
            });
        }

        for key in manifest.routes.keys() {
            ResourceName::parse(key).map_err(|e| DomainError::MalformedManifest {
                reason: e.to_string(),
            })?;
        }

        Ok(manifest)
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, DomainError> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| DomainError::MalformedManifest {
                reason: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }

    pub fn contains(&self, resource: &ResourceName) -> bool {
        self.routes.contains_key(resource.as_str())
    }

    /// Add `resource`. Returns `false` if it was already present, in which
    /// case the existing entry is kept as-is.
    pub fn register(&mut self, resource: &ResourceName) -> bool {
        if self.contains(resource) {
            return false;
        }
        self.routes
            .insert(resource.to_string(), RouteEntry::for_resource(resource));
        true
    }

    /// Express module that mounts every registered resource, sorted by name.
    pub fn render_loader(&self) -> String {
        let mut out = String::from(
            "// Generated by schemaforge from the route manifest. Do not edit by hand.\n\
             const express = require('express');\n\
             \n\
             const router = express.Router();\n",
        );

        if !self.routes.is_empty() {
            out.push('\n');
        }
        for (name, entry) in &self.routes {
            out.push_str(&format!(
                "router.use('{}', require('{}')); // {}\n",
                entry.mount_path, entry.module, name
            ));
        }

        out.push_str("\nmodule.exports = router;\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ResourceName {
        ResourceName::parse(s).unwrap()
    }

    #[test]
    fn blank_text_is_empty_manifest() {
        let m = RouteManifest::parse("  \n").unwrap();
        assert_eq!(m, RouteManifest::default());
    }

    #[test]
    fn register_is_idempotent() {
        let mut m = RouteManifest::default();
        assert!(m.register(&name("product")));
        let once = m.to_json().unwrap();
        assert!(!m.register(&name("product")));
        assert_eq!(m.to_json().unwrap(), once);
    }

    #[test]
    fn json_round_trips_through_parse() {
        let mut m = RouteManifest::default();
        m.register(&name("product"));
        let parsed = RouteManifest::parse(&m.to_json().unwrap()).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn loader_is_order_independent() {
        let mut a = RouteManifest::default();
        a.register(&name("product"));
        a.register(&name("category"));

        let mut b = RouteManifest::default();
        b.register(&name("category"));
        b.register(&name("product"));

        assert_eq!(a.render_loader(), b.render_loader());
        let loader = a.render_loader();
        let cat = loader.find("/api/v1/categorys").unwrap();
        let prod = loader.find("/api/v1/products").unwrap();
        assert!(cat < prod);
        assert!(loader.contains("require('./product.routes')"));
    }

    #[test]
    fn rejects_bad_manifests() {
        assert!(matches!(
            RouteManifest::parse("{not json"),
            Err(DomainError::MalformedManifest { .. })
        ));
        assert!(matches!(
            RouteManifest::parse(r#"{"version": 9, "routes": {}}"#),
            Err(DomainError::UnsupportedManifestVersion { found: 9, .. })
        ));
        assert!(matches!(
            RouteManifest::parse(
                r#"{"version": 1, "routes": {"bad-name": {"table": "x", "mount_path": "/x", "module": "./x"}}}"#
            ),
            Err(DomainError::MalformedManifest { .. })
        ));
    }
}
