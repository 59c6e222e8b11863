//! Template rendering context.

use std::collections::HashMap;

use crate::domain::entities::resource::ResourceDescriptor;

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a parameterized
/// template. Immutable after creation - transformations create new instances
/// (see `with_variable`).
///
/// ## Variable Naming Convention
///
/// All built-in variables are `SCREAMING_SNAKE_CASE`. Renderers add their own
/// computed fragments (documentation blocks, query snippets) under the same
/// convention.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `RESOURCE` | "product" | User input |
/// | `RESOURCE_CAPITAL` | "Product" | Computed |
/// | `TABLE` | "products" | Computed |
/// | `MOUNT_PATH` | "/api/v1/products" | Computed |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a render context with the standard resource variables.
    pub fn for_resource(resource: &ResourceDescriptor) -> Self {
        let mut vars = HashMap::new();
        vars.insert("RESOURCE".to_string(), resource.name().to_string());
        vars.insert(
            "RESOURCE_CAPITAL".to_string(),
            resource.capitalized().to_string(),
        );
        vars.insert("TABLE".to_string(), resource.table_name().to_string());
        vars.insert("MOUNT_PATH".to_string(), resource.name().mount_path());

        Self { variables: vars }
    }

    /// Empty context, mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Add a variable, consuming self and returning a new context.
    ///
    /// Later values override earlier ones with the same key.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right pass: substituted values are never scanned again,
    /// so a value that itself contains `{{...}}` is emitted verbatim.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{TABLE}}{{TABLE}}` → both replaced
    /// - an unterminated `{{` → copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
