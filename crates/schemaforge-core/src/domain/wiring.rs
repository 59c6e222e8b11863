//! Splicing route registrations into an Express application file.
//!
//! The wiring file is treated as plain text. Two shapes are recognised:
//!
//! ```text
//! const productRoutes = require('./routes/product.routes');   // import
//! app.use('/api/v1/products', productRoutes);                 // mount
//! ```
//!
//! A new import is inserted right after the last import match and a new
//! mount statement on its own line after the last mount statement. A step
//! whose pattern never matches is skipped and reported through
//! [`RegistrationOutcome::Partial`]; the caller decides how loudly to warn.
//! For an order-independent alternative see [`crate::domain::manifest`].

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::ResourceName;

static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const \w+Routes = require\('\./routes/\w+\.routes'\);")
        .expect("Failed to compile import regex")
});

static MOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"app\.use\('/api/v1/\w+',\s*\w+Routes\);").expect("Failed to compile mount regex")
});

/// What a registration did to the wiring file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The mount path was already present; nothing changed.
    AlreadyRegistered,
    /// Both the import and the mount statement were inserted.
    Registered,
    /// At least one insertion point was not found.
    Partial {
        import_inserted: bool,
        mount_inserted: bool,
    },
}

impl RegistrationOutcome {
    fn from_flags(import_inserted: bool, mount_inserted: bool) -> Self {
        if import_inserted && mount_inserted {
            Self::Registered
        } else {
            Self::Partial {
                import_inserted,
                mount_inserted,
            }
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }

    /// Whether the file content was modified.
    pub fn changed(&self) -> bool {
        match self {
            Self::AlreadyRegistered => false,
            Self::Registered => true,
            Self::Partial {
                import_inserted,
                mount_inserted,
            } => *import_inserted || *mount_inserted,
        }
    }
}

/// Result of splicing: the outcome plus the new file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub outcome: RegistrationOutcome,
    pub content: String,
}

/// `const productRoutes = require('./routes/product.routes');`
pub fn import_line(resource: &ResourceName) -> String {
    format!(
        "const {} = require('./routes/{}.routes');",
        resource.routes_symbol(),
        resource
    )
}

/// `app.use('/api/v1/products', productRoutes);`
pub fn mount_line(resource: &ResourceName) -> String {
    format!(
        "app.use('{}', {});",
        resource.mount_path(),
        resource.routes_symbol()
    )
}

/// Whether the wiring text already mounts this resource.
pub fn is_registered(content: &str, resource: &ResourceName) -> bool {
    content.contains(&format!("'{}'", resource.mount_path()))
}

/// Insert the import and mount statements for `resource` into `content`.
///
/// Pure function; never fails. Running it on its own output yields
/// `AlreadyRegistered` with identical content.
pub fn splice_registration(content: &str, resource: &ResourceName) -> Splice {
    if is_registered(content, resource) {
        return Splice {
            outcome: RegistrationOutcome::AlreadyRegistered,
            content: content.to_string(),
        };
    }

    let mut text = content.to_string();

    let import_inserted = match IMPORT_PATTERN.find_iter(&text).last() {
        Some(last) => {
            let at = last.end();
            text.insert_str(at, &format!("\n{}", import_line(resource)));
            true
        }
        None => false,
    };

    let mount_inserted = match MOUNT_PATTERN.find_iter(&text).last() {
        Some(last) => {
            let at = text[last.end()..]
                .find('\n')
                .map_or(text.len(), |offset| last.end() + offset);
            text.insert_str(at, &format!("\n{}", mount_line(resource)));
            true
        }
        None => false,
    };

    Splice {
        outcome: RegistrationOutcome::from_flags(import_inserted, mount_inserted),
        content: text,
    }
}
