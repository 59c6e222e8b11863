//! Field-inclusion policy and type inference for generated documentation.
//!
//! The same policy drives the OpenAPI request schema in the route file and
//! the list of fields a client is expected to send. It is applied uniformly
//! to every artifact:
//!
//! - `id`, `created_at`, `updated_at`, `user_id`, `sell_date` and
//!   `sells_date` are never documented (database- or server-populated).
//! - Foreign-key columns are left out of the generic list and documented
//!   separately as integer references, always required (except `user_id`).
//! - Any other column is required iff it is `NOT NULL`.

use crate::domain::{
    entities::resource::ResourceDescriptor,
    value_objects::{DocExample, DocType},
};

/// Columns that are never part of a client payload.
pub const EXCLUDED_COLUMNS: [&str; 6] = [
    "id",
    "created_at",
    "updated_at",
    "user_id",
    "sell_date",
    "sells_date",
];

pub fn is_excluded(column: &str) -> bool {
    EXCLUDED_COLUMNS.contains(&column)
}

/// Map a catalog type name to a documentation type and sample value.
///
/// Case-insensitive substring match, first rule wins:
///
/// | contains              | type    | example         |
/// |-----------------------|---------|-----------------|
/// | `int`                 | integer | `1`             |
/// | `float` / `decimal`   | number  | `99.99`         |
/// | `text`                | string  | `"Long text"`   |
/// | `date`                | string  | `"2024-01-16"`  |
/// | `time`                | string  | `"10:30:00"`    |
/// | anything else         | string  | `"example value"` |
pub fn infer_doc_type(data_type: &str) -> (DocType, DocExample) {
    let t = data_type.to_ascii_lowercase();

    if t.contains("int") {
        (DocType::Integer, DocExample::Integer(1))
    } else if t.contains("float") || t.contains("decimal") {
        (DocType::Number, DocExample::Number(99.99))
    } else if t.contains("text") {
        (DocType::String, DocExample::Text("Long text"))
    } else if t.contains("date") {
        (DocType::String, DocExample::Text("2024-01-16"))
    } else if t.contains("time") {
        (DocType::String, DocExample::Text("10:30:00"))
    } else {
        (DocType::String, DocExample::Text("example value"))
    }
}

/// One property of the documented request body.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentedField {
    pub name: String,
    pub doc_type: DocType,
    pub example: DocExample,
}

/// Request-body schema derived from a resource's columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentationSchema {
    pub properties: Vec<DocumentedField>,
    pub required: Vec<String>,
}

impl DocumentationSchema {
    pub fn from_resource(resource: &ResourceDescriptor) -> Self {
        let plain = resource
            .columns()
            .iter()
            .filter(|c| !is_excluded(&c.name) && !resource.is_foreign_key(&c.name));

        let mut properties = Vec::new();
        let mut required = Vec::new();

        for column in plain {
            let (doc_type, example) = infer_doc_type(&column.data_type);
            properties.push(DocumentedField {
                name: column.name.clone(),
                doc_type,
                example,
            });
            if !column.nullable {
                required.push(column.name.clone());
            }
        }

        for fk in resource.checked_foreign_keys() {
            properties.push(DocumentedField {
                name: fk.column_name.clone(),
                doc_type: DocType::Integer,
                example: DocExample::Integer(1),
            });
            required.push(fk.column_name.clone());
        }

        Self {
            properties,
            required,
        }
    }

    pub fn property(&self, name: &str) -> Option<&DocumentedField> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Render the `properties:` and `required:` blocks as JSDoc YAML lines.
    ///
    /// `indent` is the column of the `properties:` key after the leading ` *`.
    /// Each block is omitted when empty; the result is empty when both are.
    pub fn render_jsdoc(&self, indent: usize) -> String {
        let mut out = String::new();

        if !self.properties.is_empty() {
            push_jsdoc(&mut out, indent, "properties:");
            for field in &self.properties {
                push_jsdoc(&mut out, indent + 2, &format!("{}:", field.name));
                push_jsdoc(&mut out, indent + 4, &format!("type: {}", field.doc_type));
                push_jsdoc(&mut out, indent + 4, &format!("example: {}", field.example));
            }
        }

        if !self.required.is_empty() {
            push_jsdoc(&mut out, indent, "required:");
            for name in &self.required {
                push_jsdoc(&mut out, indent + 2, &format!("- {name}"));
            }
        }

        out
    }
}

fn push_jsdoc(out: &mut String, indent: usize, text: &str) {
    out.push_str(" *");
    out.extend(std::iter::repeat_n(' ', indent));
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnMetadata, ForeignKeyMetadata, ResourceName, TableSchema};

    fn descriptor(name: &str, schema: TableSchema) -> ResourceDescriptor {
        ResourceDescriptor::new(ResourceName::parse(name).unwrap(), schema)
    }

    fn product() -> ResourceDescriptor {
        descriptor(
            "product",
            TableSchema::default()
                .with_column(ColumnMetadata::from_catalog("id", "int", "NO"))
                .with_column(ColumnMetadata::from_catalog("name", "varchar", "NO"))
                .with_column(ColumnMetadata::from_catalog("price", "decimal", "NO"))
                .with_column(ColumnMetadata::from_catalog("user_id", "int", "YES")),
        )
    }

    #[test]
    fn int_wins_over_other_substrings() {
        assert_eq!(infer_doc_type("int").0, DocType::Integer);
        assert_eq!(infer_doc_type("BIGINT").1, DocExample::Integer(1));
        // "point" contains "int"; first rule wins.
        assert_eq!(infer_doc_type("point").0, DocType::Integer);
        assert_eq!(infer_doc_type("interval_text").0, DocType::Integer);
    }

    #[test]
    fn inference_table() {
        assert_eq!(
            infer_doc_type("decimal"),
            (DocType::Number, DocExample::Number(99.99))
        );
        assert_eq!(infer_doc_type("Float").0, DocType::Number);
        assert_eq!(
            infer_doc_type("mediumtext"),
            (DocType::String, DocExample::Text("Long text"))
        );
        assert_eq!(infer_doc_type("datetime").1, DocExample::Text("2024-01-16"));
        assert_eq!(infer_doc_type("timestamp").1, DocExample::Text("10:30:00"));
        assert_eq!(infer_doc_type("varchar").1, DocExample::Text("example value"));
    }

    #[test]
    fn product_schema_documents_payload_fields_only() {
        let doc = DocumentationSchema::from_resource(&product());

        let names: Vec<_> = doc.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["name", "price"]);
        assert_eq!(doc.property("name").unwrap().doc_type, DocType::String);
        let price = doc.property("price").unwrap();
        assert_eq!(price.doc_type, DocType::Number);
        assert_eq!(price.example, DocExample::Number(99.99));
        assert_eq!(doc.required, vec!["name", "price"]);
    }

    #[test]
    fn user_id_never_documented_even_as_foreign_key() {
        let d = descriptor(
            "note",
            TableSchema::default()
                .with_column(ColumnMetadata::new("body", "text", true))
                .with_column(ColumnMetadata::new("user_id", "int", false))
                .with_foreign_key(ForeignKeyMetadata::new("user_id", "users", "id")),
        );
        let doc = DocumentationSchema::from_resource(&d);

        assert!(doc.property("user_id").is_none());
        assert!(!doc.required.iter().any(|r| r == "user_id"));
        assert!(doc.required.is_empty());
    }

    #[test]
    fn foreign_keys_are_required_integers_once() {
        let d = descriptor(
            "order",
            TableSchema::default()
                .with_column(ColumnMetadata::new("category_id", "bigint", true))
                .with_column(ColumnMetadata::new("note", "varchar", true))
                .with_column(ColumnMetadata::new("sell_date", "date", false))
                .with_foreign_key(ForeignKeyMetadata::new("category_id", "categories", "id"))
                .with_foreign_key(ForeignKeyMetadata::new("category_id", "categories", "id")),
        );
        let doc = DocumentationSchema::from_resource(&d);

        let fk = doc.property("category_id").unwrap();
        assert_eq!(fk.doc_type, DocType::Integer);
        assert_eq!(fk.example, DocExample::Integer(1));
        assert_eq!(
            doc.required.iter().filter(|r| *r == "category_id").count(),
            1
        );
        assert_eq!(
            doc.properties.iter().filter(|p| p.name == "category_id").count(),
            1
        );
        assert!(doc.property("sell_date").is_none());
        assert!(!doc.required.iter().any(|r| r == "sell_date"));
    }

    #[test]
    fn render_jsdoc_layout() {
        let doc = DocumentationSchema::from_resource(&product());
        let rendered = doc.render_jsdoc(13);
        let expected = concat!(
            " *             properties:\n",
            " *               name:\n",
            " *                 type: string\n",
            " *                 example: \"example value\"\n",
            " *               price:\n",
            " *                 type: number\n",
            " *                 example: 99.99\n",
            " *             required:\n",
            " *               - name\n",
            " *               - price\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn render_jsdoc_empty_when_nothing_documented() {
        let d = descriptor(
            "tag",
            TableSchema::default().with_column(ColumnMetadata::new("id", "int", false)),
        );
        assert_eq!(DocumentationSchema::from_resource(&d).render_jsdoc(13), "");
    }
}
