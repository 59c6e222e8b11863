use crate::domain::{
    entities::{ArtifactSet, ResourceDescriptor},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_artifact_set(set: &ArtifactSet) -> Result<(), DomainError> {
        set.validate()
    }

    /// Every column must have a name and a reported type.
    pub fn validate_descriptor(resource: &ResourceDescriptor) -> Result<(), DomainError> {
        for column in resource.columns() {
            if column.name.trim().is_empty() {
                return Err(DomainError::InvalidColumn(format!(
                    "column without a name in table '{}'",
                    resource.table_name()
                )));
            }
            if column.data_type.trim().is_empty() {
                return Err(DomainError::InvalidColumn(format!(
                    "column '{}' has no data type",
                    column.name
                )));
            }
        }
        Ok(())
    }
}
