//! # Mapping Specification
//!
//! A named, ordered collection of [`FieldMapping`] rules. This is the unit
//! a definition file describes and the unit the validator checks.

use serde::{Deserialize, Serialize};

use crate::field::FieldMapping;

/// A mapper name plus its field mappings, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MappingSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mapper_name: Option<String>,
    #[serde(default)]
    mapping: Vec<FieldMapping>,
}

impl MappingSpecification {
    /// Create a specification named `mapper_name`.
    pub fn new(mapper_name: impl Into<String>, mapping: Vec<FieldMapping>) -> Self {
        Self {
            mapper_name: Some(mapper_name.into()),
            mapping,
        }
    }

    /// Create a specification with no mapper name.
    pub fn unnamed(mapping: Vec<FieldMapping>) -> Self {
        Self {
            mapper_name: None,
            mapping,
        }
    }

    /// Identifier of the mapper this specification configures.
    pub fn mapper_name(&self) -> Option<&str> {
        self.mapper_name.as_deref()
    }

    /// The field mappings, in declaration order.
    pub fn mapping(&self) -> &[FieldMapping] {
        &self.mapping
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Every entry lacking a source or target, with its position.
    ///
    /// Diagnostic only. Validation stops at the first such entry.
    pub fn invalid_entries(&self) -> impl Iterator<Item = (usize, &FieldMapping)> {
        self.mapping
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_complete())
    }
}
