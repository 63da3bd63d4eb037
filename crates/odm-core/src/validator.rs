//! # Mapping Validation
//!
//! Structural checks run on a [`MappingSpecification`] before a mapping
//! engine consumes it.
//!
//! ## Rules
//!
//! Checked in this order; the first violation is returned:
//!
//! 1. Every entry has both a `source` and a `target`. Entries are scanned
//!    in declaration order and the scan stops at the first incomplete one.
//! 2. The mapper name is present and non-empty. Whitespace is not trimmed.
//!
//! A specification that violates both rules reports rule 1. `nullable`,
//! `exclude` and `converter` never affect the outcome.

use crate::error::InvalidMappingDefinition;
use crate::specification::MappingSpecification;

/// Stateless validator for mapping specifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingValidator;

impl MappingValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check `spec` for structural well-formedness.
    ///
    /// # Errors
    ///
    /// - [`InvalidMappingDefinition::InvalidSourceTarget`] if any entry
    ///   lacks a source or target.
    /// - [`InvalidMappingDefinition::MissingMapperName`] if the mapper name
    ///   is absent or empty.
    pub fn validate_mapping(
        &self,
        spec: &MappingSpecification,
    ) -> Result<(), InvalidMappingDefinition> {
        if let Some(index) = spec.mapping().iter().position(|m| !m.is_complete()) {
            return Err(InvalidMappingDefinition::InvalidSourceTarget { index });
        }
        if spec.mapper_name().map_or(true, str::is_empty) {
            return Err(InvalidMappingDefinition::MissingMapperName);
        }
        Ok(())
    }
}

/// Validate `spec` with a default [`MappingValidator`].
pub fn validate_mapping(spec: &MappingSpecification) -> Result<(), InvalidMappingDefinition> {
    MappingValidator.validate_mapping(spec)
}
