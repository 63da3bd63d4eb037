//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used by mapping definitions. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation failures carry one of two fixed messages. Callers that
//!   match on text get stable strings; callers that need more get the
//!   structured variant.
//! - Load failures include the format and the parser's reason.

use thiserror::Error;

use crate::loader::DefinitionFormat;

const INVALID_SOURCE_TARGET: &str = "Invalid Source/Target Definition";
const INVALID_MAPPER_NAME: &str = "Mapper Name cannot be null";

/// A mapping specification failed structural validation.
///
/// The `Display` text of each variant is fixed and forms part of the
/// public contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMappingDefinition {
    /// An entry is missing its source or target path.
    #[error("{}", INVALID_SOURCE_TARGET)]
    InvalidSourceTarget {
        /// Zero-based position of the first offending entry.
        index: usize,
    },

    /// The specification has no mapper name, or an empty one.
    #[error("{}", INVALID_MAPPER_NAME)]
    MissingMapperName,
}

impl InvalidMappingDefinition {
    /// The human-readable failure message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidSourceTarget { .. } => INVALID_SOURCE_TARGET,
            Self::MissingMapperName => INVALID_MAPPER_NAME,
        }
    }
}

/// Top-level error type for loading and validating mapping definitions.
#[derive(Error, Debug)]
pub enum OdmError {
    /// The definition parsed but is not well-formed.
    #[error("invalid mapping definition: {0}")]
    InvalidMapping(#[from] InvalidMappingDefinition),

    /// The definition text could not be parsed.
    #[error("{format} parse error: {reason}")]
    Parse {
        /// Format the text was parsed as.
        format: DefinitionFormat,
        /// Parser diagnostic.
        reason: String,
    },

    /// The file extension does not identify a known definition format.
    #[error("unsupported definition format for '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
