//! # odm-core — Field Mapping Definitions
//!
//! Declares how fields of one object model map onto another, and checks
//! those declarations before a mapping engine consumes them. The engine
//! that actually copies values is not part of this crate.
//!
//! ## Key Types
//!
//! - [`FieldMapping`] — one rule: `source` path, `target` path, and the
//!   optional `nullable`, `exclude` and `converter` metadata.
//! - [`MappingSpecification`] — a mapper name plus its ordered rules.
//! - [`MappingValidator`] — stateless structural checks with two fixed
//!   failure messages, reported in a fixed order.
//!
//! ## Loading
//!
//! The [`loader`] module reads specifications from YAML or JSON files.
//! Loading never validates implicitly; call [`validate_mapping`] or use
//! [`loader::load_and_validate`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Validation performs no IO and writes no logs.

pub mod error;
pub mod field;
pub mod loader;
pub mod specification;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use error::{InvalidMappingDefinition, OdmError};
pub use field::FieldMapping;
pub use loader::DefinitionFormat;
pub use specification::MappingSpecification;
pub use validator::{validate_mapping, MappingValidator};
