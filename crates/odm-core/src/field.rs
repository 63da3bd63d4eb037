//! # Field Mapping
//!
//! A single field-to-field mapping rule: where a value comes from in the
//! origin object model, where it goes in the destination model, and the
//! optional metadata a mapping engine consults while copying it.
//!
//! `source` and `target` are required by validation, not by the type.
//! Definitions are loaded from external files and may omit either one;
//! [`crate::validator::MappingValidator`] rejects such entries.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One field mapping rule.
///
/// Equality, hashing and the `Display` form cover all five fields.
/// `nullable` and `exclude` are boolean-as-string flags stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    nullable: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    exclude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    converter: Option<String>,
}

impl FieldMapping {
    /// Create a mapping from `source` to `target` with no metadata.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Create a mapping whose paths may be absent.
    pub fn from_parts(source: Option<String>, target: Option<String>) -> Self {
        Self {
            source,
            target,
            ..Self::default()
        }
    }

    /// Set the nullability flag.
    pub fn with_nullable(mut self, nullable: impl Into<String>) -> Self {
        self.nullable = Some(nullable.into());
        self
    }

    /// Set the exclusion flag.
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    /// Set the converter reference.
    pub fn with_converter(mut self, converter: impl Into<String>) -> Self {
        self.converter = Some(converter.into());
        self
    }

    /// Field path in the origin object model.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Field path in the destination object model.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn nullable(&self) -> Option<&str> {
        self.nullable.as_deref()
    }

    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_deref()
    }

    /// Name of the custom conversion to apply, if any.
    pub fn converter(&self) -> Option<&str> {
        self.converter.as_deref()
    }

    /// True when both `source` and `target` are present.
    ///
    /// An empty string counts as present.
    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }
}

/// Accept a flag written as a string or as any bare scalar, keeping its text.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Text(String),
        Bool(bool),
        Int(i64),
        UInt(u64),
        Float(f64),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
        Flag::Text(s) => s,
        Flag::Bool(b) => b.to_string(),
        Flag::Int(n) => n.to_string(),
        Flag::UInt(n) => n.to_string(),
        Flag::Float(x) => x.to_string(),
    }))
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_null(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("null")
        }
        write!(
            f,
            "FieldMapping(source={}, target={}, nullable={}, exclude={}, converter={})",
            or_null(&self.source),
            or_null(&self.target),
            or_null(&self.nullable),
            or_null(&self.exclude),
            or_null(&self.converter),
        )
    }
}
