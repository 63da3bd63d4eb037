//! # Definition Loading
//!
//! Reads [`MappingSpecification`]s from YAML or JSON definition files.
//!
//! ```yaml
//! mapperName: CustomerMapper
//! mapping:
//!   - source: id
//!     target: custId
//!   - source: dob
//!     target: birthDate
//!     nullable: "true"
//!     converter: isoDateConverter
//! ```
//!
//! Parsing and validation are separate steps. [`load_path`] only parses,
//! so a file with a missing `mapperName` or an entry without `target`
//! loads successfully. [`load_and_validate`] runs both.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::OdmError;
use crate::specification::MappingSpecification;
use crate::validator::MappingValidator;

/// Serialization format of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionFormat {
    Yaml,
    Json,
}

impl DefinitionFormat {
    /// Infer the format from a file extension (`.yaml`, `.yml`, `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`OdmError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, OdmError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| OdmError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefinitionFormat {
    type Err = OdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(OdmError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Parse a specification from text in the given format.
///
/// # Errors
///
/// Returns [`OdmError::Parse`] if the text is not a valid definition.
pub fn from_str(text: &str, format: DefinitionFormat) -> Result<MappingSpecification, OdmError> {
    let parsed = match format {
        DefinitionFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        DefinitionFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| OdmError::Parse { format, reason })
}

/// Load a specification, inferring the format from the file extension.
///
/// # Errors
///
/// Returns [`OdmError::UnsupportedFormat`], [`OdmError::Io`] or
/// [`OdmError::Parse`].
pub fn load_path(path: impl AsRef<Path>) -> Result<MappingSpecification, OdmError> {
    let path = path.as_ref();
    let format = DefinitionFormat::from_path(path)?;
    load_path_as(path, format)
}

/// Load a specification, parsing it as `format` regardless of extension.
pub fn load_path_as(
    path: impl AsRef<Path>,
    format: DefinitionFormat,
) -> Result<MappingSpecification, OdmError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let spec = from_str(&text, format)?;
    debug!(
        path = %path.display(),
        %format,
        mapper = spec.mapper_name().unwrap_or_default(),
        entries = spec.len(),
        "loaded mapping definition"
    );
    Ok(spec)
}

/// Load a specification and check it with [`MappingValidator`].
///
/// # Errors
///
/// Everything [`load_path`] returns, plus [`OdmError::InvalidMapping`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<MappingSpecification, OdmError> {
    let spec = load_path(path)?;
    MappingValidator::new().validate_mapping(&spec)?;
    Ok(spec)
}
