//! # Validate Subcommand
//!
//! Loads each definition file, runs [`MappingValidator`] on it and prints
//! one line per file:
//!
//! ```text
//! OK    mappings/customer.yaml (mapper 'CustomerMapper', 5 field mappings)
//! FAIL  mappings/broken.yaml: invalid mapping definition: Invalid Source/Target Definition
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use odm_core::loader::{load_path, load_path_as};
use odm_core::{
    DefinitionFormat, FieldMapping, InvalidMappingDefinition, MappingSpecification,
    MappingValidator, OdmError,
};
use tracing::{info, warn};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Definition files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Parse every file as this format instead of inferring it from the
    /// extension.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Definition format accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for DefinitionFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => DefinitionFormat::Yaml,
            FormatArg::Json => DefinitionFormat::Json,
        }
    }
}

/// Outcome of a validate run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Every entry behind a source/target failure, with its position.
///
/// Empty for any other failure.
pub fn offending_entries<'a>(
    spec: &'a MappingSpecification,
    err: &InvalidMappingDefinition,
) -> Vec<(usize, &'a FieldMapping)> {
    match err {
        InvalidMappingDefinition::InvalidSourceTarget { .. } => spec.invalid_entries().collect(),
        InvalidMappingDefinition::MissingMapperName => Vec::new(),
    }
}

/// Load and validate a single definition file.
pub fn check_file(
    path: &Path,
    format: Option<DefinitionFormat>,
) -> Result<MappingSpecification, OdmError> {
    let spec = match format {
        Some(format) => load_path_as(path, format)?,
        None => load_path(path)?,
    };

    if let Err(e) = MappingValidator::new().validate_mapping(&spec) {
        for (index, entry) in offending_entries(&spec, &e) {
            warn!(path = %path.display(), index, %entry, "entry is missing source or target");
        }
        return Err(e.into());
    }
    Ok(spec)
}

/// Validate every file in `args`, writing the report to `out`.
///
/// A file that fails to load or validate counts as failed; it does not stop
/// the run. Only a failure to write the report is returned as an error.
pub fn run(args: &ValidateArgs, out: &mut impl Write) -> anyhow::Result<Summary> {
    let format = args.format.map(DefinitionFormat::from);
    let mut summary = Summary::default();

    for path in &args.files {
        let written = match check_file(path, format) {
            Ok(spec) => {
                summary.passed += 1;
                writeln!(
                    out,
                    "OK    {} (mapper '{}', {} field mappings)",
                    path.display(),
                    spec.mapper_name().unwrap_or_default(),
                    spec.len(),
                )
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(out, "FAIL  {}: {e}", path.display())
            }
        };
        written.with_context(|| format!("writing report line for {}", path.display()))?;
    }

    info!(
        passed = summary.passed,
        failed = summary.failed,
        "validation finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn run_to_string(args: &ValidateArgs) -> (Summary, String) {
        let mut out = Vec::new();
        let summary = run(args, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(
            dir.path(),
            "customer.yaml",
            "mapperName: CustomerMapper\nmapping:\n  - source: id\n    target: custId\n",
        );
        let bad = write(
            dir.path(),
            "broken.json",
            r#"{"mapperName": "", "mapping": [{"source": null, "target": "custId"}]}"#,
        );

        let args = ValidateArgs {
            files: vec![good.clone(), bad.clone()],
            format: None,
        };
        let (summary, report) = run_to_string(&args);

        assert_eq!(summary, Summary { passed: 1, failed: 1 });
        assert!(!summary.is_success());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[0],
            format!(
                "OK    {} (mapper 'CustomerMapper', 1 field mappings)",
                good.display()
            )
        );
        assert_eq!(
            lines[1],
            format!(
                "FAIL  {}: invalid mapping definition: Invalid Source/Target Definition",
                bad.display()
            )
        );
    }

    #[test]
    fn test_format_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "customer.txt",
            "mapperName: CustomerMapper\nmapping: []\n",
        );

        assert!(matches!(
            check_file(&path, None),
            Err(OdmError::UnsupportedFormat(_))
        ));

        let args = ValidateArgs {
            files: vec![path],
            format: Some(FormatArg::Yaml),
        };
        let (summary, _) = run_to_string(&args);
        assert!(summary.is_success());
    }

    #[test]
    fn test_missing_name_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "m.yaml", "mapping:\n  - source: a\n    target: b\n");
        let err = check_file(&path, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid mapping definition: Mapper Name cannot be null"
        );
    }

    #[test]
    fn test_offending_entries_lists_every_incomplete_entry() {
        let spec = MappingSpecification::new(
            "CustomerMapper",
            vec![
                FieldMapping::new("id", "custId"),
                FieldMapping::from_parts(Some("email".into()), None),
                FieldMapping::new("name", "fullName"),
                FieldMapping::from_parts(None, Some("dob".into())),
            ],
        );
        let err = MappingValidator::new().validate_mapping(&spec).unwrap_err();
        assert_eq!(err, InvalidMappingDefinition::InvalidSourceTarget { index: 1 });

        let reported: Vec<(usize, Option<&str>, Option<&str>)> = offending_entries(&spec, &err)
            .into_iter()
            .map(|(i, m)| (i, m.source(), m.target()))
            .collect();
        assert_eq!(
            reported,
            vec![(1, Some("email"), None), (3, None, Some("dob"))]
        );
    }

    #[test]
    fn test_offending_entries_empty_for_name_failure() {
        let spec = MappingSpecification::new("", vec![FieldMapping::new("id", "custId")]);
        let err = MappingValidator::new().validate_mapping(&spec).unwrap_err();
        assert_eq!(err, InvalidMappingDefinition::MissingMapperName);
        assert!(offending_entries(&spec, &err).is_empty());
    }

    #[test]
    fn test_missing_file_counts_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            files: vec![dir.path().join("absent.yaml")],
            format: None,
        };
        let (summary, report) = run_to_string(&args);
        assert_eq!(summary.failed, 1);
        assert!(report.starts_with("FAIL  "));
    }
}
