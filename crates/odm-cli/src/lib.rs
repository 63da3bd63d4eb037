//! # odm-cli — Mapping Definition Command-Line Interface
//!
//! Validates mapping definition files from the command line so malformed
//! definitions are caught before a mapping engine loads them.
//!
//! ## Subcommands
//!
//! - `validate` — load and validate one or more definition files
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `odm-core` — no validation rules here.

pub mod logging;
pub mod validate;
