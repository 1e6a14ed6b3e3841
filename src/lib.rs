//! fluent-check - Fluent translation checker for `fl!` lookups
//!
//! fluent-check is a CLI tool and library that cross-validates Fluent (`.ftl`)
//! resource files against the translation keys referenced in source code. It
//! detects keys missing from a language, keys that are never used, duplicate
//! keys, and resource files with the wrong extension.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Validation pipeline (scan, aggregate, parse, cross-check)
//! - `issues`: Issue type definitions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
