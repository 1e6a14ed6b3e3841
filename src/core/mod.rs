//! Validation pipeline.
//!
//! The stages run strictly in order, each over plain filesystem input:
//!
//! 1. `scanner`: walk the source root and extract keys from `fl!` lines
//! 2. `keys`: deduplicate the extracted keys into the reference set
//! 3. `fluent`: parse `key = value` lines of each resource file
//! 4. `checker`: compare every language against the reference set

pub mod checker;
pub mod context;
pub mod fluent;
pub mod keys;
pub mod scanner;

pub use checker::{CheckOutcome, EnvironmentError, FileReport, LanguageReport, run_check};
pub use context::{CheckContext, MissingKeyScope};
pub use fluent::{FluentEntry, FluentFile};
pub use keys::ReferenceKeys;
pub use scanner::{ExtractedKey, KeyMatcher, SourceScan};
