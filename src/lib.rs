//! @ai:module:intent Simplex landmark parser and semantic linter
//! @ai:module:layer infrastructure
//! @ai:module:public_api builder, checks, config, heuristics, linter, output, scanner, signature, spec, vocabulary, error
//! @ai:module:stateless true
//!
//! # Simplex Lint
//!
//! Simplex specifications have no formal grammar. Structure comes from uppercase
//! landmark headers (`FUNCTION:`, `RULES:`, `DONE_WHEN:`, ...) whose content runs until
//! the next landmark. This crate recovers that structure and runs structural and
//! semantic checks that produce coded diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use simplex_lint::{lint, parse};
//!
//! let text = "FUNCTION: add(a, b) → int\nRULES:\n- sum the inputs\nDONE_WHEN:\n- result returned\nEXAMPLES:\n(1, 2) → 3\nERRORS:\n- none";
//!
//! let spec = parse(text);
//! assert_eq!(spec.functions[0].inputs, vec!["a", "b"]);
//!
//! let result = lint(text);
//! assert!(result.valid);
//! ```

pub mod builder;
pub mod checks;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod linter;
pub mod output;
pub mod scanner;
pub mod signature;
pub mod spec;
pub mod vocabulary;

pub use builder::{parse, parse_with};
pub use config::LintConfig;
pub use error::{Error, Result};
pub use linter::{
    lint, lint_directory, lint_file, lint_parsed, lint_with_config, Diagnostic, FileReport,
    LintReport, LintResult,
};
pub use output::{format_lint_result, format_parsed_spec, format_report, to_json, OutputFormat};
pub use spec::{FunctionBlock, LandmarkMatch, ParsedSpec};
pub use vocabulary::Vocabulary;
