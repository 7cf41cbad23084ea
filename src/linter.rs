//! @ai:module:intent Run the check suite over a document and drive linting of files and directories
//! @ai:module:layer application
//! @ai:module:public_api lint, lint_with_config, lint_parsed, lint_file, lint_directory, Diagnostic, LintResult, FileReport, LintReport
//! @ai:module:depends_on builder, checks, config, spec, error
//! @ai:module:stateless true

use crate::builder::parse_with;
use crate::checks;
use crate::config::LintConfig;
use crate::error::{Error, Result};
use crate::spec::ParsedSpec;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Location used for diagnostics that concern the whole document.
pub const SPEC_LOCATION: &str = "spec";

/// @ai:intent A single coded error or warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub location: String,
}

impl Diagnostic {
    pub fn new(code: &str, message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            location: location.into(),
        }
    }
}

/// @ai:intent Result of linting one document
/// @ai:invariant valid == errors.is_empty() once returned from lint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Default for LintResult {
    fn default() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl LintResult {
    /// @ai:intent Record an error diagnostic
    pub fn error(&mut self, code: &str, message: impl Into<String>, location: impl Into<String>) {
        self.errors.push(Diagnostic::new(code, message, location));
    }

    /// @ai:intent Record a warning diagnostic
    pub fn warning(&mut self, code: &str, message: impl Into<String>, location: impl Into<String>) {
        self.warnings.push(Diagnostic::new(code, message, location));
    }

    /// @ai:intent Codes of all errors, in emission order
    /// @ai:effects pure
    pub fn error_codes(&self) -> Vec<&str> {
        self.errors.iter().map(|d| d.code.as_str()).collect()
    }

    /// @ai:intent Codes of all warnings, in emission order
    /// @ai:effects pure
    pub fn warning_codes(&self) -> Vec<&str> {
        self.warnings.iter().map(|d| d.code.as_str()).collect()
    }

    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

/// @ai:intent Lint a document with the default configuration
/// @ai:post deterministic for identical input
/// @ai:effects pure
pub fn lint(text: &str) -> LintResult {
    lint_with_config(text, &LintConfig::default())
}

/// @ai:intent Parse then lint a document
/// @ai:effects pure
pub fn lint_with_config(text: &str, config: &LintConfig) -> LintResult {
    let spec = parse_with(text, &config.vocabulary);
    lint_parsed(&spec, config)
}

/// @ai:intent Run the check suite over an already parsed document
/// @ai:pre spec was produced by parse or parse_with
/// @ai:post spec is unchanged
/// @ai:effects pure
pub fn lint_parsed(spec: &ParsedSpec, config: &LintConfig) -> LintResult {
    let mut result = LintResult::default();

    checks::check_function_exists(spec, config, &mut result);
    if spec.functions.is_empty() {
        return result.finish();
    }

    for check in checks::FUNCTION_CHECKS {
        check(spec, config, &mut result);
    }

    let result = result.finish();
    tracing::debug!(
        functions = spec.functions.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "linted spec"
    );
    result
}

/// @ai:intent Lint outcome for one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub functions: usize,
    pub result: LintResult,
}

/// @ai:intent Aggregated outcome of linting one or more files
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LintReport {
    pub files: Vec<FileReport>,
    pub files_checked: usize,
    pub functions_checked: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl LintReport {
    /// @ai:intent Check if linting passed (no errors)
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    /// @ai:intent Add a file outcome and update counts
    pub fn push(&mut self, report: FileReport) {
        self.files_checked += 1;
        self.functions_checked += report.functions;
        self.errors += report.result.errors.len();
        self.warnings += report.result.warnings.len();
        self.files.push(report);
    }
}

/// @ai:intent Read and lint a single file; `-` reads stdin
/// @ai:effects fs:read
pub fn lint_file(path: &Path, config: &LintConfig) -> Result<FileReport> {
    let text = read_source(path)?;
    let spec = parse_with(&text, &config.vocabulary);

    Ok(FileReport {
        path: path.to_path_buf(),
        functions: spec.functions.len(),
        result: lint_parsed(&spec, config),
    })
}

/// @ai:intent Lint every spec file under a directory
/// @ai:post an unreadable file is reported as an E000 error rather than aborting the walk
/// @ai:effects fs:read
pub fn lint_directory(path: &Path, config: &LintConfig) -> Result<LintReport> {
    let mut report = LintReport::default();

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| config.is_spec_file(p))
        .collect();
    files.sort();

    for file_path in files {
        match lint_file(&file_path, config) {
            Ok(file_report) => report.push(file_report),
            Err(e) => {
                tracing::warn!("Skipping unreadable file {}: {}", file_path.display(), e);
                let mut result = LintResult::default();
                result.error("E000", format!("Failed to read file: {}", e), SPEC_LOCATION);
                report.push(FileReport {
                    path: file_path,
                    functions: 0,
                    result: result.finish(),
                });
            }
        }
    }

    Ok(report)
}

/// @ai:intent Read document text from a path or stdin
/// @ai:effects fs:read
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const VALID: &str = "FUNCTION: f(a) → int\nRULES:\n- does x\nDONE_WHEN:\n- done\nEXAMPLES:\n(1) → 1\nERRORS:\n- none\n";

    #[test]
    fn test_no_functions_short_circuits() {
        let result = lint("DATA: Widget\nCONSTRAINT: nothing");
        assert!(!result.valid);
        assert_eq!(result.error_codes(), vec!["E001"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_valid_spec() {
        let result = lint(VALID);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_warnings_do_not_affect_validity() {
        let text = format!("DATA: Gadget\n{}", VALID.replace("→ int", "→ Widget"));
        let result = lint(&text);
        assert!(result.valid);
        assert_eq!(result.warning_codes(), vec!["E006"]);
    }

    #[test]
    fn test_lint_file() {
        let mut file = NamedTempFile::with_suffix(".simplex").unwrap();
        write!(file, "{}", VALID).unwrap();

        let report = lint_file(file.path(), &LintConfig::default()).unwrap();
        assert_eq!(report.functions, 1);
        assert!(report.result.valid);
    }

    #[test]
    fn test_lint_file_missing() {
        let err = lint_file(Path::new("/nonexistent/spec.simplex"), &LintConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_lint_directory_filters_extensions() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("good.simplex"), VALID).unwrap();
        std::fs::write(dir.path().join("empty.simplex"), "prose only").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let report = lint_directory(dir.path(), &LintConfig::default()).unwrap();

        assert_eq!(report.files_checked, 2);
        assert_eq!(report.functions_checked, 1);
        assert_eq!(report.errors, 1);
        assert!(!report.passed());
        assert!(report.files[0].path.ends_with("empty.simplex"));
    }
}
