//! @ai:module:intent Format lint results and parsed specs as text or JSON
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_lint_result, format_report, format_parsed_spec, to_json
//! @ai:module:depends_on linter, spec
//! @ai:module:stateless true

use crate::linter::{Diagnostic, LintReport, LintResult};
use crate::spec::ParsedSpec;
use colored::Colorize;
use serde::Serialize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a single document's lint result
/// @ai:effects pure
pub fn format_lint_result(result: &LintResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(result, false),
        OutputFormat::JsonPretty => to_json(result, true),
        OutputFormat::Text => {
            let mut output = String::new();
            push_diagnostics(&mut output, result, "");
            output.push('\n');
            push_summary(&mut output, result.errors.len(), result.warnings.len());
            output
        }
    }
}

/// @ai:intent Format an aggregated report over one or more files
/// @ai:effects pure
pub fn format_report(report: &LintReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(report, false),
        OutputFormat::JsonPretty => to_json(report, true),
        OutputFormat::Text => format_report_text(report),
    }
}

fn format_report_text(report: &LintReport) -> String {
    let mut output = String::new();

    for file in &report.files {
        let prefix = format!("{}: ", file.path.display());
        push_diagnostics(&mut output, &file.result, &prefix);
    }

    output.push('\n');
    output.push_str(&format!(
        "Checked {} files, {} functions\n",
        report.files_checked, report.functions_checked
    ));
    push_summary(&mut output, report.errors, report.warnings);

    output
}

fn push_diagnostics(output: &mut String, result: &LintResult, prefix: &str) {
    for diagnostic in &result.errors {
        push_diagnostic(output, "ERROR".red().bold().to_string(), diagnostic, prefix);
    }
    for diagnostic in &result.warnings {
        push_diagnostic(output, "WARN".yellow().bold().to_string(), diagnostic, prefix);
    }
}

fn push_diagnostic(output: &mut String, severity: String, diagnostic: &Diagnostic, prefix: &str) {
    let location = format!("{}{}", prefix, diagnostic.location);
    output.push_str(&format!(
        "{} {} - {} ({})\n",
        severity,
        location.dimmed(),
        diagnostic.message,
        diagnostic.code.dimmed()
    ));
}

fn push_summary(output: &mut String, errors: usize, warnings: usize) {
    if errors > 0 {
        output.push_str(&format!(
            "{} errors, {} warnings\n",
            errors.to_string().red().bold(),
            warnings.to_string().yellow()
        ));
    } else if warnings > 0 {
        output.push_str(&format!(
            "{} {} warnings\n",
            "OK".green().bold(),
            warnings.to_string().yellow()
        ));
    } else {
        output.push_str(&format!("{} No issues found\n", "OK".green().bold()));
    }
}

/// @ai:intent Format a parsed spec
/// @ai:effects pure
pub fn format_parsed_spec(spec: &ParsedSpec, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(spec, false),
        OutputFormat::JsonPretty => to_json(spec, true),
        OutputFormat::Text => format_parsed_spec_text(spec),
    }
}

fn format_parsed_spec_text(spec: &ParsedSpec) -> String {
    let mut output = String::new();

    output.push_str(&format!("Functions ({}):\n", spec.functions.len()));
    for func in &spec.functions {
        output.push_str(&format!(
            "  {} (line {})\n",
            func.name.cyan(),
            func.line_number
        ));

        if !func.inputs.is_empty() {
            output.push_str(&format!("    inputs: {}\n", func.inputs.join(", ")));
        }
        if !func.return_type.is_empty() {
            output.push_str(&format!("    returns: {}\n", func.return_type));
        }
        if !func.landmarks.is_empty() {
            let names: Vec<&str> = func.landmarks.keys().map(String::as_str).collect();
            output.push_str(&format!("    landmarks: {}\n", names.join(", ")));
        }
    }

    if !spec.data_blocks.is_empty() {
        output.push_str(&format!("\nData ({}):\n", spec.data_blocks.len()));
        for data in &spec.data_blocks {
            let name = data.content.split_whitespace().next().unwrap_or("(empty)");
            output.push_str(&format!("  {} (line {})\n", name.cyan(), data.line_number));
        }
    }

    if !spec.constraints.is_empty() {
        output.push_str(&format!("\nConstraints ({}):\n", spec.constraints.len()));
        for constraint in &spec.constraints {
            let first = constraint.content.lines().next().unwrap_or("");
            output.push_str(&format!("  line {}: {}\n", constraint.line_number, first));
        }
    }

    output
}

/// @ai:intent Format any serializable value as JSON
/// @ai:effects pure
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap_or_default()
    } else {
        serde_json::to_string(value).unwrap_or_default()
    }
}
