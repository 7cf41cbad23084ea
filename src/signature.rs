//! @ai:module:intent Parse a FUNCTION header line into name, inputs, and return type
//! @ai:module:layer application
//! @ai:module:public_api Signature, parse_signature
//! @ai:module:stateless true

use once_cell::sync::Lazy;
use regex::Regex;

static SIGNATURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*\(([^)]*)\)\s*(?:→|->)\s*(.+)$").expect("Invalid regex")
});

/// @ai:intent Fields recovered from a function signature line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub line: String,
    pub name: String,
    pub inputs: Vec<String>,
    pub return_type: String,
}

/// @ai:intent Parse the first line of a FUNCTION landmark's content
/// @ai:post on no match, name is the whole trimmed line and inputs/return_type are empty
/// @ai:example ("f(a, b) → int") -> name "f", inputs ["a", "b"], return_type "int"
/// @ai:example ("just words") -> name "just words", inputs [], return_type ""
/// @ai:effects pure
pub fn parse_signature(content: &str) -> Signature {
    let line = content.lines().next().unwrap_or("").trim();

    match SIGNATURE_RE.captures(line) {
        Some(captures) => Signature {
            line: line.to_string(),
            name: captures[1].to_string(),
            inputs: split_inputs(&captures[2]),
            return_type: captures[3].trim().to_string(),
        },
        None => Signature {
            line: line.to_string(),
            name: line.to_string(),
            ..Default::default()
        },
    }
}

fn split_inputs(args: &str) -> Vec<String> {
    args.split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .map(str::to_string)
        .collect()
}
