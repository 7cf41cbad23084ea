//! @ai:module:intent Structural and semantic validation passes over a parsed spec
//! @ai:module:layer application
//! @ai:module:public_api Check, FUNCTION_CHECKS, check_function_exists, check_required_landmarks, check_data_references, check_complexity, check_evolution, check_determinism
//! @ai:module:depends_on spec, heuristics, config, vocabulary, linter
//! @ai:module:stateless true
//!
//! Every pass reads the spec and only appends to the result. Codes are a stable
//! contract; message text is not.

use crate::config::LintConfig;
use crate::heuristics::{count_branches, count_examples, extract_rule_items};
use crate::linter::{LintResult, SPEC_LOCATION};
use crate::spec::ParsedSpec;
use crate::vocabulary::{
    BASELINE, COLLECTION_PREFIXES, DETERMINISM, DETERMINISM_LEVELS, DONE_WHEN, ERRORS, EVAL,
    EXAMPLES, GRADING_KINDS, RULES,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static THRESHOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^pass[\^@][0-9]+$").expect("Invalid regex"));

/// Signature shared by every validation pass.
pub type Check = fn(&ParsedSpec, &LintConfig, &mut LintResult);

/// Passes run once at least one FUNCTION exists, in this order.
pub const FUNCTION_CHECKS: [Check; 5] = [
    check_required_landmarks,
    check_data_references,
    check_complexity,
    check_evolution,
    check_determinism,
];

const REQUIRED_LANDMARKS: [(&str, &str); 4] = [
    (RULES, "E002"),
    (DONE_WHEN, "E003"),
    (EXAMPLES, "E004"),
    (ERRORS, "E005"),
];

/// @ai:intent Error E001 when the document has no FUNCTION block
/// @ai:effects pure
pub fn check_function_exists(spec: &ParsedSpec, _config: &LintConfig, result: &mut LintResult) {
    if spec.functions.is_empty() {
        result.error("E001", "No FUNCTION block found", SPEC_LOCATION);
    }
}

/// @ai:intent Errors E002-E005 for each function missing RULES, DONE_WHEN, EXAMPLES, or ERRORS
/// @ai:effects pure
pub fn check_required_landmarks(spec: &ParsedSpec, _config: &LintConfig, result: &mut LintResult) {
    for func in &spec.functions {
        for (landmark, code) in REQUIRED_LANDMARKS {
            if !func.has_landmark(landmark) {
                result.error(
                    code,
                    format!("FUNCTION missing {} landmark", landmark),
                    func.location(),
                );
            }
        }
    }
}

/// @ai:intent Warning E006 for return types that are neither builtin nor defined by a DATA block
/// @ai:pre skipped entirely when the spec has no DATA blocks
/// @ai:effects pure
pub fn check_data_references(spec: &ParsedSpec, config: &LintConfig, result: &mut LintResult) {
    if spec.data_blocks.is_empty() {
        return;
    }

    let defined: HashSet<String> = spec
        .data_blocks
        .iter()
        .filter_map(|data| data.content.split_whitespace().next())
        .map(str::to_lowercase)
        .collect();

    for func in &spec.functions {
        if func.return_type.is_empty() {
            continue;
        }

        let normalized = normalize_type(&func.return_type);
        if !config.vocabulary.is_builtin_type(&normalized)
            && !defined.contains(&normalized)
            && !defined.contains(&func.return_type.to_lowercase())
        {
            result.warning(
                "E006",
                format!(
                    "Return type '{}' may reference undefined DATA type",
                    func.return_type
                ),
                func.location(),
            );
        }
    }
}

/// @ai:intent Lowercase, drop whitespace and underscores, strip one collection prefix
/// @ai:example ("List of Order_Item") -> "orderitem"
/// @ai:example ("listof") -> "listof"
/// @ai:effects pure
fn normalize_type(return_type: &str) -> String {
    let normalized: String = return_type
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    COLLECTION_PREFIXES
        .iter()
        .find_map(|&prefix| {
            normalized
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty())
                .map(str::to_string)
        })
        .unwrap_or(normalized)
}

/// @ai:intent Size limits on functions, inputs, and rules plus example coverage of rule branches
/// @ai:effects pure
pub fn check_complexity(spec: &ParsedSpec, config: &LintConfig, result: &mut LintResult) {
    if spec.functions.len() > config.max_functions {
        result.warning(
            "W011",
            format!(
                "Spec has {} FUNCTION blocks (max recommended: {})",
                spec.functions.len(),
                config.max_functions
            ),
            SPEC_LOCATION,
        );
    }

    for func in &spec.functions {
        let loc = func.location();

        if func.inputs.len() > config.max_inputs {
            result.error(
                "E011",
                format!(
                    "FUNCTION has {} inputs (max {})",
                    func.inputs.len(),
                    config.max_inputs
                ),
                loc.as_str(),
            );
        }

        // Empty blocks count as missing.
        let rules = func.landmark_content(RULES);
        if !rules.is_empty() {
            let items = extract_rule_items(rules);
            if items.len() > config.max_rules {
                result.error(
                    "E010",
                    format!(
                        "RULES block has {} items (max {})",
                        items.len(),
                        config.max_rules
                    ),
                    loc.as_str(),
                );
            }

            for (idx, item) in items.iter().enumerate() {
                let length = item.chars().count();
                if length > config.max_rule_length {
                    result.warning(
                        "W010",
                        format!(
                            "RULES item {} exceeds {} characters ({} chars)",
                            idx + 1,
                            config.max_rule_length,
                            length
                        ),
                        loc.as_str(),
                    );
                }
            }
        }

        let examples = func.landmark_content(EXAMPLES);
        if !rules.is_empty() && !examples.is_empty() {
            let branches = count_branches(rules);
            let example_count = count_examples(examples);
            if example_count < branches {
                result.error(
                    "E012",
                    format!(
                        "EXAMPLES has {} items but RULES has {} branches",
                        example_count, branches
                    ),
                    loc.as_str(),
                );
            }
        }
    }
}

/// @ai:intent Consistency of the BASELINE/EVAL evolution pair (E050-E052, E060-E065)
/// @ai:effects pure
pub fn check_evolution(spec: &ParsedSpec, _config: &LintConfig, result: &mut LintResult) {
    for func in &spec.functions {
        let loc = func.location();
        let has_baseline = func.has_landmark(BASELINE);
        let has_eval = func.has_landmark(EVAL);

        if has_baseline && !has_eval {
            result.error("E060", "BASELINE present without EVAL landmark", loc.as_str());
        }

        if has_baseline {
            let content = func.landmark_content(BASELINE).to_lowercase();
            for (field, code) in [("reference", "E050"), ("preserve", "E051"), ("evolve", "E052")] {
                let tight = format!("{}:", field);
                let spaced = format!("{} :", field);
                if !content.contains(&tight) && !content.contains(&spaced) {
                    result.error(
                        code,
                        format!("BASELINE missing '{}' field", field),
                        loc.as_str(),
                    );
                }
            }
        }

        if has_eval {
            let fields = EvalFields::parse(func.landmark_content(EVAL));

            if fields.preserve.is_none() {
                result.error("E061", "EVAL missing 'preserve' threshold", loc.as_str());
            }
            if fields.evolve.is_none() {
                result.error("E062", "EVAL missing 'evolve' threshold", loc.as_str());
            }

            for (field, value, code) in [
                ("preserve", &fields.preserve, "E063"),
                ("evolve", &fields.evolve, "E064"),
            ] {
                if let Some(value) = value.as_deref() {
                    if !value.is_empty() && !THRESHOLD_RE.is_match(value) {
                        result.error(
                            code,
                            format!(
                                "Invalid {} threshold '{}' (expected pass^k or pass@k)",
                                field, value
                            ),
                            loc.as_str(),
                        );
                    }
                }
            }

            if let Some(grading) = fields.grading.as_deref() {
                if !grading.is_empty() && !GRADING_KINDS.contains(&grading) {
                    result.error(
                        "E065",
                        format!(
                            "Invalid grading type '{}' (expected: code, model, or outcome)",
                            grading
                        ),
                        loc.as_str(),
                    );
                }
            }
        }
    }
}

/// @ai:intent Threshold and grading fields read from EVAL content
#[derive(Debug, Default, PartialEq, Eq)]
struct EvalFields {
    preserve: Option<String>,
    evolve: Option<String>,
    grading: Option<String>,
}

impl EvalFields {
    /// @ai:intent Read fields line by line; the last occurrence of a key wins
    /// @ai:effects pure
    fn parse(content: &str) -> Self {
        let mut fields = Self::default();

        for line in content.lines() {
            let line = line.trim().to_lowercase();
            if let Some(value) = field_value(&line, "preserve") {
                fields.preserve = Some(value);
            } else if let Some(value) = field_value(&line, "evolve") {
                fields.evolve = Some(value);
            } else if let Some(value) = field_value(&line, "grading") {
                fields.grading = Some(value);
            }
        }

        fields
    }
}

/// @ai:intent Value of a `key:` / `key :` line, taken from between the first and second colon
/// @ai:pre line is trimmed and lowercased
/// @ai:example ("preserve: pass^3", "preserve") -> Some("pass^3")
/// @ai:example ("grading : code: extra", "grading") -> Some("code")
/// @ai:effects pure
fn field_value(line: &str, key: &str) -> Option<String> {
    let rest = line.strip_prefix(key)?;
    if !rest.starts_with(':') && !rest.starts_with(" :") {
        return None;
    }

    Some(line.split(':').nth(1).unwrap_or("").trim().to_string())
}

/// @ai:intent Error E070 when a DETERMINISM landmark lacks a valid level
/// @ai:effects pure
pub fn check_determinism(spec: &ParsedSpec, _config: &LintConfig, result: &mut LintResult) {
    for func in &spec.functions {
        if !func.has_landmark(DETERMINISM) {
            continue;
        }

        let loc = format!("{} {}", func.location(), DETERMINISM);
        let level = func
            .landmark_content(DETERMINISM)
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter_map(|line| field_value(&line, "level"))
            .last()
            .unwrap_or_default();

        if level.is_empty() {
            result.error(
                "E070",
                "DETERMINISM requires level field (strict, structural, or semantic)",
                loc,
            );
        } else if !DETERMINISM_LEVELS.contains(&level.as_str()) {
            result.error(
                "E070",
                format!(
                    "DETERMINISM level must be strict, structural, or semantic, got: {}",
                    level
                ),
                loc,
            );
        }
    }
}
