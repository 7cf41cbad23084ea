//! @ai:module:intent Read-only word tables the parser and checks consult
//! @ai:module:layer domain
//! @ai:module:public_api Vocabulary, FUNCTION_LANDMARKS, BUILTIN_TYPES, COLLECTION_PREFIXES, GRADING_KINDS, DETERMINISM_LEVELS
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Landmark that opens a function block.
pub const FUNCTION: &str = "FUNCTION";
/// Landmark that defines a data type.
pub const DATA: &str = "DATA";
/// Landmark that states a spec-wide constraint.
pub const CONSTRAINT: &str = "CONSTRAINT";

pub const RULES: &str = "RULES";
pub const DONE_WHEN: &str = "DONE_WHEN";
pub const EXAMPLES: &str = "EXAMPLES";
pub const ERRORS: &str = "ERRORS";
pub const BASELINE: &str = "BASELINE";
pub const EVAL: &str = "EVAL";
pub const DETERMINISM: &str = "DETERMINISM";

/// Sub-landmarks that attach to the nearest preceding FUNCTION.
pub const FUNCTION_LANDMARKS: &[&str] = &[
    RULES,
    DONE_WHEN,
    EXAMPLES,
    ERRORS,
    "READS",
    "WRITES",
    "TRIGGERS",
    "NOT_ALLOWED",
    "HANDOFF",
    "UNCERTAIN",
    BASELINE,
    EVAL,
    DETERMINISM,
];

/// Return-type words accepted without a matching DATA block.
pub const BUILTIN_TYPES: &[&str] = &[
    "string", "int", "integer", "number", "bool", "boolean", "float", "double", "list",
    "array", "map", "dict", "any", "void", "none", "null", "result", "output", "sum",
    "filtered", "valid", "issues", "timestamp", "id",
];

/// Collection prefixes stripped (once) from a normalized return type.
pub const COLLECTION_PREFIXES: &[&str] = &["listof", "arrayof", "setof"];

/// Accepted values of the EVAL `grading` field.
pub const GRADING_KINDS: &[&str] = &["code", "model", "outcome"];

/// Accepted values of the DETERMINISM `level` field.
pub const DETERMINISM_LEVELS: &[&str] = &["strict", "structural", "semantic"];

/// @ai:intent Substitutable word tables for landmark recognition and type resolution
/// @ai:invariant builtin_types entries are lowercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub function_landmarks: BTreeSet<String>,
    pub builtin_types: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            function_landmarks: FUNCTION_LANDMARKS.iter().map(|s| s.to_string()).collect(),
            builtin_types: BUILTIN_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// @ai:intent Check whether a landmark name attaches to the current function
    /// @ai:effects pure
    pub fn is_function_landmark(&self, name: &str) -> bool {
        self.function_landmarks.contains(name)
    }

    /// @ai:intent Check whether a normalized type name is builtin
    /// @ai:effects pure
    pub fn is_builtin_type(&self, name: &str) -> bool {
        self.builtin_types.contains(name)
    }

    /// @ai:intent Replace the builtin type table, lowercasing every entry
    /// @ai:effects pure
    pub fn with_builtin_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.builtin_types = types
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_has_thirteen_landmarks() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.function_landmarks.len(), 13);
        assert!(vocab.is_function_landmark("NOT_ALLOWED"));
        assert!(!vocab.is_function_landmark("FUNCTION"));
        assert!(!vocab.is_function_landmark("rules"));
    }

    #[test]
    fn test_with_builtin_types_lowercases() {
        let vocab = Vocabulary::default().with_builtin_types(["Widget"]);
        assert!(vocab.is_builtin_type("widget"));
        assert!(!vocab.is_builtin_type("string"));
    }
}
