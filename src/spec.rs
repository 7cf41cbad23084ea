//! @ai:module:intent Define the structural model produced by parsing a Simplex document
//! @ai:module:layer domain
//! @ai:module:public_api LandmarkMatch, FunctionBlock, ParsedSpec
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// @ai:intent One recognized `NAME:` header and the block of text it owns
/// @ai:invariant start_offset <= end_offset; both are byte offsets into the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkMatch {
    pub name: String,
    pub content: String,
    pub line_number: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// @ai:intent One FUNCTION landmark with its parsed signature and attached sub-landmarks
/// @ai:invariant inputs never contains empty strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FunctionBlock {
    pub signature: String,
    pub name: String,
    pub inputs: Vec<String>,
    pub return_type: String,
    pub landmarks: BTreeMap<String, LandmarkMatch>,
    pub line_number: usize,
}

/// @ai:intent Complete structural result of parsing one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSpec {
    pub functions: Vec<FunctionBlock>,
    pub data_blocks: Vec<LandmarkMatch>,
    pub constraints: Vec<LandmarkMatch>,
    pub raw_text: String,
}

impl fmt::Display for LandmarkMatch {
    /// Renders the block back as `NAME: content`, which rescans to the same name and content.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.content)
    }
}

impl FunctionBlock {
    /// @ai:intent Look up an attached sub-landmark by name
    /// @ai:effects pure
    pub fn landmark(&self, name: &str) -> Option<&LandmarkMatch> {
        self.landmarks.get(name)
    }

    /// @ai:intent Check whether a sub-landmark is attached
    /// @ai:effects pure
    pub fn has_landmark(&self, name: &str) -> bool {
        self.landmarks.contains_key(name)
    }

    /// @ai:intent Content of a sub-landmark, empty when absent
    /// @ai:effects pure
    pub fn landmark_content(&self, name: &str) -> &str {
        self.landmark(name).map(|lm| lm.content.as_str()).unwrap_or("")
    }

    /// @ai:intent Diagnostic location label for this function
    /// @ai:example (name "f") -> "FUNCTION f"
    /// @ai:example (name "") -> "FUNCTION (unnamed)"
    /// @ai:effects pure
    pub fn location(&self) -> String {
        if self.name.is_empty() {
            "FUNCTION (unnamed)".to_string()
        } else {
            format!("FUNCTION {}", self.name)
        }
    }
}

impl ParsedSpec {
    /// @ai:intent True when no FUNCTION, DATA, or CONSTRAINT block was found
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.data_blocks.is_empty() && self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_location() {
        let func = FunctionBlock::default();
        assert_eq!(func.location(), "FUNCTION (unnamed)");
    }

    #[test]
    fn test_missing_landmark_content_is_empty() {
        let func = FunctionBlock {
            name: "f".to_string(),
            ..Default::default()
        };
        assert_eq!(func.landmark_content("RULES"), "");
        assert!(!func.has_landmark("RULES"));
        assert_eq!(func.location(), "FUNCTION f");
    }

    #[test]
    fn test_serializes_camel_case() {
        let spec = ParsedSpec::default();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"dataBlocks\""));
        assert!(json.contains("\"rawText\""));
    }
}
