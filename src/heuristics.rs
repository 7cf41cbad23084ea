//! @ai:module:intent Keyword heuristics over RULES and EXAMPLES text used by the complexity check
//! @ai:module:layer domain
//! @ai:module:public_api extract_rule_items, count_examples, count_branches
//! @ai:module:stateless true

use once_cell::sync::Lazy;
use regex::Regex;

// Keyword boundaries are ASCII-only: non-ASCII letters count as separators.
fn keyword_re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex")
}

static IF_OR_RE: Lazy<Regex> =
    Lazy::new(|| keyword_re(r"(?-u:\b)if(?-u:\b)[^,\n]*(?-u:\b)or(?-u:\b)"));
static IF_ELSE_RE: Lazy<Regex> =
    Lazy::new(|| keyword_re(r"(?-u:\b)if(?-u:\b)[^,\n]*(otherwise|else)(?-u:\b)"));
static IF_RE: Lazy<Regex> =
    Lazy::new(|| keyword_re(r"(?-u:\b)if(?-u:\b)"));
static WHEN_RE: Lazy<Regex> =
    Lazy::new(|| keyword_re(r"(?-u:\b)when(?-u:\b)"));
static OPTIONALLY_RE: Lazy<Regex> =
    Lazy::new(|| keyword_re(r"(?-u:\b)optionally(?-u:\b)"));
static EITHER_OR_RE: Lazy<Regex> =
    Lazy::new(|| keyword_re(r"(?-u:\b)either(?-u:\b)[^,\n]*(?-u:\b)or(?-u:\b)"));

/// @ai:intent Split RULES content into rule items
/// @ai:post bulleted lines (`-`) are items with the marker stripped; with no bullets every non-blank line is an item
/// @ai:example ("- a\n- b") -> ["a", "b"]
/// @ai:example ("a\n\nb") -> ["a", "b"]
/// @ai:effects pure
pub fn extract_rule_items(rules: &str) -> Vec<String> {
    let bulleted: Vec<String> = rules
        .lines()
        .filter_map(|line| line.trim().strip_prefix('-'))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if !bulleted.is_empty() {
        return bulleted;
    }

    rules
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// @ai:intent Count example lines in EXAMPLES content
/// @ai:post a non-blank line counts when it starts with `(` or contains `→` or `->`
/// @ai:effects pure
pub fn count_examples(examples: &str) -> usize {
    examples
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.starts_with('(') || line.contains('→') || line.contains("->"))
        .count()
}

/// @ai:intent Approximate the number of decision branches in natural-language rules
/// @ai:post result >= 1 whenever rules is non-blank
/// @ai:example ("if a or b, do x") -> 2
/// @ai:example ("- does x") -> 1
/// @ai:example ("") -> 0
/// @ai:complexity keyword-based; over- and under-counts are expected
/// @ai:effects pure
pub fn count_branches(rules: &str) -> usize {
    let content = rules.to_lowercase();

    let if_or = IF_OR_RE.find_iter(&content).count();
    let if_else = IF_ELSE_RE.find_iter(&content).count();
    let all_ifs = IF_RE.find_iter(&content).count();

    let mut count = if_or * 2 + if_else * 2;
    count += all_ifs.saturating_sub(if_or + if_else);
    count += WHEN_RE.find_iter(&content).count();
    count += OPTIONALLY_RE.find_iter(&content).count() * 2;
    count += EITHER_OR_RE.find_iter(&content).count() * 2;

    if count == 0 && !rules.trim().is_empty() {
        count = 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulleted_rule_items() {
        let items = extract_rule_items("- first\n  - second  \nnot an item\n-\n");
        assert_eq!(items, vec!["first", "second"]);
    }

    #[test]
    fn test_unbulleted_rule_items_fallback() {
        let items = extract_rule_items("first rule\n\n  second rule  ");
        assert_eq!(items, vec!["first rule", "second rule"]);
    }

    #[test]
    fn test_bare_dash_lines_fall_back_to_all_lines() {
        let items = extract_rule_items("-\nplain");
        assert_eq!(items, vec!["-", "plain"]);
    }

    #[test]
    fn test_count_examples() {
        let examples = "(1, 2) → 3\nx -> y\n\njust prose\n  (start)";
        assert_eq!(count_examples(examples), 3);
        assert_eq!(count_examples(""), 0);
    }

    #[test]
    fn test_if_or_counts_two() {
        assert_eq!(count_branches("if a or b, do x"), 2);
    }

    #[test]
    fn test_if_else_counts_two() {
        assert_eq!(count_branches("If valid return it else fail"), 2);
        assert_eq!(count_branches("if empty return zero otherwise sum"), 2);
    }

    #[test]
    fn test_comma_breaks_if_or_clause() {
        // "if a, or b" is a bare if
        assert_eq!(count_branches("if a, or b"), 1);
    }

    #[test]
    fn test_when_optionally_either() {
        assert_eq!(count_branches("when ready, proceed"), 1);
        assert_eq!(count_branches("optionally log"), 2);
        assert_eq!(count_branches("either accept or reject"), 2);
        assert_eq!(count_branches("if x\nwhen y\noptionally z"), 4);
    }

    #[test]
    fn test_word_boundaries() {
        // "gif" and "whenever" are not keywords
        assert_eq!(count_branches("gif whenever"), 1);
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        // non-ASCII letters do not join a keyword to the preceding word
        assert_eq!(count_branches("ñif a or b"), 2);
        assert_eq!(count_branches("éwhen x, when y"), 2);
    }

    #[test]
    fn test_floor_and_blank() {
        assert_eq!(count_branches("- does x"), 1);
        assert_eq!(count_branches("   \n  "), 0);
    }
}
