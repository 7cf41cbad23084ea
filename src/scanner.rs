//! @ai:module:intent Find landmark headers in raw text and compute each block's content span
//! @ai:module:layer application
//! @ai:module:public_api scan, parse_header
//! @ai:module:depends_on spec
//! @ai:module:stateless true

use crate::spec::LandmarkMatch;

/// @ai:intent A header line found during the line pass, before its block end is known
#[derive(Debug, Clone)]
struct HeaderLine<'a> {
    name: &'a str,
    inline: &'a str,
    line_number: usize,
    start: usize,
    body_start: usize,
}

/// @ai:intent Recognize a landmark header line
/// @ai:pre line has no trailing newline
/// @ai:post Some((name, trimmed same-line content)) when line is `NAME:` with NAME matching [A-Z][A-Z_]+
/// @ai:example ("RULES:") -> Some(("RULES", ""))
/// @ai:example ("FUNCTION: f() → int") -> Some(("FUNCTION", "f() → int"))
/// @ai:example ("  RULES:") -> None
/// @ai:example ("A: x") -> None
/// @ai:effects pure
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let name = &line[..colon];
    let mut chars = name.chars();

    let first = chars.next()?;
    if !first.is_ascii_uppercase() || name.len() < 2 {
        return None;
    }
    if !chars.all(|c| c.is_ascii_uppercase() || c == '_') {
        return None;
    }

    Some((name, line[colon + 1..].trim()))
}

/// @ai:intent Scan a document for every landmark header, in source order
/// @ai:post each match's content runs to the next header or end of text, trimmed
/// @ai:post empty result when no header line exists
/// @ai:effects pure
pub fn scan(text: &str) -> Vec<LandmarkMatch> {
    let headers = header_lines(text);

    let landmarks: Vec<LandmarkMatch> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let end = headers
                .get(idx + 1)
                .map(|next| next.start)
                .unwrap_or(text.len());
            let body = text[header.body_start..end].trim();

            let content = match (header.inline.is_empty(), body.is_empty()) {
                (true, _) => body.to_string(),
                (false, true) => header.inline.to_string(),
                (false, false) => format!("{}\n{}", header.inline, body),
            };

            LandmarkMatch {
                name: header.name.to_string(),
                content,
                line_number: header.line_number,
                start_offset: header.start,
                end_offset: end,
            }
        })
        .collect();

    tracing::debug!(landmarks = landmarks.len(), "scanned landmark headers");
    landmarks
}

/// @ai:intent Walk the text line by line and collect header lines with byte offsets
/// @ai:effects pure
fn header_lines(text: &str) -> Vec<HeaderLine<'_>> {
    let mut headers = Vec::new();
    let mut offset = 0;

    for (line_idx, raw_line) in text.split('\n').enumerate() {
        let start = offset;
        offset += raw_line.len() + 1;

        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if let Some((name, inline)) = parse_header(line) {
            headers.push(HeaderLine {
                name,
                inline,
                line_number: line_idx + 1,
                start,
                body_start: start + raw_line.len(),
            });
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_variants() {
        assert_eq!(parse_header("RULES:"), Some(("RULES", "")));
        assert_eq!(parse_header("DONE_WHEN:  all good  "), Some(("DONE_WHEN", "all good")));
        assert_eq!(parse_header("A: too short"), None);
        assert_eq!(parse_header("Rules: mixed case"), None);
        assert_eq!(parse_header(" RULES: indented"), None);
        assert_eq!(parse_header("_RULES: underscore first"), None);
        assert_eq!(parse_header("RULES 2: digit"), None);
        assert_eq!(parse_header("no colon here"), None);
    }

    #[test]
    fn test_scan_no_landmarks() {
        assert!(scan("just some prose\nwith no headers").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_content_spans() {
        let text = "FUNCTION: f(a) → int\nRULES:\n- one\n- two\n\nDONE_WHEN: done";
        let landmarks = scan(text);

        assert_eq!(landmarks.len(), 3);
        assert_eq!(landmarks[0].name, "FUNCTION");
        assert_eq!(landmarks[0].content, "f(a) → int");
        assert_eq!(landmarks[0].line_number, 1);
        assert_eq!(landmarks[1].name, "RULES");
        assert_eq!(landmarks[1].content, "- one\n- two");
        assert_eq!(landmarks[1].line_number, 2);
        assert_eq!(landmarks[2].content, "done");
        assert_eq!(landmarks[2].line_number, 6);
    }

    #[test]
    fn test_inline_content_prepended_to_body() {
        let landmarks = scan("RULES: first\n- second");
        assert_eq!(landmarks[0].content, "first\n- second");
    }

    #[test]
    fn test_offsets_cover_block() {
        let text = "DATA: Widget\n  id: int\nCONSTRAINT: none";
        let landmarks = scan(text);

        let first = &landmarks[0];
        assert_eq!(first.start_offset, 0);
        assert_eq!(&text[first.start_offset..first.end_offset], "DATA: Widget\n  id: int\n");

        let second = &landmarks[1];
        assert_eq!(second.end_offset, text.len());
        assert_eq!(&text[second.start_offset..second.end_offset], "CONSTRAINT: none");
    }

    #[test]
    fn test_crlf_line_endings() {
        let landmarks = scan("RULES: a\r\n- b\r\nERRORS:\r\n- c\r\n");
        assert_eq!(landmarks.len(), 2);
        assert_eq!(landmarks[0].content, "a\n- b");
        assert_eq!(landmarks[1].content, "- c");
    }

    #[test]
    fn test_empty_header_does_not_swallow_next_header() {
        let landmarks = scan("RULES:\nDONE_WHEN:\n- done");
        assert_eq!(landmarks.len(), 2);
        assert_eq!(landmarks[0].content, "");
        assert_eq!(landmarks[1].content, "- done");
    }
}
