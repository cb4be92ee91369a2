use crate::utils::FrontMatterError;

/// Line that opens and closes a frontmatter block
pub const DELIMITER: &str = "---\n";

/// Check whether `text` starts with the frontmatter delimiter line
pub fn contains(text: &str) -> bool {
    text.starts_with(DELIMITER)
}

/// Split `text` into its frontmatter header and the content after it.
///
/// The opening delimiter line is discarded, lines up to the closing
/// delimiter form the header, everything after it forms the body.
/// Lines are re-terminated with `\n`, so CRLF input comes back as LF.
pub fn extract(text: &str) -> Result<(String, String), FrontMatterError> {
    if !contains(text) {
        return Err(FrontMatterError::NotDetected);
    }

    let delimiter = DELIMITER.trim_end_matches('\n');
    let mut header = String::new();
    let mut body = String::new();
    let mut reached = false;

    for line in text.lines().skip(1) {
        if !reached && line == delimiter {
            reached = true;
            continue;
        }

        let target = if reached { &mut body } else { &mut header };
        target.push_str(line);
        target.push('\n');
    }

    if !reached {
        return Err(FrontMatterError::Unterminated);
    }

    Ok((header, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains("---\ntitle: x\n---\n"));
        assert!(!contains("title: x\n---\n"));
        assert!(!contains("--"));
        assert!(!contains(""));
    }

    #[test]
    fn test_extract_valid() {
        let (header, body) = extract("---\nhello: world\n---\n# Hello, world!\n").unwrap();
        assert_eq!(header, "hello: world\n");
        assert_eq!(body, "# Hello, world!\n");
    }

    #[test]
    fn test_extract_not_detected() {
        let err = extract("hello: world\n---\nbody\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotDetected));
    }

    #[test]
    fn test_extract_unterminated() {
        let err = extract("---\ntitle: never closed\nmore\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_extract_keeps_later_delimiters_in_body() {
        let (header, body) = extract("---\na: 1\n---\nabove\n---\nbelow\n").unwrap();
        assert_eq!(header, "a: 1\n");
        assert_eq!(body, "above\n---\nbelow\n");
    }

    #[test]
    fn test_extract_empty_body() {
        let (header, body) = extract("---\na: 1\n---\n").unwrap();
        assert_eq!(header, "a: 1\n");
        assert_eq!(body, "");
    }

    #[test]
    fn test_extract_round_trip() {
        let samples = [
            "---\ntitle: A\nuri: a\n---\n<p>a</p>\n",
            "---\n---\n",
            "---\nx: 1\ny: 2\n---\nline one\n\nline three\n",
        ];

        for text in samples {
            let (header, body) = extract(text).unwrap();
            let rejoined = format!("{DELIMITER}{header}{DELIMITER}{body}");
            assert_eq!(rejoined, text);
        }
    }

    #[test]
    fn test_extract_crlf_lines() {
        let (header, body) = extract("---\ntitle: A\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(header, "title: A\n");
        assert_eq!(body, "body\n");
    }
}
