use serde::de::DeserializeOwned;

use super::extractor::extract;
use crate::utils::FrontMatterError;

/// Extract the frontmatter of `text` and decode it as YAML into `T`,
/// returning the decoded header together with the remaining content.
///
/// Keys `T` does not model are ignored unless `T` collects them itself
/// (e.g. through a flattened map). An empty header decodes as an empty
/// mapping.
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<(T, String), FrontMatterError> {
    let (header, body) = extract(text)?;

    let header = if header.trim().is_empty() { "{}" } else { header.as_str() };
    let value = serde_yaml::from_str(header)?;

    Ok((value, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, Deserialize)]
    struct Meta {
        #[serde(default)]
        title: String,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    }

    #[test]
    fn test_parse_populates_fields() {
        let text = "---\ntitle: Hello\ntags:\n  a: b\nunknown: 1\n---\nbody\n";
        let (meta, body): (Meta, _) = parse(text).unwrap();

        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.tags.get("a").map(String::as_str), Some("b"));
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_parse_empty_header() {
        let (meta, body): (Meta, _) = parse("---\n---\ncontent\n").unwrap();
        assert!(meta.title.is_empty());
        assert_eq!(body, "content\n");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse::<Meta>("---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn test_parse_propagates_not_detected() {
        let err = parse::<Meta>("no header here").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotDetected));
    }
}
