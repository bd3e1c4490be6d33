//! Front matter splitting.
//!
//! ```text
//! ---                 <- opening delimiter, must be the first line
//! slug: opening-day
//! title: Opening day
//! ---                 <- closing delimiter
//! ## Kick-off         <- body starts on the next line
//! ```

use super::RawMetadata;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Split `text` into its metadata block and body.
///
/// Never fails: a missing block is [`RawMetadata::Absent`], an unterminated
/// block or invalid YAML is [`RawMetadata::Malformed`]. In both of those cases
/// the whole text is returned as the body.
pub fn split_front_matter(text: &str) -> (RawMetadata, &str) {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (RawMetadata::Absent, text);
    };
    if first.trim_end() != DELIMITER {
        return (RawMetadata::Absent, text);
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let block = &text[block_start..offset];
            let body = &text[offset + line.len()..];
            return (parse_block(block), body);
        }
        offset += line.len();
    }

    let metadata = RawMetadata::Malformed {
        source: text[block_start..].to_owned(),
        reason: "metadata block has no closing `---`".into(),
    };
    (metadata, text)
}

fn parse_block(block: &str) -> RawMetadata {
    if block.trim().is_empty() {
        return RawMetadata::Parsed(serde_yaml::Value::Null);
    }
    match serde_yaml::from_str(block) {
        Ok(value) => RawMetadata::Parsed(value),
        Err(err) => RawMetadata::Malformed {
            source: block.to_owned(),
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(metadata: &RawMetadata) -> &serde_yaml::Value {
        match metadata {
            RawMetadata::Parsed(value) => value,
            other => panic!("expected parsed metadata, got {other:?}"),
        }
    }

    #[test]
    fn test_split_basic() {
        let text = "---\nslug: a\ntitle: A\n---\n## Body\n";
        let (metadata, body) = split_front_matter(text);
        assert_eq!(parsed(&metadata)["slug"].as_str(), Some("a"));
        assert_eq!(body, "## Body\n");
    }

    #[test]
    fn test_split_crlf() {
        let text = "---\r\nslug: a\r\n---\r\nbody";
        let (metadata, body) = split_front_matter(text);
        assert_eq!(parsed(&metadata)["slug"].as_str(), Some("a"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_skips_bom() {
        let text = "\u{feff}---\nslug: a\n---\nbody";
        let (metadata, body) = split_front_matter(text);
        assert!(matches!(metadata, RawMetadata::Parsed(_)));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_no_front_matter() {
        let text = "## Just a body\n";
        let (metadata, body) = split_front_matter(text);
        assert!(matches!(metadata, RawMetadata::Absent));
        assert_eq!(body, text);
    }

    #[test]
    fn test_empty_text() {
        let (metadata, body) = split_front_matter("");
        assert!(matches!(metadata, RawMetadata::Absent));
        assert_eq!(body, "");
    }

    #[test]
    fn test_delimiter_must_be_first_line() {
        let text = "\n---\nslug: a\n---\n";
        let (metadata, _) = split_front_matter(text);
        assert!(matches!(metadata, RawMetadata::Absent));
    }

    #[test]
    fn test_unterminated_block() {
        let text = "---\nslug: a\n## Body";
        let (metadata, body) = split_front_matter(text);
        assert!(matches!(metadata, RawMetadata::Malformed { .. }));
        assert_eq!(body, text);
    }

    #[test]
    fn test_invalid_yaml_is_malformed_not_error() {
        let text = "---\nslug: [unclosed\n---\nbody";
        let (metadata, body) = split_front_matter(text);
        match metadata {
            RawMetadata::Malformed { source, reason } => {
                assert_eq!(source, "slug: [unclosed\n");
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed metadata, got {other:?}"),
        }
        assert_eq!(body, "body");
    }

    #[test]
    fn test_empty_block() {
        let (metadata, body) = split_front_matter("---\n---\nbody");
        assert!(parsed(&metadata).is_null());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_thematic_break_in_body_is_kept() {
        let text = "---\nslug: a\n---\nfirst\n---\nsecond\n";
        let (_, body) = split_front_matter(text);
        assert_eq!(body, "first\n---\nsecond\n");
    }
}
