//! Escaping for markup output and file-name sanitizing

use std::borrow::Cow;

/// Replacement for every character a file name may not keep
pub const FILE_NAME_SEPARATOR: char = '-';

/// Stand-in for characters XML 1.0 cannot carry
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Characters with no XML 1.0 representation, not even as a reference
fn is_xml_illegal(ch: char) -> bool {
    matches!(
        ch,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Escape the five reserved markup characters and replace characters
/// XML forbids with [`REPLACEMENT_CHAR`].
///
/// Safe for element text and attribute values in both HTML and XML.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|ch| matches!(ch, '&' | '<' | '>' | '"' | '\'') || is_xml_illegal(ch)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        push_escaped(&mut out, ch);
    }
    Cow::Owned(out)
}

/// Append `ch` to `out`, escaped if reserved
pub fn push_escaped(out: &mut String, ch: char) {
    match ch {
        ch if is_xml_illegal(ch) => out.push(REPLACEMENT_CHAR),
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Replace every non-ASCII-alphanumeric character with [`FILE_NAME_SEPARATOR`]
pub fn sanitize_file_stem(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch
            } else {
                FILE_NAME_SEPARATOR
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_reserved() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape("| |_| |"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_replaces_control_characters() {
        assert_eq!(escape("a\u{1}b\u{1b}c"), "a\u{FFFD}b\u{FFFD}c");
        // Tab, newline and carriage return are legal XML
        assert!(matches!(escape("a\tb\nc\r"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("Hello, World!"), "Hello--World-");
        assert_eq!(sanitize_file_stem("a/b\\c"), "a-b-c");
        assert_eq!(sanitize_file_stem("café"), "caf-");
    }
}
