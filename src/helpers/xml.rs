//! XML text helpers shared by the feed and sitemap generators

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
/// XML 1.0 only allows: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
pub fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}

/// Escaped, XML-safe text node content
pub fn xml_text(s: &str) -> String {
    escape_xml(&strip_invalid_xml_chars(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_invalid_xml_chars() {
        assert_eq!(strip_invalid_xml_chars("ok\u{0}\u{8}\tline\n"), "ok\tline\n");
        assert_eq!(strip_invalid_xml_chars("中文 ✓"), "中文 ✓");
    }

    #[test]
    fn test_xml_text() {
        assert_eq!(xml_text("a\u{1}<b"), "a&lt;b");
    }
}
