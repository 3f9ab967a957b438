//! Markup escaping helpers.

/// HTML-escape a string for use inside a double-quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// HTML-escape text content. Quotes are left as written.
pub fn text_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_special_chars() {
        assert_eq!(html_escape("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn test_text_escape_keeps_apostrophe() {
        assert_eq!(text_escape("What's New"), "What's New");
        assert_eq!(text_escape("a & <b>"), "a &amp; &lt;b&gt;");
    }
}
