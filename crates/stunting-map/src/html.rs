/// Escape text for inclusion in HTML element content or attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Kesambi"), "Kesambi");
        assert_eq!(
            escape(r#"<img src="x" onerror='a()'> & co"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;a()&#39;&gt; &amp; co"
        );
    }
}
