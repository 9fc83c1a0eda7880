//! Comment stripping for JSON-with-comments payroll files.

/// Removes `// line` and `/* block */` comments from JSONC text.
///
/// Comment markers inside string literals are left alone, and newlines
/// inside removed comments are kept so parser line numbers still match the
/// original file.
///
/// # Example
///
/// ```
/// use punch_payroll::config::strip_json_comments;
///
/// let text = r#"{
///     // pay rates
///     "url": "http://example.com", /* inline */ "rate": 10
/// }"#;
/// let value: serde_json::Value = serde_json::from_str(&strip_json_comments(text)).unwrap();
/// assert_eq!(value["url"], "http://example.com");
/// assert_eq!(value["rate"], 10);
/// ```
pub fn strip_json_comments(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            output.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        output.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                output.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        output.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        output.push('\n');
                    }
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            _ => output.push(c),
        }
    }

    output
}
