//! HTML output. `render_page` trusts its input; callers that show stored
//! text must pass it through `escape_html` first.

const PAGE_HEAD: &str = r#"
<!DOCTYPE html>
<html lang="en">

<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Records List</title>
</head>

<body>
    <h1>Records:</h1>
    <ul>
        "#;

const PAGE_TAIL: &str = r#"
    </ul>

</body>

</html>
"#;

/// One `<li>` per entry, in order, inside a fixed page. Entries are inserted
/// verbatim.
pub fn render_page<S: AsRef<str>>(records: &[S]) -> String {
    let content = records
        .iter()
        .map(|record| format!("<li>{}</li>", record.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{PAGE_HEAD}{content}{PAGE_TAIL}")
}

/// Replace the characters that carry meaning in HTML text and attribute
/// values with character references.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
