//! HTML views.

use lotto_domain::LotteryResult;

/// Render the home page for one draw.
pub fn lottery_page(result: &LotteryResult) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>Lotto</title>
</head>
<body>
    <main>
        <h1>Lotto</h1>
        <p>Your number: <strong id="drawn-number">{number}</strong></p>
        <p id="message">{message}</p>
        <p><a href="/">Draw again</a></p>
    </main>
</body>
</html>
"#,
        number = result.drawn_number(),
        message = escape_html(result.message()),
    )
}

/// Escape the five characters with meaning in HTML text and attributes.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
