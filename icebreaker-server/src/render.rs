//! Server-side HTML for the result and error views. The index page itself is
//! a static asset; only the pieces built from model output live here, and
//! everything interpolated is escaped.

use crate::pipeline::IceBreak;

/// Shown when the scrape carried no photo.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=No+Image";

pub fn escape_html(raw: &str) -> String {
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

pub fn result_page(name: &str, ice: &IceBreak) -> String {
    let photo = ice.photo_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    let facts: String = ice
        .summary
        .facts
        .iter()
        .map(|fact| format!("      <li>{}</li>\n", escape_html(fact)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Ice Breaker - {name}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }}
    img {{ border-radius: 50%; width: 160px; height: 160px; object-fit: cover; }}
    a {{ color: #2563eb; }}
  </style>
</head>
<body>
  <h1>{name}</h1>
  <img src="{photo}" alt="Profile photo of {name}">
  <h2>Summary</h2>
  <p class="summary">{summary}</p>
  <h2>Interesting facts</h2>
  <ul class="facts">
{facts}  </ul>
  <p><a href="/">Try another name</a></p>
</body>
</html>
"#,
        name = escape_html(name),
        photo = escape_html(photo),
        summary = escape_html(&ice.summary.summary),
        facts = facts,
    )
}

pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Ice Breaker - Error</title>
  <style>
    body {{ font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }}
    .error {{ color: #b91c1c; }}
  </style>
</head>
<body>
  <h1>Something went wrong</h1>
  <p class="error">{message}</p>
  <p><a href="/">Back</a></p>
</body>
</html>
"#,
        message = escape_html(message),
    )
}
