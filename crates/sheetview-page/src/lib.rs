//! sheetview-page — assembles the dashboard as one self-contained HTML
//! document.
//!
//! The markup, stylesheet and view script are embedded in the binary via
//! [`include_str!`], so rendering never touches the filesystem. The records
//! are inlined as JSON on `window.sheetData`, and the view script's request
//! for `/data` is rewritten to read that global instead.

use chrono::{DateTime, SecondsFormat, Utc};
use sheetview_core::{config::PageConfig, Record};
use sheetview_sheets::Dataset;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const STYLE_CSS: &str = include_str!("../assets/style.css");
const VIEW_JS: &str = include_str!("../assets/view.js");

/// The line in `view.js` that loads data from the server.
const FETCH_HOOK: &str = "const response = await fetch('/data');";
/// What it becomes in an embedded page.
const EMBEDDED_FETCH: &str =
    "const response = { json: () => Promise.resolve(window.sheetData) };";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("could not serialise records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Records as JSON that is safe to place inside a `<script>` element.
pub fn embed_json(records: &[Record]) -> Result<String, PageError> {
    let json = serde_json::to_string(records)?;
    // Markup characters only occur inside string literals, where the \u
    // escapes mean the same. No `<!--` or `</script` can reach the tokenizer.
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// The view script with its server fetch replaced by the inlined data.
pub fn embedded_view_script() -> String {
    VIEW_JS.replace(FETCH_HOOK, EMBEDDED_FETCH)
}

/// Render the full page for `dataset`.
///
/// A dataset notice is shown as a banner above the (then empty) table.
pub fn render_page(
    dataset: &Dataset,
    page: &PageConfig,
    generated_at: DateTime<Utc>,
) -> Result<String, PageError> {
    let data = embed_json(&dataset.records)?;
    let notice = dataset
        .notice
        .as_ref()
        .map(|n| format!(r#"<div class="notice" role="alert">{}</div>"#, html_escape(n.message())))
        .unwrap_or_default();

    tracing::debug!(
        records = dataset.records.len(),
        notice = dataset.notice.is_some(),
        "rendering page"
    );

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
    <meta name="generated" content="{generated}">
    <title>{title}</title>
    <style>
{css}
#app-container {{
    width: 100%;
    height: 100%;
    min-height: {height}px;
}}
    </style>
</head>
<body>
{notice}
{html}
<script>
window.sheetData = {data};
</script>
<script>
{js}
</script>
</body>
</html>
"#,
        generated = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        title = html_escape(&page.title),
        css = STYLE_CSS,
        height = page.height,
        notice = notice,
        html = INDEX_HTML,
        data = data,
        js = embedded_view_script(),
    ))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
