use crate::error::Result;
use crate::model::ShortenForm;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use burrow_core::Shortener;

const INDEX_PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Burrow</title>
  </head>
  <body>
    <h1>Burrow</h1>
    <p>Paste a long URL to get a short link for it.</p>
    <form action="/short" method="post">
      <label for="longUrl">Long URL</label>
      <input type="url" id="longUrl" name="longUrl" placeholder="https://example.com/some/long/path" required>
      <input type="submit" value="Shorten">
    </form>
  </body>
</html>
"#;

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn short_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Html<String>> {
    let code = state.shortener().shorten(&form.long_url).await?;
    let short_url = escape_html(&code.to_url(state.base_url()));

    Ok(Html(format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Your short link is ready</title>
  </head>
  <body>
    <h1>Your short link is ready</h1>
    <p><code><a href="{short_url}" target="_blank">{short_url}</a></code></p>
    <p><a href="/">Shorten another link</a></p>
  </body>
</html>
"#
    )))
}

/// The public base URL comes from configuration and is interpolated into
/// markup, so it is escaped before rendering.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
