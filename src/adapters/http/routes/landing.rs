use axum::{Router, extract::State, response::Html, routing::get};

use crate::{adapters::http::app_state::AppState, infra::config::SiteConfig};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing))
}

/// GET /
async fn landing(State(app_state): State<AppState>) -> Html<String> {
    Html(render_landing(&app_state.site))
}

const SUBMIT_SCRIPT: &str = r#"
document.getElementById("waitlist-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById("waitlist-status");
  const button = form.querySelector("button");
  button.disabled = true;
  try {
    const response = await fetch(form.action, {
      method: "POST",
      body: new URLSearchParams(new FormData(form)),
    });
    const data = await response.json();
    status.textContent = data.success ? data.message : data.error;
    status.className = data.success ? "ok" : "err";
    if (data.success) form.reset();
  } catch (_) {
    status.textContent = "Something went wrong. Please try again.";
    status.className = "err";
  } finally {
    button.disabled = false;
  }
});
"#;

fn render_landing(site: &SiteConfig) -> String {
    let title = escape_html(&site.title);
    let description = escape_html(&site.description);
    let url = escape_html(site.public_url.as_str());
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<link rel="canonical" href="{url}">
<meta property="og:type" content="website">
<meta property="og:url" content="{url}">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
</head>
<body>
<main>
<h1>{title}</h1>
<p>{description}</p>
<form id="waitlist-form" method="post" action="/api/waitlist">
<input type="email" name="email" placeholder="you@example.com" required>
<button type="submit">Join the waitlist</button>
</form>
<p id="waitlist-status" role="status"></p>
</main>
<script>{SUBMIT_SCRIPT}</script>
</body>
</html>
"#
    )
}

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
