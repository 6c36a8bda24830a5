//! Server-side rendering. Every interpolated value is escaped except article
//! content, which is authored by the admin and rendered verbatim.

pub mod admin;
pub mod public;
pub mod sitemap;

use chrono::{DateTime, Datelike, Utc};
use std::fmt::Write as _;

pub struct PageMeta<'a> {
    pub site_name: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `1 January 2024`.
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%-d %B %Y").to_string()
}

pub fn layout(meta: &PageMeta<'_>, body: &str) -> String {
    let site_name = escape_html(meta.site_name);
    let title = escape_html(meta.title);
    let description = escape_html(meta.description);
    let year = Utc::now().year();

    let mut page = String::with_capacity(body.len() + 2048);
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - {site_name}</title>
  <meta name="description" content="{description}">
  <meta property="og:title" content="{title}">
  <meta property="og:description" content="{description}">
  <meta property="og:type" content="website">
  <link rel="stylesheet" href="/css/site.css">
</head>
<body>
  <nav class="site-nav">
    <a href="/" class="brand">{site_name}</a>
    <a href="/">Home</a>
    <form action="/search" method="GET" class="search">
      <input type="text" name="q" placeholder="Search articles...">
    </form>
    <a href="/admin">Admin</a>
  </nav>
  <main>
{body}
  </main>
  <footer class="site-footer">
    <p>&copy; {year} {site_name}</p>
  </footer>
</body>
</html>"#
    );
    page
}
