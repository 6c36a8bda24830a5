use crate::application::dto::SitemapEntryDto;
use chrono::SecondsFormat;
use std::fmt::Write as _;

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn sitemap(site_url: &str, entries: &[SitemapEntryDto]) -> String {
    let site_url = escape_xml(site_url);
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{site_url}/</loc>
    <changefreq>daily</changefreq>
    <priority>1.0</priority>
  </url>
"#
    );
    for entry in entries {
        let _ = write!(
            xml,
            r"  <url>
    <loc>{site_url}/posts/{slug}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>0.8</priority>
  </url>
",
            slug = escape_xml(&entry.slug),
            lastmod = entry.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {site_url}/sitemap.xml\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn homepage_entry_is_always_present() {
        let xml = sitemap("https://blog.example.com", &[]);
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://blog.example.com/</loc>"));
    }

    #[test]
    fn entries_carry_rfc3339_lastmod() {
        let entries = vec![SitemapEntryDto {
            slug: "a&b".into(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 10, 30, 0).unwrap(),
        }];
        let xml = sitemap("https://blog.example.com", &entries);
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://blog.example.com/posts/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-02-29T10:30:00Z</lastmod>"));
    }

    #[test]
    fn robots_points_at_the_sitemap() {
        assert_eq!(
            robots("http://localhost:8080"),
            "User-agent: *\nAllow: /\nSitemap: http://localhost:8080/sitemap.xml\n"
        );
    }
}
