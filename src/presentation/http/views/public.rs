use super::{PageMeta, escape_html, format_date, layout};
use crate::application::dto::ArticleDto;
use std::fmt::Write as _;

fn cover(article: &ArticleDto, class: &str) -> String {
    article.cover_image_url().map_or_else(String::new, |url| {
        format!(
            r#"<img src="{}" alt="{}" class="{class}">"#,
            escape_html(&url),
            escape_html(&article.title)
        )
    })
}

pub fn home(site_name: &str, articles: &[ArticleDto]) -> String {
    let mut body = String::from("<section class=\"listing\">\n<h1>Latest articles</h1>\n");
    if articles.is_empty() {
        body.push_str(
            "<p class=\"empty\">No articles yet. Create the first one in the <a href=\"/admin\">admin panel</a>.</p>\n",
        );
    } else {
        body.push_str("<div class=\"cards\">\n");
        for article in articles {
            let slug = escape_html(&article.slug);
            let _ = write!(
                body,
                r#"<article class="card">
{cover}
<h2><a href="/posts/{slug}">{title}</a></h2>
<p class="excerpt">{excerpt}</p>
<div class="meta"><time>{date}</time> <a href="/posts/{slug}">Read &rarr;</a></div>
</article>
"#,
                cover = cover(article, "card-cover"),
                title = escape_html(&article.title),
                excerpt = escape_html(article.excerpt.as_deref().unwrap_or_default()),
                date = format_date(&article.created_at),
            );
        }
        body.push_str("</div>\n");
    }
    body.push_str("</section>");

    layout(
        &PageMeta {
            site_name,
            title: "Home",
            description: "Latest articles",
        },
        &body,
    )
}

pub fn article(site_name: &str, article: &ArticleDto) -> String {
    let body = format!(
        r#"<article class="post">
{cover}
<h1>{title}</h1>
<div class="meta"><time>{date}</time></div>
<div class="content">
{content}
</div>
<p class="back"><a href="/">&larr; Back to home</a></p>
</article>"#,
        cover = cover(article, "post-cover"),
        title = escape_html(&article.title),
        date = format_date(&article.created_at),
        content = article.content,
    );

    layout(
        &PageMeta {
            site_name,
            title: &article.title,
            description: article.excerpt.as_deref().unwrap_or_default(),
        },
        &body,
    )
}

pub fn search(site_name: &str, query: &str, results: &[ArticleDto]) -> String {
    let mut body = format!(
        "<section class=\"search-results\">\n<h1>Search results: &quot;{}&quot;</h1>\n",
        escape_html(query)
    );
    if results.is_empty() {
        body.push_str("<p class=\"empty\">No results found.</p>\n");
    } else {
        for article in results {
            let _ = write!(
                body,
                r#"<article class="result">
<h2><a href="/posts/{slug}">{title}</a></h2>
<p>{excerpt}</p>
</article>
"#,
                slug = escape_html(&article.slug),
                title = escape_html(&article.title),
                excerpt = escape_html(article.excerpt.as_deref().unwrap_or_default()),
            );
        }
    }
    body.push_str("</section>");

    let title = format!("Search: {query}");
    layout(
        &PageMeta {
            site_name,
            title: &title,
            description: "",
        },
        &body,
    )
}
