use super::{PageMeta, escape_html, format_date, layout};
use crate::application::dto::{ArticleDto, OffsetPage};
use std::fmt::Write as _;

pub fn login(site_name: &str) -> String {
    let body = r#"<section class="panel narrow">
<h1>Admin Login</h1>
<form action="/login" method="POST" class="stacked">
  <label>Username <input type="text" name="username" required autocomplete="username"></label>
  <label>Password <input type="password" name="password" required autocomplete="current-password"></label>
  <button type="submit" class="primary">Login</button>
</form>
</section>"#;

    layout(
        &PageMeta {
            site_name,
            title: "Admin Login",
            description: "Sign in to the admin panel",
        },
        body,
    )
}

pub fn dashboard(site_name: &str, page: &OffsetPage<ArticleDto>) -> String {
    let mut body = format!(
        r#"<section class="panel wide">
<div class="toolbar">
  <h1>Dashboard</h1>
  <span class="count">{total} articles</span>
  <a href="/admin/new" class="button primary">New article</a>
  <form action="/logout" method="POST"><button type="submit" class="danger">Logout</button></form>
</div>
<table class="articles">
<thead><tr><th>Title</th><th>Status</th><th>Date</th><th>Actions</th></tr></thead>
<tbody>
"#,
        total = page.total
    );

    for article in &page.items {
        let slug = escape_html(&article.slug);
        let title = escape_html(&article.title);
        let (status_class, status) = if article.published {
            ("published", "Published")
        } else {
            ("draft", "Draft")
        };
        let _ = write!(
            body,
            r#"<tr>
<td>{title}</td>
<td><span class="status {status_class}">{status}</span></td>
<td>{date}</td>
<td class="actions">
  <a href="/posts/{slug}" target="_blank">View</a>
  <a href="/admin/edit/{slug}">Edit</a>
  <form action="/admin/delete" method="POST" class="inline" data-confirm="Delete &quot;{title}&quot;?">
    <input type="hidden" name="slug" value="{slug}">
    <button type="submit" class="link danger">Delete</button>
  </form>
</td>
</tr>
"#,
            date = format_date(&article.created_at),
        );
    }
    if page.items.is_empty() {
        body.push_str("<tr><td colspan=\"4\" class=\"empty\">No articles.</td></tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    if page.total_pages() > 1 {
        body.push_str("<nav class=\"pager\">");
        if page.has_previous() {
            let _ = write!(
                body,
                r#"<a href="/admin/dashboard?page={}">&larr; Previous</a>"#,
                page.page - 1
            );
        }
        let _ = write!(
            body,
            r#"<span>Page {} of {}</span>"#,
            page.page,
            page.total_pages()
        );
        if page.has_next() {
            let _ = write!(
                body,
                r#"<a href="/admin/dashboard?page={}">Next &rarr;</a>"#,
                page.page + 1
            );
        }
        body.push_str("</nav>\n");
    }
    body.push_str("</section>\n<script src=\"/js/editor.js\" defer></script>");

    layout(
        &PageMeta {
            site_name,
            title: "Dashboard",
            description: "Admin dashboard",
        },
        &body,
    )
}

/// Article form. `existing` switches it from create to edit mode, keyed by
/// the original slug so the slug itself can be changed.
pub fn editor(site_name: &str, existing: Option<&ArticleDto>) -> String {
    let (heading, action, original) = match existing {
        Some(article) => (
            "Edit article",
            "/admin/update",
            format!(
                r#"<input type="hidden" name="original_slug" value="{}">"#,
                escape_html(&article.slug)
            ),
        ),
        None => ("New article", "/admin/save", String::new()),
    };
    let field = |value: Option<&str>| escape_html(value.unwrap_or_default());

    let title = field(existing.map(|a| a.title.as_str()));
    let slug = field(existing.map(|a| a.slug.as_str()));
    let content = field(existing.map(|a| a.content.as_str()));
    let excerpt = field(existing.and_then(|a| a.excerpt.as_deref()));
    let cover_key = field(existing.and_then(|a| a.cover_image_key.as_deref()));
    let (preview_class, preview_src) = match existing.and_then(ArticleDto::cover_image_url) {
        Some(url) => ("cover-preview", escape_html(&url)),
        None => ("cover-preview hidden", String::new()),
    };
    let checked = if existing.is_some_and(|a| a.published) {
        " checked"
    } else {
        ""
    };

    let body = format!(
        r#"<section class="panel">
<h1>{heading}</h1>
<form id="postForm" action="{action}" method="POST" class="stacked">
  {original}
  <label>Title <input type="text" id="titleInput" name="title" value="{title}" required></label>
  <label>Slug (URL) <input type="text" id="slugInput" name="slug" value="{slug}"></label>
  <p class="hint">Generated from the title when left blank.</p>

  <fieldset>
    <legend>Cover image</legend>
    <input type="file" id="coverImageInput" accept="image/*">
    <button type="button" id="uploadCoverBtn">Upload cover</button>
    <button type="button" id="clearCoverBtn">Remove cover</button>
    <input type="hidden" id="coverImageKey" name="cover_image_key" value="{cover_key}">
    <div id="coverPreview" class="{preview_class}"><img id="coverPreviewImg" src="{preview_src}" alt="Cover preview"></div>
  </fieldset>

  <label>Excerpt <textarea name="excerpt" rows="3">{excerpt}</textarea></label>

  <label for="contentArea">Content (HTML)</label>
  <div class="inline-upload">
    <input type="file" id="contentImageInput" accept="image/*">
    <button type="button" id="uploadContentImageBtn">Upload &amp; insert image</button>
  </div>
  <textarea id="contentArea" name="content" rows="14" required class="mono">{content}</textarea>

  <label class="checkbox"><input type="checkbox" name="published" id="published"{checked}> Published</label>

  <div id="uploadStatus" class="status-message hidden"></div>

  <div class="form-actions">
    <a href="/admin/dashboard">Cancel</a>
    <button type="submit" class="primary">Save article</button>
  </div>
</form>
</section>
<script src="/js/editor.js" defer></script>"#
    );

    layout(
        &PageMeta {
            site_name,
            title: heading,
            description: "Article editor",
        },
        &body,
    )
}
