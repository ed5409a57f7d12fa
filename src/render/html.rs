use crate::pagination::{PageControl, PaginationStrip};
use crate::render::profile::ProfileCard;
use crate::render::repos::{RepoCard, RepoGrid};

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Avatar and profile link, for `#imgContainer`.
pub fn profile_image(card: &ProfileCard) -> String {
    let url = escape(&card.profile_url);
    format!(
        r#"<img src="{avatar}" alt="userImg" class="img-fluid mb-3 rounded-circle border border-secondary" style="width: 120px; height: 120px" />
<a href="{url}" target="_blank"><i class="fa-solid fa-link"></i> {url}</a>"#,
        avatar = escape(&card.avatar_url),
        url = url,
    )
}

/// Name, bio, location and contact handle, for `#bioContainer`.
pub fn profile_bio(card: &ProfileCard) -> String {
    format!(
        r#"<h3>{name}</h3>
<p>{bio}</p>
<p><i class="fa-solid fa-location-dot"></i> {location}</p>
<p>Twitter:{twitter}</p>"#,
        name = escape(&card.name),
        bio = escape(&card.bio),
        location = escape(&card.location),
        twitter = escape(&card.twitter),
    )
}

fn repo_card(card: &RepoCard) -> String {
    let tags: Vec<String> = card
        .tags
        .iter()
        .map(|tag| format!(r#"<button class="repoBtn btn btn-primary mb-2">{}</button>"#, escape(tag.label())))
        .collect();

    format!(
        r#"<div class="col-md-6 mb-4 d-flex"><div class="border border-dark p-3 w-100">
<h4 style="color: #0d6efd">{name}</h4>
<p>{description}</p>
<div class="mt-2">{tags}</div>
</div></div>"#,
        name = escape(&card.name),
        description = escape(&card.description),
        tags = tags.join(" "),
    )
}

/// Repository cards two to a row, for `#repoContainer`.
pub fn repo_grid(grid: &RepoGrid) -> String {
    let rows: String = grid
        .rows
        .iter()
        .map(|row| {
            let cards: String = row.iter().map(repo_card).collect();
            format!(r#"<div class="row equal-height-row">{}</div>"#, cards)
        })
        .collect();
    format!(r#"<div class="col-md-12">{}</div>"#, rows)
}

fn page_item(control: &PageControl, href: &dyn Fn(u32) -> String) -> String {
    let class = if control.active { "page-item active" } else { "page-item" };
    format!(
        r#"<li class="{class}"><a class="page-link" href="{href}">{label}</a></li>"#,
        class = class,
        href = escape(&href(control.target)),
        label = escape(&control.label()),
    )
}

/// Previous, numbered and next controls, for `#paginationContainer`.
pub fn pagination(strip: &PaginationStrip, href: &dyn Fn(u32) -> String) -> String {
    strip.controls.iter().map(|c| page_item(c, href)).collect()
}

pub fn loader(visible: bool) -> String {
    let display = if visible { "block" } else { "none" };
    format!(r#"<div id="loader" style="display: {}">Loading...</div>"#, display)
}

pub fn alert(message: &str) -> String {
    format!(r#"<div class="alert alert-danger" role="alert">{}</div>"#, escape(message))
}
