// src/templates/media.rs
use chrono::NaiveDate;

use super::render_page;
use crate::content::media::{ARTICLES, COMMUNITIES, PODCASTS};
use crate::context::Visitor;
use crate::i18n::{t, Lang};

fn format_date(raw: &str, lang: Lang) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => match lang {
            Lang::En => date.format("%-d %b %Y").to_string(),
            Lang::Sw => date.format("%d/%m/%Y").to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

fn external_link(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{} ↗</a>"#,
        url, text
    )
}

pub fn podcasts_content(lang: Lang) -> String {
    let items: String = PODCASTS
        .iter()
        .map(|p| {
            format!(
                r#"
        <div class="media-card">
            <h3>🎧 {}</h3>
            <p class="meta">{} · {}</p>
            <p>{}</p>
            {}
        </div>"#,
                p.title,
                p.host,
                format_date(p.published, lang),
                p.summary.get(lang),
                external_link(p.url, t(lang, "Listen", "Sikiliza"))
            )
        })
        .collect();

    format!(
        r#"
    <h1>🎧 {}</h1>
    <div class="media-grid">{}
    </div>
    "#,
        t(lang, "Podcasts", "Podikasti"),
        items
    )
}

pub fn render_podcasts(visitor: &Visitor, content: &str) -> String {
    let lang = visitor.lang;
    render_page(visitor, t(lang, "Podcasts", "Podikasti"), content)
}

pub fn articles_content(lang: Lang) -> String {
    let items: String = ARTICLES
        .iter()
        .map(|a| {
            format!(
                r#"
        <div class="media-card">
            <h3>📰 {}</h3>
            <p class="meta">{} · {}</p>
            <p>{}</p>
            {}
        </div>"#,
                a.title.get(lang),
                a.author,
                format_date(a.published, lang),
                a.summary.get(lang),
                external_link(a.url, t(lang, "Read", "Soma"))
            )
        })
        .collect();

    format!(
        r#"
    <h1>📰 {}</h1>
    <div class="media-grid">{}
    </div>
    "#,
        t(lang, "Articles", "Makala"),
        items
    )
}

pub fn render_articles(visitor: &Visitor, content: &str) -> String {
    let lang = visitor.lang;
    render_page(visitor, t(lang, "Articles", "Makala"), content)
}

pub fn community_content(lang: Lang) -> String {
    let items: String = COMMUNITIES
        .iter()
        .map(|c| {
            format!(
                r#"
        <div class="media-card">
            <h3>{} {}</h3>
            <p>{}</p>
            {}
        </div>"#,
                c.icon,
                c.name,
                c.description.get(lang),
                external_link(c.url, t(lang, "Visit", "Tembelea"))
            )
        })
        .collect();

    format!(
        r#"
    <h1>🤝 {}</h1>
    <p class="lead">{}</p>
    <div class="media-grid">{}
    </div>
    "#,
        t(lang, "Community", "Jamii"),
        t(
            lang,
            "Learning is easier together. Find your people.",
            "Kujifunza ni rahisi zaidi pamoja. Pata wenzako."
        ),
        items
    )
}

pub fn render_community(visitor: &Visitor, content: &str) -> String {
    let lang = visitor.lang;
    render_page(visitor, t(lang, "Community", "Jamii"), content)
}
