// src/templates/tracks.rs
use super::{html_escape, render_page};
use crate::content::site::TRACKS;
use crate::context::Visitor;
use crate::i18n::t;

pub fn render(visitor: &Visitor) -> String {
    let lang = visitor.lang;

    let greeting = if visitor.display_name.is_set() {
        format!(
            "{}, {}!",
            t(lang, "Welcome", "Karibu"),
            html_escape(visitor.display_name.get())
        )
    } else {
        format!("{}!", t(lang, "Welcome", "Karibu"))
    };

    let cards: String = TRACKS
        .iter()
        .map(|track| {
            let action = if track.available {
                format!(
                    r#"<a href="{}" class="btn btn-primary">{}</a>"#,
                    track.href,
                    t(lang, "Start", "Anza")
                )
            } else {
                format!(
                    r#"<span class="badge">{}</span>"#,
                    t(lang, "Coming soon", "Inakuja hivi karibuni")
                )
            };
            format!(
                r#"
        <div class="track-card">
            <span class="track-icon">{}</span>
            <h3>{}</h3>
            <p>{}</p>
            {}
        </div>"#,
                track.icon,
                track.title.get(lang),
                track.description.get(lang),
                action
            )
        })
        .collect();

    let content = format!(
        r#"
    <h1>{}</h1>
    <p class="lead">{}</p>
    <div class="track-grid">{}
    </div>
    "#,
        greeting,
        t(lang, "Pick a learning track to begin.", "Chagua njia ya kujifunza ili kuanza."),
        cards
    );

    render_page(visitor, t(lang, "Learning tracks", "Njia za kujifunza"), &content)
}
