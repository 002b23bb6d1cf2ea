// src/templates/layout.rs
use chrono::Datelike;

use super::html_escape;
use crate::context::Visitor;
use crate::i18n::t;

pub fn render_page(visitor: &Visitor, title: &str, content: &str) -> String {
    let lang = visitor.lang;
    let toggle = format!(
        r#"<a href="{}" class="lang-toggle" hreflang="{}">🌐 {}</a>"#,
        html_escape(&visitor.location.with_lang(lang.other())),
        lang.other().code(),
        lang.other().label()
    );
    layout(visitor, title, content, &toggle)
}

/// For pages whose form holds choices not yet submitted. The toggle
/// submits that form by GET to the same path, so the pending inputs come
/// back in the query string alongside the new `lang`.
pub fn render_form_page(visitor: &Visitor, title: &str, content: &str, form_id: &str) -> String {
    let lang = visitor.lang;
    let toggle = format!(
        r#"<button type="submit" form="{}" formmethod="get" formaction="{}" formnovalidate name="lang" value="{}" class="lang-toggle">🌐 {}</button>"#,
        form_id,
        html_escape(&visitor.location.path),
        lang.other().code(),
        lang.other().label()
    );
    layout(visitor, title, content, &toggle)
}

fn layout(visitor: &Visitor, title: &str, content: &str, toggle: &str) -> String {
    let lang = visitor.lang;

    let greeting = if visitor.display_name.is_set() {
        format!(
            r#"<span class="greeting">👋 {}</span>"#,
            html_escape(visitor.display_name.get())
        )
    } else {
        String::new()
    };

    let current = visitor.location.path.as_str();
    let nav = [
        ("/", t(lang, "Home", "Nyumbani")),
        ("/tracks", t(lang, "Tracks", "Njia za kujifunza")),
        ("/starknet", "StarkNet"),
        ("/builder", t(lang, "Builder", "Kijenzi")),
        ("/wallets", t(lang, "Wallets", "Pochi")),
        ("/about", t(lang, "About", "Kuhusu")),
        ("/join", t(lang, "Join", "Jiunge")),
    ]
    .iter()
    .map(|(href, text)| {
        let active = if *href == "/" {
            current == "/"
        } else {
            current.starts_with(href)
        };
        nav_link(href, text, active)
    })
    .collect::<Vec<_>>()
    .join("\n                    ");

    format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Jifunze</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <header class="header">
        <div class="container">
            <div class="header-content">
                <div class="logo">
                    <a href="/">Jifunze</a>
                </div>
                <nav class="nav">
                    {}
                </nav>
                <div class="header-tools">
                    {}
                    {}
                </div>
            </div>
        </div>
    </header>

    <main class="main">
        <div class="container">
            {}
        </div>
    </main>

    <footer class="footer">
        <div class="container">
            <p>Jifunze · {} © {}</p>
            <p>
                <a href="/podcasts">{}</a> ·
                <a href="/articles">{}</a> ·
                <a href="/community">{}</a>
            </p>
        </div>
    </footer>
</body>
</html>"#,
        lang.code(),
        html_escape(title),
        nav,
        greeting,
        toggle,
        content,
        t(lang, "Web3 learning in English and Kiswahili", "Kujifunza Web3 kwa Kiingereza na Kiswahili"),
        chrono::Utc::now().year(),
        t(lang, "Podcasts", "Podikasti"),
        t(lang, "Articles", "Makala"),
        t(lang, "Community", "Jamii"),
    )
}

pub fn nav_link(href: &str, text: &str, active: bool) -> String {
    let class = if active { "nav-link active" } else { "nav-link" };
    format!(r#"<a href="{}" class="{}">{}</a>"#, href, class, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DisplayName, Location};
    use crate::i18n::Lang;

    #[test]
    fn test_layout_escapes_display_name() {
        let visitor = Visitor {
            lang: Lang::En,
            display_name: DisplayName::new("<Juma>"),
            location: Location::new("/about", Vec::new()),
        };
        let html = render_page(&visitor, "About", "<p>body</p>");
        assert!(html.contains("&lt;Juma&gt;"));
        assert!(html.contains(r#"href="/about" class="nav-link active""#));
        assert!(html.contains(r#"href="/about?lang=sw""#));
    }

    #[test]
    fn test_form_page_toggle_submits_the_form() {
        let visitor = Visitor {
            lang: Lang::Sw,
            location: Location::new("/starknet/quiz", Vec::new()),
            ..Default::default()
        };
        let html = render_form_page(&visitor, "Jaribio", "", "quiz-form");
        assert!(html.contains(r#"form="quiz-form" formmethod="get" formaction="/starknet/quiz""#));
        assert!(html.contains(r#"name="lang" value="en""#));
    }
}
