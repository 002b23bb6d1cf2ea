// src/templates/wallets.rs
use super::render_page;
use crate::content::wallets::WALLETS;
use crate::context::Visitor;
use crate::i18n::{t, Lang};

pub fn content(lang: Lang) -> String {
    let rows: String = WALLETS
        .iter()
        .map(|w| {
            format!(
                r#"
            <tr>
                <td>{} <strong>{}</strong></td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></td>
            </tr>"#,
                w.icon,
                w.name,
                w.kind.get(lang),
                w.platforms,
                w.strengths.get(lang),
                w.download_url,
                t(lang, "Download", "Pakua")
            )
        })
        .collect();

    format!(
        r#"
    <h1>👛 {}</h1>
    <p class="lead">{}</p>
    <table class="comparison-table">
        <thead>
            <tr>
                <th>{}</th>
                <th>{}</th>
                <th>{}</th>
                <th>{}</th>
                <th></th>
            </tr>
        </thead>
        <tbody>{}
        </tbody>
    </table>
    <p class="note">{}</p>
    "#,
        t(lang, "Compare wallets", "Linganisha pochi"),
        t(
            lang,
            "A wallet holds your keys and signs transactions. Here is how the popular ones compare.",
            "Pochi hushikilia funguo zako na kusaini miamala. Hivi ndivyo pochi maarufu zinavyolinganishwa."
        ),
        t(lang, "Wallet", "Pochi"),
        t(lang, "Type", "Aina"),
        t(lang, "Platforms", "Majukwaa"),
        t(lang, "Strengths", "Uimara"),
        rows,
        t(
            lang,
            "Never share your seed phrase with anyone.",
            "Usimpe mtu yeyote maneno yako ya siri ya kurejesha."
        ),
    )
}

pub fn render(visitor: &Visitor, content: &str) -> String {
    render_page(visitor, t(visitor.lang, "Wallets", "Pochi"), content)
}
