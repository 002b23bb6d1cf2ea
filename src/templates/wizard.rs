// src/templates/wizard.rs
use super::{html_escape, render_form_page, render_page};
use crate::context::Visitor;
use crate::i18n::{t, Lang};
use crate::wizard::selection::{Chain, NetworkType, Provider};
use crate::wizard::{WizardState, WizardStep};

const FORM_ID: &str = "wizard-form";

fn progress(lang: Lang, state: &WizardState, current: Option<WizardStep>) -> String {
    let items: String = WizardStep::ALL
        .iter()
        .map(|step| {
            let mut class = String::from("wizard-step");
            if state.is_built(*step) {
                class.push_str(" done");
            }
            if current == Some(*step) {
                class.push_str(" current");
            }
            format!(
                r#"<li class="{}"><a href="{}">{}. {}</a></li>"#,
                class,
                step.path(),
                step.number(),
                step.title().get(lang)
            )
        })
        .collect();
    format!(r#"<ol class="wizard-progress">{}</ol>"#, items)
}

fn snippet_panel(lang: Lang, state: &WizardState) -> String {
    if state.snippet.is_empty() {
        return format!(
            r#"<p class="snippet-empty">{}</p>"#,
            t(
                lang,
                "Your code will appear here as you make choices.",
                "Msimbo wako utaonekana hapa unapofanya machaguo."
            )
        );
    }

    format!(
        r#"
    <div class="code-block snippet">
        <button type="button" class="btn btn-small copy-btn" data-copied="{}"
            onclick="navigator.clipboard.writeText(document.getElementById('snippet-code').innerText).then(() => {{ const b = this; const old = b.innerText; b.innerText = b.dataset.copied; setTimeout(() => {{ b.innerText = old; }}, 2000); }})">{}</button>
        <pre><code id="snippet-code">{}</code></pre>
    </div>"#,
        t(lang, "Copied!", "Imenakiliwa!"),
        t(lang, "Copy", "Nakili"),
        html_escape(&state.snippet.render())
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!(
            r#"<div class="error-message"><p>⚠️ {}</p></div>"#,
            html_escape(msg)
        ),
        None => String::new(),
    }
}

fn next_link(lang: Lang, state: &WizardState, step: WizardStep) -> String {
    if !state.is_built(step) {
        return String::new();
    }
    match step.next() {
        Some(next) => format!(
            r#"<a href="{}" class="btn btn-secondary">{} →</a>"#,
            next.path(),
            t(lang, "Next", "Endelea")
        ),
        None => format!(
            r#"<a href="/builder" class="btn btn-secondary">{} →</a>"#,
            t(lang, "Finish", "Maliza")
        ),
    }
}

pub fn render_intro(visitor: &Visitor, state: &WizardState) -> String {
    let lang = visitor.lang;

    let action = match state.next_step() {
        Some(step) => format!(
            r#"<a href="{}" class="btn btn-primary">{}</a>"#,
            step.path(),
            if state.snippet.is_empty() {
                t(lang, "Start building", "Anza kujenga")
            } else {
                t(lang, "Continue", "Endelea")
            }
        ),
        None => format!(
            r#"<p class="success-message">🎉 {}</p>"#,
            t(
                lang,
                "Your config is complete. Copy it into your project.",
                "Usanidi wako umekamilika. Unakili kwenye mradi wako."
            )
        ),
    };

    let content = format!(
        r#"
    <h1>🔧 {}</h1>
    <p class="lead">{}</p>
    {}
    {}
    {}
    <form method="POST" action="/builder/reset" class="inline-form">
        <button type="submit" class="btn-link">{}</button>
    </form>
    "#,
        t(lang, "wagmi config builder", "Kijenzi cha usanidi wa wagmi"),
        t(
            lang,
            "Answer three questions and we will write the wagmi setup for your dapp.",
            "Jibu maswali matatu nasi tutaandika usanidi wa wagmi kwa dapp yako."
        ),
        progress(lang, state, None),
        action,
        snippet_panel(lang, state),
        t(lang, "Start over", "Anza upya"),
    );

    render_page(visitor, t(lang, "Builder", "Kijenzi"), &content)
}

/// `selected` is the provider to show as chosen: a pending choice or the
/// saved one.
pub fn render_provider(
    visitor: &Visitor,
    state: &WizardState,
    selected: Option<Provider>,
    error: Option<&str>,
) -> String {
    let lang = visitor.lang;

    let options: String = Provider::ALL
        .iter()
        .map(|p| {
            let checked = if selected == Some(*p) { " checked" } else { "" };
            let note = if p.requires_api_key() {
                t(lang, "needs a free API key", "inahitaji ufunguo wa API wa bure")
            } else {
                t(lang, "no key, rate limited", "bila ufunguo, ina kikomo")
            };
            format!(
                r#"
            <label class="choice">
                <input type="radio" name="provider" value="{}" required{}>
                <strong>{}</strong> <span class="meta">({})</span>
            </label>"#,
                p.id(),
                checked,
                p.display_name(),
                note
            )
        })
        .collect();

    let content = format!(
        r#"
    <h1>{}</h1>
    {}
    {}
    <p>{}</p>
    <form id="{}" method="POST" action="/builder/provider" class="wizard-form">{}
        <button type="submit" class="btn btn-primary">{}</button>
        {}
    </form>
    {}
    "#,
        WizardStep::Provider.title().get(lang),
        progress(lang, state, Some(WizardStep::Provider)),
        error_banner(error),
        t(
            lang,
            "A provider is the RPC service your dapp talks to.",
            "Mtoa huduma ni huduma ya RPC ambayo dapp yako inawasiliana nayo."
        ),
        FORM_ID,
        options,
        t(lang, "Save and generate", "Hifadhi na tengeneza"),
        next_link(lang, state, WizardStep::Provider),
        snippet_panel(lang, state),
    );

    render_form_page(visitor, WizardStep::Provider.title().get(lang), &content, FORM_ID)
}

pub fn render_chains(
    visitor: &Visitor,
    state: &WizardState,
    selected: &[Chain],
    network: NetworkType,
    error: Option<&str>,
) -> String {
    let lang = visitor.lang;

    let chains: String = Chain::ALL
        .iter()
        .map(|c| {
            let checked = if selected.contains(c) { " checked" } else { "" };
            format!(
                r#"
            <label class="choice">
                <input type="checkbox" name="chains" value="{}"{}> {}
            </label>"#,
                c.id(),
                checked,
                c.display_name()
            )
        })
        .collect();

    let networks: String = [
        (NetworkType::Mainnet, t(lang, "Mainnet", "Mtandao mkuu")),
        (NetworkType::Testnet, t(lang, "Testnet", "Mtandao wa majaribio")),
    ]
    .iter()
    .map(|(n, label)| {
        let checked = if *n == network { " checked" } else { "" };
        format!(
            r#"
            <label class="choice">
                <input type="radio" name="network" value="{}"{}> {}
            </label>"#,
            n.id(),
            checked,
            label
        )
    })
    .collect();

    let content = format!(
        r#"
    <h1>{}</h1>
    {}
    {}
    <form id="{}" method="POST" action="/builder/chainconfig" class="wizard-form">
        <fieldset>
            <legend>{}</legend>{}
        </fieldset>
        <fieldset>
            <legend>{}</legend>{}
        </fieldset>
        <button type="submit" class="btn btn-primary">{}</button>
        {}
    </form>
    {}
    "#,
        WizardStep::Chains.title().get(lang),
        progress(lang, state, Some(WizardStep::Chains)),
        error_banner(error),
        FORM_ID,
        t(lang, "Chains", "Minyororo"),
        chains,
        t(lang, "Network", "Mtandao"),
        networks,
        t(lang, "Save and generate", "Hifadhi na tengeneza"),
        next_link(lang, state, WizardStep::Chains),
        snippet_panel(lang, state),
    );

    render_form_page(visitor, WizardStep::Chains.title().get(lang), &content, FORM_ID)
}

pub fn render_apikey(
    visitor: &Visitor,
    state: &WizardState,
    confirmed: bool,
    error: Option<&str>,
) -> String {
    let lang = visitor.lang;

    let body = match state.selection.provider {
        Some(provider) => match (provider.api_key_var(), provider.signup_url()) {
            (Some(var), Some(url)) => format!(
                r#"
        <p>{} <a href="{}" target="_blank" rel="noopener noreferrer">{} ↗</a></p>
        <p>{} <code>.env.local</code> {} <code>{}</code>.</p>
        <label class="choice">
            <input type="checkbox" name="confirmed" value="yes"{}> {}
        </label>"#,
                t(lang, "Create a free key at", "Tengeneza ufunguo wa bure kwenye"),
                url,
                provider.display_name(),
                t(lang, "Put it in", "Uweke kwenye"),
                t(lang, "as", "kama"),
                var,
                if confirmed { " checked" } else { "" },
                t(lang, "I have my API key", "Nina ufunguo wangu wa API"),
            ),
            _ => format!(
                r#"<p>{}</p><input type="hidden" name="confirmed" value="yes">"#,
                t(
                    lang,
                    "The public provider needs no key. Generate your config below.",
                    "Mtoa huduma wa umma hahitaji ufunguo. Tengeneza usanidi wako hapa chini."
                )
            ),
        },
        None => format!(
            r#"<p>{} <a href="/builder/provider">{}</a></p>"#,
            t(lang, "Pick a provider first.", "Chagua mtoa huduma kwanza."),
            WizardStep::Provider.title().get(lang)
        ),
    };

    let content = format!(
        r#"
    <h1>{}</h1>
    {}
    {}
    <form id="{}" method="POST" action="/builder/apikey" class="wizard-form">{}
        <button type="submit" class="btn btn-primary">{}</button>
        {}
    </form>
    {}
    "#,
        WizardStep::ApiKey.title().get(lang),
        progress(lang, state, Some(WizardStep::ApiKey)),
        error_banner(error),
        FORM_ID,
        body,
        t(lang, "Generate config", "Tengeneza usanidi"),
        next_link(lang, state, WizardStep::ApiKey),
        snippet_panel(lang, state),
    );

    render_form_page(visitor, WizardStep::ApiKey.title().get(lang), &content, FORM_ID)
}
