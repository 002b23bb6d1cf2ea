// src/handlers/wizard.rs
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

use crate::context::Visitor;
use crate::i18n::{t, Lang};
use crate::storage::client;
use crate::templates;
use crate::wizard::selection::{Chain, NetworkType, Provider};
use crate::wizard::{Selection, WizardError, WizardState, WizardStep};
use crate::AppState;

type WizardRejection = (StatusCode, Html<String>);

fn describe(error: &WizardError, lang: Lang) -> String {
    match error {
        WizardError::MissingSelection(step) => format!(
            "{} {}",
            t(lang, "Complete this step first:", "Kamilisha hatua hii kwanza:"),
            step.title().get(lang)
        ),
        WizardError::ApiKeyNotConfirmed(provider) => format!(
            "{} ({})",
            t(
                lang,
                "Confirm you have an API key to continue.",
                "Thibitisha kuwa una ufunguo wa API ili uendelee."
            ),
            provider.display_name()
        ),
    }
}

fn render_step(visitor: &Visitor, state: &WizardState, step: WizardStep, error: Option<&str>) -> String {
    let selection = &state.selection;
    match step {
        WizardStep::Provider => {
            templates::wizard::render_provider(visitor, state, selection.provider, error)
        }
        WizardStep::Chains => templates::wizard::render_chains(
            visitor,
            state,
            &selection.chains,
            selection.network.unwrap_or_default(),
            error,
        ),
        WizardStep::ApiKey => {
            templates::wizard::render_apikey(visitor, state, selection.api_key_confirmed, error)
        }
    }
}

fn reject(visitor: &Visitor, state: &WizardState, step: WizardStep, message: &str) -> WizardRejection {
    (
        StatusCode::BAD_REQUEST,
        Html(render_step(visitor, state, step, Some(message))),
    )
}

/// Records a selection, rebuilds that step's fragment and persists the
/// whole wizard as one unit.
fn apply(
    app: &AppState,
    visitor: &Visitor,
    jar: CookieJar,
    mut wizard: WizardState,
    selection: Selection,
) -> Result<CookieJar, WizardRejection> {
    let step = selection.step();
    wizard.record_selection(selection);

    if let Err(e) = wizard.build_snippet(step) {
        tracing::warn!("Could not build {} fragment: {}", step, e);
        let message = describe(&e, visitor.lang);
        return Err(reject(visitor, &wizard, e.step(), &message));
    }

    tracing::info!("Wizard step {} built", step.number());
    Ok(app.client_store.save_wizard(jar, &wizard))
}

fn next_location(step: WizardStep) -> &'static str {
    step.next().map(WizardStep::path).unwrap_or("/builder")
}

pub async fn intro(visitor: Visitor, jar: CookieJar) -> Html<String> {
    let wizard = client::read_wizard(&jar);
    Html(templates::wizard::render_intro(&visitor, &wizard))
}

/// Step pages also accept their form fields by GET. The language toggle
/// sends unsaved choices that way; they are shown, not recorded.
pub async fn provider_page(visitor: Visitor, jar: CookieJar) -> Html<String> {
    let wizard = client::read_wizard(&jar);
    let selected = visitor
        .location
        .param("provider")
        .and_then(Provider::parse)
        .or(wizard.selection.provider);
    Html(templates::wizard::render_provider(&visitor, &wizard, selected, None))
}

#[derive(Debug, Deserialize)]
pub struct ProviderForm {
    pub provider: String,
}

pub async fn provider_submit(
    State(state): State<Arc<AppState>>,
    visitor: Visitor,
    jar: CookieJar,
    Form(form): Form<ProviderForm>,
) -> Result<(CookieJar, Redirect), WizardRejection> {
    let wizard = client::read_wizard(&jar);

    let provider = match Provider::parse(&form.provider) {
        Some(provider) => provider,
        None => {
            tracing::warn!("Unknown provider submitted: {:?}", form.provider);
            let message = t(visitor.lang, "Pick one of the providers.", "Chagua mmoja wa watoa huduma.");
            return Err(reject(&visitor, &wizard, WizardStep::Provider, message));
        }
    };

    let jar = apply(&state, &visitor, jar, wizard, Selection::Provider(provider))?;
    Ok((jar, Redirect::to(next_location(WizardStep::Provider))))
}

pub async fn chains_page(visitor: Visitor, jar: CookieJar) -> Html<String> {
    let wizard = client::read_wizard(&jar);
    let query = &visitor.location.query;
    let pending = query.iter().any(|(k, _)| k == "chains" || k == "network");

    let html = if pending {
        let (chains, network) = parse_chain_form(query);
        templates::wizard::render_chains(&visitor, &wizard, &chains, network, None)
    } else {
        render_step(&visitor, &wizard, WizardStep::Chains, None)
    };
    Html(html)
}

/// Checkbox groups repeat the `chains` key, so the body is read as pairs.
pub fn parse_chain_form(pairs: &[(String, String)]) -> (Vec<Chain>, NetworkType) {
    let chains = pairs
        .iter()
        .filter(|(k, _)| k == "chains")
        .filter_map(|(_, v)| Chain::parse(v))
        .collect();
    let network = pairs
        .iter()
        .find(|(k, _)| k == "network")
        .and_then(|(_, v)| NetworkType::parse(v))
        .unwrap_or_default();
    (chains, network)
}

pub async fn chains_submit(
    State(state): State<Arc<AppState>>,
    visitor: Visitor,
    jar: CookieJar,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(CookieJar, Redirect), WizardRejection> {
    let wizard = client::read_wizard(&jar);
    let (chains, network) = parse_chain_form(&pairs);

    if chains.is_empty() {
        let message = t(visitor.lang, "Pick at least one chain.", "Chagua angalau mnyororo mmoja.");
        return Err(reject(&visitor, &wizard, WizardStep::Chains, message));
    }

    let jar = apply(&state, &visitor, jar, wizard, Selection::Chains { chains, network })?;
    Ok((jar, Redirect::to(next_location(WizardStep::Chains))))
}

pub async fn apikey_page(visitor: Visitor, jar: CookieJar) -> Html<String> {
    let wizard = client::read_wizard(&jar);
    let confirmed = match visitor.location.param("lang") {
        // Came from the toggle: an unticked box is simply absent.
        Some(_) => visitor.location.param("confirmed") == Some("yes"),
        None => wizard.selection.api_key_confirmed,
    };
    Html(templates::wizard::render_apikey(&visitor, &wizard, confirmed, None))
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyForm {
    pub confirmed: Option<String>,
}

pub async fn apikey_submit(
    State(state): State<Arc<AppState>>,
    visitor: Visitor,
    jar: CookieJar,
    Form(form): Form<ApiKeyForm>,
) -> Result<(CookieJar, Redirect), WizardRejection> {
    let wizard = client::read_wizard(&jar);
    let confirmed = form.confirmed.as_deref() == Some("yes");

    let jar = apply(&state, &visitor, jar, wizard, Selection::ApiKeyConfirmed(confirmed))?;
    Ok((jar, Redirect::to(next_location(WizardStep::ApiKey))))
}

pub async fn reset(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("Wizard reset");
    (state.client_store.clear_wizard(jar), Redirect::to("/builder"))
}
