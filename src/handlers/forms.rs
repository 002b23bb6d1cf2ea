// src/handlers/forms.rs
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::context::Visitor;
use crate::i18n::t;
use crate::templates;
use crate::templates::join::ContactDraft;
use crate::utils::{mailto, validation};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct NameForm {
    #[validate(length(max = 64))]
    pub name: String,
}

pub async fn set_name(
    State(state): State<Arc<AppState>>,
    mut visitor: Visitor,
    jar: CookieJar,
    Form(form): Form<NameForm>,
) -> (CookieJar, Redirect) {
    let form = NameForm {
        name: form.name.trim().to_string(),
    };
    if let Err(errors) = form.validate() {
        tracing::warn!(
            "Rejected display name, invalid fields: {}",
            validation::invalid_fields(&errors)
        );
        return (jar, Redirect::to("/"));
    }

    if !visitor.display_name.set(&form.name) {
        tracing::warn!("Ignoring blank display name");
        return (jar, Redirect::to("/"));
    }

    tracing::info!("Display name saved");
    let jar = state
        .client_store
        .save_display_name(jar, visitor.display_name.get());
    (jar, Redirect::to("/tracks"))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl ContactForm {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

pub async fn join_page(visitor: Visitor) -> Html<String> {
    Html(templates::join::render(&visitor, &ContactDraft::default(), None))
}

/// Sends the visitor to their mail client with the message filled in.
pub async fn join_submit(
    State(state): State<Arc<AppState>>,
    visitor: Visitor,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, (StatusCode, Html<String>)> {
    let form = form.trimmed();

    if let Err(errors) = form.validate() {
        let fields = validation::invalid_fields(&errors);
        tracing::warn!("Rejected contact form, invalid fields: {}", fields);

        let message = format!(
            "{} {}",
            t(visitor.lang, "Please check:", "Tafadhali kagua:"),
            fields
        );
        let draft = ContactDraft {
            name: &form.name,
            email: &form.email,
            message: &form.message,
        };
        return Err((
            StatusCode::BAD_REQUEST,
            Html(templates::join::render(&visitor, &draft, Some(&message))),
        ));
    }

    let uri = mailto::contact_mailto(
        &state.config.contact_email,
        &form.name,
        &form.email,
        &form.message,
    );
    tracing::info!("Contact form redirected to mail client");
    Ok(Redirect::to(&uri))
}
