// src/routes.rs
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir};

use crate::handlers::{forms, web, wizard};
use crate::middleware::{language, rate_limit, security};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ==================
        // CONTENT PAGES
        // ==================
        .route("/", get(web::index))
        .route("/name", post(forms::set_name))
        .route("/about", get(web::about))
        .route("/join", get(forms::join_page).post(forms::join_submit))
        .route("/tracks", get(web::tracks))
        .route("/starknet", get(web::starknet))
        .route("/starknet/quiz", get(web::quiz))
        .route("/starknet/cards", get(web::cards))
        .route("/wallets", get(web::wallets))
        .route("/podcasts", get(web::podcasts))
        .route("/articles", get(web::articles))
        .route("/community", get(web::community))
        // ==================
        // WAGMI BUILDER
        // ==================
        .route("/builder", get(wizard::intro))
        .route(
            "/builder/provider",
            get(wizard::provider_page).post(wizard::provider_submit),
        )
        .route(
            "/builder/chainconfig",
            get(wizard::chains_page).post(wizard::chains_submit),
        )
        .route(
            "/builder/apikey",
            get(wizard::apikey_page).post(wizard::apikey_submit),
        )
        .route("/builder/reset", post(wizard::reset))
        // Static files
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(web::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.form_limiter.clone(),
            rate_limit::form_rate_limit,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.client_store.clone(),
            language::persist_language,
        ))
        .layer(axum::middleware::from_fn_with_state(
            security::SecurityPolicy {
                hsts: state.config.enable_hsts,
            },
            security::security_headers,
        ))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::middleware::cache::PageCache;
    use crate::middleware::rate_limit::RateLimiter;
    use crate::storage::client::{self, ClientStore};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, Response, StatusCode},
    };
    use axum_extra::extract::cookie::{Cookie, CookieJar};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config::default();
        let state = Arc::new(AppState {
            client_store: ClientStore::new(config.cookie_max_age_days),
            page_cache: PageCache::new(config.page_cache_ttl_secs),
            form_limiter: Arc::new(RateLimiter::new(1000, 60)),
            config,
        });
        create_router(state)
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_req(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    /// Applies a response's `Set-Cookie` headers to a jar, as a browser would.
    fn cookies_from(response: &Response<Body>, jar: CookieJar) -> CookieJar {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| Cookie::parse_encoded(v.to_string()).ok())
            .fold(jar, |jar, cookie| jar.add(cookie))
    }

    fn cookie_header(jar: &CookieJar) -> String {
        jar.iter()
            .map(|c| c.encoded().stripped().to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn location(response: &Response<Body>) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_home_page_renders() {
        let response = app().oneshot(get_req("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Learn Web3, one step at a time"));
        assert!(html.contains(r#"action="/name""#));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_page() {
        let response = app().oneshot(get_req("/nope", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("<code>/nope</code>"));
    }

    #[tokio::test]
    async fn test_submitted_name_is_read_back() {
        let response = app()
            .oneshot(post_form("/name", "name=%20Wanjiku%20Kamau%20", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/tracks");

        let raw = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(raw.starts_with("display_name=Wanjiku%20Kamau;"));

        let jar = cookies_from(&response, CookieJar::new());
        assert_eq!(client::read_display_name(&jar), "Wanjiku Kamau");

        let response = app()
            .oneshot(get_req("/tracks", Some(&cookie_header(&jar))))
            .await
            .unwrap();
        assert!(body_text(response).await.contains("Welcome, Wanjiku Kamau!"));
    }

    #[tokio::test]
    async fn test_name_keeps_inner_spacing() {
        let response = app()
            .oneshot(post_form("/name", "name=Mary%20%20Ann", None))
            .await
            .unwrap();
        let jar = cookies_from(&response, CookieJar::new());
        assert_eq!(client::read_display_name(&jar), "Mary  Ann");

        let response = app()
            .oneshot(get_req("/tracks", Some(&cookie_header(&jar))))
            .await
            .unwrap();
        assert!(body_text(response).await.contains("Welcome, Mary  Ann!"));
    }

    #[tokio::test]
    async fn test_overlong_name_is_rejected() {
        let body = format!("name={}", "a".repeat(65));
        let response = app().oneshot(post_form("/name", &body, None)).await.unwrap();
        assert_eq!(location(&response), "/");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_blank_name_sets_no_cookie() {
        let response = app()
            .oneshot(post_form("/name", "name=%20%20", None))
            .await
            .unwrap();
        assert_eq!(location(&response), "/");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_language_toggle_swaps_text() {
        let response = app().oneshot(get_req("/starknet?lang=sw", None)).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Misingi ya StarkNet"));
        assert!(!html.contains("What is StarkNet?"));

        let response = app()
            .oneshot(get_req("/starknet", Some("lang=sw")))
            .await
            .unwrap();
        assert!(body_text(response).await.contains("StarkNet ni nini?"));
    }

    #[tokio::test]
    async fn test_flipped_card_stays_flipped_across_toggle() {
        let response = app()
            .oneshot(get_req("/starknet/cards?flipped=1", None))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"class="flip-card flipped" id="card-1""#));
        assert!(html.contains("/starknet/cards?flipped=1&amp;lang=sw"));

        let response = app()
            .oneshot(get_req("/starknet/cards?flipped=1&lang=sw", None))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"class="flip-card flipped" id="card-1""#));
        assert!(html.contains("Hukusanya miamala"));
    }

    #[tokio::test]
    async fn test_quiz_answers_survive_toggle() {
        let response = app()
            .oneshot(get_req("/starknet/quiz?q0=1&q1=0&check=1&lang=sw", None))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"name="q0" value="1" checked"#));
        assert!(html.contains("Alama zako:"));
        assert!(html.contains("<strong>1/4</strong>"));
        assert!(html.contains(r#"<input type="hidden" name="check" value="1">"#));
    }

    #[tokio::test]
    async fn test_unsubmitted_quiz_choice_survives_toggle() {
        let response = app().oneshot(get_req("/starknet/quiz", None)).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"<form id="quiz-form""#));
        assert!(html.contains(r#"form="quiz-form" formmethod="get" formaction="/starknet/quiz""#));

        // What the toggle button submits for a ticked but unchecked answer.
        let response = app()
            .oneshot(get_req("/starknet/quiz?q2=0&lang=sw", None))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"name="q2" value="0" checked"#));
        assert!(!html.contains("Alama zako:"));
    }

    #[tokio::test]
    async fn test_unsaved_builder_choices_survive_toggle() {
        let response = app()
            .oneshot(get_req("/builder/provider?provider=infura&lang=sw", None))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"value="infura" required checked"#));
        assert!(html.contains(r#"form="wizard-form""#));

        let response = app()
            .oneshot(get_req(
                "/builder/chainconfig?chains=base&chains=optimism&network=testnet&lang=sw",
                None,
            ))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"value="base" checked"#));
        assert!(html.contains(r#"value="optimism" checked"#));
        assert!(!html.contains(r#"value="ethereum" checked"#));
        assert!(html.contains(r#"value="testnet" checked"#));
        // Shown, not saved.
        assert!(html.contains("snippet-empty"));
    }

    #[tokio::test]
    async fn test_contact_form_redirects_to_mailto() {
        let response = app()
            .oneshot(post_form(
                "/join",
                "name=Halima&email=halima%40example.com&message=Ningependa+kusaidia",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&response),
            "mailto:hello@jifunze.dev?subject=Message%20from%20Halima\
             &body=Ningependa%20kusaidia%0A%0AFrom%3A%20halima%40example.com"
        );
    }

    #[tokio::test]
    async fn test_contact_form_rejects_bad_email() {
        let response = app()
            .oneshot(post_form("/join", "name=Halima&email=nope&message=hi", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Please check: email"));
    }

    #[tokio::test]
    async fn test_wizard_flow_builds_alchemy_snippet() {
        let mut jar = CookieJar::new();

        let response = app()
            .oneshot(post_form("/builder/provider", "provider=alchemy", None))
            .await
            .unwrap();
        assert_eq!(location(&response), "/builder/chainconfig");
        jar = cookies_from(&response, jar);

        let response = app()
            .oneshot(post_form(
                "/builder/chainconfig",
                "chains=ethereum&chains=polygon&network=mainnet",
                Some(&cookie_header(&jar)),
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/builder/apikey");
        jar = cookies_from(&response, jar);

        let response = app()
            .oneshot(post_form(
                "/builder/apikey",
                "confirmed=yes",
                Some(&cookie_header(&jar)),
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/builder");
        jar = cookies_from(&response, jar);

        let wizard = client::read_wizard(&jar);
        assert!(wizard.is_complete());
        let code = wizard.snippet.render();
        assert!(code.contains("alchemyProvider"));
        assert!(code.contains("import { mainnet, polygon } from 'wagmi/chains'"));

        let response = app()
            .oneshot(get_req("/builder", Some(&cookie_header(&jar))))
            .await
            .unwrap();
        assert!(body_text(response).await.contains("alchemyProvider({ apiKey: process.env.ALCHEMY_API_KEY })"));
    }

    #[tokio::test]
    async fn test_unconfirmed_api_key_is_rejected() {
        let mut jar = CookieJar::new();
        for (uri, body) in [
            ("/builder/provider", "provider=infura"),
            ("/builder/chainconfig", "chains=arbitrum&network=testnet"),
        ] {
            let response = app()
                .oneshot(post_form(uri, body, Some(&cookie_header(&jar))))
                .await
                .unwrap();
            jar = cookies_from(&response, jar);
        }

        let response = app()
            .oneshot(post_form("/builder/apikey", "", Some(&cookie_header(&jar))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Confirm you have an API key"));
    }

    #[tokio::test]
    async fn test_chain_step_requires_a_chain() {
        let response = app()
            .oneshot(post_form("/builder/chainconfig", "network=mainnet", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_security_headers_present_on_pages() {
        let response = app().oneshot(get_req("/about", None)).await.unwrap();
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }
}
