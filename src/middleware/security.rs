// src/middleware/security.rs
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

lazy_static::lazy_static! {
    // Inline script drives the copy button; inline style the flip-cards.
    static ref CONTENT_SECURITY_POLICY: HeaderValue = HeaderValue::from_str(&[
        "default-src 'self'",
        "script-src 'self' 'unsafe-inline'",
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "connect-src 'self'",
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self' mailto:",
    ].join("; ")).unwrap();

    static ref PERMISSIONS_POLICY: HeaderValue = HeaderValue::from_str(&[
        "geolocation=()",
        "microphone=()",
        "camera=()",
        "payment=()",
        "usb=()",
    ].join(", ")).unwrap();
}

/// Header choices that depend on deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityPolicy {
    pub hsts: bool,
}

pub async fn security_headers(
    State(policy): State<SecurityPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        CONTENT_SECURITY_POLICY.clone(),
    );
    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        PERMISSIONS_POLICY.clone(),
    );

    // Only enable in production with HTTPS
    if policy.hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    headers.remove(header::SERVER);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Router};
    use tower::ServiceExt;

    fn app(hsts: bool) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                SecurityPolicy { hsts },
                security_headers,
            ))
    }

    async fn fetch(app: Router) -> axum::response::Response {
        app.oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_security_headers_added() {
        let response = fetch(app(false)).await;

        let headers = response.headers();
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(headers[header::CONTENT_SECURITY_POLICY]
            .to_str()
            .unwrap()
            .contains("form-action 'self' mailto:"));
    }

    #[tokio::test]
    async fn test_hsts_follows_policy() {
        let response = fetch(app(false)).await;
        assert!(response.headers().get(header::STRICT_TRANSPORT_SECURITY).is_none());

        let response = fetch(app(true)).await;
        assert_eq!(
            response.headers()[header::STRICT_TRANSPORT_SECURITY],
            "max-age=31536000; includeSubDomains"
        );
    }
}
