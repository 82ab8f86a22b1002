//! Router and middleware tests for the gate crate

#[cfg(test)]
mod gate_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::config::GateConfig;
    use crate::domain::policy::GatePolicy;
    use crate::error::AUTH_REQUIRED_HEADER;
    use crate::presentation::handlers::GateAppState;
    use crate::presentation::middleware::require_gate;
    use crate::presentation::router::gate_router;

    const CODE: &str = "correct horse";

    fn app() -> Router {
        let config = Arc::new(
            GateConfig::development()
                .with_auth_code(CODE)
                .with_policy(GatePolicy::default().allow_public(Method::POST, "/api/usage")),
        );

        Router::new()
            .nest("/api/auth", gate_router(config.clone()))
            .route("/", get(|| async { "dashboard" }))
            .route("/auth", get(|| async { "login page" }))
            .route("/health", get(|| async { "ok" }))
            .route(
                "/api/usage",
                get(|| async { "list" }).post(|| async { "saved" }),
            )
            .layer(from_fn_with_state(GateAppState { config }, require_gate))
    }

    fn request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn login_request(code: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::POST).uri("/api/auth/login");
        if let Some(code) = code {
            builder = builder.header("authCode", code);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// `name=value` pair from the login response's Set-Cookie
    async fn login_cookie(app: &Router) -> String {
        let response = app.clone().oneshot(login_request(Some(CODE))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie() {
        let app = app();
        let response = app.oneshot(login_request(Some(CODE))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("authCode="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Strict"));
        assert!(set_cookie.contains("Max-Age=2419200"));
        assert!(!set_cookie.contains(CODE));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Authentication successful");
    }

    #[tokio::test]
    async fn test_login_failure() {
        for code in [Some("wrong"), None] {
            let response = app().oneshot(login_request(code)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert!(response.headers().get(header::SET_COOKIE).is_none());
            let body = body_json(response).await;
            assert_eq!(body["detail"], "Invalid auth code");
        }
    }

    #[tokio::test]
    async fn test_api_requires_cookie() {
        let app = app();

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/usage", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[AUTH_REQUIRED_HEADER], "true");

        let cookie = login_cookie(&app).await;
        let response = app
            .oneshot(request(Method::GET, "/api/usage", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ingestion_stays_open() {
        let response = app()
            .oneshot(request(Method::POST, "/api/usage", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_raw_auth_code_cookie_is_not_accepted() {
        let cookie = format!("authCode={CODE}");
        let response = app()
            .oneshot(request(Method::GET, "/api/usage", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tampered_cookie_rejected() {
        let app = app();
        let cookie = login_cookie(&app).await;
        let tampered = cookie.replacen("authCode=1", "authCode=2", 1);
        let response = app
            .oneshot(request(Method::GET, "/api/usage", Some(&tampered)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_page_redirects() {
        let app = app();

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/auth");

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/auth", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = login_cookie(&app).await;
        let response = app
            .clone()
            .oneshot(request(Method::GET, "/auth", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let response = app
            .oneshot(request(Method::GET, "/", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let response = app()
            .oneshot(request(Method::GET, "/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = app();

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/api/auth/status", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["authenticated"], false);

        let cookie = login_cookie(&app).await;
        let response = app
            .oneshot(request(Method::GET, "/api/auth/status", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["authenticated"], true);
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let response = app()
            .oneshot(request(Method::POST, "/api/auth/logout", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("authCode=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }
}
