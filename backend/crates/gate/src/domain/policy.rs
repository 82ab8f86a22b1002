//! Gate policy
//!
//! Decides, from method, path and whether the caller holds a valid token,
//! what the gate does with a request. Pure; the middleware only executes
//! the decision.

use axum::http::Method;

/// Login page
pub const AUTH_PAGE: &str = "/auth";
/// Dashboard page
pub const HOME_PAGE: &str = "/";

/// How a route is protected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Never gated
    Public,
    /// JSON endpoint; a missing token is a 401
    Api,
    /// Browser page; a missing token is a redirect to the login page
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Unauthorized,
    Redirect(&'static str),
}

#[derive(Debug, Clone)]
pub struct GatePolicy {
    public_prefixes: Vec<String>,
    public_paths: Vec<String>,
    public_routes: Vec<(Method, String)>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            public_prefixes: vec!["/api/auth/".to_string(), "/assets/".to_string()],
            public_paths: vec!["/health".to_string(), "/favicon.ico".to_string()],
            public_routes: Vec::new(),
        }
    }
}

impl GatePolicy {
    /// Open a single method + path pair, e.g. an ingestion endpoint
    pub fn allow_public(mut self, method: Method, path: impl Into<String>) -> Self {
        self.public_routes.push((method, path.into()));
        self
    }

    pub fn classify(&self, method: &Method, path: &str) -> RouteClass {
        let public = self.public_prefixes.iter().any(|p| path.starts_with(p.as_str()))
            || self.public_paths.iter().any(|p| p == path)
            || self
                .public_routes
                .iter()
                .any(|(m, p)| m == method && p == path);

        if public {
            RouteClass::Public
        } else if path == "/api" || path.starts_with("/api/") {
            RouteClass::Api
        } else {
            RouteClass::Page
        }
    }

    pub fn decide(&self, method: &Method, path: &str, authenticated: bool) -> Decision {
        match self.classify(method, path) {
            RouteClass::Public => Decision::Allow,
            RouteClass::Api if authenticated => Decision::Allow,
            RouteClass::Api => Decision::Unauthorized,
            RouteClass::Page if path == AUTH_PAGE => {
                if authenticated {
                    Decision::Redirect(HOME_PAGE)
                } else {
                    Decision::Allow
                }
            }
            RouteClass::Page if authenticated => Decision::Allow,
            RouteClass::Page => Decision::Redirect(AUTH_PAGE),
        }
    }
}
