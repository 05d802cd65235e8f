use axum::{
    http::{Method, Uri},
    routing::{any, MethodRouter},
    Json, Router,
};
use serde_json::Value;

use crate::{error::AppError, extractor::DiscardedJson};

/// Which request methods a [`Route`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodPattern {
    Any,
}

/// A fixed `(method, path)` pair and the JSON it answers with.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: MethodPattern,
    pub path: &'static str,
    pub payload: &'static Value,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Builds the axum router. Unmatched paths fall through to a 404.
    pub fn into_router(self) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, route| {
                router.route(route.path, method_router(route.method, route.payload))
            })
            .fallback(not_found)
    }
}

fn method_router(pattern: MethodPattern, payload: &'static Value) -> MethodRouter {
    let handler = move |method: Method, uri: Uri, _body: DiscardedJson| async move {
        tracing::debug!(%method, path = %uri.path(), "serving fixed payload");
        Json(payload)
    };
    match pattern {
        MethodPattern::Any => any(handler),
    }
}

async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "no route");
    AppError::NotFound
}
