// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::MethodRouter;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::binding::bind_endpoint;
use crate::endpoints::EndpointSet;
use crate::errors::RouteError;
use crate::observability::messages::server::RouteRegistered;
use crate::observability::messages::StructuredLog;
use crate::traits::Endpoint;

/// Explicit route table, built once in the entry point and handed to the
/// server. Registration order is preserved.
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

struct Route {
    path: String,
    endpoint: &'static str,
    handler: MethodRouter,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `endpoint` at `path`.
    pub fn register<E>(mut self, path: &str, endpoint: Arc<E>) -> Result<Self, RouteError>
    where
        E: Endpoint + 'static,
    {
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_string()));
        }
        if self.routes.iter().any(|route| route.path == path) {
            return Err(RouteError::DuplicatePath(path.to_string()));
        }

        let name = endpoint.name();
        RouteRegistered {
            path,
            endpoint: name,
        }
        .log();

        self.routes.push(Route {
            path: path.to_string(),
            endpoint: name,
            handler: bind_endpoint(endpoint),
        });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// `(path, endpoint name)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.routes
            .iter()
            .map(|route| (route.path.as_str(), route.endpoint))
    }

    /// Convert into an axum [`Router`] with request tracing attached.
    ///
    /// Request bodies are not size-limited; only a decode failure produces a
    /// non-200 status.
    pub fn into_router(self) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, route| {
                router.route(&route.path, route.handler)
            })
            .layer(DefaultBodyLimit::disable())
            .layer(TraceLayer::new_for_http())
    }
}

/// The four string operation routes.
pub fn string_routes(endpoints: EndpointSet) -> Result<RouteTable, RouteError> {
    RouteTable::new()
        .register("/uppercase", endpoints.uppercase)?
        .register("/count", endpoints.count)?
        .register("/reverse", endpoints.reverse)?
        .register("/truncate", endpoints.truncate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    fn endpoints() -> EndpointSet {
        EndpointSet::from_config(&ServiceConfig::default())
    }

    #[test]
    fn string_routes_registers_all_operations() {
        let table = string_routes(endpoints()).unwrap();
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("/uppercase", "uppercase"),
                ("/count", "count"),
                ("/reverse", "reverse"),
                ("/truncate", "truncate"),
            ]
        );
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let set = endpoints();
        let result = RouteTable::new()
            .register("/uppercase", Arc::clone(&set.uppercase))
            .and_then(|table| table.register("/uppercase", set.reverse));
        assert_eq!(
            result.err(),
            Some(RouteError::DuplicatePath("/uppercase".to_string()))
        );
    }

    #[test]
    fn path_without_leading_slash_is_rejected() {
        let result = RouteTable::new().register("count", endpoints().count);
        assert_eq!(
            result.err(),
            Some(RouteError::InvalidPath("count".to_string()))
        );
    }

    #[test]
    fn new_table_is_empty() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
