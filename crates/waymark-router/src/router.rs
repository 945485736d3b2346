//! The match engine: ordered, first-match-wins resolution of a target path
//! and HTTP method to a registered route.

use crate::matcher::PatternMatcher;
use crate::params::Parameters;
use crate::route::Route;
use crate::store::{RouteId, RouteStore, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("no route matched target '{target}'")]
    NoRouteMatched { target: String },
}

/// Outcome of a successful match. Bindings are match-call-scoped: the
/// stored route is untouched, and the parameters here belong to this result
/// alone.
#[derive(Debug)]
pub struct MatchResult<'a, T> {
    pub id: RouteId,
    pub route: &'a Route<T>,
    pub parameters: Parameters,
}

/// Route store plus match engine. Routes are registered during a setup
/// phase (`&mut self`); matching takes `&self` and never mutates stored
/// entities, so a populated router is safe to share across request threads.
#[derive(Debug, Default)]
pub struct Router<T> {
    store: RouteStore<T>,
    // Compiled matchers memoized by pattern text. `None` records a pattern
    // whose expression failed regex compilation; it never matches.
    matchers: RwLock<HashMap<String, Option<Arc<PatternMatcher>>>>,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Router {
            store: RouteStore::new(),
            matchers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a route, returning its assigned ID. Registration order is
    /// the tie-break when several patterns match the same target.
    pub fn add_route(&mut self, route: Route<T>) -> RouteId {
        debug!("registering route with pattern '{}'", route.pattern());
        self.store.add(route)
    }

    pub fn route(&self, id: RouteId) -> Result<&Route<T>, StoreError> {
        self.store.find(id)
    }

    pub(crate) fn route_mut(&mut self, id: RouteId) -> Option<&mut Route<T>> {
        self.store.find_mut(id)
    }

    /// Routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route<T>)> {
        self.store.iter()
    }

    pub fn last_id(&self) -> Result<RouteId, StoreError> {
        self.store.last_id()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Resolve a target path and method to the first registered route whose
    /// method set and pattern both accept it.
    ///
    /// Candidates are tried strictly in registration order and the first
    /// hit wins; later routes are not examined. The returned result carries
    /// the bound parameters for this call; the stored route stays as
    /// registered.
    pub fn match_target(&self, target: &str, method: &str) -> Result<MatchResult<'_, T>, MatchError> {
        let method = method.to_ascii_uppercase();

        for (id, route) in self.store.iter() {
            if !route.allows_method(&method) {
                trace!("route {id}: method {method} not in {:?}", route.methods());
                continue;
            }

            let Some(matcher) = self.matcher_for(route.pattern()) else {
                continue;
            };

            if matcher.is_match(target) {
                debug!("target '{target}' matched route {id} ('{}')", route.pattern());
                return Ok(MatchResult {
                    id,
                    route,
                    parameters: matcher.bind(target),
                });
            }
            trace!("route {id}: pattern '{}' rejected '{target}'", route.pattern());
        }

        Err(MatchError::NoRouteMatched {
            target: target.to_string(),
        })
    }

    // Memoized compile. Keyed by pattern text, so an edited route simply
    // misses the cache and compiles its new text.
    fn matcher_for(&self, pattern: &str) -> Option<Arc<PatternMatcher>> {
        if let Some(cached) = self.matchers.read().get(pattern) {
            trace!("matcher cache hit for pattern '{pattern}'");
            return cached.clone();
        }

        let compiled = match PatternMatcher::compile(pattern) {
            Ok(matcher) => Some(Arc::new(matcher)),
            Err(err) => {
                warn!("pattern '{pattern}' compiles to an invalid expression ({err}); it will never match");
                None
            }
        };

        self.matchers
            .write()
            .entry(pattern.to_string())
            .or_insert(compiled)
            .clone()
    }
}
