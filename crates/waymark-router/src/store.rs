//! Insertion-ordered route storage with stable integer IDs.

use crate::route::Route;
use std::fmt;

/// Identifier assigned to a route on insertion. IDs start at 0, increase
/// monotonically, and are never reused (the store supports no removal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub usize);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no route registered under id {0}")]
    NotFound(RouteId),
    #[error("route store is empty")]
    Empty,
}

/// Ordered collection of routes. Iteration always yields routes in
/// insertion order; registration order is the match engine's tie-break.
#[derive(Debug, Clone, Default)]
pub struct RouteStore<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteStore<T> {
    pub fn new() -> Self {
        RouteStore { routes: Vec::new() }
    }

    /// Append a route and return its newly assigned ID.
    pub fn add(&mut self, route: Route<T>) -> RouteId {
        let id = RouteId(self.routes.len());
        self.routes.push(route);
        id
    }

    pub fn find(&self, id: RouteId) -> Result<&Route<T>, StoreError> {
        self.routes.get(id.0).ok_or(StoreError::NotFound(id))
    }

    pub(crate) fn find_mut(&mut self, id: RouteId) -> Option<&mut Route<T>> {
        self.routes.get_mut(id.0)
    }

    /// ID of the most recently appended route.
    pub fn last_id(&self) -> Result<RouteId, StoreError> {
        match self.routes.len() {
            0 => Err(StoreError::Empty),
            n => Ok(RouteId(n - 1)),
        }
    }

    /// Lazy, restartable iteration in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route<T>)> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| (RouteId(index), route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
