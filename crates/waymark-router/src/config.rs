//! Declarative route definitions.
//!
//! A plain-data form of a route (pattern + methods) that callers can embed
//! in their own configuration files. This crate only converts; it never
//! reads files.

use crate::route::Route;
use crate::router::Router;
use crate::store::RouteId;
use serde::{Deserialize, Serialize};

/// One route as declared in configuration. Actions are attached in code
/// after conversion; configuration carries only the matchable parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    pub pattern: String,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl<T> Route<T> {
    /// Build an action-less route from a declarative definition.
    pub fn from_config(config: RouteConfig) -> Self {
        Route::new(config.pattern).with_methods(config.methods)
    }
}

impl<T> Router<T> {
    /// Register a batch of declared routes, preserving declaration order,
    /// and return the assigned IDs.
    pub fn extend_from_configs<I>(&mut self, configs: I) -> Vec<RouteId>
    where
        I: IntoIterator<Item = RouteConfig>,
    {
        configs
            .into_iter()
            .map(|config| self.add_route(Route::from_config(config)))
            .collect()
    }
}
