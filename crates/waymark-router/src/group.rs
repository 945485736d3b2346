//! Fluent registration of related routes sharing a prefix and defaults.
//!
//! A group borrows its router mutably, so all registration happens during
//! the setup phase; matching only starts once every group is dropped.

use crate::route::Route;
use crate::router::Router;
use crate::store::RouteId;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("no route has been created in this group yet")]
    NoCurrentRoute,
}

/// Route builder with group-local defaults. The default action, default
/// methods, and pattern prefix apply only to routes created after they are
/// set, never retroactively to routes already registered.
pub struct RouteGroup<'r, T> {
    router: &'r mut Router<T>,
    prefix: Option<String>,
    default_action: Option<T>,
    default_methods: Option<Vec<String>>,
    current: Option<RouteId>,
}

impl<'r, T: Clone> RouteGroup<'r, T> {
    pub fn new(router: &'r mut Router<T>) -> Self {
        RouteGroup {
            router,
            prefix: None,
            default_action: None,
            default_methods: None,
            current: None,
        }
    }

    /// Create and register a route for `pattern`, prefixed with the group
    /// prefix and stamped with the group defaults as they stand right now.
    /// The new route becomes the group's current route.
    pub fn route(&mut self, pattern: &str) -> &mut Self {
        self.route_with(pattern, None, std::iter::empty::<String>())
    }

    /// Like [`route`](Self::route), with inline overrides: a `Some` action
    /// beats the group's default action, and a non-empty method list beats
    /// the group's default methods, for this route only.
    pub fn route_with<I, S>(&mut self, pattern: &str, action: Option<T>, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = match &self.prefix {
            Some(prefix) => format!("{prefix}{pattern}"),
            None => pattern.to_string(),
        };

        let mut route = Route::new(pattern);
        match action {
            Some(action) => route.set_action(action),
            None => {
                if let Some(default) = &self.default_action {
                    route.set_action(default.clone());
                }
            }
        }

        let overrides: Vec<String> = methods.into_iter().map(Into::into).collect();
        if !overrides.is_empty() {
            route.set_methods(overrides);
        } else if let Some(default) = &self.default_methods {
            route.set_methods(default.clone());
        }

        self.current = Some(self.router.add_route(route));
        self
    }

    /// Assign an action to the current route.
    pub fn to_action(&mut self, action: T) -> Result<&mut Self, GroupError> {
        self.current_route()?.set_action(action);
        Ok(self)
    }

    /// Replace the current route's method set with this single method.
    pub fn from_method(&mut self, method: impl Into<String>) -> Result<&mut Self, GroupError> {
        self.current_route()?.set_methods([method.into()]);
        Ok(self)
    }

    /// Replace the current route's method set.
    pub fn from_methods<I, S>(&mut self, methods: I) -> Result<&mut Self, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.current_route()?.set_methods(methods);
        Ok(self)
    }

    /// Default action for routes created from here on.
    pub fn set_default_action(&mut self, action: T) -> &mut Self {
        self.default_action = Some(action);
        self
    }

    /// Default method set for routes created from here on.
    pub fn set_default_methods<I, S>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Pattern prefix for routes created from here on.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        let prefix = prefix.into();
        debug!("group prefix set to '{prefix}'");
        self.prefix = Some(prefix);
        self
    }

    /// A child group over the same router with fresh defaults, fresh
    /// prefix, and no current route. Registration order stays shared with
    /// the parent: routes land in the router as they are created.
    pub fn subgroup(&mut self) -> RouteGroup<'_, T> {
        RouteGroup::new(self.router)
    }

    fn current_route(&mut self) -> Result<&mut Route<T>, GroupError> {
        let id = self.current.ok_or(GroupError::NoCurrentRoute)?;
        self.router.route_mut(id).ok_or(GroupError::NoCurrentRoute)
    }
}
