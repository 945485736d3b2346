//! Waymark: ordered, first-match-wins path routing.
//!
//! Patterns are `/`-separated templates mixing literal segments, trailing
//! `:name` markers (which bind the matched segment's value), and shorthand
//! character-class rules (`[alpha]`, `[num]`, `[alnum]`, `[slug]`). A
//! [`Router`] resolves a target path plus HTTP method to the first route
//! registered whose pattern and method set both accept it, and hands back
//! the bound parameters as a per-call [`MatchResult`].
//!
//! ```
//! use waymark_router::{Route, Router};
//!
//! let mut router: Router<&str> = Router::new();
//! router.add_route(
//!     Route::new("/books/:id")
//!         .with_methods(["GET"])
//!         .with_action("show-book"),
//! );
//!
//! let result = router.match_target("/books/42", "get").unwrap();
//! assert_eq!(result.route.action(), Some(&"show-book"));
//! assert_eq!(result.parameters.get_named("id"), Some("42"));
//! ```

pub mod config;
pub mod group;
pub mod matcher;
pub mod params;
pub mod pattern;
pub mod route;
pub mod router;
pub mod rules;
pub mod store;

pub use config::RouteConfig;
pub use group::{GroupError, RouteGroup};
pub use matcher::PatternMatcher;
pub use params::{ParamEntry, Parameters};
pub use pattern::{compile, CompiledPattern};
pub use route::Route;
pub use router::{MatchError, MatchResult, Router};
pub use store::{RouteId, RouteStore, StoreError};
