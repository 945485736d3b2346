//! End-to-end behavior of the router: group-built route tables,
//! declaratively loaded tables, and ordering guarantees across builders.

use anyhow::Result;
use waymark_router::{
    compile, MatchError, ParamEntry, Route, RouteConfig, RouteGroup, RouteId, Router,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small application-style route table built through a group.
fn library_router() -> Router<&'static str> {
    let mut router = Router::new();
    let mut group = RouteGroup::new(&mut router);
    group.set_default_methods(["GET"]);
    group
        .route("/")
        .to_action("home")
        .unwrap()
        .route("/books")
        .to_action("list-books")
        .unwrap()
        // `:id` compiles to the `.+` fallback, which spans `/`; the more
        // specific review route must come first under first-match-wins.
        .route("/books/:id/reviews/[num]")
        .to_action("show-review")
        .unwrap()
        .route("/books/:id")
        .to_action("show-book")
        .unwrap()
        .route("/search/:term")
        .from_methods(["GET", "POST"])
        .unwrap()
        .to_action("search")
        .unwrap();
    router
}

#[test]
fn test_full_table_resolution() -> Result<()> {
    init_tracing();
    let router = library_router();

    let home = router.match_target("/", "GET")?;
    assert_eq!(home.route.action(), Some(&"home"));
    assert!(home.parameters.is_empty());

    let book = router.match_target("/books/823", "GET")?;
    assert_eq!(book.route.action(), Some(&"show-book"));
    assert_eq!(book.parameters.get_named("id"), Some("823"));

    let review = router.match_target("/books/823/reviews/2", "GET")?;
    assert_eq!(review.route.action(), Some(&"show-review"));
    assert_eq!(review.parameters.get_named("id"), Some("823"));
    assert_eq!(review.parameters.get(3), Some("2"));

    let search = router.match_target("/search/rust", "POST")?;
    assert_eq!(search.route.action(), Some(&"search"));
    assert_eq!(search.parameters.get_named("term"), Some("rust"));

    Ok(())
}

#[test]
fn test_unmatched_target_reports_the_target() {
    let router = library_router();
    let err = router.match_target("/nowhere/at/all/4", "GET").unwrap_err();
    match err {
        MatchError::NoRouteMatched { target } => assert_eq!(target, "/nowhere/at/all/4"),
    }
}

#[test]
fn test_registration_order_is_preserved_across_groups() {
    let mut router: Router<&str> = Router::new();

    {
        let mut api = RouteGroup::new(&mut router);
        api.set_prefix("/api").set_default_methods(["GET"]);
        api.route("/users/:id");
        api.route("/users/[num]");
    }
    {
        let mut admin = RouteGroup::new(&mut router);
        admin.set_prefix("/admin").set_default_methods(["GET"]);
        admin.route("/users/:name");
    }

    let ids: Vec<_> = router.routes().map(|(id, _)| id).collect();
    assert_eq!(ids, [RouteId(0), RouteId(1), RouteId(2)]);

    // Earlier registration wins over the later, overlapping pattern.
    let result = router.match_target("/api/users/31", "GET").unwrap();
    assert_eq!(result.id, RouteId(0));
    assert_eq!(result.parameters.get_named("id"), Some("31"));
}

#[test]
fn test_table_loaded_from_yaml() -> Result<()> {
    init_tracing();
    let yaml = "
- pattern: /status
  methods: [GET]
- pattern: /articles/:slug
  methods: [GET, HEAD]
- pattern: /articles/:slug/comments
  methods: [POST]
";
    let configs: Vec<RouteConfig> = serde_yaml::from_str(yaml)?;

    let mut router: Router<()> = Router::new();
    let ids = router.extend_from_configs(configs);
    assert_eq!(ids.len(), 3);

    let result = router.match_target("/articles/why-rust/comments", "POST")?;
    assert_eq!(result.id, ids[2]);
    assert_eq!(result.parameters.get_named("slug"), Some("why-rust"));

    assert!(router.match_target("/articles/why-rust", "POST").is_err());
    Ok(())
}

#[test]
fn test_table_loaded_from_json() -> Result<()> {
    let json = r#"[{"pattern": "/ping", "methods": ["GET"]}]"#;
    let configs: Vec<RouteConfig> = serde_json::from_str(json)?;

    let mut router: Router<()> = Router::new();
    router.extend_from_configs(configs);
    assert!(router.match_target("/ping", "GET").is_ok());
    Ok(())
}

#[test]
fn test_matching_leaves_the_store_untouched() {
    let router = library_router();

    let _ = router.match_target("/books/1", "GET").unwrap();
    let _ = router.match_target("/books/2", "GET").unwrap();

    for (_, route) in router.routes() {
        assert!(route.parameters().is_empty());
    }
}

#[test]
fn test_manual_parameter_assignment_round_trip() {
    let mut route: Route<()> = Route::new("/books");
    route.set_parameters([
        ParamEntry::positional("show"),
        ParamEntry::positional("books"),
        ParamEntry::named("id", "5"),
    ]);

    assert_eq!(route.parameters().positional(), ["show", "books", "5"]);
    assert_eq!(route.parameter(2), Some("5"));
    assert_eq!(route.named_parameter("id"), Some("5"));
    assert_eq!(route.parameter(29), None);
}

mod literal_identity {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Patterns made purely of literal segments compile to themselves
        /// with no parameters.
        #[test]
        fn compile_is_identity_for_literal_patterns(
            segments in proptest::collection::vec("[a-z][a-z0-9]{0,7}", 1..6)
        ) {
            let pattern = format!("/{}", segments.join("/"));
            let compiled = compile(&pattern);
            prop_assert_eq!(&compiled.expression, &pattern);
            prop_assert!(compiled.parameter_map.is_empty());
        }

        /// A literal pattern matches itself as a target.
        #[test]
        fn literal_pattern_matches_its_own_text(
            segments in proptest::collection::vec("[a-z][a-z0-9]{0,7}", 1..6)
        ) {
            let pattern = format!("/{}", segments.join("/"));
            let mut router: Router<()> = Router::new();
            router.add_route(Route::new(pattern.clone()).with_methods(["GET"]));
            prop_assert!(router.match_target(&pattern, "GET").is_ok());
        }
    }
}
