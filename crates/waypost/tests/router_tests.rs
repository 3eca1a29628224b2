//! Integration tests for the waypost route table
//!
//! Tests are organized by feature area and cover:
//! - Registration and duplicate handling
//! - Match priority and fallback
//! - Path normalization and parameter-name inference
//! - Declared and named parameters
//! - Invalid patterns
//! - Menu projection
//! - Callback handlers

use pretty_assertions::assert_eq;
use rstest::rstest;
use waypost::*;

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_add_route_appends_in_order() {
    let mut router = Router::new();
    router.add_route("/a", "A");
    router.add_route("/b", "B");

    let patterns: Vec<&str> = router.routes().iter().map(Route::pattern).collect();
    assert_eq!(patterns, vec!["/a", "/b"]);
}

#[test]
fn test_reregister_replaces_handler_only() {
    let mut router = Router::new();
    router.add_route_with_params("/about", "About", params(&[("lang", "en")]));
    router.add_route("/contact", "Contact");
    router.add_route_with_params("/about", "AboutV2", params(&[("lang", "fr")]));

    assert_eq!(router.len(), 2);
    assert_eq!(router.routes()[0].handler(), &"AboutV2");
    // Parameters from the first registration are kept
    assert_eq!(router.routes()[0].params(), &params(&[("lang", "en")]));
    // Position is kept too
    assert_eq!(router.routes()[1].pattern(), "/contact");
}

#[test]
fn test_empty_router() {
    let router: Router<&str> = Router::new();
    assert!(router.is_empty());
    assert_eq!(router.base_path(), "/");

    let route_match = router.match_path("/anything").unwrap();
    assert!(route_match.is_fallback());
    assert_eq!(route_match.handler, None);
    assert!(route_match.params.is_empty());
}

// ============================================================================
// Priority and fallback
// ============================================================================

#[test]
fn test_last_registered_wins() {
    let mut router = Router::new();
    router.add_route("/users", "Users");
    router.add_route("/users/([0-9]+)", "User");

    assert_eq!(router.match_path("/users/42").unwrap().handler, Some(&"User"));
    assert_eq!(router.match_path("/users").unwrap().handler, Some(&"Users"));
}

#[test]
fn test_earlier_route_shadowed_by_later_general_route() {
    let mut router = Router::new();
    router.add_route("/users/([0-9]+)", "User");
    router.add_route("/users", "Users");

    // "/users" is unanchored and registered later, so it wins
    assert_eq!(router.match_path("/users/42").unwrap().handler, Some(&"Users"));
}

#[test]
fn test_fallback_has_empty_params() {
    let mut router = Router::new();
    router.add_route_with_params("/about", "About", params(&[("x", "1")]));
    router.set_not_found("NotFound");

    let route_match = router.match_path("/users/alice/profile").unwrap();
    assert!(route_match.is_fallback());
    assert_eq!(route_match.handler, Some(&"NotFound"));
    assert!(route_match.params.is_empty());
    assert_eq!(route_match.pattern, None);
}

#[test]
fn test_repeated_matches_are_stable() {
    let mut router = Router::new();
    router.add_route("/", "Home");
    router.add_route("/about", "About");
    router.add_route("/about/team", "Team");

    let first = router.match_path("/about/team").unwrap();
    for _ in 0..5 {
        assert_eq!(router.match_path("/about/team").unwrap(), first);
    }
    assert_eq!(first.handler, Some(&"Team"));

    let order: Vec<&str> = router.routes().iter().map(Route::pattern).collect();
    assert_eq!(order, vec!["/", "/about", "/about/team"]);
}

#[test]
fn test_from_routes_collapses_duplicates() {
    let router = Router::from_routes(vec![
        Route::new("/about", "About").with_params(params(&[("lang", "en")])),
        Route::new("/contact", "Contact"),
        Route::new("/about", "AboutV2"),
    ]);

    assert_eq!(router.len(), 2);
    assert_eq!(router.routes()[0].handler(), &"AboutV2");
    assert_eq!(router.routes()[0].params(), &params(&[("lang", "en")]));
    assert_eq!(router.match_path("/about").unwrap().handler, Some(&"AboutV2"));
}

#[test]
fn test_collect_and_extend_routes() {
    let mut router: Router<&str> = vec![Route::new("/a", "A"), Route::new("/a", "A2")]
        .into_iter()
        .collect();
    assert_eq!(router.len(), 1);

    router.extend([Route::new("/b", "B"), Route::new("/a", "A3")]);
    let patterns: Vec<&str> = router.routes().iter().map(Route::pattern).collect();
    assert_eq!(patterns, vec!["/a", "/b"]);
    assert_eq!(router.routes()[0].handler(), &"A3");
}

#[test]
fn test_builder_api() {
    let router = Router::new()
        .with_route("/", "Home")
        .with_route("/about", "About")
        .with_not_found("NotFound");

    assert_eq!(router.len(), 2);
    assert_eq!(router.not_found(), Some(&"NotFound"));
}

// ============================================================================
// Normalization and inference
// ============================================================================

#[test]
fn test_root_path() {
    let mut router = Router::new();
    router.add_route("^/$", "Home");

    let route_match = router.match_path("/").unwrap();
    assert_eq!(route_match.handler, Some(&"Home"));
    assert!(route_match.params.is_empty());
}

#[test]
fn test_trailing_slash_tested_against_raw_path() {
    let mut router = Router::new();
    router.add_route("^/about$", "About");

    // Inference normalizes, the expression does not
    assert!(router.match_path("/about").unwrap().handler.is_some());
    assert!(router.match_path("/about/").unwrap().is_fallback());
}

#[test]
fn test_trailing_slash_same_inferred_name() {
    let mut router = Router::new();
    router.add_route("/users/([a-z]+)/profile", "Profile");

    let plain = router.match_path("/users/alice/profile").unwrap();
    let slashed = router.match_path("/users/alice/profile/").unwrap();
    assert_eq!(plain.params, slashed.params);
    assert_eq!(plain.params, params(&[("alice", "alice")]));
}

#[rstest]
#[case("/users/alice/profile", Some(("alice", "alice")))]
#[case("/users/bob/profile", Some(("bob", "bob")))]
#[case("/users/alice/profile/", Some(("alice", "alice")))]
#[case("/users//profile", None)]
#[case("/users/Alice/profile", None)]
fn test_profile_pattern(#[case] path: &str, #[case] expected: Option<(&str, &str)>) {
    let mut router = Router::new();
    router.add_route("/users/([a-z]+)/profile", "Profile");
    router.set_not_found("NotFound");

    let route_match = router.match_path(path).unwrap();
    match expected {
        Some((name, value)) => {
            assert_eq!(route_match.handler, Some(&"Profile"));
            assert_eq!(route_match.params, params(&[(name, value)]));
        }
        None => {
            assert_eq!(route_match.handler, Some(&"NotFound"));
            assert!(route_match.params.is_empty());
        }
    }
}

#[test]
fn test_short_path_binds_nothing() {
    let mut router = Router::new();
    router.add_route("/([a-z]+)", "Slug");

    let route_match = router.match_path("/about").unwrap();
    assert_eq!(route_match.handler, Some(&"Slug"));
    assert!(route_match.params.is_empty());
}

#[test]
fn test_inferred_name_overwrites_registered_value() {
    let mut router = Router::new();
    router.add_route_with_params(
        "/posts/([0-9]+)/edit",
        "EditPost",
        params(&[("7", "stale"), ("mode", "edit")]),
    );

    let route_match = router.match_path("/posts/7/edit").unwrap();
    assert_eq!(route_match.params, params(&[("7", "7"), ("mode", "edit")]));
    // Registration-time map untouched
    assert_eq!(router.routes()[0].params().get("7"), Some(&"stale".to_string()));
}

#[test]
fn test_case_insensitive_router() {
    let mut router = Router::with_case_insensitive(true);
    router.add_route("/About", "About");
    assert!(router.match_path("/about").unwrap().handler.is_some());

    router.set_case_insensitive(false);
    assert!(router.match_path("/about").unwrap().is_fallback());
    assert!(!router.is_case_insensitive());
}

#[test]
fn test_precompiled_route_follows_router_case_mode() {
    let route = Route::new("/About", "About");
    // Compiled case-sensitively before registration
    assert!(route.bind("/About", false).unwrap().is_some());

    let mut router = Router::with_case_insensitive(true);
    router.add_route_with(route);

    let route_match = router.match_path("/about").unwrap();
    assert!(!route_match.is_fallback());
    assert_eq!(route_match.handler, Some(&"About"));
}

#[test]
fn test_case_mode_toggle_back_and_forth() {
    let mut router = Router::new();
    router.add_route("/About", "About");

    assert!(router.match_path("/about").unwrap().is_fallback());
    router.set_case_insensitive(true);
    assert!(!router.match_path("/about").unwrap().is_fallback());
    router.set_case_insensitive(false);
    assert!(router.match_path("/about").unwrap().is_fallback());
}

// ============================================================================
// Declared and named parameters
// ============================================================================

#[test]
fn test_declared_param_names() {
    let mut router = Router::new();
    router.add_route_with(
        Route::new("/blog/([0-9]{4})/([a-z-]+)", "Post").with_param_names(["year", "slug"]),
    );

    let route_match = router.match_path("/blog/2024/hello-world").unwrap();
    assert_eq!(
        route_match.params,
        params(&[("year", "2024"), ("slug", "hello-world")])
    );
}

#[test]
fn test_named_capture_groups() {
    let mut router = Router::new();
    router.add_route("/orders/(?P<order>[0-9]+)/items/(?P<item>[0-9]+)", "Item");

    let route_match = router.match_path("/orders/10/items/3").unwrap();
    assert_eq!(route_match.params, params(&[("order", "10"), ("item", "3")]));
}

#[test]
fn test_reregister_keeps_declared_names() {
    let mut router = Router::new();
    router.add_route_with(Route::new("/users/([0-9]+)", "User").with_param_names(["id"]));
    router.add_route("/users/([0-9]+)", "UserV2");

    let route_match = router.match_path("/users/5").unwrap();
    assert_eq!(route_match.handler, Some(&"UserV2"));
    assert_eq!(route_match.params, params(&[("id", "5")]));
}

// ============================================================================
// Invalid patterns
// ============================================================================

#[test]
fn test_invalid_pattern_errors_at_match_time() {
    let mut router = Router::new();
    router.add_route("/broken/(", "Broken");
    assert_eq!(router.len(), 1);

    match router.match_path("/broken/x") {
        Err(RouterError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "/broken/("),
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_invalid_pattern_behind_match_is_not_reached() {
    let mut router = Router::new();
    router.add_route("/broken/(", "Broken");
    router.add_route("/ok", "Ok");

    assert_eq!(router.match_path("/ok").unwrap().handler, Some(&"Ok"));
    assert!(router.match_path("/nope").is_err());
}

// ============================================================================
// Menus
// ============================================================================

#[test]
fn test_menu_items_from_router() {
    let mut router = Router::new();
    router.add_route("/", "Home");
    router.add_route("/about", "About");
    router.add_route("/contact", "ContactUs");

    let items = router.menu_items();
    assert_eq!(
        items,
        vec![
            MenuItem::new("/", "home"),
            MenuItem::new("/about", "about"),
            MenuItem::new("/contact", "contactus"),
        ]
    );
    assert!(items.iter().all(|item| !item.hidden));
}

#[test]
fn test_add_menu_last_write_wins() {
    let mut router: Router<&str> = Router::new();
    router.add_menu("main", vec![MenuItem::new("/", "home")]);
    router.add_menu("main", vec![MenuItem::new("/about", "about")]);

    assert_eq!(router.menu("main"), Some(&[MenuItem::new("/about", "about")][..]));
    assert_eq!(router.menus().len(), 1);
    assert_eq!(router.menu("footer"), None);
}

// ============================================================================
// Callbacks
// ============================================================================

#[test]
fn test_callback_handlers() {
    let mut router = Router::new();
    router.add_route(
        "/users/([a-z]+)/profile",
        Callback::new("Profile", |params: &Params| {
            format!("profile:{}", params.values().next().cloned().unwrap_or_default())
        }),
    );
    router.set_not_found(Callback::new("NotFound", |_: &Params| "404".to_string()));

    let route_match = router.match_path("/users/carol/profile").unwrap();
    let handler = route_match.handler.unwrap();
    assert_eq!(handler.name(), "Profile");
    assert_eq!(handler.call(&route_match.params), "profile:carol");

    let route_match = router.match_path("/missing").unwrap();
    assert_eq!(route_match.handler.unwrap().call(&route_match.params), "404");

    assert_eq!(router.menu_items(), vec![MenuItem::new("/users/([a-z]+)/profile", "profile")]);
}

#[test]
fn test_router_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router<String>>();
    assert_send_sync::<Router<Callback<String>>>();
}
