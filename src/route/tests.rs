use super::{validator, Route, ValidatorSet};
use crate::uri::{FieldValues, Query, QueryData};

#[test]
fn test_int_placeholder_matches_digits() {
    let route = Route::new("/user/{id:int}").unwrap();
    let params = route.matches("/user/42").unwrap();
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_int_placeholder_rejects_letters() {
    let route = Route::new("/user/{id:int}").unwrap();
    assert!(route.matches("/user/abc").is_none());
}

#[test]
fn test_match_is_anchored() {
    let route = Route::new("/user/{id}").unwrap();
    assert!(!route.check("/api/user/42"));
    assert!(!route.check("/user/42/posts"));
}

#[test]
fn test_static_route_matches_with_empty_params() {
    let route = Route::new("/about").unwrap();
    let params = route.matches("/about").unwrap();
    assert!(params.is_empty());
    assert!(route.check("/about"));
    assert!(!route.check("/contact"));
}

#[test]
fn test_range_lower_bound() {
    let route = Route::new("/user/{id:range(10,)}").unwrap();
    assert!(route.matches("/user/5").is_none());
    assert!(route.check("/user/10"));
    assert!(route.check("/user/99999999999999999999999999999999999999999999"));
}

#[test]
fn test_range_both_bounds() {
    let route = Route::new("/page/{n:range(10,20)}").unwrap();
    assert!(route.check("/page/10"));
    assert!(route.check("/page/20"));
    assert!(!route.check("/page/9"));
    assert!(!route.check("/page/21"));
}

#[test]
fn test_range_upper_bound() {
    let route = Route::new("/page/{n:range(,20)}").unwrap();
    assert!(route.check("/page/0"));
    assert!(route.check("/page/20"));
    assert!(!route.check("/page/21"));
}

#[test]
fn test_range_with_bounds_beyond_u128() {
    let ten_pow_40 = format!("1{}", "0".repeat(40));
    let ten_pow_41 = format!("1{}", "0".repeat(41));
    let two_ten_pow_40 = format!("2{}", "0".repeat(40));

    let lower = Route::new(&format!("/x/{{n:range({ten_pow_41},)}}")).unwrap();
    assert!(!lower.check(format!("/x/{ten_pow_40}").as_str()));
    assert!(lower.check(format!("/x/{ten_pow_41}").as_str()));

    let both = Route::new(&format!("/x/{{n:range({ten_pow_40},{two_ten_pow_40})}}")).unwrap();
    assert!(both.check(format!("/x/{ten_pow_40}").as_str()));
    assert!(!both.check(format!("/x/9{}", "0".repeat(41)).as_str()));
}

#[test]
fn test_custom_validator_rejects() {
    let route = Route::builder("/user/{id:int}")
        .validator("id", |v| v.parse::<u64>().map_or(false, |n| n > 1000))
        .build()
        .unwrap();
    assert!(route.matches("/user/500").is_none());
    assert_eq!(route.matches("/user/1001").unwrap().get("id"), Some("1001"));
}

#[test]
fn test_validator_conjunction_never_partial() {
    let route = Route::with_validators(
        "/item/{id}/{name}",
        [(
            "name",
            ValidatorSet::Many(vec![validator(|_| true), validator(|_| false)]),
        )],
    )
    .unwrap();
    assert!(route.matches("/item/1/widget").is_none());
    assert!(route.matches("/item/2/gadget").is_none());
}

#[test]
fn test_user_validators_run_before_range_check() {
    let route = Route::with_validators("/n/{v:range(1,100)}", [("v", validator(|v| v != "50"))])
        .unwrap();
    assert_eq!(route.validator_count("v"), 2);
    assert!(route.check("/n/49"));
    assert!(!route.check("/n/50"));
    assert!(!route.check("/n/101"));
}

#[test]
fn test_repeated_field_last_wins() {
    let route = Route::new("{a}/{a}").unwrap();
    assert_eq!(route.field_names().count(), 2);
    let params = route.matches("5/7").unwrap();
    assert_eq!(params.get("a"), Some("7"));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_repeated_field_validators_apply_to_each_occurrence() {
    let route = Route::builder("/{a:int}/{a:int}")
        .validator("a", |v| v != "0")
        .build()
        .unwrap();
    assert!(route.check("/1/2"));
    assert!(!route.check("/0/2"));
    assert!(!route.check("/1/0"));
}

#[test]
fn test_unknown_type_behaves_as_string() {
    let route = Route::new("/doc/{slug:uuid}").unwrap();
    assert_eq!(route.matches("/doc/abc_123").unwrap().get("slug"), Some("abc_123"));
    assert!(!route.check("/doc/abc-123"));
}

#[test]
fn test_query_and_fragment_ignored_for_matching() {
    let route = Route::new("/search/{term}").unwrap();
    let params = route.matches("/search/cats?page=2#top").unwrap();
    assert_eq!(params.get("term"), Some("cats"));
}

#[test]
fn test_match_absolute_url() {
    let route = Route::new("/user/{id:int}").unwrap();
    let url = url::Url::parse("https://example.com/user/7?x=1").unwrap();
    assert_eq!(route.matches(&url).unwrap().get("id"), Some("7"));
    assert!(route.check("https://example.com/user/8"));
}

#[test]
fn test_word_capture_is_ascii_only() {
    let route = Route::new("/tag/{name}").unwrap();
    assert!(!route.check("/tag/caf%C3%A9"));
    assert!(route.check("/tag/cafe"));
}

#[test]
fn test_invalid_literal_regex_is_an_error() {
    let err = Route::new("/files/(draft/{id}").unwrap_err();
    assert!(matches!(
        err,
        crate::error::RouteError::InvalidMatcher { .. }
    ));
}

#[test]
fn test_stray_braces_are_literal() {
    let route = Route::new("/a/{bad-name}/{ok}").unwrap();
    assert!(route.check("/a/{bad-name}/x"));
    assert_eq!(route.field_names().collect::<Vec<_>>(), vec!["ok"]);
}

#[test]
fn test_generate_simple() {
    let route = Route::new("/user/{id}").unwrap();
    let fields = FieldValues::new().with("id", 42);
    assert_eq!(route.token(Some(&fields), None).unwrap(), "/user/42");
    assert_eq!(route.url(Some(&fields), None).unwrap(), "/user/42");
}

#[test]
fn test_generate_strips_types() {
    let route = Route::new("/user/{id:range(10,20)}/{tab:string}").unwrap();
    assert_eq!(route.generation_template(), "/user/{id}/{tab}");
    let fields: FieldValues = [("id", "15"), ("tab", "posts")].into_iter().collect();
    assert_eq!(route.token(Some(&fields), None).unwrap(), "/user/15/posts");
}

#[test]
fn test_generate_does_not_validate() {
    let route = Route::new("/user/{id:int}").unwrap();
    let fields = FieldValues::new().with("id", "abc");
    assert_eq!(route.token(Some(&fields), None).unwrap(), "/user/abc");
}

#[test]
fn test_generate_missing_field_keeps_marker() {
    let route = Route::new("/user/{id}").unwrap();
    let uri = route.uri(None, None).unwrap();
    assert_eq!(uri.path(), "/user/%7Bid%7D");
}

#[test]
fn test_generate_with_query_map() {
    let route = Route::new("/search").unwrap();
    let token = route.token(None, Some(Query::from([("q", "cats")]))).unwrap();
    assert_eq!(token, "/search?q=cats");
}

#[test]
fn test_generate_with_raw_and_structured_query() {
    let route = Route::new("/search").unwrap();
    assert_eq!(
        route.token(None, Some(Query::from("q=cats&page=2"))).unwrap(),
        "/search?q=cats&page=2"
    );
    let data = QueryData::from_pairs([("q", "dogs")]);
    assert_eq!(
        route.token(None, Some(Query::from(data))).unwrap(),
        "/search?q=dogs"
    );
}

#[test]
fn test_empty_raw_query_keeps_template_query() {
    let route = Route::new("/search?sort=asc").unwrap();
    assert_eq!(
        route.token(None, Some(Query::from(""))).unwrap(),
        "/search?sort=asc"
    );
    assert_eq!(
        route.token(None, Some(Query::from("q=x"))).unwrap(),
        "/search?q=x"
    );
}

#[test]
fn test_round_trip() {
    let route = Route::new("/org/{org}/user/{id:int}").unwrap();
    for (org, id) in [("acme", 1), ("initech", 42), ("a_b_c", 9000)] {
        let fields = FieldValues::new().with("org", org).with("id", id);
        let token = route.token(Some(&fields), None).unwrap();
        let params = route.matches(&token).unwrap();
        assert_eq!(params.get("org"), Some(org));
        assert_eq!(params.get("id"), Some(id.to_string().as_str()));
    }
}

#[test]
fn test_compilation_is_idempotent() {
    let a = Route::new("/x/{a:int}/{b}").unwrap();
    let b = Route::new("/x/{a:int}/{b}").unwrap();
    assert_eq!(a.matcher(), b.matcher());
    assert_eq!(
        a.field_names().collect::<Vec<_>>(),
        b.field_names().collect::<Vec<_>>()
    );
    for path in ["/x/1/y", "/x/y/1", "/x/1/", "/x/12/z_9"] {
        assert_eq!(a.matches(path), b.matches(path));
    }
}

#[test]
fn test_route_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Route>();
}

#[test]
fn test_display_and_debug() {
    let route = Route::new("/user/{id:int}").unwrap();
    assert_eq!(route.to_string(), "/user/{id:int}");
    let debug = format!("{:?}", route);
    assert!(debug.contains("generation_template"));
}
