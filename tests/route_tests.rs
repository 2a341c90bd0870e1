use brrtroute::route::{validator, Route, ValidatorSet};
use brrtroute::uri::FieldValues;
use std::sync::Arc;
use std::thread;

fn assert_route_match(route: &Route, path: &str, expected: &[(&str, &str)]) {
    match route.matches(path) {
        Some(params) => {
            assert_eq!(params.len(), expected.len(), "field count for {}", path);
            for (name, value) in expected {
                assert_eq!(params.get(name), Some(*value), "field {} for {}", name, path);
            }
        }
        None => panic!("expected {} to match {}", path, route),
    }
}

#[test]
fn test_user_scenarios() {
    let route = Route::new("/user/{id:int}").unwrap();
    assert_route_match(&route, "/user/42", &[("id", "42")]);
    assert!(route.matches("/user/abc").is_none());

    let ranged = Route::new("/user/{id:range(10,)}").unwrap();
    assert!(ranged.matches("/user/5").is_none());
    assert_route_match(&ranged, "/user/10", &[("id", "10")]);

    let guarded = Route::with_validators(
        "/user/{id:int}",
        [("id", validator(|v| v.parse::<u64>().map_or(false, |n| n > 1000)))],
    )
    .unwrap();
    assert!(guarded.matches("/user/500").is_none());
    assert_route_match(&guarded, "/user/1500", &[("id", "1500")]);
}

#[test]
fn test_nested_placeholders() {
    let route = Route::new("/org/{org}/team/{team:int}/member/{member}").unwrap();
    assert_route_match(
        &route,
        "/org/acme/team/7/member/wile_e",
        &[("org", "acme"), ("team", "7"), ("member", "wile_e")],
    );
    assert!(!route.check("/org/acme/team/seven/member/wile_e"));
    assert_eq!(
        route.field_names().collect::<Vec<_>>(),
        vec!["org", "team", "member"]
    );
}

#[test]
fn test_range_inclusivity() {
    let route = Route::new("/n/{id:range(10,20)}").unwrap();
    for accepted in ["10", "11", "19", "20", "010"] {
        assert!(route.check(format!("/n/{}", accepted).as_str()), "{}", accepted);
    }
    for rejected in ["0", "9", "21", "1000"] {
        assert!(!route.check(format!("/n/{}", rejected).as_str()), "{}", rejected);
    }
}

#[test]
fn test_unbounded_ranges() {
    let lower = Route::new("/n/{id:range(10,)}").unwrap();
    assert!(lower.check("/n/10"));
    assert!(lower.check("/n/18446744073709551616"));
    assert!(lower.check("/n/340282366920938463463374607431768211456123"));
    assert!(!lower.check("/n/9"));

    let upper = Route::new("/n/{id:range(,20)}").unwrap();
    assert!(upper.check("/n/0"));
    assert!(upper.check("/n/20"));
    assert!(!upper.check("/n/21"));
    assert!(!upper.check("/n/340282366920938463463374607431768211456123"));
}

#[test]
fn test_range_without_numeric_bounds_only_checks_digits() {
    let route = Route::new("/n/{id:range(,)}").unwrap();
    assert_eq!(route.validator_count("id"), 0);
    assert!(route.check("/n/123"));
    assert!(!route.check("/n/abc"));
}

#[test]
fn test_validator_conjunction() {
    let route = Route::with_validators(
        "/v/{x}",
        [(
            "x",
            ValidatorSet::Many(vec![validator(|_| true), validator(|_| false)]),
        )],
    )
    .unwrap();
    for path in ["/v/a", "/v/1", "/v/anything_at_all"] {
        assert!(route.matches(path).is_none());
    }
}

#[test]
fn test_repeated_name() {
    let route = Route::new("{a}/{a}").unwrap();
    assert_eq!(route.field_names().count(), 2);
    assert_route_match(&route, "5/7", &[("a", "7")]);
}

#[test]
fn test_validators_for_unused_field_are_ignored() {
    let route = Route::with_validators("/x/{a}", [("b", validator(|_| false))]).unwrap();
    assert!(route.check("/x/1"));
}

#[test]
fn test_round_trip_property() {
    let route = Route::new("/shop/{category}/{item:int}/{variant}").unwrap();
    let cases = [
        ("books", 1, "hardcover"),
        ("games", 12345, "deluxe_edition"),
        ("A_Z", 0, "x"),
        ("tools", 987654321, "v2"),
    ];
    for (category, item, variant) in cases {
        let values = FieldValues::new()
            .with("category", category)
            .with("item", item)
            .with("variant", variant);
        let token = route.token(Some(&values), None).unwrap();
        let params = route.matches(&token).unwrap();
        assert_eq!(params.get("category"), Some(category));
        assert_eq!(params.get("item"), Some(item.to_string().as_str()));
        assert_eq!(params.get("variant"), Some(variant));
        assert_eq!(params.len(), 3);
    }
}

#[test]
fn test_shared_across_threads() {
    let route = Arc::new(Route::new("/job/{id:range(1,1000)}").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let route = Arc::clone(&route);
            thread::spawn(move || {
                for i in 0..250u32 {
                    let n = t * 250 + i + 1;
                    let path = format!("/job/{}", n);
                    assert_eq!(route.matches(path.as_str()).unwrap().get("id"), Some(n.to_string().as_str()));
                }
                assert!(!route.check("/job/1001"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
