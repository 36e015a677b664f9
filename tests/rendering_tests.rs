// tests/rendering_tests.rs

use proptest::prelude::*;
use scim_filter_parser::{
    AttributePath, CompareValue, ComparisonExpression, ComparisonOperator, Expression, Factor,
    GroupedExpression, NegatedExpression, ScimVersion, parse_filter, parse_path,
};

fn render(input: &str) -> String {
    parse_filter(input, ScimVersion::V2).unwrap().to_string()
}

fn assert_round_trip(input: &str) {
    let first = parse_filter(input, ScimVersion::V2).unwrap();
    let rendered = first.to_string();
    let second = parse_filter(&rendered, ScimVersion::V2)
        .unwrap_or_else(|e| panic!("Rendered {:?} failed to parse: {}", rendered, e));
    assert_eq!(first, second, "Round trip changed the tree for: {}", input);
    assert_eq!(rendered, second.to_string());
}

// ============================================================================
// Node Rendering
// ============================================================================

#[test]
fn test_render_attribute_path() {
    assert_eq!(AttributePath::new(None, "userName", None).to_string(), "userName");
    assert_eq!(
        AttributePath::new(None, "name", Some("givenName".to_string())).to_string(),
        "name.givenName"
    );
    assert_eq!(
        AttributePath::new(
            Some("urn:ietf:params:scim:schemas:core:2.0:User".to_string()),
            "name",
            Some("familyName".to_string()),
        )
        .to_string(),
        "urn:ietf:params:scim:schemas:core:2.0:User:name.familyName"
    );
}

#[test]
fn test_render_compare_values() {
    assert_eq!(CompareValue::Null.to_string(), "null");
    assert_eq!(CompareValue::Bool(true).to_string(), "true");
    assert_eq!(CompareValue::Number(100.0).to_string(), "100");
    assert_eq!(CompareValue::Number(-0.5).to_string(), "-0.5");
    assert_eq!(CompareValue::string("bjensen").to_string(), r#""bjensen""#);
    assert_eq!(CompareValue::string(r#"a \"b\""#).to_string(), r#""a \"b\"""#);
}

#[test]
fn test_render_operators() {
    assert_eq!(ComparisonOperator::GreaterThanOrEqual.to_string(), "ge");
    assert_eq!(ComparisonOperator::Present.to_string(), "pr");
}

#[test]
fn test_render_built_tree() {
    let comparison = ComparisonExpression::new(
        AttributePath::new(None, "userName", None),
        ComparisonOperator::Equal,
        CompareValue::string("bjensen"),
    );
    let present = ComparisonExpression::present(AttributePath::new(None, "title", None));

    assert_eq!(comparison.to_string(), r#"userName eq "bjensen""#);
    assert_eq!(present.to_string(), "title pr");

    let grouped = GroupedExpression::new(Expression::from(Factor::Comparison(present)));
    assert_eq!(grouped.to_string(), "(title pr)");
    assert_eq!(NegatedExpression::new(grouped).to_string(), "not (title pr)");
}

#[test]
fn test_render_normalizes_whitespace() {
    assert_eq!(render("title pr   and\tuserType eq 1"), "title pr and userType eq 1");
    assert_eq!(render("a pr or\n\nb pr"), "a pr or b pr");
}

#[test]
fn test_render_keeps_groups_and_negation() {
    assert_eq!(
        render(r#"not  (a pr or b pr) and (c eq "x")"#),
        r#"not (a pr or b pr) and (c eq "x")"#
    );
}

#[test]
fn test_render_value_path() {
    assert_eq!(
        render(r#"emails[type eq "work" and value co "@example.com"]"#),
        r#"emails[type eq "work" and value co "@example.com"]"#
    );
}

#[test]
fn test_render_numbers() {
    assert_eq!(render("a eq 100.019e5"), "a eq 10001900");
    assert_eq!(render("a eq 1E2"), "a eq 100");
    assert_eq!(render("a eq -12.50"), "a eq -12.5");
}

#[test]
fn test_render_path() {
    let path = parse_path(r#"emails[type  eq "work"].value"#, ScimVersion::V2).unwrap();
    assert_eq!(path.to_string(), r#"emails[type eq "work"].value"#);

    let path = parse_path("name.givenName", ScimVersion::V2).unwrap();
    assert_eq!(path.to_string(), "name.givenName");
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_samples() {
    let samples = [
        r#"userName eq "bjensen""#,
        r#"name.familyName co "O'Malley""#,
        r#"userName sw "J""#,
        r#"urn:ietf:params:scim:schemas:core:2.0:User:userName sw "J""#,
        "title pr",
        r#"meta.lastModified gt "2011-05-13T04:42:34Z""#,
        r#"meta.lastModified le "2011-05-13T04:42:34Z""#,
        r#"title pr and userType eq "Employee""#,
        r#"title pr or userType eq "Intern""#,
        r#"schemas eq "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User""#,
        r#"userType eq "Employee" and (emails co "example.com" or emails.value co "example.org")"#,
        r#"userType ne "Employee" and not (emails co "example.com" or emails.value co "example.org")"#,
        r#"userType eq "Employee" and emails[type eq "work" and value co "@example.com"]"#,
        r#"emails[type eq "work" and value co "@example.com"] or ims[type eq "xmpp" and value co "@foo.com"]"#,
        "active eq true and x eq null and y ne false",
        "a eq 1 or b eq 2 or c eq 3 and d eq 4",
    ];

    for sample in samples {
        assert_round_trip(sample);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn attribute_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "userName",
        "title",
        "name.givenName",
        "emails.value",
        "meta.lastModified",
        "urn:ietf:params:scim:schemas:core:2.0:User:displayName",
        "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:manager.value",
    ])
    .prop_map(str::to_string)
}

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["eq", "ne", "co", "sw", "ew", "gt", "lt", "ge", "le"])
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        any::<i32>().prop_map(|n| n.to_string()),
        (-1.0e6..1.0e6f64).prop_map(|n| n.to_string()),
        "[a-zA-Z0-9 @.:-]{0,12}".prop_map(|s| format!("\"{}\"", s)),
        Just(r#""2011-05-13T04:42:34Z""#.to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\t", " \n "])
}

prop_compose! {
    fn comparison_strategy()
        (attribute in attribute_strategy(),
         operator in operator_strategy(),
         value in value_strategy(),
         present in prop::bool::weighted(0.2))
        -> String {
        if present {
            format!("{} pr", attribute)
        } else {
            format!("{} {} {}", attribute, operator, value)
        }
    }
}

/// Filters without value paths, usable inside a value filter.
fn simple_filter_strategy() -> impl Strategy<Value = String> {
    comparison_strategy().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), separator_strategy(), inner.clone())
                .prop_map(|(l, ws, r)| format!("{l}{ws}and{ws}{r}")),
            (inner.clone(), separator_strategy(), inner.clone())
                .prop_map(|(l, ws, r)| format!("{l}{ws}or{ws}{r}")),
            inner.clone().prop_map(|e| format!("({})", e)),
            (separator_strategy(), inner).prop_map(|(ws, e)| format!("not{ws}({e})")),
        ]
    })
}

fn filter_strategy() -> impl Strategy<Value = String> {
    let value_path = (
        prop::sample::select(vec!["emails", "addresses", "members"]),
        simple_filter_strategy(),
    )
        .prop_map(|(attribute, filter)| format!("{}[{}]", attribute, filter));

    prop_oneof![simple_filter_strategy(), value_path].prop_recursive(2, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{} and {}", l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{} or {}", l, r)),
            inner.prop_map(|e| format!("not ({})", e)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_render_is_reparseable(filter in filter_strategy()) {
        let first = parse_filter(&filter, ScimVersion::V2).unwrap();
        let rendered = first.to_string();
        let second = parse_filter(&rendered, ScimVersion::V2).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(rendered, second.to_string());
    }

    #[test]
    fn prop_value_filters_never_nest(filter in simple_filter_strategy()) {
        let nested = format!("emails[members[{}]]", filter);
        prop_assert!(parse_filter(&nested, ScimVersion::V2).is_err());
    }
}
