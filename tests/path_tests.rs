// tests/path_tests.rs

use scim_filter_parser::{
    ComparisonOperator, CompareValue, FilterError, Found, Parser, ParserMode, Root, ScimVersion,
    parse_path,
};

// ============================================================================
// Plain Attribute Paths
// ============================================================================

#[test]
fn test_simple_path() {
    let path = parse_path("members", ScimVersion::V2).unwrap();
    assert_eq!(path.attribute_path.attribute_name, "members");
    assert_eq!(path.attribute_path.sub_attribute, None);
    assert!(path.value_filter.is_none());
    assert!(path.sub_attribute.is_none());
}

#[test]
fn test_path_with_sub_attribute() {
    let path = parse_path("name.familyName", ScimVersion::V2).unwrap();
    assert_eq!(path.attribute_path.attribute_name, "name");
    assert_eq!(path.attribute_path.sub_attribute.as_deref(), Some("familyName"));
    assert!(path.value_filter.is_none());
}

#[test]
fn test_path_with_schema() {
    let path = parse_path(
        "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:employeeNumber",
        ScimVersion::V2,
    )
    .unwrap();
    assert_eq!(
        path.attribute_path.schema.as_deref(),
        Some("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User")
    );
    assert_eq!(path.attribute_path.attribute_name, "employeeNumber");
}

// ============================================================================
// Value Filters
// ============================================================================

#[test]
fn test_path_with_value_filter_and_sub_attribute() {
    let path = parse_path("userName[test eq 100].innerTest", ScimVersion::V2).unwrap();
    assert_eq!(path.attribute_path.attribute_name, "userName");
    assert_eq!(path.sub_attribute.as_deref(), Some("innerTest"));

    let filter = path.value_filter.expect("Expected a value filter");
    let comparison = filter.as_comparison().unwrap();
    assert_eq!(comparison.left.attribute_name, "test");
    assert_eq!(comparison.operator, ComparisonOperator::Equal);
    assert_eq!(comparison.right, Some(CompareValue::Number(100.0)));
}

#[test]
fn test_path_with_value_filter_only() {
    let path = parse_path(r#"emails[type eq "work"]"#, ScimVersion::V2).unwrap();
    assert_eq!(path.attribute_path.attribute_name, "emails");
    assert!(path.value_filter.is_some());
    assert!(path.sub_attribute.is_none());
}

#[test]
fn test_path_with_dot_but_no_sub_attribute() {
    let path = parse_path(r#"emails[type eq "work"]."#, ScimVersion::V2).unwrap();
    assert!(path.value_filter.is_some());
    assert!(path.sub_attribute.is_none());
}

#[test]
fn test_path_with_complex_value_filter() {
    let path = parse_path(
        r#"members[value eq "2819c223" or (display sw "Jo" and not (type pr))].display"#,
        ScimVersion::V2,
    )
    .unwrap();
    assert_eq!(path.attribute_path.attribute_name, "members");
    assert_eq!(path.sub_attribute.as_deref(), Some("display"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_path_rejects_filter_syntax() {
    let err = parse_path(r#"userName eq "bjensen""#, ScimVersion::V2).unwrap_err();
    assert_eq!(
        err,
        FilterError::Syntax {
            offset: 8,
            expected: "path".to_string(),
            found: Found::Token(" ".to_string()),
        }
    );
}

#[test]
fn test_path_rejects_nested_value_filters() {
    assert_eq!(
        parse_path("a[b[c eq 1]].d", ScimVersion::V2),
        Err(FilterError::ValueFilterNesting)
    );
}

#[test]
fn test_path_rejects_trailing_input() {
    let err = parse_path(r#"emails[type eq "work"].value.extra"#, ScimVersion::V2).unwrap_err();
    assert!(matches!(
        err,
        FilterError::Syntax { ref expected, offset: 28, .. } if expected == "end of input"
    ));
}

#[test]
fn test_path_too_many_sub_attributes() {
    assert!(matches!(
        parse_path("a.b.c", ScimVersion::V2),
        Err(FilterError::AttributePath(_))
    ));
}

#[test]
fn test_path_unclosed_value_filter() {
    let err = parse_path("emails[type pr", ScimVersion::V2).unwrap_err();
    assert!(matches!(
        err,
        FilterError::Syntax { ref expected, found: Found::EndOfInput, .. } if expected == "close_bracket"
    ));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_path_mode_requires_v2() {
    let err = Parser::new(ParserMode::Path, ScimVersion::V1).err().unwrap();
    assert!(matches!(err, FilterError::Configuration(_)));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: Path mode is available only in SCIM version 2"
    );

    assert!(matches!(
        parse_path("members", ScimVersion::V1),
        Err(FilterError::Configuration(_))
    ));
}

#[test]
fn test_path_mode_parser() {
    let parser = Parser::new(ParserMode::Path, ScimVersion::V2).unwrap();
    match parser.parse("members[value pr].display").unwrap() {
        Root::Path(path) => assert_eq!(path.sub_attribute.as_deref(), Some("display")),
        other => panic!("Expected path, got {:?}", other),
    }
    assert!(parser.parse("members").unwrap().into_path().is_some());
}
