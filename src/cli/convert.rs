//! AST -> JSON projection for tooling output

use serde_json::{Map, Value, json};

use crate::{
    ast::{AttributePath, ComparisonExpression, Expression, Factor, Path, Term},
    parser::Root,
    value::CompareValue,
};

pub fn root_to_json(root: &Root) -> Value {
    match root {
        Root::Filter(expr) => expression_to_json(expr),
        Root::Path(path) => path_to_json(path),
    }
}

pub fn expression_to_json(expr: &Expression) -> Value {
    match expr {
        Expression::Disjunction { left, right } => json!({
            "type": "or",
            "left": term_to_json(left),
            "right": expression_to_json(right),
        }),
        Expression::Term(term) => term_to_json(term),
    }
}

fn term_to_json(term: &Term) -> Value {
    match term {
        Term::Conjunction { left, right } => json!({
            "type": "and",
            "left": factor_to_json(left),
            "right": term_to_json(right),
        }),
        Term::Factor(factor) => factor_to_json(factor),
    }
}

fn factor_to_json(factor: &Factor) -> Value {
    match factor {
        Factor::Comparison(comparison) => comparison_to_json(comparison),
        Factor::Grouped(group) => json!({
            "type": "group",
            "expression": expression_to_json(&group.inner),
        }),
        Factor::Negated(negated) => json!({
            "type": "not",
            "expression": expression_to_json(&negated.inner.inner),
        }),
        Factor::ValuePath(value_path) => json!({
            "type": "valuePath",
            "attribute": attribute_path_to_json(&value_path.attribute_path),
            "filter": expression_to_json(&value_path.value_filter),
        }),
    }
}

fn comparison_to_json(comparison: &ComparisonExpression) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), json!("comparison"));
    obj.insert(
        "attribute".into(),
        attribute_path_to_json(&comparison.left),
    );
    obj.insert("operator".into(), json!(comparison.operator.name()));

    if let Some(value) = &comparison.right {
        obj.insert("value".into(), compare_value_to_json(value));
        if let CompareValue::String {
            looks_like_date_time,
            ..
        } = value
        {
            obj.insert("dateTime".into(), json!(looks_like_date_time));
        }
    }

    Value::Object(obj)
}

pub fn path_to_json(path: &Path) -> Value {
    json!({
        "attribute": attribute_path_to_json(&path.attribute_path),
        "filter": path.value_filter.as_ref().map(expression_to_json),
        "subAttribute": path.sub_attribute,
    })
}

fn attribute_path_to_json(path: &AttributePath) -> Value {
    json!({
        "schema": path.schema,
        "name": path.attribute_name,
        "subAttribute": path.sub_attribute,
    })
}

fn compare_value_to_json(value: &CompareValue) -> Value {
    match value {
        CompareValue::Null => Value::Null,
        CompareValue::Bool(b) => Value::Bool(*b),
        CompareValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CompareValue::String { value, .. } => Value::String(value.clone()),
    }
}
