use crate::ast::{AttributePath, Expression, ValuePath};

/// Attribute reference used by PATCH operations (RFC 7644 §3.5.2).
///
/// # Examples
/// ```text
/// members
/// emails[type eq "work"]
/// emails[type eq "work"].value
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub attribute_path: AttributePath,
    pub value_filter: Option<Expression>,
    pub sub_attribute: Option<String>,
}

impl Path {
    pub fn new(attribute_path: AttributePath) -> Self {
        Path {
            attribute_path,
            value_filter: None,
            sub_attribute: None,
        }
    }

    pub fn with_value_path(value_path: ValuePath, sub_attribute: Option<String>) -> Self {
        Path {
            attribute_path: value_path.attribute_path,
            value_filter: Some(*value_path.value_filter),
            sub_attribute,
        }
    }
}
