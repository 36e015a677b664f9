use crate::error::AttributePathError;

/// Reference to an attribute, optionally schema-qualified and optionally
/// narrowed to one sub-attribute.
///
/// # Examples
/// ```text
/// userName
/// name.givenName
/// urn:ietf:params:scim:schemas:core:2.0:User:userName
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    /// Schema URN, without the trailing colon
    pub schema: Option<String>,
    pub attribute_name: String,
    pub sub_attribute: Option<String>,
}

impl AttributePath {
    pub fn new(
        schema: Option<String>,
        attribute_name: impl Into<String>,
        sub_attribute: Option<String>,
    ) -> Self {
        AttributePath {
            schema,
            attribute_name: attribute_name.into(),
            sub_attribute,
        }
    }

    /// Splits a raw path as written in a filter.
    ///
    /// Schema URNs contain colons themselves, so the schema is everything up to
    /// the last colon. The remainder may hold at most one `.`.
    pub fn parse(raw: &str) -> Result<Self, AttributePathError> {
        let (schema, bare) = match raw.rsplit_once(':') {
            Some((schema, bare)) => (Some(schema.to_string()), bare),
            None => (None, raw),
        };

        let mut segments = bare.split('.');
        let attribute_name = segments.next().unwrap_or_default();
        let sub_attribute = segments.next();
        if segments.next().is_some() {
            return Err(AttributePathError::TooManySubAttributes(raw.to_string()));
        }

        if attribute_name.is_empty() {
            return Err(AttributePathError::EmptyAttributeName(raw.to_string()));
        }
        if sub_attribute.is_some_and(str::is_empty) {
            return Err(AttributePathError::EmptySubAttribute(raw.to_string()));
        }

        Ok(AttributePath {
            schema,
            attribute_name: attribute_name.to_string(),
            sub_attribute: sub_attribute.map(str::to_string),
        })
    }
}
