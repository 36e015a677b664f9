use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Literal on the right-hand side of a comparison.
///
/// # Examples
///
/// ```
/// use scim_filter_parser::CompareValue;
///
/// let value = CompareValue::string("2011-05-13T04:42:34Z");
/// assert!(value.is_date_time());
///
/// let value = CompareValue::string("bjensen");
/// assert!(!value.is_date_time());
/// assert_eq!(value.as_str(), Some("bjensen"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CompareValue {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Any JSON number, held as a 64-bit float
    Number(f64),
    /// String contents between the quotes, escapes left as written
    String {
        value: String,
        /// Whether the contents also parse as a date/time. A hint for
        /// consumers only; parsing never fails because of it.
        looks_like_date_time: bool,
    },
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

impl CompareValue {
    /// Builds a string value and derives the date-time hint.
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        let looks_like_date_time = looks_like_date_time(&value);
        CompareValue::String {
            value,
            looks_like_date_time,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CompareValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CompareValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CompareValue::String { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CompareValue::Null)
    }

    pub fn is_date_time(&self) -> bool {
        matches!(
            self,
            CompareValue::String {
                looks_like_date_time: true,
                ..
            }
        )
    }
}

fn looks_like_date_time(s: &str) -> bool {
    let s = s.trim();
    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }
    if DATE_TIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
    {
        return true;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[test]
fn test_date_time_hint() {
    assert!(CompareValue::string("2011-05-13T04:42:34Z").is_date_time());
    assert!(CompareValue::string("2011-05-13T04:42:34.123+02:00").is_date_time());
    assert!(CompareValue::string("2011-05-13 04:42:34").is_date_time());
    assert!(CompareValue::string("2011-05-13").is_date_time());
    assert!(!CompareValue::string("bjensen").is_date_time());
    assert!(!CompareValue::string("").is_date_time());
    assert!(!CompareValue::Number(2011.0).is_date_time());
}
