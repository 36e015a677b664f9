/// Comparison operators of a SCIM filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equal (`eq`)
    Equal,
    /// Not equal (`ne`)
    NotEqual,
    /// Contains (`co`)
    Contains,
    /// Starts with (`sw`)
    StartsWith,
    /// Ends with (`ew`)
    EndsWith,
    /// Greater than (`gt`)
    GreaterThan,
    /// Less than (`lt`)
    LessThan,
    /// Greater than or equal (`ge`)
    GreaterThanOrEqual,
    /// Less than or equal (`le`)
    LessThanOrEqual,
    /// Present (`pr`), takes no right operand
    Present,
}

impl ComparisonOperator {
    /// Maps the literal operator name. Matching is exact (lower case).
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name {
            "pr" => ComparisonOperator::Present,
            "eq" => ComparisonOperator::Equal,
            "ne" => ComparisonOperator::NotEqual,
            "co" => ComparisonOperator::Contains,
            "sw" => ComparisonOperator::StartsWith,
            "ew" => ComparisonOperator::EndsWith,
            "gt" => ComparisonOperator::GreaterThan,
            "lt" => ComparisonOperator::LessThan,
            "ge" => ComparisonOperator::GreaterThanOrEqual,
            "le" => ComparisonOperator::LessThanOrEqual,
            _ => return None,
        };
        Some(op)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "eq",
            ComparisonOperator::NotEqual => "ne",
            ComparisonOperator::Contains => "co",
            ComparisonOperator::StartsWith => "sw",
            ComparisonOperator::EndsWith => "ew",
            ComparisonOperator::GreaterThan => "gt",
            ComparisonOperator::LessThan => "lt",
            ComparisonOperator::GreaterThanOrEqual => "ge",
            ComparisonOperator::LessThanOrEqual => "le",
            ComparisonOperator::Present => "pr",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ComparisonOperator::Present)
    }
}
