use std::fmt;

/// A filter expression in the record store's query syntax.
///
/// Conditions are joined with `&&`. Values are always single-quoted, with
/// embedded quotes and backslashes escaped, so ids coming from request paths
/// cannot break out of the expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `field='value'`
    pub fn eq(field: &str, value: &str) -> Self {
        Self::new().and_eq(field, value)
    }

    pub fn and_eq(mut self, field: &str, value: &str) -> Self {
        self.conditions
            .push(format!("{}='{}'", field, escape_value(value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn as_filter_expression(&self) -> String {
        self.conditions.join(" && ")
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_filter_expression())
    }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_condition() {
        let filter = Filter::eq("project_id", "p1");
        assert_eq!(filter.as_filter_expression(), "project_id='p1'");
    }

    #[test]
    fn conditions_are_joined_with_and() {
        let filter = Filter::eq("account_id", "a1").and_eq("lead_id", "l1");
        assert_eq!(filter.to_string(), "account_id='a1' && lead_id='l1'");
    }

    #[test]
    fn quotes_in_values_are_escaped() {
        let filter = Filter::eq("board_id", "x' || id!='");
        assert_eq!(filter.as_filter_expression(), r"board_id='x\' || id!=\''");
    }

    #[test]
    fn empty_filter_renders_nothing() {
        assert!(Filter::new().is_empty());
        assert_eq!(Filter::new().as_filter_expression(), "");
    }
}
