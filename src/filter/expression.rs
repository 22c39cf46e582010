//! Parser for the recomb endpoint's filter expressions.
//!
//! Grammar:
//!
//! ```text
//! expression := clause (" and " clause)*
//! clause     := field WS operator WS value
//! ```
//!
//! Recognized clauses:
//!
//! | Clause | Constraint |
//! |--------|------------|
//! | `chromosome eq <value>` | chromosome equals value, single quotes stripped |
//! | `position le <int>` | position at most value |
//! | `position ge <int>` | position at least value |
//! | `id in <int>` | id equals value |
//!
//! Parsing is lenient about structure and strict about numbers. Clauses that
//! are not exactly three tokens, and unknown field/operator pairs, are
//! ignored. A numeric field whose value is not an integer rejects the whole
//! expression. When a field/operator pair repeats, the last clause wins.

use thiserror::Error;

use crate::core::query::RecombFilter;

/// Separator between clauses
pub const CLAUSE_SEPARATOR: &str = " and ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("invalid integer value '{value}' for field '{field}'")]
    InvalidInteger { field: String, value: String },
}

/// Parse a filter expression such as
/// `chromosome eq '16' and position le 800000 and position ge 200000`.
///
/// # Errors
///
/// Returns `ExpressionError::InvalidInteger` if a `position` or `id` clause
/// carries a value that is not an integer.
pub fn parse_recomb_filter(expression: &str) -> Result<RecombFilter, ExpressionError> {
    let mut filter = RecombFilter::default();

    for clause in expression.split(CLAUSE_SEPARATOR) {
        let tokens: Vec<&str> = clause.split_whitespace().collect();
        let [field, operator, value] = tokens.as_slice() else {
            continue;
        };

        match (*field, *operator) {
            ("chromosome", "eq") => filter.chromosome_eq = Some(strip_quotes(value).to_string()),
            ("position", "le") => filter.position_le = Some(parse_int(field, value)?),
            ("position", "ge") => filter.position_ge = Some(parse_int(field, value)?),
            ("id", "in") => filter.id_in = Some(parse_int(field, value)?),
            _ => {}
        }
    }

    Ok(filter)
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('\'')
}

fn parse_int(field: &str, value: &str) -> Result<i64, ExpressionError> {
    value.parse().map_err(|_| ExpressionError::InvalidInteger {
        field: field.to_string(),
        value: value.to_string(),
    })
}
