//! Single-line statement clauses. Each one terminates its own line.

use crate::arg::Arg;
use crate::clause::{Newline, SimpleClause, simple_clause};

/// `GROUP BY <expr>`
pub fn group_by(expr: &str, args: Vec<Arg>) -> SimpleClause {
    simple_clause(Newline::Auto, format!("GROUP BY {expr}"), args)
}

/// `ORDER BY <expr>`
pub fn order_by(expr: &str, args: Vec<Arg>) -> SimpleClause {
    simple_clause(Newline::Auto, format!("ORDER BY {expr}"), args)
}

/// `LIMIT <expr>`
pub fn limit(expr: &str, args: Vec<Arg>) -> SimpleClause {
    simple_clause(Newline::Auto, format!("LIMIT {expr}"), args)
}

/// `OFFSET <expr>`
pub fn offset(expr: &str, args: Vec<Arg>) -> SimpleClause {
    simple_clause(Newline::Auto, format!("OFFSET {expr}"), args)
}

/// A whole line written verbatim, for when the keyword itself needs to change
/// (`GROUP BY ROLLUP (...)`, `FETCH FIRST ? ROWS ONLY`, ...).
pub fn custom_line(sql: impl Into<String>, args: Vec<Arg>) -> SimpleClause {
    simple_clause(Newline::Auto, sql, args)
}
