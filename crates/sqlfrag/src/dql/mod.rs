//! Data query language: SELECT statement composition.
//!
//! [`Dql`] is a fixed-shape statement template. Rendering collects the
//! present clauses in positional order (WITH, SELECT, FROM, WHERE, GROUP BY,
//! HAVING, ORDER BY, LIMIT, OFFSET, then any additional clauses), drops the
//! ones that report [`Clause::is_valid`] `false`, and renders the rest at the
//! statement's own level.
//!
//! # Example
//! ```
//! use sqlfrag::{Dql, Level, args, condition};
//!
//! let q = Dql::new()
//!     .select(["max(x) AS max_x", "max(y) AS max_y"])
//!     .from("demo_table")
//!     .and_where(condition("x >= ?", args![2]))
//!     .group_by("x", args![])
//!     .order_by("y", args![])
//!     .limit("?", args![1]);
//!
//! let built = sqlfrag::build(&q, Level::COMPACT)?;
//! assert_eq!(
//!     built.sql(),
//!     "SELECT max(x) AS max_x, max(y) AS max_y FROM demo_table WHERE x >= ? GROUP BY x ORDER BY y LIMIT ? "
//! );
//! assert_eq!(built.args(), &args![2, 1][..]);
//! # Ok::<(), sqlfrag::FragError>(())
//! ```

mod from;
mod line;
mod predicates;
mod select;
mod with;


pub use from::{FromClause, Table};
pub use line::{custom_line, group_by, limit, offset, order_by};
pub use predicates::Predicates;
pub use select::Select;
pub use with::{NamePosition, NamedTable, WithClause};

use crate::arg::Arg;
use crate::clause::{BoxClause, Clause};
use crate::condition::{BoxCondition, Condition};
use crate::error::FragResult;
use crate::level::{Level, end_line, write_str_indented};
use crate::writer::{ArgWriter, SqlWriter};

/// Write `open`, a line end, `body` one level deeper, then `close`.
///
/// `open` and `close` are indented at `level`; `close` is left unterminated so
/// the caller can append a separator before ending the line.
pub(crate) fn render_parenthesized(
    sql: &mut dyn SqlWriter,
    args: &mut dyn ArgWriter,
    level: Level,
    open: &str,
    body: &dyn Clause,
    close: &str,
) -> FragResult<()> {
    write_str_indented(sql, open, level)?;
    end_line(sql, level.is_compact())?;
    body.render(sql, args, level.next())?;
    write_str_indented(sql, close, level)
}

/// A SELECT statement.
#[must_use]
pub struct Dql {
    pub with: Option<WithClause>,
    pub select: Select,
    pub from: Option<FromClause>,
    pub where_clause: Predicates,
    pub group: Option<BoxClause>,
    pub having: Predicates,
    pub order: Option<BoxClause>,
    pub limit: Option<BoxClause>,
    pub offset: Option<BoxClause>,
    /// Clauses appended after everything else, in order.
    pub additional: Vec<BoxClause>,
}

impl Default for Dql {
    fn default() -> Self {
        Self {
            with: None,
            select: Select::default(),
            from: None,
            where_clause: Predicates::where_clause(),
            group: None,
            having: Predicates::having(),
            order: None,
            limit: None,
            offset: None,
            additional: Vec::new(),
        }
    }
}

impl Dql {
    /// Create an empty statement (`SELECT *`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the WITH clause.
    pub fn with(mut self, with: WithClause) -> Self {
        self.with = Some(with);
        self
    }

    /// Add a `name AS (...)` binding, creating the WITH clause if needed.
    pub fn with_table(mut self, name: impl Into<String>, table: impl Clause + 'static) -> Self {
        self.with
            .get_or_insert_with(WithClause::new)
            .tables
            .push(NamedTable::new(name, table));
        self
    }

    /// Set the selected columns. An empty list renders `SELECT *`.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the arguments bound by the column list.
    pub fn select_args(mut self, args: Vec<Arg>) -> Self {
        self.select.args = args;
        self
    }

    /// Set the FROM table.
    pub fn from(mut self, table: impl Into<Table>) -> Self {
        self.from = Some(FromClause::new(table));
        self
    }

    /// Add a WHERE condition; conditions are joined with `AND`.
    pub fn and_where(mut self, condition: impl Condition + 'static) -> Self {
        self.where_clause.push(condition);
        self
    }

    /// Add a WHERE condition if present.
    pub fn and_where_opt(mut self, condition: Option<BoxCondition>) -> Self {
        self.where_clause.push_opt(condition);
        self
    }

    /// `GROUP BY <expr>`
    pub fn group_by(mut self, expr: &str, args: Vec<Arg>) -> Self {
        self.group = Some(line::group_by(expr, args).boxed());
        self
    }

    /// Replace the GROUP BY clause with any clause.
    pub fn group(mut self, clause: impl Clause + 'static) -> Self {
        self.group = Some(clause.boxed());
        self
    }

    /// Add a HAVING condition; conditions are joined with `AND`.
    pub fn and_having(mut self, condition: impl Condition + 'static) -> Self {
        self.having.push(condition);
        self
    }

    /// Add a HAVING condition if present.
    pub fn and_having_opt(mut self, condition: Option<BoxCondition>) -> Self {
        self.having.push_opt(condition);
        self
    }

    /// `ORDER BY <expr>`
    pub fn order_by(mut self, expr: &str, args: Vec<Arg>) -> Self {
        self.order = Some(line::order_by(expr, args).boxed());
        self
    }

    /// Replace the ORDER BY clause with any clause.
    pub fn order(mut self, clause: impl Clause + 'static) -> Self {
        self.order = Some(clause.boxed());
        self
    }

    /// `LIMIT <expr>`
    pub fn limit(mut self, expr: &str, args: Vec<Arg>) -> Self {
        self.limit = Some(line::limit(expr, args).boxed());
        self
    }

    /// `OFFSET <expr>`
    pub fn offset(mut self, expr: &str, args: Vec<Arg>) -> Self {
        self.offset = Some(line::offset(expr, args).boxed());
        self
    }

    /// Append a trailing clause.
    pub fn additional(mut self, clause: impl Clause + 'static) -> Self {
        self.additional.push(clause.boxed());
        self
    }

    /// The clauses this statement renders, in order.
    pub fn clauses(&self) -> Vec<&dyn Clause> {
        let mut clauses: Vec<&dyn Clause> = Vec::with_capacity(9 + self.additional.len());
        if let Some(with) = &self.with {
            clauses.push(with);
        }
        clauses.push(&self.select);
        if let Some(from) = &self.from {
            clauses.push(from);
        }
        clauses.push(&self.where_clause);
        if let Some(group) = &self.group {
            clauses.push(&**group);
        }
        clauses.push(&self.having);
        for clause in [&self.order, &self.limit, &self.offset].into_iter().flatten() {
            clauses.push(&**clause);
        }
        for clause in &self.additional {
            clauses.push(&**clause);
        }
        clauses.retain(|c| c.is_valid());
        clauses
    }
}

impl Clause for Dql {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        for clause in self.clauses() {
            clause.render(sql, args, level)?;
        }
        Ok(())
    }
}
