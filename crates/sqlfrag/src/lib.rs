//! # sqlfrag
//!
//! Composable SQL fragments rendered into indented or single-line text plus
//! positional arguments.
//!
//! ## Features
//!
//! - **Two layouts**: every tree renders either indented (`Level::Format(n)`,
//!   two spaces per level, one clause per line) or on one line (`Level::Compact`)
//! - **Arguments follow placeholders**: values are written to the argument sink
//!   in the same order their placeholders appear in the text
//! - **Pluggable sinks**: `String`, any `std::io::Write`, or your own
//!   `SqlWriter` / `ArgWriter`
//! - **Absent conditions**: `and` / `or` treat `None` as the identity, and
//!   WHERE / HAVING disappear when they have nothing to say
//! - **Shareable trees**: clauses are `Send + Sync` and rendering only borrows them
//!
//! ## Example
//!
//! ```
//! use sqlfrag::prelude::*;
//!
//! let q = Dql::new()
//!     .select(["max(x) AS max_x", "max(y) AS max_y"])
//!     .from("demo_table")
//!     .and_where(condition("x >= ?", args![2]))
//!     .and_where(condition("y != ?", args!["a"]))
//!     .group_by("x", args![])
//!     .order_by("y", args![])
//!     .limit("1", args![]);
//!
//! let built = build(&q, Level::FORMAT)?;
//! assert_eq!(
//!     built.sql(),
//!     "SELECT\n  max(x) AS max_x,\n  max(y) AS max_y\nFROM demo_table\nWHERE\n  x >= ?\n  AND y != ?\nGROUP BY x\nORDER BY y\nLIMIT 1\n"
//! );
//! assert_eq!(built.args(), &args![2, "a"][..]);
//! # Ok::<(), sqlfrag::FragError>(())
//! ```

pub mod arg;
pub mod build;
pub mod clause;
pub mod condition;
pub mod dql;
pub mod error;
pub mod level;
pub mod prelude;
pub mod writer;

pub use arg::Arg;
pub use build::{BuildConfig, BuiltSql, build, build_with};
pub use clause::{
    BoxClause, Clause, Clauses, CustomClause, LeveledClause, Newline, SimpleClause, custom_clause,
    leveled, simple_clause,
};
pub use condition::{
    AndCondition, BoxCondition, BracketedCondition, Brackets, Condition, CustomCondition,
    NotCondition, OrCondition, SimpleCondition, and, and_all, bracket, bracket_if, condition,
    custom_condition, not, or, or_all,
};
pub use dql::{
    Dql, FromClause, NamePosition, NamedTable, Predicates, Select, Table, WithClause, custom_line,
};
pub use error::{FragError, FragResult};
pub use level::{
    EOL, INDENT_UNIT, Level, SPACE, end_line, spaces_for, write_indent, write_str_indented,
};
pub use writer::{
    ArgWriter, DiscardArgs, FmtSqlWriter, IoSqlWriter, SqlWriter, write_args, write_str,
};
