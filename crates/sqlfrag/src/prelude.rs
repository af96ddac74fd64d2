//! Convenient imports for typical `sqlfrag` usage.
//!
//! ```
//! use sqlfrag::prelude::*;
//!
//! let built = build(&Dql::new().from("t"), Level::COMPACT)?;
//! assert_eq!(built.sql(), "SELECT * FROM t ");
//! # Ok::<(), FragError>(())
//! ```

pub use crate::args;
pub use crate::{Arg, BuildConfig, BuiltSql, FragError, FragResult, Level, build, build_with};
pub use crate::{BoxCondition, Brackets, Condition, and, and_all, condition, not, or, or_all};
pub use crate::{BoxClause, Clause, Newline, custom_clause, leveled, simple_clause};
pub use crate::{Dql, NamePosition, Table, WithClause, custom_line};
pub use crate::{ArgWriter, SqlWriter};
