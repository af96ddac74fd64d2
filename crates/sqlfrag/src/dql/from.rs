use super::render_parenthesized;
use super::with::{NamePosition, NamedTable};
use crate::clause::{BoxClause, Clause};
use crate::error::FragResult;
use crate::level::{Level, end_line, write_str_indented};
use crate::writer::{ArgWriter, SqlWriter, write_str};

/// A table reference.
pub enum Table {
    /// A bare table name, written as is.
    Name(String),
    /// An unnamed sub-query: `(...)`.
    Sub(BoxClause),
    /// A sub-query bound to a name.
    Named(NamedTable, NamePosition),
}

impl Table {
    pub fn name(name: impl Into<String>) -> Self {
        Table::Name(name.into())
    }

    pub fn sub(table: impl Clause + 'static) -> Self {
        Table::Sub(table.boxed())
    }

    /// `name AS (...)`
    pub fn named(name: impl Into<String>, table: impl Clause + 'static) -> Self {
        Table::Named(NamedTable::new(name, table), NamePosition::NameFirst)
    }

    /// `(...) AS name`
    pub fn aliased(table: impl Clause + 'static, name: impl Into<String>) -> Self {
        Table::Named(NamedTable::new(name, table), NamePosition::NameAfter)
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Table::Name(name.to_string())
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Table::Name(name)
    }
}

impl From<super::Dql> for Table {
    fn from(dql: super::Dql) -> Self {
        Table::Sub(dql.boxed())
    }
}

/// `FROM <table>`
///
/// Sub-queries are written one level deeper than the FROM keyword, with the
/// closing parenthesis back at the FROM's level.
pub struct FromClause {
    pub table: Table,
}

impl FromClause {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Clause for FromClause {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        match &self.table {
            Table::Name(name) => {
                write_str_indented(sql, "FROM ", level)?;
                write_str(sql, name)?;
            }
            Table::Sub(table) => {
                render_parenthesized(sql, args, level, "FROM (", &**table, ")")?;
            }
            Table::Named(table, position) => {
                let (open, close) = table.delimiters(*position);
                let open = format!("FROM {open}");
                render_parenthesized(sql, args, level, &open, &*table.table, &close)?;
            }
        }
        end_line(sql, level.is_compact())
    }

    fn is_valid(&self) -> bool {
        match &self.table {
            Table::Name(name) => !name.is_empty(),
            Table::Sub(table) => table.is_valid(),
            Table::Named(table, _) => table.table.is_valid(),
        }
    }
}
