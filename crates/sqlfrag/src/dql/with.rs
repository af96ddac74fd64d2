use super::render_parenthesized;
use crate::clause::{BoxClause, Clause};
use crate::error::FragResult;
use crate::level::{Level, end_line, write_str_indented};
use crate::writer::{ArgWriter, SqlWriter, write_str};

/// Where a table's name goes relative to its parenthesized body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePosition {
    /// `name AS (...)`
    #[default]
    NameFirst,
    /// `(...) AS name`
    NameAfter,
}

/// A clause bound to a name.
pub struct NamedTable {
    pub name: String,
    pub table: BoxClause,
}

impl NamedTable {
    pub fn new(name: impl Into<String>, table: impl Clause + 'static) -> Self {
        Self {
            name: name.into(),
            table: table.boxed(),
        }
    }

    /// The text before and after the body for `position`.
    pub(crate) fn delimiters(&self, position: NamePosition) -> (String, String) {
        match position {
            NamePosition::NameFirst => (format!("{} AS (", self.name), ")".to_string()),
            NamePosition::NameAfter => ("(".to_string(), format!(") AS {}", self.name)),
        }
    }
}

/// `WITH [RECURSIVE]` followed by comma separated named tables.
///
/// The WITH clause always starts at the left margin: its level is reset to
/// `Format(0)` whatever the enclosing level is, unless that level is compact.
#[derive(Default)]
pub struct WithClause {
    pub tables: Vec<NamedTable>,
    pub position: NamePosition,
    pub recursive: bool,
}

impl WithClause {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn table(mut self, name: impl Into<String>, table: impl Clause + 'static) -> Self {
        self.tables.push(NamedTable::new(name, table));
        self
    }

    #[must_use]
    pub fn position(mut self, position: NamePosition) -> Self {
        self.position = position;
        self
    }

    /// Emit `WITH RECURSIVE`.
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

impl Clause for WithClause {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        if self.tables.is_empty() {
            return Ok(());
        }
        let level = if level.is_compact() {
            Level::COMPACT
        } else {
            Level::FORMAT
        };
        let keyword = if self.recursive {
            "WITH RECURSIVE"
        } else {
            "WITH"
        };
        write_str_indented(sql, keyword, level)?;
        end_line(sql, level.is_compact())?;

        let last = self.tables.len() - 1;
        for (i, t) in self.tables.iter().enumerate() {
            let (open, close) = t.delimiters(self.position);
            render_parenthesized(sql, args, level, &open, &*t.table, &close)?;
            if i != last {
                write_str(sql, ",")?;
            }
            end_line(sql, level.is_compact())?;
        }
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.tables.is_empty()
    }
}
