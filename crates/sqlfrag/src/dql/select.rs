use crate::arg::Arg;
use crate::clause::Clause;
use crate::error::FragResult;
use crate::level::{Level, end_line, write_str_indented};
use crate::writer::{ArgWriter, SqlWriter, write_args, write_str};

/// The SELECT column list.
///
/// With no columns this renders `SELECT *` and binds nothing: `args` only
/// apply to an explicit column list, and are written after every column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub columns: Vec<String>,
    pub args: Vec<Arg>,
}

impl Select {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn args(mut self, args: Vec<Arg>) -> Self {
        self.args = args;
        self
    }
}

impl Clause for Select {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        let compact = level.is_compact();
        if self.columns.is_empty() {
            write_str_indented(sql, "SELECT *", level)?;
            return end_line(sql, compact);
        }

        write_str_indented(sql, "SELECT", level)?;
        end_line(sql, compact)?;
        let last = self.columns.len() - 1;
        for (i, col) in self.columns.iter().enumerate() {
            write_str_indented(sql, col, level.next())?;
            if i != last {
                write_str(sql, ",")?;
            }
            end_line(sql, compact)?;
        }
        write_args(args, &self.args)
    }
}
