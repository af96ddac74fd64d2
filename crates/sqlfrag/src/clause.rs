//! Line-oriented SQL clauses.
//!
//! A [`Clause`] renders itself at an indentation [`Level`], writing SQL text
//! to a [`SqlWriter`] and bound arguments, in the same order as their
//! placeholders, to an [`ArgWriter`].
//!
//! The renderer does not check that the number of arguments matches the
//! placeholders in the text: placeholder syntax differs between databases,
//! so keeping them aligned is up to the caller.

use crate::arg::Arg;
use crate::error::FragResult;
use crate::level::{Level, end_line, write_str_indented};
use crate::writer::{ArgWriter, SqlWriter, write_args};
use std::sync::Arc;

/// A fragment of SQL that can render itself at an indentation level.
pub trait Clause: Send + Sync {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()>;

    /// Whether this clause should be rendered at all.
    ///
    /// Statement templates skip clauses that report `false`.
    fn is_valid(&self) -> bool {
        true
    }

    /// Box this clause.
    fn boxed(self) -> BoxClause
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased clause.
pub type BoxClause = Box<dyn Clause>;

impl<C: Clause + ?Sized> Clause for Box<C> {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        (**self).render(sql, args, level)
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<C: Clause + ?Sized> Clause for Arc<C> {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        (**self).render(sql, args, level)
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<C: Clause + ?Sized> Clause for &C {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        (**self).render(sql, args, level)
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

/// Whether a [`SimpleClause`] terminates its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Auto,
    Dont,
}

/// Literal SQL text written on its own indented line.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleClause {
    pub sql: String,
    pub args: Vec<Arg>,
    pub newline: Newline,
}

impl Clause for SimpleClause {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        write_str_indented(sql, &self.sql, level)?;
        if self.newline == Newline::Auto {
            end_line(sql, level.is_compact())?;
        }
        write_args(args, &self.args)
    }
}

/// Create a [`SimpleClause`].
pub fn simple_clause(newline: Newline, sql: impl Into<String>, args: Vec<Arg>) -> SimpleClause {
    SimpleClause {
        sql: sql.into(),
        args,
        newline,
    }
}

/// A clause rendered by a caller supplied function.
///
/// This is the escape hatch for SQL the built-in clauses do not cover.
pub struct CustomClause<F>(F);

impl<F> Clause for CustomClause<F>
where
    F: Fn(&mut dyn SqlWriter, &mut dyn ArgWriter, Level) -> FragResult<()> + Send + Sync,
{
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        (self.0)(sql, args, level)
    }
}

/// Create a [`CustomClause`] from a closure.
pub fn custom_clause<F>(f: F) -> CustomClause<F>
where
    F: Fn(&mut dyn SqlWriter, &mut dyn ArgWriter, Level) -> FragResult<()> + Send + Sync,
{
    CustomClause(f)
}

/// Renders the wrapped clause at the incoming level shifted by `offset`.
pub struct LeveledClause {
    pub clause: BoxClause,
    pub offset: Level,
}

impl Clause for LeveledClause {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        self.clause.render(sql, args, level.offset(self.offset))
    }

    fn is_valid(&self) -> bool {
        self.clause.is_valid()
    }
}

/// Shift a clause by `offset` levels. A compact offset forces compact output.
pub fn leveled(clause: impl Clause + 'static, offset: Level) -> LeveledClause {
    LeveledClause {
        clause: clause.boxed(),
        offset,
    }
}

/// A sequence of clauses rendered one after another at the same level.
#[derive(Default)]
pub struct Clauses(pub Vec<BoxClause>);

impl Clauses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clause: impl Clause + 'static) -> &mut Self {
        self.0.push(clause.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<BoxClause>> for Clauses {
    fn from(clauses: Vec<BoxClause>) -> Self {
        Self(clauses)
    }
}

impl FromIterator<BoxClause> for Clauses {
    fn from_iter<I: IntoIterator<Item = BoxClause>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Clause for Clauses {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        for clause in &self.0 {
            clause.render(sql, args, level)?;
        }
        Ok(())
    }
}
