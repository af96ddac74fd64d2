//! Boolean conditions for WHERE / HAVING lists.
//!
//! Conditions only interleave text and arguments; they never indent or break
//! lines. The enclosing clause decides where a condition starts.
//!
//! # Example
//! ```
//! use sqlfrag::{Arg, Brackets, Condition, and, args, condition, or};
//!
//! let c = and(
//!     Some(condition("status = ?", args!["active"]).boxed()),
//!     or(
//!         Some(condition("role = ?", args!["admin"]).boxed()),
//!         Some(condition("karma > ?", args![100]).boxed()),
//!         Brackets::Save,
//!     ),
//!     Brackets::Omit,
//! );
//!
//! let mut sql = String::new();
//! let mut values: Vec<Arg> = Vec::new();
//! c.render(&mut sql, &mut values)?;
//! assert_eq!(sql, "status = ? AND (role = ? OR karma > ?)");
//! assert_eq!(values, args!["active", "admin", 100]);
//! # Ok::<(), sqlfrag::FragError>(())
//! ```

use crate::arg::Arg;
use crate::error::FragResult;
use crate::writer::{ArgWriter, SqlWriter, write_args, write_str};
use std::sync::Arc;

/// A condition that renders itself as inline SQL text plus arguments.
pub trait Condition: Send + Sync {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()>;

    /// `false` for an absent condition, which renders nothing.
    ///
    /// Condition lists drop absent entries before deciding whether they are empty.
    fn is_present(&self) -> bool {
        true
    }

    /// Box this condition.
    fn boxed(self) -> BoxCondition
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased condition.
pub type BoxCondition = Box<dyn Condition>;

impl<C: Condition + ?Sized> Condition for Box<C> {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        (**self).render(sql, args)
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<C: Condition + ?Sized> Condition for Arc<C> {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        (**self).render(sql, args)
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<C: Condition + ?Sized> Condition for &C {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        (**self).render(sql, args)
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// An absent condition renders nothing and binds nothing.
impl<C: Condition> Condition for Option<C> {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        match self {
            Some(c) => c.render(sql, args),
            None => Ok(()),
        }
    }

    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(|c| c.is_present())
    }
}

/// Whether a composite condition wraps itself in parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brackets {
    #[default]
    Save,
    Omit,
}

impl Brackets {
    pub fn is_saved(self) -> bool {
        self == Brackets::Save
    }
}

/// Literal SQL with its arguments, e.g. `col IN (?, ?)`, `col LIKE ?`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCondition {
    pub sql: String,
    pub args: Vec<Arg>,
}

impl Condition for SimpleCondition {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        write_str(sql, &self.sql)?;
        write_args(args, &self.args)
    }
}

/// Create a [`SimpleCondition`].
pub fn condition(sql: impl Into<String>, args: Vec<Arg>) -> SimpleCondition {
    SimpleCondition {
        sql: sql.into(),
        args,
    }
}

/// A condition rendered by a caller supplied function.
pub struct CustomCondition<F>(F);

impl<F> Condition for CustomCondition<F>
where
    F: Fn(&mut dyn SqlWriter, &mut dyn ArgWriter) -> FragResult<()> + Send + Sync,
{
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        (self.0)(sql, args)
    }
}

/// Create a [`CustomCondition`] from a closure.
pub fn custom_condition<F>(f: F) -> CustomCondition<F>
where
    F: Fn(&mut dyn SqlWriter, &mut dyn ArgWriter) -> FragResult<()> + Send + Sync,
{
    CustomCondition(f)
}

/// `(condition)`
pub struct BracketedCondition {
    pub condition: BoxCondition,
}

impl Condition for BracketedCondition {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        if !self.condition.is_present() {
            return Ok(());
        }
        write_str(sql, "(")?;
        self.condition.render(sql, args)?;
        write_str(sql, ")")
    }

    fn is_present(&self) -> bool {
        self.condition.is_present()
    }
}

/// Wrap a condition in parentheses.
pub fn bracket(condition: impl Condition + 'static) -> BracketedCondition {
    BracketedCondition {
        condition: condition.boxed(),
    }
}

/// Wrap a condition in parentheses only when `brackets` is [`Brackets::Save`].
///
/// An absent condition is returned unwrapped.
pub fn bracket_if(condition: BoxCondition, brackets: Brackets) -> BoxCondition {
    match brackets {
        Brackets::Save if condition.is_present() => BracketedCondition { condition }.boxed(),
        _ => condition,
    }
}

fn render_binary(
    sql: &mut dyn SqlWriter,
    args: &mut dyn ArgWriter,
    l: &dyn Condition,
    op: &str,
    r: &dyn Condition,
    brackets: Brackets,
) -> FragResult<()> {
    // A single present operand is written on its own, keeping the bracket policy.
    match (l.is_present(), r.is_present()) {
        (true, true) => {}
        (true, false) => return render_bracketed(sql, args, l, brackets),
        (false, true) => return render_bracketed(sql, args, r, brackets),
        (false, false) => return Ok(()),
    }
    if brackets.is_saved() {
        write_str(sql, "(")?;
    }
    l.render(sql, args)?;
    write_str(sql, op)?;
    r.render(sql, args)?;
    if brackets.is_saved() {
        write_str(sql, ")")?;
    }
    Ok(())
}

fn render_bracketed(
    sql: &mut dyn SqlWriter,
    args: &mut dyn ArgWriter,
    c: &dyn Condition,
    brackets: Brackets,
) -> FragResult<()> {
    if brackets.is_saved() {
        write_str(sql, "(")?;
    }
    c.render(sql, args)?;
    if brackets.is_saved() {
        write_str(sql, ")")?;
    }
    Ok(())
}

/// `[(]l AND r[)]`
pub struct AndCondition {
    pub l: BoxCondition,
    pub r: BoxCondition,
    pub brackets: Brackets,
}

impl Condition for AndCondition {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        render_binary(sql, args, &*self.l, " AND ", &*self.r, self.brackets)
    }

    fn is_present(&self) -> bool {
        self.l.is_present() || self.r.is_present()
    }
}

/// `[(]l OR r[)]`
pub struct OrCondition {
    pub l: BoxCondition,
    pub r: BoxCondition,
    pub brackets: Brackets,
}

impl Condition for OrCondition {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        render_binary(sql, args, &*self.l, " OR ", &*self.r, self.brackets)
    }

    fn is_present(&self) -> bool {
        self.l.is_present() || self.r.is_present()
    }
}

fn present(c: Option<BoxCondition>) -> Option<BoxCondition> {
    c.filter(|c| c.is_present())
}

/// Join two optional conditions with `AND`.
///
/// A missing operand is the identity: with one operand present the result is
/// that operand (still bracketed per `brackets`), with none it is `None`.
/// Operands that are themselves absent (a boxed `None`, say) count as missing.
pub fn and(
    l: Option<BoxCondition>,
    r: Option<BoxCondition>,
    brackets: Brackets,
) -> Option<BoxCondition> {
    match (present(l), present(r)) {
        (Some(l), Some(r)) => Some(AndCondition { l, r, brackets }.boxed()),
        (Some(c), None) | (None, Some(c)) => Some(bracket_if(c, brackets)),
        (None, None) => None,
    }
}

/// Join two optional conditions with `OR`. Same identity rule as [`and`].
pub fn or(
    l: Option<BoxCondition>,
    r: Option<BoxCondition>,
    brackets: Brackets,
) -> Option<BoxCondition> {
    match (present(l), present(r)) {
        (Some(l), Some(r)) => Some(OrCondition { l, r, brackets }.boxed()),
        (Some(c), None) | (None, Some(c)) => Some(bracket_if(c, brackets)),
        (None, None) => None,
    }
}

/// `AND` every present condition, bracketing the whole group once.
pub fn and_all<I>(conditions: I, brackets: Brackets) -> Option<BoxCondition>
where
    I: IntoIterator<Item = Option<BoxCondition>>,
{
    let joined = conditions
        .into_iter()
        .fold(None, |acc, c| and(acc, c, Brackets::Omit))?;
    Some(bracket_if(joined, brackets))
}

/// `OR` every present condition, bracketing the whole group once.
pub fn or_all<I>(conditions: I, brackets: Brackets) -> Option<BoxCondition>
where
    I: IntoIterator<Item = Option<BoxCondition>>,
{
    let joined = conditions
        .into_iter()
        .fold(None, |acc, c| or(acc, c, Brackets::Omit))?;
    Some(bracket_if(joined, brackets))
}

/// `[(]NOT condition[)]`
pub struct NotCondition {
    pub condition: BoxCondition,
    pub brackets: Brackets,
}

impl Condition for NotCondition {
    fn render(&self, sql: &mut dyn SqlWriter, args: &mut dyn ArgWriter) -> FragResult<()> {
        if !self.condition.is_present() {
            return Ok(());
        }
        if self.brackets.is_saved() {
            write_str(sql, "(")?;
        }
        write_str(sql, "NOT ")?;
        self.condition.render(sql, args)?;
        if self.brackets.is_saved() {
            write_str(sql, ")")?;
        }
        Ok(())
    }

    fn is_present(&self) -> bool {
        self.condition.is_present()
    }
}

/// Negate a condition. Negating an absent condition is still absent.
pub fn not(condition: impl Condition + 'static, brackets: Brackets) -> NotCondition {
    NotCondition {
        condition: condition.boxed(),
        brackets,
    }
}
