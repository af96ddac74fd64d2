//! Indentation levels and line handling.
//!
//! Every line a fragment writes starts with `2 * n` spaces for
//! [`Level::Format(n)`](Level::Format). In [`Level::Compact`] nothing is
//! indented and line ends become a single space, so the whole statement ends
//! up on one line.

use crate::error::FragResult;
use crate::writer::{SqlWriter, write_str};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One indentation unit.
pub const INDENT_UNIT: &str = "  ";

/// Line terminator in format mode.
pub const EOL: &str = "\n";

/// Line terminator in compact mode.
pub const SPACE: &str = " ";

// 32 levels of indentation served without allocating.
const SPACES: &str = "                                                                ";
const MAX_TABLE_LEVEL: usize = SPACES.len() / INDENT_UNIT.len();

/// Indentation level threaded through rendering.
///
/// Compact is sticky: [`Level::next`] and [`Level::offset`] never turn a
/// compact level back into a formatted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Indented output, one line per clause.
    Format(usize),
    /// Single-line output, tokens separated by one space.
    Compact,
}

impl Level {
    /// Start level for formatted output.
    pub const FORMAT: Level = Level::Format(0);

    /// Start level for compact output.
    pub const COMPACT: Level = Level::Compact;

    pub fn is_compact(self) -> bool {
        matches!(self, Level::Compact)
    }

    /// The level one step deeper.
    pub fn next(self) -> Level {
        match self {
            Level::Format(n) => Level::Format(n.saturating_add(1)),
            Level::Compact => Level::Compact,
        }
    }

    /// Shift this level by `by`; compact if either side is compact.
    pub fn offset(self, by: Level) -> Level {
        match (self, by) {
            (Level::Format(a), Level::Format(b)) => Level::Format(a.saturating_add(b)),
            _ => Level::Compact,
        }
    }

    /// Number of indentation characters written at this level.
    pub fn indent_width(self) -> usize {
        match self {
            Level::Format(n) => n.saturating_mul(INDENT_UNIT.len()),
            Level::Compact => 0,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::FORMAT
    }
}

/// The indentation text for `level`.
///
/// Prefer [`write_indent`] when writing to a sink.
pub fn spaces_for(level: Level) -> Cow<'static, str> {
    match level {
        Level::Compact => Cow::Borrowed(""),
        Level::Format(n) if n <= MAX_TABLE_LEVEL => Cow::Borrowed(&SPACES[..n * INDENT_UNIT.len()]),
        Level::Format(n) => Cow::Owned(INDENT_UNIT.repeat(n)),
    }
}

/// Write the indentation for `level`.
pub fn write_indent(sql: &mut dyn SqlWriter, level: Level) -> FragResult<()> {
    if level.is_compact() {
        return Ok(());
    }
    write_str(sql, &spaces_for(level))
}

/// Write `s` preceded by the indentation for `level`.
pub fn write_str_indented(sql: &mut dyn SqlWriter, s: &str, level: Level) -> FragResult<()> {
    write_indent(sql, level)?;
    write_str(sql, s)
}

/// End the current line: a newline, or a single space when `compact`.
pub fn end_line(sql: &mut dyn SqlWriter, compact: bool) -> FragResult<()> {
    write_str(sql, if compact { SPACE } else { EOL })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_width_is_two_per_level() {
        for n in [0, 1, 5, 31, 32, 33, 100] {
            let level = Level::Format(n);
            assert_eq!(spaces_for(level).len(), 2 * n);
            assert_eq!(level.indent_width(), 2 * n);
            assert!(spaces_for(level).chars().all(|c| c == ' '));
        }
        assert_eq!(spaces_for(Level::Compact), "");
        assert_eq!(Level::Compact.indent_width(), 0);
    }

    #[test]
    fn table_levels_are_borrowed() {
        assert!(matches!(spaces_for(Level::Format(32)), Cow::Borrowed(_)));
        assert!(matches!(spaces_for(Level::Format(33)), Cow::Owned(_)));
    }

    #[test]
    fn next_level() {
        assert_eq!(Level::Compact.next(), Level::Compact);
        assert_eq!(Level::Format(0).next(), Level::Format(1));
        assert_eq!(Level::Format(7).next(), Level::Format(8));
    }

    #[test]
    fn offset_is_compact_if_either_side_is() {
        assert_eq!(Level::Format(1).offset(Level::Format(2)), Level::Format(3));
        assert_eq!(Level::Format(3).offset(Level::Compact), Level::Compact);
        assert_eq!(Level::Compact.offset(Level::Format(1)), Level::Compact);
    }

    #[test]
    fn deepest_level_saturates() {
        let deepest = Level::Format(usize::MAX);
        assert_eq!(deepest.next(), deepest);
        assert_eq!(Level::Format(2).offset(deepest), deepest);
        assert_eq!(deepest.indent_width(), usize::MAX);
        assert_eq!(Level::Compact.offset(deepest), Level::Compact);
    }

    #[test]
    fn end_line_modes() {
        let mut out = String::new();
        end_line(&mut out, false).unwrap();
        end_line(&mut out, true).unwrap();
        assert_eq!(out, "\n ");
    }

    #[test]
    fn write_str_indented_skips_indent_when_compact() {
        let mut out = String::new();
        write_str_indented(&mut out, "a", Level::Format(2)).unwrap();
        write_str_indented(&mut out, "b", Level::Compact).unwrap();
        assert_eq!(out, "    ab");
    }

    #[test]
    fn level_serde_shape() {
        assert_eq!(serde_json::to_string(&Level::Compact).unwrap(), r#""compact""#);
        assert_eq!(serde_json::to_string(&Level::Format(1)).unwrap(), r#"{"format":1}"#);
        let level: Level = serde_json::from_str(r#"{"format":3}"#).unwrap();
        assert_eq!(level, Level::Format(3));
    }
}
