//! Text and argument sinks.
//!
//! Rendering writes to two caller supplied sinks at once: a [`SqlWriter`]
//! receiving SQL text and an [`ArgWriter`] receiving bound arguments. The
//! engine does not care what backs either of them.

use crate::arg::Arg;
use crate::error::{FragError, FragResult};
use std::{fmt, io};

/// Append-only sink for SQL text.
///
/// `write_sql` reports how many bytes of `s` were accepted. Accepting fewer
/// than `s.len()` bytes is not an error by itself, but [`write_str`] turns it
/// into [`FragError::ShortWrite`].
pub trait SqlWriter {
    fn write_sql(&mut self, s: &str) -> FragResult<usize>;
}

impl SqlWriter for String {
    fn write_sql(&mut self, s: &str) -> FragResult<usize> {
        self.push_str(s);
        Ok(s.len())
    }
}

impl<W: SqlWriter + ?Sized> SqlWriter for &mut W {
    fn write_sql(&mut self, s: &str) -> FragResult<usize> {
        (**self).write_sql(s)
    }
}

/// Adapts any [`io::Write`] into a [`SqlWriter`].
///
/// Each call performs exactly one `io::Write::write`, so a partial write of
/// the underlying writer is reported as a short write instead of being retried.
#[derive(Debug)]
pub struct IoSqlWriter<W> {
    inner: W,
}

impl<W: io::Write> IoSqlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> SqlWriter for IoSqlWriter<W> {
    fn write_sql(&mut self, s: &str) -> FragResult<usize> {
        if s.is_empty() {
            return Ok(0);
        }
        Ok(self.inner.write(s.as_bytes())?)
    }
}

/// Adapts any [`fmt::Write`] into a [`SqlWriter`].
///
/// `fmt::Write` either takes the whole string or fails, so a successful
/// write always reports `s.len()` bytes.
#[derive(Debug)]
pub struct FmtSqlWriter<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSqlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> SqlWriter for FmtSqlWriter<W> {
    fn write_sql(&mut self, s: &str) -> FragResult<usize> {
        self.inner.write_str(s)?;
        Ok(s.len())
    }
}

/// Append-only sink for bound arguments.
pub trait ArgWriter {
    fn write_arg(&mut self, arg: Arg) -> FragResult<()>;
}

impl ArgWriter for Vec<Arg> {
    fn write_arg(&mut self, arg: Arg) -> FragResult<()> {
        self.push(arg);
        Ok(())
    }
}

impl<W: ArgWriter + ?Sized> ArgWriter for &mut W {
    fn write_arg(&mut self, arg: Arg) -> FragResult<()> {
        (**self).write_arg(arg)
    }
}

/// An [`ArgWriter`] that accepts and drops every argument.
///
/// Useful when only the SQL text is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardArgs;

impl ArgWriter for DiscardArgs {
    fn write_arg(&mut self, _arg: Arg) -> FragResult<()> {
        Ok(())
    }
}

/// Write `s` completely, failing on a short write.
pub fn write_str(sql: &mut dyn SqlWriter, s: &str) -> FragResult<()> {
    let written = sql.write_sql(s)?;
    if written != s.len() {
        return Err(FragError::short_write(s.len(), written));
    }
    Ok(())
}

/// Write each argument in order, stopping at the first failure.
pub fn write_args(args: &mut dyn ArgWriter, values: &[Arg]) -> FragResult<()> {
    for value in values {
        args.write_arg(value.clone())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts at most `cap` bytes in total, truncating the write that crosses it.
    struct Capped {
        out: String,
        cap: usize,
    }

    impl SqlWriter for Capped {
        fn write_sql(&mut self, s: &str) -> FragResult<usize> {
            let room = self.cap - self.out.len();
            let n = s.len().min(room);
            self.out.push_str(&s[..n]);
            Ok(n)
        }
    }

    struct FailAfter(usize);

    impl ArgWriter for FailAfter {
        fn write_arg(&mut self, _arg: Arg) -> FragResult<()> {
            if self.0 == 0 {
                return Err(FragError::sink("full"));
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn write_str_detects_short_write() {
        let mut w = Capped {
            out: String::new(),
            cap: 2,
        };
        let err = write_str(&mut w, "abc").unwrap_err();
        assert!(err.is_short_write());
        assert_eq!(w.out, "ab");
    }

    #[test]
    fn io_writer_reports_partial_write() {
        let mut buf = [0u8; 3];
        let mut w = IoSqlWriter::new(&mut buf[..]);
        write_str(&mut w, "ab").unwrap();
        let err = write_str(&mut w, "cd").unwrap_err();
        assert!(matches!(
            err,
            FragError::ShortWrite {
                expected: 2,
                written: 1
            }
        ));
        assert_eq!(&buf, b"abc");
    }

    /// Refuses everything once `limit` bytes have been written.
    struct Full {
        out: String,
        limit: usize,
    }

    impl fmt::Write for Full {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.out.len() + s.len() > self.limit {
                return Err(fmt::Error);
            }
            self.out.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn fmt_writer_reports_fmt_error() {
        let mut w = FmtSqlWriter::new(Full {
            out: String::new(),
            limit: 4,
        });
        write_str(&mut w, "abc").unwrap();
        let err = write_str(&mut w, "de").unwrap_err();
        assert!(matches!(err, FragError::Fmt(_)));
        assert!(err.is_sink());
        assert_eq!(w.into_inner().out, "abc");
    }

    #[test]
    fn fmt_writer_over_string() {
        let mut w = FmtSqlWriter::new(String::new());
        write_str(&mut w, "SELECT 1").unwrap();
        assert_eq!(w.get_ref(), "SELECT 1");
    }

    #[test]
    fn write_args_short_circuits() {
        let mut sink = FailAfter(1);
        let err = write_args(&mut sink, &crate::args![1, 2, 3]).unwrap_err();
        assert!(err.is_sink());
        assert_eq!(sink.0, 0);
    }

    #[test]
    fn write_args_preserves_order() {
        let mut sink: Vec<Arg> = Vec::new();
        write_args(&mut sink, &crate::args!["a", 2]).unwrap();
        assert_eq!(sink, crate::args!["a", 2]);
    }
}
