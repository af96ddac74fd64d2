//! Rendering a clause tree into owned SQL text and arguments.

use crate::arg::Arg;
use crate::clause::Clause;
use crate::error::FragResult;
use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Options for [`build_with`].
///
/// Deserializable so hosts can keep it in their own configuration files;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Level the root clause is rendered at.
    pub level: Level,
    /// Bytes reserved for the SQL text up front.
    pub initial_capacity: usize,
    /// Emit a `debug` event with the rendered SQL (requires the `tracing` feature).
    pub log_sql: bool,
    /// Truncate logged SQL (in bytes, at a char boundary). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            level: Level::FORMAT,
            initial_capacity: 256,
            log_sql: true,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, rendering on a single line.
    pub fn compact() -> Self {
        Self::default().with_level(Level::COMPACT)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn enable_logging(mut self) -> Self {
        self.log_sql = true;
        self
    }

    pub fn disable_logging(mut self) -> Self {
        self.log_sql = false;
        self
    }

    pub fn max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Log the full SQL text.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }
}

/// SQL text and its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltSql {
    pub sql: String,
    pub args: Vec<Arg>,
}

impl BuiltSql {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Arg>) {
        (self.sql, self.args)
    }
}

/// Render `clause` at `level` with default options.
pub fn build(clause: &dyn Clause, level: Level) -> FragResult<BuiltSql> {
    build_with(clause, &BuildConfig::default().with_level(level))
}

/// Render `clause` according to `config`.
pub fn build_with(clause: &dyn Clause, config: &BuildConfig) -> FragResult<BuiltSql> {
    let mut sql = String::with_capacity(config.initial_capacity);
    let mut args = Vec::new();
    let result = clause.render(&mut sql, &mut args, config.level);

    if config.log_sql {
        log_build(config, &sql, args.len(), &result);
    }

    result?;
    Ok(BuiltSql { sql, args })
}

#[cfg(feature = "tracing")]
fn log_build(config: &BuildConfig, sql: &str, arg_count: usize, result: &FragResult<()>) {
    match result {
        Ok(()) => tracing::debug!(
            target: "sqlfrag.sql",
            arg_count,
            compact = config.level.is_compact(),
            sql = %truncate_for_log(sql, config.max_log_sql_length),
            "built sql"
        ),
        Err(error) => tracing::debug!(
            target: "sqlfrag.sql",
            %error,
            written = sql.len(),
            "failed to build sql"
        ),
    }
}

#[cfg(not(feature = "tracing"))]
fn log_build(_config: &BuildConfig, _sql: &str, _arg_count: usize, _result: &FragResult<()>) {}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_for_log(sql: &str, max: Option<usize>) -> std::borrow::Cow<'_, str> {
    match max {
        Some(max) if sql.len() > max => {
            let mut end = max;
            while end > 0 && !sql.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &sql[..end]).into()
        }
        _ => sql.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::clause::{Newline, custom_clause, simple_clause};
    use crate::condition::condition;
    use crate::dql::Dql;
    use crate::error::FragError;

    #[test]
    fn build_returns_text_and_args() {
        let q = Dql::new()
            .from("t")
            .and_where(condition("id = ?", args![7]));
        let built = build(&q, Level::FORMAT).unwrap();
        assert_eq!(built.sql(), "SELECT *\nFROM t\nWHERE\n  id = ?\n");
        assert_eq!(built.args(), &args![7][..]);

        let (sql, args) = build_with(&q, &BuildConfig::compact()).unwrap().into_parts();
        assert_eq!(sql, "SELECT * FROM t WHERE id = ? ");
        assert_eq!(args, args![7]);
    }

    #[test]
    fn build_propagates_render_error() {
        let c = custom_clause(|_, _, _| Err(FragError::Other("boom".into())));
        let err = build(&c, Level::FORMAT).unwrap_err();
        assert!(matches!(err, FragError::Other(ref m) if m == "boom"));
    }

    #[test]
    fn level_setting_applies_to_root() {
        let c = simple_clause(Newline::Auto, "x", args![]);
        let config = BuildConfig::new()
            .with_level(Level::Format(2))
            .disable_logging();
        assert_eq!(build_with(&c, &config).unwrap().sql, "    x\n");
    }

    #[test]
    fn config_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.level, Level::FORMAT);
        assert_eq!(config.initial_capacity, 256);
        assert!(config.log_sql);
        assert_eq!(config.max_log_sql_length, Some(200));
        assert_eq!(BuildConfig::compact().level, Level::COMPACT);
    }

    #[test]
    fn config_from_partial_json() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"level":"compact","log_sql":false}"#).unwrap();
        assert_eq!(config.level, Level::COMPACT);
        assert!(!config.log_sql);
        assert_eq!(config.initial_capacity, 256);

        let config: BuildConfig =
            serde_json::from_str(r#"{"level":{"format":1},"max_log_sql_length":null}"#).unwrap();
        assert_eq!(config.level, Level::Format(1));
        assert_eq!(config.max_log_sql_length, None);
    }

    #[test]
    fn log_truncation_respects_char_boundaries() {
        assert_eq!(truncate_for_log("abc", Some(10)), "abc");
        assert_eq!(truncate_for_log("abcdef", Some(3)), "abc...");
        // 'é' is two bytes; cutting at 2 would split it.
        assert_eq!(truncate_for_log("aé", Some(2)), "a...");
        assert_eq!(truncate_for_log("abcdef", None), "abcdef");
    }
}
