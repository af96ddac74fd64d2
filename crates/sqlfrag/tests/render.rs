use sqlfrag::prelude::*;
use sqlfrag::{IoSqlWriter, Select};
use std::sync::Arc;

fn users_query() -> Dql {
    Dql::new()
        .select(["id", "name"])
        .from("users")
        .and_where_opt(and(
            Some(condition("status = ?", args!["active"]).boxed()),
            or(
                Some(condition("role = ?", args!["admin"]).boxed()),
                Some(condition("karma > ?", args![100]).boxed()),
                Brackets::Save,
            ),
            Brackets::Omit,
        ))
        .and_where(not(condition("banned", args![]), Brackets::Omit))
        .order_by("id DESC", args![])
        .limit("?", args![20])
}

/// Accepts at most `cap` bytes in total, then starts truncating writes.
struct Capped {
    out: String,
    cap: usize,
}

impl SqlWriter for Capped {
    fn write_sql(&mut self, s: &str) -> FragResult<usize> {
        let n = s.len().min(self.cap - self.out.len());
        self.out.push_str(&s[..n]);
        Ok(n)
    }
}

/// Fails on the `fail_at`-th argument (0-based).
struct FailingArgs {
    seen: Vec<Arg>,
    fail_at: usize,
}

impl ArgWriter for FailingArgs {
    fn write_arg(&mut self, arg: Arg) -> FragResult<()> {
        if self.seen.len() == self.fail_at {
            return Err(FragError::sink("argument buffer full"));
        }
        self.seen.push(arg);
        Ok(())
    }
}

#[test]
fn nested_conditions_in_where() {
    let built = build(&users_query(), Level::FORMAT).unwrap();
    assert_eq!(
        built.sql(),
        "SELECT\n  id,\n  name\nFROM users\nWHERE\n  status = ? AND (role = ? OR karma > ?)\n  AND NOT banned\nORDER BY id DESC\nLIMIT ?\n"
    );
    assert_eq!(built.args(), &args!["active", "admin", 100, 20][..]);
}

#[test]
fn compact_output_is_one_line() {
    let built = build(&users_query(), Level::COMPACT).unwrap();
    assert!(!built.sql.contains('\n'));
    assert_eq!(
        built.sql,
        "SELECT id, name FROM users WHERE status = ? AND (role = ? OR karma > ?) AND NOT banned ORDER BY id DESC LIMIT ? "
    );
}

#[test]
fn short_write_stops_rendering() {
    let q = Dql::new()
        .from("t")
        .and_where(condition("x = ?", args![1]))
        .limit("?", args![2]);
    let mut sql = Capped {
        out: String::new(),
        cap: 20,
    };
    let mut args: Vec<Arg> = Vec::new();
    let err = q.render(&mut sql, &mut args, Level::FORMAT).unwrap_err();
    assert!(err.is_short_write());
    assert_eq!(sql.out, "SELECT *\nFROM t\nWHER");
    assert!(args.is_empty());
}

#[test]
fn arg_sink_error_is_propagated_unchanged() {
    let q = Dql::new()
        .from("t")
        .and_where(condition("a = ?", args![1]))
        .and_where(condition("b = ?", args![2]))
        .limit("1", args![]);
    let mut sql = String::new();
    let mut args = FailingArgs {
        seen: Vec::new(),
        fail_at: 1,
    };
    let err = q.render(&mut sql, &mut args, Level::FORMAT).unwrap_err();
    assert!(matches!(err, FragError::Sink(ref m) if m == "argument buffer full"));
    assert_eq!(sql, "SELECT *\nFROM t\nWHERE\n  a = ?\n  AND b = ?");
    assert_eq!(args.seen, args![1]);
}

#[test]
fn io_writer_matches_string_output() {
    let q = users_query();
    let expected = build(&q, Level::FORMAT).unwrap();

    let mut sink = IoSqlWriter::new(Vec::<u8>::new());
    let mut args = Vec::new();
    q.render(&mut sink, &mut args, Level::FORMAT).unwrap();
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), expected.sql);
    assert_eq!(args, expected.args);
}

#[test]
fn shared_tree_renders_identically_across_threads() {
    let q = Arc::new(users_query());
    let expected = build(&*q, Level::FORMAT).unwrap();

    let results: Vec<BuiltSql> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| build(&*q, Level::FORMAT).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for built in results {
        assert_eq!(built, expected);
    }
}

#[test]
fn config_loaded_from_json_drives_build() {
    let config: BuildConfig =
        serde_json::from_str(r#"{"level":"compact","initial_capacity":64}"#).unwrap();
    let q = Dql::new().from("t");
    let built = build_with(&q, &config).unwrap();
    assert_eq!(built.sql, "SELECT * FROM t ");
}

#[test]
fn leveled_and_custom_clauses_compose() {
    let q = Dql::new()
        .from("t")
        .additional(custom_line("FOR UPDATE", args![]))
        .additional(leveled(simple_clause(Newline::Auto, "NOWAIT", args![]), Level::Format(1)));
    assert_eq!(
        build(&q, Level::FORMAT).unwrap().sql,
        "SELECT *\nFROM t\nFOR UPDATE\n  NOWAIT\n"
    );
}

#[test]
fn select_clause_alone() {
    let s = Select::new(["a"]).args(args![]);
    assert_eq!(build(&s, Level::Format(1)).unwrap().sql, "  SELECT\n    a\n");
}

#[test]
fn json_argument_is_kept_as_value() {
    let payload = serde_json::json!({"tags": ["a", "b"]});
    let q = Dql::new()
        .from("docs")
        .and_where(condition("meta @> ?", vec![Arg::json(&payload).unwrap()]));
    let built = build(&q, Level::COMPACT).unwrap();
    assert_eq!(built.args, vec![Arg::Json(payload)]);
}
