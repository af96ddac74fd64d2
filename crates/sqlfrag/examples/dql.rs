//! SELECT composition example for sqlfrag
//!
//! Run with: cargo run --example dql -p sqlfrag

use sqlfrag::prelude::*;

fn main() -> Result<(), FragError> {
    let min_x: Option<i64> = Some(2);
    let name_filter: Option<&str> = None;

    let recent = Dql::new()
        .select(["id", "x", "y"])
        .from("demo.events")
        .and_where(condition("created_at > now() - interval '1 day'", args![]));

    let q = Dql::new()
        .with_table("recent", recent)
        .select(["max(x) AS max_x", "max(y) AS max_y"])
        .from("recent")
        // Optional filters: a `None` drops out of the WHERE list entirely.
        .and_where_opt(min_x.map(|x| condition("x >= ?", args![x]).boxed()))
        .and_where_opt(name_filter.map(|n| condition("name LIKE ?", args![n]).boxed()))
        .and_where_opt(or(
            Some(condition("y != ?", args!["a"]).boxed()),
            Some(condition("y IS NULL", args![]).boxed()),
            Brackets::Save,
        ))
        .group_by("x", args![])
        .order_by("y", args![])
        .limit("?", args![1]);

    let built = build(&q, Level::FORMAT)?;
    println!("-- formatted\n{}", built.sql());
    println!("-- args: {:?}\n", built.args());

    let (sql, args) = build_with(&q, &BuildConfig::compact())?.into_parts();
    println!("-- compact\n{sql}");
    println!("-- args: {args:?}");

    Ok(())
}
