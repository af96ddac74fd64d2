use crate::clause::Clause;
use crate::condition::{BoxCondition, Condition};
use crate::error::FragResult;
use crate::level::{Level, end_line, write_str_indented};
use crate::writer::{ArgWriter, SqlWriter};

/// A keyword followed by conditions joined with `AND`, one per line.
///
/// Used for both WHERE and HAVING. Absent conditions are dropped when pushed,
/// and a list with no conditions is not rendered at all.
pub struct Predicates {
    keyword: &'static str,
    conditions: Vec<BoxCondition>,
}

impl Predicates {
    pub fn new(keyword: &'static str) -> Self {
        Self {
            keyword,
            conditions: Vec::new(),
        }
    }

    pub fn where_clause() -> Self {
        Self::new("WHERE")
    }

    pub fn having() -> Self {
        Self::new("HAVING")
    }

    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn push(&mut self, condition: impl Condition + 'static) -> &mut Self {
        if condition.is_present() {
            self.conditions.push(condition.boxed());
        }
        self
    }

    pub fn push_opt(&mut self, condition: Option<BoxCondition>) -> &mut Self {
        if let Some(condition) = condition.filter(|c| c.is_present()) {
            self.conditions.push(condition);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Clause for Predicates {
    fn render(
        &self,
        sql: &mut dyn SqlWriter,
        args: &mut dyn ArgWriter,
        level: Level,
    ) -> FragResult<()> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        let compact = level.is_compact();
        write_str_indented(sql, self.keyword, level)?;
        end_line(sql, compact)?;
        for (i, condition) in self.conditions.iter().enumerate() {
            let prefix = if i == 0 { "" } else { "AND " };
            write_str_indented(sql, prefix, level.next())?;
            condition.render(sql, args)?;
            end_line(sql, compact)?;
        }
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.conditions.is_empty()
    }
}
