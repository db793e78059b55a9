//! Table reference graphs.
//!
//! The assembler only needs two things from a table graph: the text that goes
//! after `FROM`/`INTO`/`UPDATE`, and the flat list of tables it references so
//! that per-table columns (the soft-delete column) can be qualified. Those are
//! the [`TableSource`] and [`TableHandle`] traits. [`TableRef`] is the bundled
//! implementation: a base table with an optional alias and a list of joins.
//!
//! # Example
//!
//! ```
//! use entsql::{TableRef, TableSource};
//!
//! let users = TableRef::new("users")
//!     .alias("u")
//!     .left_join(TableRef::new("orders").alias("o"), "u.id = o.user_id");
//!
//! assert_eq!(users.render_sql(), "users u LEFT JOIN orders o ON u.id = o.user_id");
//! assert_eq!(users.flatten().len(), 2);
//! ```

use crate::token::{DOT, SPACE};
use std::fmt;

/// One table in a flattened table graph.
pub trait TableHandle {
    /// Qualify `column` with this table's reference name, e.g. `u.deleted`.
    fn qualified_column(&self, column: &str) -> String;
}

/// A FROM/INTO target.
pub trait TableSource: fmt::Debug + Send + Sync {
    /// The text rendered after `FROM`, `INTO` or `UPDATE`.
    fn render_sql(&self) -> String;

    /// Every table in the graph, base table first, in render order.
    fn flatten(&self) -> Vec<&dyn TableHandle>;
}

/// Join flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub const fn literal(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        }
    }
}

/// A joined table and its ON condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    /// Raw ON condition; omitted when empty.
    pub on: String,
}

/// A table with an optional alias and joined tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    name: String,
    alias: Option<String>,
    joins: Vec<Join>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            joins: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn join(mut self, kind: JoinKind, table: TableRef, on: impl Into<String>) -> Self {
        self.joins.push(Join {
            kind,
            table,
            on: on.into(),
        });
        self
    }

    /// Add INNER JOIN.
    pub fn inner_join(self, table: TableRef, on: impl Into<String>) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    /// Add LEFT JOIN.
    pub fn left_join(self, table: TableRef, on: impl Into<String>) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(self, table: TableRef, on: impl Into<String>) -> Self {
        self.join(JoinKind::Right, table, on)
    }

    /// Add FULL OUTER JOIN.
    pub fn full_join(self, table: TableRef, on: impl Into<String>) -> Self {
        self.join(JoinKind::Full, table, on)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// The name columns are qualified with: the alias if set, else the table name.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    fn write_head(&self, out: &mut String) {
        out.push_str(&self.name);
        if let Some(alias) = &self.alias {
            out.push_str(SPACE);
            out.push_str(alias);
        }
    }

    fn write_joins(&self, out: &mut String) {
        for join in &self.joins {
            out.push_str(SPACE);
            out.push_str(join.kind.literal());
            out.push_str(SPACE);
            join.table.write_head(out);
            if !join.on.trim().is_empty() {
                out.push_str(" ON ");
                out.push_str(join.on.trim());
            }
            join.table.write_joins(out);
        }
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a dyn TableHandle>) {
        out.push(self);
        for join in &self.joins {
            join.table.collect(out);
        }
    }
}

impl TableHandle for TableRef {
    fn qualified_column(&self, column: &str) -> String {
        format!("{}{DOT}{column}", self.reference())
    }
}

impl TableSource for TableRef {
    fn render_sql(&self) -> String {
        let mut out = String::new();
        self.write_head(&mut out);
        self.write_joins(&mut out);
        out
    }

    fn flatten(&self) -> Vec<&dyn TableHandle> {
        let mut out = Vec::with_capacity(1 + self.joins.len());
        self.collect(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_table() {
        let t = TableRef::new("users");
        assert_eq!(t.render_sql(), "users");
        assert_eq!(t.qualified_column("deleted"), "users.deleted");
    }

    #[test]
    fn test_alias_is_used_for_qualification() {
        let t = TableRef::new("users").alias("u");
        assert_eq!(t.render_sql(), "users u");
        assert_eq!(t.qualified_column("id"), "u.id");
    }

    #[test]
    fn test_nested_joins_flatten_in_render_order() {
        let t = TableRef::new("t1")
            .inner_join(
                TableRef::new("t2").left_join(TableRef::new("t3"), "t2.id = t3.t2_id"),
                "t1.id = t2.t1_id",
            )
            .right_join(TableRef::new("t4"), "");
        assert_eq!(
            t.render_sql(),
            "t1 INNER JOIN t2 ON t1.id = t2.t1_id LEFT JOIN t3 ON t2.id = t3.t2_id RIGHT JOIN t4"
        );
        let cols: Vec<String> = t
            .flatten()
            .into_iter()
            .map(|h| h.qualified_column("deleted"))
            .collect();
        assert_eq!(cols, ["t1.deleted", "t2.deleted", "t3.deleted", "t4.deleted"]);
    }
}
