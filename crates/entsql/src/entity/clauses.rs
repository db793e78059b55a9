//! Clause generators. All read-only; each returns one fragment, plus bound
//! values where the fragment has placeholders.

use super::EntityBuilder;
use crate::field::Extractor;
use crate::order::join_fragments;
use crate::predicate::{Mode, Predicate, Symbol};
use crate::token::{COMMA, Keyword, LEFT_PAREN, PLACEHOLDER, PRETTY_EQUAL, RIGHT_PAREN, SPACE};
use crate::value::Value;

impl<T> EntityBuilder<T> {
    /// Select list: each field's literal joined with `", "`, plus the
    /// extractors in the same order so row values line up with columns.
    pub fn fields_sql(&self) -> (String, Vec<Extractor<T>>) {
        let sql = self
            .fields
            .iter()
            .map(|f| f.literal())
            .collect::<Vec<_>>()
            .join(COMMA);
        let extractors = self.fields.iter().map(|f| f.extractor()).collect();
        (sql, extractors)
    }

    /// Bare column names for INSERT column lists.
    pub fn column_names_sql(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(COMMA)
    }

    /// Extract every field of `entity`, in field order.
    pub fn row_values(&self, entity: &T) -> Vec<Value> {
        self.fields.iter().map(|f| f.extract(entity)).collect()
    }

    pub fn from_sql(&self) -> String {
        self.table.as_ref().map(|t| t.render_sql()).unwrap_or_default()
    }

    pub fn into_sql(&self) -> String {
        self.from_sql()
    }

    pub fn where_sql(&self) -> (String, Vec<Value>) {
        Predicate::to_sql_opt(self.filter.as_ref())
    }

    pub fn having_sql(&self) -> (String, Vec<Value>) {
        Predicate::to_sql_opt(self.having.as_ref())
    }

    pub fn group_by_sql(&self) -> String {
        join_fragments(&self.groups)
    }

    pub fn order_by_sql(&self) -> String {
        join_fragments(&self.orders)
    }

    /// `LIMIT n [OFFSET m]`, or empty while the limit is 0.
    pub fn page_sql(&self) -> String {
        match (self.limit, self.offset) {
            (0, _) => String::new(),
            (limit, 0) => format!("{} {limit}", Keyword::Limit.literal()),
            (limit, offset) => format!(
                "{} {limit} {} {offset}",
                Keyword::Limit.literal(),
                Keyword::Offset.literal()
            ),
        }
    }

    /// The value the soft-delete filter compares against right now.
    pub fn current_deleted_value(&self) -> &str {
        self.deleted_override
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.soft_delete.undeleted)
    }

    /// `t1.deleted = 0 AND t2.deleted = 0` over every table in the graph, or
    /// empty when soft delete is off.
    pub fn soft_delete_sql(&self) -> String {
        if !self.soft_delete.enabled {
            return String::new();
        }
        let Some(table) = &self.table else {
            return String::new();
        };
        let value = self.current_deleted_value();
        let separator = format!("{SPACE}{}{SPACE}", Keyword::And.literal());
        table
            .flatten()
            .into_iter()
            .map(|t| {
                let mut snip = t.qualified_column(&self.soft_delete.column);
                snip.push_str(PRETTY_EQUAL);
                snip.push_str(value);
                snip
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// WHERE body: the filter predicate and the soft-delete filter joined by
    /// AND. An OR-rooted filter is parenthesized so the soft-delete terms
    /// apply to all of it.
    pub fn condition_sql(&self) -> (String, Vec<Value>) {
        let (filter, values) = self.where_sql();
        let deleted = self.soft_delete_sql();
        let sql = match (filter.is_empty(), deleted.is_empty()) {
            (_, true) => filter,
            (true, false) => deleted,
            (false, false) => {
                let and = Keyword::And.literal();
                let or_rooted = self.filter.as_ref().is_some_and(|p| p.mode() == Mode::Or);
                if or_rooted {
                    format!("{LEFT_PAREN}{filter}{RIGHT_PAREN} {and} {deleted}")
                } else {
                    format!("{filter} {and} {deleted}")
                }
            }
        };
        (sql, values)
    }

    /// Hint keywords joined by a single space.
    pub fn hint_sql(&self) -> String {
        self.hints
            .iter()
            .map(|h| h.literal())
            .collect::<Vec<_>>()
            .join(SPACE)
    }

    /// One `?` per field: `?, ?, ?`.
    pub fn insert_placeholders(&self) -> String {
        vec![PLACEHOLDER; self.fields.len()].join(COMMA)
    }

    /// `(group), (group), ...` repeated `times` times, for multi-row inserts.
    pub fn repeat_placeholders(times: usize, group: &str) -> String {
        vec![format!("{LEFT_PAREN}{group}{RIGHT_PAREN}"); times].join(COMMA)
    }

    /// `a = ?, b = ?` over the bare field names.
    pub fn set_sql(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{} {}", f.name(), Symbol::Eq.with_placeholder()))
            .collect::<Vec<_>>()
            .join(COMMA)
    }
}
