//! Terminal renders. Each call assembles a fresh [`StatementBuf`].

use super::EntityBuilder;
use crate::statement::{Statement, StatementBuf};
use crate::token::{COUNT_ALL, Keyword, LEFT_PAREN, PRETTY_EQUAL, RIGHT_PAREN, STAR};

/// Kind of statement produced by a terminal render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Count,
    Insert,
    Update,
    Delete,
    MarkDeleted,
}

/// A page query and the matching total-count query.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedSelect {
    pub select: Statement,
    pub count: Statement,
}

impl PagedSelect {
    pub fn into_parts(self) -> (Statement, Statement) {
        (self.select, self.count)
    }
}

/// Alias given to the subquery when a count has to wrap the select.
const COUNT_SUBQUERY_ALIAS: &str = "counted";

impl<T> EntityBuilder<T> {
    /// `SELECT [hints] fields FROM .. WHERE .. GROUP BY .. HAVING .. ORDER BY .. LIMIT ..`
    ///
    /// Selects `*` when no fields are configured.
    pub fn select(&self) -> Statement {
        let mut scratch = String::new();
        let select = self.assemble_select(&mut scratch).finish();
        emit(StatementKind::Select, &select);
        select
    }

    /// The select together with a count over the same FROM and WHERE.
    ///
    /// Grouped, HAVING-filtered and DISTINCT selects are counted as a
    /// subquery, since `COUNT(*)` over them would count pre-aggregation rows.
    pub fn select_with_count(&self) -> PagedSelect {
        let paged = self.assemble_paged();
        emit(StatementKind::Select, &paged.select);
        emit(StatementKind::Count, &paged.count);
        paged
    }

    /// The count half of [`select_with_count`](Self::select_with_count).
    pub fn count(&self) -> Statement {
        let count = self.assemble_paged().count;
        emit(StatementKind::Count, &count);
        count
    }

    fn assemble_paged(&self) -> PagedSelect {
        let mut mirrored = String::new();
        let buf = self.assemble_select(&mut mirrored);

        let mut count_values = self.where_sql().1;
        let sql = if self.count_needs_subquery() {
            count_values.extend(self.having_sql().1);
            format!(
                "{} {COUNT_ALL} {} {LEFT_PAREN}{}{RIGHT_PAREN} {} {COUNT_SUBQUERY_ALIAS}",
                Keyword::Select.literal(),
                Keyword::From.literal(),
                mirrored.trim(),
                Keyword::As.literal(),
            )
        } else {
            format!("{} {COUNT_ALL}{mirrored}", Keyword::Select.literal())
        };

        PagedSelect {
            select: buf.finish(),
            count: Statement::new(sql, count_values),
        }
    }

    /// `INSERT [hints] INTO t (cols) VALUES (?, ..), (?, ..)`, one group per row.
    ///
    /// No rows renders an empty statement.
    pub fn insert(&self, rows: &[T]) -> Statement {
        if rows.is_empty() {
            return Statement::default();
        }
        let hints = self.hint_sql();
        let columns = self.column_names_sql();
        let target = if columns.is_empty() {
            self.into_sql()
        } else {
            format!("{} {LEFT_PAREN}{columns}{RIGHT_PAREN}", self.into_sql())
        };
        let groups = if self.fields.is_empty() {
            String::new()
        } else {
            Self::repeat_placeholders(rows.len(), &self.insert_placeholders())
        };

        let mut buf = StatementBuf::new();
        buf.write(
            &target,
            &[Keyword::Insert.literal(), &hints, Keyword::Into.literal()],
        )
        .write(&groups, &[Keyword::Values.literal()])
        .with_values(rows.iter().flat_map(|row| self.row_values(row)));

        let stmt = buf.finish();
        emit(StatementKind::Insert, &stmt);
        stmt
    }

    /// `UPDATE [hints] t SET a = ?, .. WHERE ..` with `entity`'s values.
    pub fn update(&self, entity: &T) -> Statement {
        let hints = self.hint_sql();
        let (condition, condition_values) = self.condition_sql();

        let mut buf = StatementBuf::new();
        buf.write(&self.into_sql(), &[Keyword::Update.literal(), &hints])
            .write(&self.set_sql(), &[Keyword::Set.literal()])
            .with_values(self.row_values(entity))
            .write(&condition, &[Keyword::Where.literal()])
            .with_values(condition_values);

        let stmt = buf.finish();
        emit(StatementKind::Update, &stmt);
        stmt
    }

    /// `DELETE [hints] FROM t WHERE ..`
    pub fn delete(&self) -> Statement {
        let hints = self.hint_sql();
        let (condition, condition_values) = self.condition_sql();

        let mut buf = StatementBuf::new();
        buf.write(
            &self.from_sql(),
            &[Keyword::Delete.literal(), &hints, Keyword::From.literal()],
        )
        .write(&condition, &[Keyword::Where.literal()])
        .with_values(condition_values);

        let stmt = buf.finish();
        emit(StatementKind::Delete, &stmt);
        stmt
    }

    /// `UPDATE t SET <column> = <deleted> WHERE ..`, the soft-delete
    /// counterpart of [`delete`](Self::delete).
    ///
    /// Renders an empty statement while soft delete is disabled.
    pub fn mark_deleted(&self) -> Statement {
        if !self.soft_delete.enabled {
            return Statement::default();
        }
        let (condition, condition_values) = self.condition_sql();
        let assignment = format!(
            "{}{PRETTY_EQUAL}{}",
            self.soft_delete.column, self.soft_delete.deleted
        );

        let mut buf = StatementBuf::new();
        buf.write(&self.into_sql(), &[Keyword::Update.literal()])
            .write(&assignment, &[Keyword::Set.literal()])
            .write(&condition, &[Keyword::Where.literal()])
            .with_values(condition_values);

        let stmt = buf.finish();
        emit(StatementKind::MarkDeleted, &stmt);
        stmt
    }

    fn count_needs_subquery(&self) -> bool {
        !self.groups.is_empty() || self.having.is_some() || self.hints.contains(&Keyword::Distinct)
    }

    /// Write the select into a new buffer, mirroring into `count` what the
    /// count statement shares with it.
    fn assemble_select(&self, count: &mut String) -> StatementBuf {
        let wrapped = self.count_needs_subquery();
        let hints = self.hint_sql();
        let (fields, _) = self.fields_sql();
        let fields = if fields.is_empty() {
            STAR.to_string()
        } else {
            fields
        };
        let (condition, condition_values) = self.condition_sql();
        let (having, having_values) = self.having_sql();

        let mut buf = StatementBuf::new();
        buf.write_mirrored_if(wrapped, count, &fields, &[Keyword::Select.literal(), &hints])
            .write_mirrored(count, &self.from_sql(), &[Keyword::From.literal()])
            .write_mirrored(count, &condition, &[Keyword::Where.literal()])
            .with_values(condition_values)
            .write_mirrored_if(wrapped, count, &self.group_by_sql(), &[Keyword::GroupBy.literal()])
            .write_mirrored_if(wrapped, count, &having, &[Keyword::Having.literal()])
            .with_values(having_values)
            .write(&self.order_by_sql(), &[Keyword::OrderBy.literal()])
            .write(&self.page_sql(), &[]);
        buf
    }
}

#[cfg(feature = "tracing")]
fn emit(kind: StatementKind, stmt: &Statement) {
    tracing::debug!(
        target: "entsql.sql",
        kind = ?kind,
        value_count = stmt.values().len(),
        sql = %stmt.sql(),
        "statement rendered"
    );
}

#[cfg(not(feature = "tracing"))]
fn emit(_kind: StatementKind, _stmt: &Statement) {}
