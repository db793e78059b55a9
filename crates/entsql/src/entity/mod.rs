//! Per-entity statement assembler.
//!
//! [`EntityBuilder<T>`] holds everything needed to render statements for
//! entity `T`: its fields, the table graph, WHERE/HAVING predicates, hints,
//! ordering, grouping, pagination and soft-delete settings. Setters mutate the
//! configuration; clause generators and terminal renders only read it, and
//! every terminal render starts from a fresh [`StatementBuf`], so the same
//! builder can be rendered any number of times.
//!
//! # Example
//!
//! ```
//! use entsql::{EntityBuilder, Field, Order, Predicate, TableRef};
//!
//! struct User { id: i64, name: String }
//!
//! let mut users = EntityBuilder::<User>::with_soft_delete();
//! users
//!     .table(TableRef::new("users"))
//!     .field(Field::new("id", |u: &User| u.id))
//!     .field(Field::new("name", |u: &User| u.name.clone()))
//!     .filter(Predicate::like("name", "a%"))
//!     .order_by(Order::asc("id"))
//!     .limit(10);
//!
//! let stmt = users.select();
//! assert_eq!(
//!     stmt.sql(),
//!     "SELECT id, name FROM users WHERE name LIKE ? AND users.deleted = 0 ORDER BY id ASC LIMIT 10"
//! );
//! ```
//!
//! [`StatementBuf`]: crate::StatementBuf

mod clauses;
mod render;


pub use render::{PagedSelect, StatementKind};

use crate::config::{EntityConfig, SoftDelete};
use crate::error::{BuildError, BuildResult};
use crate::field::Field;
use crate::order::{Group, Order};
use crate::predicate::Predicate;
use crate::table::TableSource;
use crate::token::Keyword;
use std::fmt;
use std::sync::Arc;

/// Statement assembler for entity `T`.
pub struct EntityBuilder<T> {
    fields: Vec<Field<T>>,
    table: Option<Arc<dyn TableSource>>,
    filter: Option<Predicate>,
    having: Option<Predicate>,
    hints: Vec<Keyword>,
    orders: Vec<Order>,
    groups: Vec<Group>,
    limit: u64,
    offset: u64,
    soft_delete: SoftDelete,
    /// Per-query replacement for the undeleted sentinel.
    deleted_override: Option<String>,
}

impl<T> EntityBuilder<T> {
    /// A builder without soft delete.
    pub fn new() -> Self {
        Self::with_config(EntityConfig::default())
    }

    /// A builder filtering on `deleted = 0` for every table.
    pub fn with_soft_delete() -> Self {
        Self::with_config(EntityConfig::new().with_soft_delete(SoftDelete::enabled()))
    }

    pub fn with_config(config: EntityConfig) -> Self {
        Self {
            fields: Vec::new(),
            table: None,
            filter: None,
            having: None,
            hints: Vec::new(),
            orders: Vec::new(),
            groups: Vec::new(),
            limit: 0,
            offset: 0,
            soft_delete: config.soft_delete,
            deleted_override: None,
        }
    }

    // ==================== Fields & table ====================

    /// Append one field.
    pub fn field(&mut self, field: Field<T>) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append several fields.
    pub fn fields(&mut self, fields: impl IntoIterator<Item = Field<T>>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    /// Set the table graph used for FROM/INTO and the soft-delete filter.
    pub fn table(&mut self, table: impl TableSource + 'static) -> &mut Self {
        self.table = Some(Arc::new(table));
        self
    }

    /// Set an already shared table graph.
    pub fn shared_table(&mut self, table: Arc<dyn TableSource>) -> &mut Self {
        self.table = Some(table);
        self
    }

    // ==================== WHERE / HAVING ====================

    /// Replace the WHERE predicate.
    pub fn filter(&mut self, predicate: Predicate) -> &mut Self {
        self.filter = Some(predicate);
        self
    }

    /// AND `predicate` onto the WHERE predicate.
    pub fn and_filter(&mut self, predicate: Predicate) -> &mut Self {
        self.filter = Some(match self.filter.take() {
            Some(current) => current.and(predicate),
            None => predicate,
        });
        self
    }

    /// OR `predicate` onto the WHERE predicate.
    pub fn or_filter(&mut self, predicate: Predicate) -> &mut Self {
        self.filter = Some(match self.filter.take() {
            Some(current) => current.or(predicate),
            None => predicate,
        });
        self
    }

    /// Drop the WHERE predicate.
    pub fn clear_filter(&mut self) -> &mut Self {
        self.filter = None;
        self
    }

    /// Replace the HAVING predicate.
    pub fn having(&mut self, predicate: Predicate) -> &mut Self {
        self.having = Some(predicate);
        self
    }

    /// AND `predicate` onto the HAVING predicate.
    pub fn and_having(&mut self, predicate: Predicate) -> &mut Self {
        self.having = Some(match self.having.take() {
            Some(current) => current.and(predicate),
            None => predicate,
        });
        self
    }

    // ==================== Hints, ordering, grouping ====================

    /// Add a statement modifier written right after the verb, e.g. `DISTINCT`.
    pub fn hint(&mut self, hint: Keyword) -> &mut Self {
        self.hints.push(hint);
        self
    }

    pub fn order_by(&mut self, order: Order) -> &mut Self {
        self.orders.push(order);
        self
    }

    pub fn group_by(&mut self, group: Group) -> &mut Self {
        self.groups.push(group);
        self
    }

    // ==================== Pagination ====================

    /// Set LIMIT; 0 disables pagination entirely.
    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Set OFFSET; ignored while the limit is 0.
    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = offset;
        self
    }

    /// Set LIMIT/OFFSET from a 1-based page number. Page 0 is treated as page 1.
    pub fn paginate(&mut self, page: u64, per_page: u64) -> &mut Self {
        self.limit = per_page;
        self.offset = page.saturating_sub(1).saturating_mul(per_page);
        self
    }

    // ==================== Soft delete ====================

    pub fn soft_delete(&mut self, soft_delete: SoftDelete) -> &mut Self {
        self.soft_delete = soft_delete;
        self
    }

    /// Override the value the soft-delete filter compares against.
    /// [`only_live`](Self::only_live) restores the undeleted sentinel.
    pub fn deleted_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.deleted_override = Some(value.into());
        self
    }

    /// Filter on the deleted sentinel instead: only soft-deleted rows.
    pub fn only_deleted(&mut self) -> &mut Self {
        self.deleted_override = Some(self.soft_delete.deleted.clone());
        self
    }

    /// Clear any override: only live rows.
    pub fn only_live(&mut self) -> &mut Self {
        self.deleted_override = None;
        self
    }

    // ==================== Accessors ====================

    pub fn field_list(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn table_source(&self) -> Option<&dyn TableSource> {
        self.table.as_deref()
    }

    pub fn where_predicate(&self) -> Option<&Predicate> {
        self.filter.as_ref()
    }

    pub fn having_predicate(&self) -> Option<&Predicate> {
        self.having.as_ref()
    }

    pub fn soft_delete_config(&self) -> &SoftDelete {
        &self.soft_delete
    }

    pub fn limit_value(&self) -> u64 {
        self.limit
    }

    pub fn offset_value(&self) -> u64 {
        self.offset
    }

    /// Opt-in check of the collaborators a statement needs.
    ///
    /// Rendering never calls this; a builder without a table still renders,
    /// just without FROM/INTO text.
    pub fn validate(&self) -> BuildResult<()> {
        if self.table.is_none() {
            return Err(BuildError::missing_table("no table source configured"));
        }
        if self.limit == 0 && self.offset > 0 {
            return Err(BuildError::validation(format!(
                "offset {} has no effect without a limit",
                self.offset
            )));
        }
        self.soft_delete.validate()
    }
}

impl<T> Default for EntityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EntityBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            table: self.table.clone(),
            filter: self.filter.clone(),
            having: self.having.clone(),
            hints: self.hints.clone(),
            orders: self.orders.clone(),
            groups: self.groups.clone(),
            limit: self.limit,
            offset: self.offset,
            soft_delete: self.soft_delete.clone(),
            deleted_override: self.deleted_override.clone(),
        }
    }
}

impl<T> fmt::Debug for EntityBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityBuilder")
            .field("fields", &self.fields)
            .field("table", &self.table)
            .field("filter", &self.filter)
            .field("having", &self.having)
            .field("hints", &self.hints)
            .field("orders", &self.orders)
            .field("groups", &self.groups)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("soft_delete", &self.soft_delete)
            .field("deleted_override", &self.deleted_override)
            .finish()
    }
}
