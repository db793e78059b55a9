//! # entsql
//!
//! A SQL statement assembler for entity-shaped tables.
//!
//! ## Features
//!
//! - **Predicate trees**: AND/OR combinators with precedence-driven parentheses and `?` placeholders
//! - **Ordered values**: bound values always line up with the placeholders that consume them
//! - **Entity builders**: fields, table graph, filters, grouping, ordering and pagination per entity
//! - **Soft delete**: every table in the graph filtered on a configurable deleted column
//! - **Pure rendering**: the same builder renders the same statement any number of times
//! - **Postgres ready**: `$n` numbering and `tokio-postgres` parameters behind the `postgres` feature
//!
//! ## Example
//!
//! ```
//! use entsql::prelude::*;
//!
//! struct Post { id: i64, title: String }
//!
//! let mut posts = EntityBuilder::<Post>::with_soft_delete();
//! posts
//!     .table(TableRef::new("posts"))
//!     .field(Field::new("id", |p: &Post| p.id))
//!     .field(Field::new("title", |p: &Post| p.title.clone()))
//!     .filter(Predicate::eq("author_id", 7).or(Predicate::eq("pinned", true)))
//!     .paginate(2, 20);
//!
//! let PagedSelect { select, count } = posts.select_with_count();
//! assert_eq!(
//!     select.sql(),
//!     "SELECT id, title FROM posts WHERE (author_id = ? OR pinned = ?) AND posts.deleted = 0 LIMIT 20 OFFSET 20"
//! );
//! assert_eq!(
//!     count.sql(),
//!     "SELECT COUNT(*) FROM posts WHERE (author_id = ? OR pinned = ?) AND posts.deleted = 0"
//! );
//! assert_eq!(select.numbered_sql().matches('$').count(), 2);
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod field;
pub mod order;
pub mod predicate;
pub mod statement;
pub mod table;
pub mod token;
pub mod value;

pub mod prelude;

pub use config::{EntityConfig, SoftDelete};
pub use entity::{EntityBuilder, PagedSelect, StatementKind};
pub use error::{BuildError, BuildResult};
pub use field::{Extractor, Field, qualify_with};
pub use order::{Direction, Fragment, Group, Nulls, Order, join_fragments};
pub use predicate::{Mode, Predicate, Symbol};
pub use statement::{Statement, StatementBuf, write_fragment};
pub use table::{Join, JoinKind, TableHandle, TableRef, TableSource};
pub use token::Keyword;
pub use value::Value;
