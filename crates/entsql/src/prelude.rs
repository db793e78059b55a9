//! Convenient imports for typical `entsql` usage.
//!
//! ```
//! use entsql::prelude::*;
//! ```

pub use crate::{
    BuildError, BuildResult, EntityBuilder, EntityConfig, Field, Group, Keyword, Order,
    PagedSelect, Predicate, SoftDelete, Statement, TableRef, Value,
};

pub use crate::{Fragment, TableHandle, TableSource};
