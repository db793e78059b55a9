//! Field descriptors: a column token paired with an entity-to-value extractor.

use crate::table::TableHandle;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Shared entity-to-value function.
pub type Extractor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// A column of entity `T`.
///
/// `name` is the bare column (used in INSERT column lists and SET clauses);
/// `literal` is what the select list renders, which becomes table-qualified
/// after [`Field::qualified`].
///
/// # Example
///
/// ```
/// use entsql::{Field, TableRef};
///
/// struct User { id: i64 }
///
/// let id = Field::new("id", |u: &User| u.id);
/// assert_eq!(id.literal(), "id");
/// assert_eq!(id.qualified(&TableRef::new("users").alias("u")).literal(), "u.id");
/// ```
pub struct Field<T> {
    name: String,
    literal: String,
    extract: Extractor<T>,
}

impl<T> Field<T> {
    pub fn new<F, V>(name: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        let name = name.into();
        Self {
            literal: name.clone(),
            name,
            extract: Arc::new(move |entity: &T| extract(entity).into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token rendered in the select list.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Read this field's value from `entity`.
    pub fn extract(&self, entity: &T) -> Value {
        (self.extract)(entity)
    }

    pub fn extractor(&self) -> Extractor<T> {
        Arc::clone(&self.extract)
    }

    /// A copy of this field whose literal is qualified by `table`.
    pub fn qualified(&self, table: &dyn TableHandle) -> Self {
        Self {
            name: self.name.clone(),
            literal: table.qualified_column(&self.name),
            extract: Arc::clone(&self.extract),
        }
    }
}

/// Build a closure that qualifies fields with `table`, for mapping over a
/// field list.
pub fn qualify_with<T>(table: &dyn TableHandle) -> impl Fn(&Field<T>) -> Field<T> {
    move |field: &Field<T>| field.qualified(table)
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            literal: self.literal.clone(),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("literal", &self.literal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableRef;

    struct Item {
        sku: String,
        qty: Option<i32>,
    }

    #[test]
    fn test_extract_converts_into_value() {
        let sku = Field::new("sku", |i: &Item| i.sku.clone());
        let qty = Field::new("qty", |i: &Item| i.qty);
        let item = Item {
            sku: "A-1".to_string(),
            qty: None,
        };
        assert_eq!(sku.extract(&item), Value::from("A-1"));
        assert_eq!(qty.extract(&item), Value::Null);
    }

    #[test]
    fn test_qualify_keeps_name_and_extractor() {
        let table = TableRef::new("items").alias("i");
        let fields = vec![Field::new("sku", |i: &Item| i.sku.clone())];
        let qualified: Vec<Field<Item>> = fields.iter().map(qualify_with(&table)).collect();
        assert_eq!(qualified[0].name(), "sku");
        assert_eq!(qualified[0].literal(), "i.sku");

        let item = Item {
            sku: "B-2".to_string(),
            qty: Some(3),
        };
        assert_eq!(qualified[0].extract(&item), Value::from("B-2"));
    }
}
