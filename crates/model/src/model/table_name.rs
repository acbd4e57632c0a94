//! Table name resolution
//!
//! Resolution order: a raw table-name value, then the record's own custom
//! name, then the wrapper's local memo, then the shared cache (filled by
//! pluralizing the type name on first use).

use super::record::TypeKey;
use super::wrapper::{Model, Value};
use crate::naming;

impl<'a> Model<'a> {
    /// Storage table name of the wrapped value
    pub fn table_name(&self) -> String {
        match &self.value {
            Value::Table(name) => return name.clone(),
            Value::Record(entity) => {
                if let Some(name) = entity.declared_table_name() {
                    return name;
                }
            }
            Value::Records(_) => {}
        }

        if let Some(name) = self.table_name.get() {
            return name.clone();
        }

        let Some(key) = self.resolve_type() else {
            return String::new();
        };
        let name = self
            .context
            .cache()
            .resolve_with(key.cache_key(), || naming::tableize(key.name()));
        let _ = self.table_name.set(name.clone());
        name
    }

    /// Type identity of the wrapped record, or of the element type for a
    /// collection. Seeds the cache with the element type's custom table
    /// name, if it declares one.
    pub(crate) fn resolve_type(&self) -> Option<TypeKey> {
        match &self.value {
            Value::Record(entity) => Some(entity.type_key().clone()),
            Value::Records(records) => {
                let key = records.element_key().clone();
                if let Some(name) = records.element_declared_table_name() {
                    if self.context.cache().seed(key.cache_key(), name) {
                        tracing::debug!("Seeded custom table name for {}", key);
                    }
                }
                Some(key)
            }
            Value::Table(_) => None,
        }
    }

    /// Foreign key column other tables use to point at this one
    pub fn association_name(&self) -> String {
        format!("{}_id", naming::singularize(&self.table_name()))
    }

    /// Positional primary key predicate, `users.id = ?`
    pub fn where_id(&self) -> String {
        format!("{}.{} = ?", self.table_name(), self.id_field())
    }

    /// Named primary key predicate, `users.id = :id`
    pub fn where_named_id(&self) -> String {
        format!("{}.{} = :id", self.table_name(), self.id_field())
    }
}
