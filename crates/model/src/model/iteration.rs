//! One-or-many iteration
//!
//! Lets bulk operations run the same per-record step whether the wrapper
//! holds one record or a collection.

use super::wrapper::{Model, Value};

impl Model<'_> {
    /// Whether the wrapped value is a collection of records
    pub fn is_many(&self) -> bool {
        matches!(self.value, Value::Records(_))
    }

    /// Run `f` once per record, in collection order, stopping at the first
    /// error. Each element gets a fresh wrapper sharing this wrapper's
    /// context but not its alias or resolved table name. A non-collection
    /// wrapper is passed to `f` as-is.
    pub fn iterate<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&mut Model<'_>) -> Result<(), E>,
    {
        if !self.is_many() {
            return f(self);
        }

        let context = self.context.clone();
        let Value::Records(records) = &mut self.value else {
            return Ok(());
        };

        for index in 0..records.len() {
            let Some(entity) = records.entity_mut(index) else {
                break;
            };
            tracing::trace!("Iterating {} element {}", entity.type_key(), index);
            let mut element = Model::from_value(Value::Record(entity)).with_context(context.clone());
            f(&mut element)?;
        }
        Ok(())
    }
}
