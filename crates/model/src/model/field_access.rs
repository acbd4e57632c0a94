//! Primary key access on the wrapped record
//!
//! Lookups are soft: a record without an `ID` field yields `None` from
//! `id()` and makes `set_id()` a no-op. `primary_key_type()` is the one
//! strict query, since query generation cannot continue without a key type.

use super::primary_key::PrimaryKey;
use super::record::{FieldDef, FieldKind, FieldValue};
use super::wrapper::{Model, Value};
use crate::error::{ModelError, ModelResult};

impl Model<'_> {
    /// Primary key value, `None` when the record has no `ID` field or the
    /// key is unset
    pub fn id(&self) -> Option<PrimaryKey> {
        let field = self.context.config().id_field.as_str();
        let Value::Record(entity) = &self.value else {
            return None;
        };
        let kind = entity.field_def(field)?.kind();
        let value = entity.read_field(field)?;
        PrimaryKey::from_field(kind, value)
    }

    /// Storage column of the primary key
    pub fn id_field(&self) -> String {
        let config = self.context.config();
        self.field_def(&config.id_field)
            .and_then(|def| def.column())
            .map(str::to_string)
            .unwrap_or_else(|| config.default_id_column.clone())
    }

    /// Declared type name of the `ID` field
    pub fn primary_key_type(&self) -> ModelResult<String> {
        self.primary_key_kind().map(|kind| kind.type_name().to_string())
    }

    pub fn primary_key_kind(&self) -> ModelResult<FieldKind> {
        let field = &self.context.config().id_field;
        self.field_def(field)
            .map(|def| def.kind())
            .ok_or_else(|| ModelError::missing_field(self.model_name(), field.as_str()))
    }

    /// Assign the primary key, logging and skipping values that do not fit
    pub fn set_id(&mut self, value: impl Into<FieldValue>) {
        if let Err(err) = self.try_set_id(value) {
            tracing::warn!("Skipping primary key assignment: {}", err);
        }
    }

    /// Assign the primary key. Integer fields take the value narrowed to
    /// their width. No-op when the record has no `ID` field.
    pub fn try_set_id(&mut self, value: impl Into<FieldValue>) -> ModelResult<()> {
        let field = self.context.config().id_field.as_str();
        let Value::Record(entity) = &mut self.value else {
            return Ok(());
        };
        let Some(def) = entity.field_def(field).copied() else {
            return Ok(());
        };

        let value = value.into();
        match entity.write_field(field, value.clone()) {
            Some(false) => Err(ModelError::InvalidFieldValue {
                field: field.to_string(),
                kind: def.kind(),
                value,
            }),
            _ => Ok(()),
        }
    }

    /// Field definition on the record type, or on the element type of a
    /// collection
    pub(crate) fn field_def(&self, name: &str) -> Option<FieldDef> {
        match &self.value {
            Value::Record(entity) => entity.field_def(name).copied(),
            Value::Records(records) => records.element_field(name).copied(),
            Value::Table(_) => None,
        }
    }

    fn model_name(&self) -> String {
        match &self.value {
            Value::Record(entity) => entity.type_key().to_string(),
            Value::Records(records) => format!("[{}]", records.element_key()),
            Value::Table(name) => name.clone(),
        }
    }
}
