//! Timestamp stamping
//!
//! `CreatedAt` is only filled while it still holds its zero value;
//! `UpdatedAt` is overwritten on every call. Integer fields receive Unix
//! seconds, timestamp fields the time itself. Records without these fields
//! are left alone.

use chrono::{DateTime, Utc};

use super::record::{FieldKind, FieldValue};
use super::wrapper::{Model, Value};

impl Model<'_> {
    pub fn touch_created_at(&mut self) {
        let now = self.context.now();
        let field = self.context.config().created_at_field.as_str();
        let Value::Record(entity) = &mut self.value else {
            return;
        };
        let Some(kind) = entity.field_def(field).map(|def| def.kind()) else {
            return;
        };
        if entity.field_is_zero(field) != Some(true) {
            return;
        }
        if entity.write_field(field, stamp(kind, now)) == Some(false) {
            tracing::warn!("Cannot stamp {} field of type {}", field, kind);
        }
    }

    pub fn touch_updated_at(&mut self) {
        let now = self.context.now();
        let field = self.context.config().updated_at_field.as_str();
        let Value::Record(entity) = &mut self.value else {
            return;
        };
        let Some(kind) = entity.field_def(field).map(|def| def.kind()) else {
            return;
        };
        if entity.write_field(field, stamp(kind, now)) == Some(false) {
            tracing::warn!("Cannot stamp {} field of type {}", field, kind);
        }
    }
}

fn stamp(kind: FieldKind, now: DateTime<Utc>) -> FieldValue {
    if kind.is_integer() {
        FieldValue::Int(now.timestamp())
    } else {
        FieldValue::Timestamp(now)
    }
}
