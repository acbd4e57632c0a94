//! Model System - Introspection of application record types
//!
//! - `record`: `Record` trait and per-type field registration
//! - `entity`: object-safe views over records and record collections
//! - `primary_key`: primary key values reported by the wrapper
//! - `wrapper`: the `Model` wrapper and its `Value`
//! - `table_name`: table name resolution and key predicates
//! - `field_access`: primary key lookup and assignment
//! - `timestamps`: `CreatedAt` / `UpdatedAt` stamping
//! - `iteration`: uniform one-or-many traversal

pub mod record;
pub mod entity;
pub mod primary_key;
pub mod wrapper;
mod table_name;
mod field_access;
mod timestamps;
mod iteration;

// Re-export main types and traits for convenience
pub use record::{Field, FieldDef, FieldKind, FieldType, FieldValue, Record, Schema, TypeKey};
pub use entity::{Entity, EntitySeq};
pub use primary_key::PrimaryKey;
pub use wrapper::{Model, Value};
