//! Record Registration - Per-type field tables for application records
//!
//! Record types do not share a base type. Instead each one registers a
//! `Schema` once, mapping field names ("ID", "CreatedAt", ...) to typed
//! accessor closures. The wrapper then reads and writes those fields by
//! name without knowing the concrete record type.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of the field types the wrapper knows how to coerce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// 32-bit integer (`i32`)
    Int32,
    /// 64-bit integer (`i64`)
    Int64,
    /// Structured identifier (`uuid::Uuid`)
    Uuid,
    /// Point in time (`chrono::DateTime<Utc>`)
    Timestamp,
    /// Free text (`String`)
    Text,
}

impl FieldKind {
    /// Declared Rust type name of the field
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Int32 => "i32",
            FieldKind::Int64 => "i64",
            FieldKind::Uuid => "Uuid",
            FieldKind::Timestamp => "DateTime<Utc>",
            FieldKind::Text => "String",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, FieldKind::Int32 | FieldKind::Int64)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A field value moving in or out of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Int(i64),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Uuid(value) => write!(f, "{}", value),
            FieldValue::Timestamp(value) => write!(f, "{}", value.to_rfc3339()),
            FieldValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Rust types that can back a registered field
pub trait FieldType: Sized + 'static {
    const KIND: FieldKind;
    const NULLABLE: bool = false;

    fn to_value(&self) -> FieldValue;

    /// Coerce a value into this type, `None` when it does not fit
    fn from_value(value: FieldValue) -> Option<Self>;

    /// Whether the value is the zero value of its type
    fn is_zero(&self) -> bool;
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Int64;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(value) => Some(value),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl FieldType for i32 {
    const KIND: FieldKind = FieldKind::Int32;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int((*self).into())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(value) => i32::try_from(value).ok(),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl FieldType for Uuid {
    const KIND: FieldKind = FieldKind::Uuid;

    fn to_value(&self) -> FieldValue {
        FieldValue::Uuid(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Uuid(value) => Some(value),
            FieldValue::Text(text) => Uuid::parse_str(&text).ok(),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

impl FieldType for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn to_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Timestamp(value) => Some(value),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(value) => Some(value),
            FieldValue::Uuid(value) => Some(value.to_string()),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;

    fn to_value(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Null, FieldType::to_value)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(None),
            value => T::from_value(value).map(Some),
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

/// Identity of a record type across the process
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    path: &'static str,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        let path = std::any::type_name::<T>();
        Self {
            path,
            name: short_type_name(path),
        }
    }

    /// Full module path of the type; unique per type and used as the cache key
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Singular type name fed to pluralization
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cache_key(&self) -> &'static str {
        self.path
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// "app::models::Page<app::Item>" -> "Page"
fn short_type_name(path: &'static str) -> &'static str {
    let base = path.split('<').next().unwrap_or(path);
    base.rsplit("::").next().unwrap_or(base)
}

/// Type-level description of a registered field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    name: &'static str,
    column: Option<&'static str>,
    kind: FieldKind,
    nullable: bool,
}

impl FieldDef {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Storage column override, if one was registered
    pub fn column(&self) -> Option<&'static str> {
        self.column
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

type ReadFn<R> = Box<dyn Fn(&R) -> FieldValue + Send + Sync>;
type WriteFn<R> = Box<dyn Fn(&mut R, FieldValue) -> bool + Send + Sync>;
type ZeroFn<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// A registered field with its accessors
pub struct Field<R> {
    def: FieldDef,
    read: ReadFn<R>,
    write: WriteFn<R>,
    is_zero: ZeroFn<R>,
}

impl<R: 'static> Field<R> {
    pub fn new<T: FieldType>(
        name: &'static str,
        column: Option<&'static str>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        Self {
            def: FieldDef {
                name,
                column,
                kind: T::KIND,
                nullable: T::NULLABLE,
            },
            read: Box::new(move |record: &R| get(record).to_value()),
            write: Box::new(move |record: &mut R, value: FieldValue| match T::from_value(value) {
                Some(value) => {
                    *get_mut(record) = value;
                    true
                }
                None => false,
            }),
            is_zero: Box::new(move |record: &R| get(record).is_zero()),
        }
    }

    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    pub fn read(&self, record: &R) -> FieldValue {
        (self.read)(record)
    }

    /// Assign a coerced value; returns `false` and leaves the record
    /// unchanged when the value does not fit the field
    pub fn write(&self, record: &mut R, value: FieldValue) -> bool {
        (self.write)(record, value)
    }

    pub fn is_zero(&self, record: &R) -> bool {
        (self.is_zero)(record)
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("def", &self.def).finish()
    }
}

/// Field registration table of one record type
pub struct Schema<R> {
    type_key: TypeKey,
    fields: Vec<Field<R>>,
}

impl<R: 'static> Schema<R> {
    pub fn new() -> Self {
        Self {
            type_key: TypeKey::of::<R>(),
            fields: Vec::new(),
        }
    }

    /// Override the singular name used to derive the table name
    pub fn named(mut self, name: &'static str) -> Self {
        self.type_key.name = name;
        self
    }

    pub fn field<T: FieldType>(
        self,
        name: &'static str,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        self.push(Field::new(name, None, get, get_mut))
    }

    /// Register a field stored under a different column name
    pub fn field_as<T: FieldType>(
        self,
        name: &'static str,
        column: &'static str,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        self.push(Field::new(name, Some(column), get, get_mut))
    }

    fn push(mut self, field: Field<R>) -> Self {
        // Later registrations replace earlier ones with the same name
        self.fields.retain(|existing| existing.def.name != field.def.name);
        self.fields.push(field);
        self
    }
}

impl<R: 'static> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Schema<R> {
    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    pub fn find_field(&self, name: &str) -> Option<&Field<R>> {
        self.fields.iter().find(|field| field.def.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field<R>> {
        self.fields.iter()
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_key", &self.type_key)
            .field("fields", &self.fields)
            .finish()
    }
}

/// An application record type the mapping layer can introspect
pub trait Record: Sized + 'static {
    /// The record's field registration table, built once per process
    fn schema() -> &'static Schema<Self>;

    /// Custom table name capability; `None` falls back to the pluralized
    /// type name
    fn custom_table_name() -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Ticket {
        id: i32,
        external_id: Option<Uuid>,
        opened_at: DateTime<Utc>,
    }

    impl Ticket {
        fn blank() -> Self {
            Self {
                id: 0,
                external_id: None,
                opened_at: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
            }
        }
    }

    fn ticket_schema() -> Schema<Ticket> {
        Schema::<Ticket>::new()
            .field("ID", |t| &t.id, |t| &mut t.id)
            .field_as("ExternalID", "external_ref", |t| &t.external_id, |t| &mut t.external_id)
            .field("OpenedAt", |t| &t.opened_at, |t| &mut t.opened_at)
    }

    #[test]
    fn test_type_key_strips_module_path() {
        let key = TypeKey::of::<Ticket>();
        assert_eq!(key.name(), "Ticket");
        assert!(key.path().ends_with("::Ticket"));
        assert_eq!(key.cache_key(), key.path());
    }

    #[test]
    fn test_type_key_strips_generics() {
        let key = TypeKey::of::<Vec<Ticket>>();
        assert_eq!(key.name(), "Vec");
        assert!(key.path().contains("Ticket"));
    }

    #[test]
    fn test_schema_lookup_and_kinds() {
        let schema = ticket_schema();
        let id = schema.find_field("ID").unwrap();
        assert_eq!(id.def().kind(), FieldKind::Int32);
        assert!(!id.def().is_nullable());
        assert_eq!(id.def().column(), None);

        let external = schema.find_field("ExternalID").unwrap();
        assert_eq!(external.def().kind(), FieldKind::Uuid);
        assert!(external.def().is_nullable());
        assert_eq!(external.def().column(), Some("external_ref"));

        assert!(schema.find_field("Missing").is_none());
        assert_eq!(schema.fields().count(), 3);
    }

    #[test]
    fn test_schema_named_override() {
        let schema = ticket_schema().named("Issue");
        assert_eq!(schema.type_key().name(), "Issue");
    }

    #[test]
    fn test_integer_field_narrows_to_width() {
        let schema = ticket_schema();
        let id = schema.find_field("ID").unwrap();
        let mut ticket = Ticket::blank();

        assert!(id.write(&mut ticket, FieldValue::Int(42)));
        assert_eq!(ticket.id, 42);
        assert_eq!(id.read(&ticket), FieldValue::Int(42));

        assert!(!id.write(&mut ticket, FieldValue::Int(i64::from(i32::MAX) + 1)));
        assert_eq!(ticket.id, 42);

        assert!(!id.write(&mut ticket, FieldValue::Text("42".to_string())));
        assert_eq!(ticket.id, 42);
    }

    #[test]
    fn test_optional_uuid_field() {
        let schema = ticket_schema();
        let field = schema.find_field("ExternalID").unwrap();
        let mut ticket = Ticket::blank();
        assert!(field.is_zero(&ticket));
        assert_eq!(field.read(&ticket), FieldValue::Null);

        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(field.write(&mut ticket, FieldValue::Text(uuid.to_string())));
        assert_eq!(ticket.external_id, Some(uuid));
        assert!(!field.is_zero(&ticket));

        assert!(field.write(&mut ticket, FieldValue::Null));
        assert_eq!(ticket.external_id, None);
    }

    #[test]
    fn test_zero_values() {
        assert!(0i64.is_zero());
        assert!(!7i32.is_zero());
        assert!(Uuid::nil().is_zero());
        assert!(String::new().is_zero());
        assert!(DateTime::<Utc>::from_timestamp(0, 0).unwrap().is_zero());
        assert!(!DateTime::<Utc>::from_timestamp(0, 1_000).unwrap().is_zero());
        assert!(Option::<i64>::None.is_zero());
        assert!(!Some(0i64).is_zero());
    }

    #[test]
    fn test_duplicate_registration_replaces_field() {
        let schema = ticket_schema().field_as("ID", "ticket_id", |t| &t.id, |t| &mut t.id);
        assert_eq!(schema.fields().count(), 3);
        assert_eq!(schema.find_field("ID").unwrap().def().column(), Some("ticket_id"));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Int(5).to_string(), "5");
        assert_eq!(FieldValue::Null.to_string(), "null");
        assert_eq!(FieldValue::from(Some("abc")).to_string(), "abc");
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
    }
}
