//! Model wrapper - transient handle around a caller-owned record value
//!
//! A `Model` borrows the record (or collection of records) it wraps; every
//! mutation made through it lands in the caller's value.

use std::fmt;

use once_cell::unsync::OnceCell;

use super::entity::{Entity, EntitySeq};
use super::record::Record;
use crate::context::ModelContext;

/// What a `Model` wraps, as decided by the caller
pub enum Value<'a> {
    /// A single record
    Record(&'a mut dyn Entity),
    /// An ordered collection of records of one type
    Records(Box<dyn EntitySeq + 'a>),
    /// A raw table name, used verbatim
    Table(String),
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Record(entity) => f.debug_tuple("Record").field(entity.type_key()).finish(),
            Value::Records(records) => f
                .debug_struct("Records")
                .field("element", records.element_key())
                .field("len", &records.len())
                .finish(),
            Value::Table(name) => f.debug_tuple("Table").field(name).finish(),
        }
    }
}

pub struct Model<'a> {
    pub(crate) value: Value<'a>,
    pub(crate) table_name: OnceCell<String>,
    alias: Option<String>,
    pub(crate) context: ModelContext,
}

impl<'a> Model<'a> {
    /// Wrap a single record using the global context
    pub fn new<R: Record>(record: &'a mut R) -> Self {
        Self::from_value(Value::Record(record))
    }

    /// Wrap a collection of records using the global context
    pub fn many<S: EntitySeq + ?Sized>(records: &'a mut S) -> Self {
        Self::from_value(Value::Records(Box::new(records)))
    }

    /// Wrap a raw table name
    pub fn table(name: impl Into<String>) -> Self {
        Self::from_value(Value::Table(name.into()))
    }

    pub fn from_value(value: Value<'a>) -> Self {
        Self {
            value,
            table_name: OnceCell::new(),
            alias: None,
            context: ModelContext::global(),
        }
    }

    pub fn with_context(mut self, context: ModelContext) -> Self {
        self.context = context;
        self
    }

    /// Set the table alias used by query builders
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    pub fn context(&self) -> &ModelContext {
        &self.context
    }
}

impl fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("value", &self.value)
            .field("table_name", &self.table_name.get())
            .field("alias", &self.alias)
            .finish()
    }
}
