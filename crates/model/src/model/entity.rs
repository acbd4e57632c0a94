//! Erased record access
//!
//! `Entity` and `EntitySeq` are the object-safe faces of `Record`, so a
//! single wrapper type can hold any record, or any collection of records,
//! behind a reference.

use super::record::{FieldDef, FieldValue, Record, TypeKey};

/// A single record, viewed through its registered schema
pub trait Entity {
    fn type_key(&self) -> &TypeKey;

    fn declared_table_name(&self) -> Option<String>;

    fn field_def(&self, name: &str) -> Option<&FieldDef>;

    fn read_field(&self, name: &str) -> Option<FieldValue>;

    /// `None` when the field is not registered, `Some(false)` when the value
    /// could not be coerced into it
    fn write_field(&mut self, name: &str, value: FieldValue) -> Option<bool>;

    fn field_is_zero(&self, name: &str) -> Option<bool>;
}

impl<R: Record> Entity for R {
    fn type_key(&self) -> &TypeKey {
        R::schema().type_key()
    }

    fn declared_table_name(&self) -> Option<String> {
        R::custom_table_name()
    }

    fn field_def(&self, name: &str) -> Option<&FieldDef> {
        R::schema().find_field(name).map(|field| field.def())
    }

    fn read_field(&self, name: &str) -> Option<FieldValue> {
        R::schema().find_field(name).map(|field| field.read(self))
    }

    fn write_field(&mut self, name: &str, value: FieldValue) -> Option<bool> {
        R::schema()
            .find_field(name)
            .map(|field| field.write(self, value))
    }

    fn field_is_zero(&self, name: &str) -> Option<bool> {
        R::schema().find_field(name).map(|field| field.is_zero(self))
    }
}

/// An ordered collection of records of one type. Implemented for slices,
/// `Vec<R>` and arrays of records; collections of boxed records are not
/// supported.
pub trait EntitySeq {
    fn element_key(&self) -> &TypeKey;

    /// Custom table name capability of the element type
    fn element_declared_table_name(&self) -> Option<String>;

    fn element_field(&self, name: &str) -> Option<&FieldDef>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entity_mut(&mut self, index: usize) -> Option<&mut dyn Entity>;
}

impl<R: Record> EntitySeq for [R] {
    fn element_key(&self) -> &TypeKey {
        R::schema().type_key()
    }

    fn element_declared_table_name(&self) -> Option<String> {
        R::custom_table_name()
    }

    fn element_field(&self, name: &str) -> Option<&FieldDef> {
        R::schema().find_field(name).map(|field| field.def())
    }

    fn len(&self) -> usize {
        <[R]>::len(self)
    }

    fn entity_mut(&mut self, index: usize) -> Option<&mut dyn Entity> {
        <[R]>::get_mut(self, index).map(|record| record as &mut dyn Entity)
    }
}

macro_rules! delegate_to_slice {
    () => {
        fn element_key(&self) -> &TypeKey {
            self.as_slice().element_key()
        }

        fn element_declared_table_name(&self) -> Option<String> {
            self.as_slice().element_declared_table_name()
        }

        fn element_field(&self, name: &str) -> Option<&FieldDef> {
            self.as_slice().element_field(name)
        }

        fn len(&self) -> usize {
            EntitySeq::len(self.as_slice())
        }

        fn entity_mut(&mut self, index: usize) -> Option<&mut dyn Entity> {
            self.as_mut_slice().entity_mut(index)
        }
    };
}

impl<R: Record> EntitySeq for Vec<R> {
    delegate_to_slice!();
}

impl<R: Record, const N: usize> EntitySeq for [R; N] {
    delegate_to_slice!();
}

/// Lets `Value` own a borrowed collection, sized or not
impl<S: EntitySeq + ?Sized> EntitySeq for &mut S {
    fn element_key(&self) -> &TypeKey {
        (**self).element_key()
    }

    fn element_declared_table_name(&self) -> Option<String> {
        (**self).element_declared_table_name()
    }

    fn element_field(&self, name: &str) -> Option<&FieldDef> {
        (**self).element_field(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn entity_mut(&mut self, index: usize) -> Option<&mut dyn Entity> {
        (**self).entity_mut(index)
    }
}
