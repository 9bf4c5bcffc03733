use crate::{class::AccessorTable, error::Error, value::Value};
use derive_more::Deref;
use std::{collections::BTreeMap, sync::Arc};

///
/// Storage
/// private slots of one instance, keyed by storage key
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
pub struct Storage(BTreeMap<String, Value>);

///
/// Instance
///
/// One constructed object. Field values live in private slots; public
/// access goes through the accessor names of its class.
///

#[derive(Clone, Debug)]
pub struct Instance {
    class: String,
    accessors: Arc<AccessorTable>,
    storage: Storage,
}

impl Instance {
    pub(crate) fn new(class: &str, accessors: Arc<AccessorTable>) -> Self {
        Self {
            class: class.to_string(),
            accessors,
            storage: Storage::default(),
        }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Read a field through its getter.
    pub fn get(&self, getter: &str) -> Result<&Value, Error> {
        let storage_key = self
            .accessors
            .getter(getter)
            .ok_or_else(|| Error::member_not_found(&self.class, getter))?;

        self.storage
            .get(storage_key)
            .ok_or_else(|| Error::member_not_found(&self.class, storage_key))
    }

    /// Write a field through its setter. Read-only fields have none.
    pub fn set(&mut self, setter: &str, value: impl Into<Value>) -> Result<(), Error> {
        let storage_key = self
            .accessors
            .setter(setter)
            .ok_or_else(|| Error::member_not_found(&self.class, setter))?
            .to_string();

        self.set_slot(storage_key, value);

        Ok(())
    }

    /// Raw slot read, bypassing accessors.
    #[must_use]
    pub fn slot(&self, storage_key: &str) -> Option<&Value> {
        self.storage.get(storage_key)
    }

    /// Raw slot write, used by constructors.
    pub fn set_slot(&mut self, storage_key: impl Into<String>, value: impl Into<Value>) {
        self.storage.0.insert(storage_key.into(), value.into());
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }
}
