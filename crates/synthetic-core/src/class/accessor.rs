use std::collections::BTreeMap;

///
/// AccessorTable
///
/// Public accessor names of a class mapped to the storage key each one
/// reads or writes. Read-only fields only ever appear among the getters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccessorTable {
    getters: BTreeMap<String, String>,
    setters: BTreeMap<String, String>,
}

impl AccessorTable {
    #[must_use]
    pub fn getter(&self, name: &str) -> Option<&str> {
        self.getters.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn setter(&self, name: &str) -> Option<&str> {
        self.setters.get(name).map(String::as_str)
    }

    /// Whether `name` is taken by any accessor.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.getters.contains_key(name) || self.setters.contains_key(name)
    }

    pub fn getter_names(&self) -> impl Iterator<Item = &str> {
        self.getters.keys().map(String::as_str)
    }

    pub fn setter_names(&self) -> impl Iterator<Item = &str> {
        self.setters.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.getters.len() + self.setters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.getters.is_empty() && self.setters.is_empty()
    }

    pub(crate) fn insert_getter(&mut self, name: String, storage_key: String) {
        self.getters.insert(name, storage_key);
    }

    pub(crate) fn insert_setter(&mut self, name: String, storage_key: String) {
        self.setters.insert(name, storage_key);
    }
}
