use crate::error::{PdfError, Result};
use crate::objects::Object;
use indexmap::IndexMap;

/// A PDF dictionary.
///
/// Entries keep their insertion order so that output is deterministic.
/// Setting a key that already exists replaces the value in place; the entry
/// keeps its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: IndexMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds a dictionary whose first entry is `/Type /<type_name>`.
    pub fn with_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.set("Type", Object::name(type_name));
        dict
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        // IndexMap::insert keeps the slot of an existing key.
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.entries.get_mut(key)
    }

    /// Like [`get`](Self::get) but a missing key is an error.
    pub fn get_item(&self, key: &str) -> Result<&Object> {
        self.entries
            .get(key)
            .ok_or_else(|| PdfError::MissingKey(key.to_string()))
    }

    pub fn get_item_mut(&mut self, key: &str) -> Result<&mut Object> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| PdfError::MissingKey(key.to_string()))
    }

    /// Removes `key`, shifting later entries up so order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Object> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter()
    }

    pub fn get_dict(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(Object::as_dict)
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}
