//! Indirect objects and the registry that numbers them.
//!
//! The registry has two phases. [`ObjectRegistry`] is the building phase: it
//! hands out object numbers and allows mutation. [`ObjectRegistry::seal`]
//! consumes it and returns a [`SealedRegistry`], which only supports lookup
//! and ordered iteration and is the only thing the writer accepts.
//!
//! Object numbers start at 1 and follow creation order without gaps. The
//! generation is always 0.

use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId, ResolveReference, Stream};

/// A numbered object: one value plus an optional stream payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    id: ObjectId,
    body: Object,
    stream: Option<Stream>,
}

impl IndirectObject {
    fn new(id: ObjectId, body: Object) -> Self {
        Self {
            id,
            body,
            stream: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn body(&self) -> &Object {
        &self.body
    }

    pub fn stream(&self) -> Option<&Stream> {
        self.stream.as_ref()
    }
}

fn index_of(objects: &[IndirectObject], id: ObjectId) -> Option<usize> {
    if id.generation() != 0 || id.number() == 0 {
        return None;
    }
    let index = id.number() as usize - 1;
    (index < objects.len()).then_some(index)
}

/// Build-phase registry.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: Vec<IndirectObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Allocates the next object number. The body starts out as `null`.
    pub fn create(&mut self) -> ObjectId {
        self.create_with(Object::Null)
    }

    pub fn create_with(&mut self, body: impl Into<Object>) -> ObjectId {
        let id = ObjectId::new(self.objects.len() as u32 + 1, 0);
        self.objects.push(IndirectObject::new(id, body.into()));
        tracing::trace!(object = id.number(), "allocated indirect object");
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        index_of(&self.objects, id).is_some()
    }

    pub fn get(&self, id: ObjectId) -> Result<&IndirectObject> {
        index_of(&self.objects, id)
            .map(|i| &self.objects[i])
            .ok_or(PdfError::UnknownObject(id))
    }

    fn get_mut(&mut self, id: ObjectId) -> Result<&mut IndirectObject> {
        match index_of(&self.objects, id) {
            Some(i) => Ok(&mut self.objects[i]),
            None => Err(PdfError::UnknownObject(id)),
        }
    }

    /// Objects in creation order, which is also emission order.
    pub fn all(&self) -> &[IndirectObject] {
        &self.objects
    }

    pub fn body(&self, id: ObjectId) -> Result<&Object> {
        Ok(&self.get(id)?.body)
    }

    pub fn body_mut(&mut self, id: ObjectId) -> Result<&mut Object> {
        Ok(&mut self.get_mut(id)?.body)
    }

    pub fn set_body(&mut self, id: ObjectId, body: impl Into<Object>) -> Result<()> {
        self.get_mut(id)?.body = body.into();
        Ok(())
    }

    pub fn dictionary(&self, id: ObjectId) -> Result<&Dictionary> {
        let body = self.body(id)?;
        body.as_dict().ok_or_else(|| not_a(id, "dictionary", body))
    }

    pub fn dictionary_mut(&mut self, id: ObjectId) -> Result<&mut Dictionary> {
        let object = self.get_mut(id)?;
        match &mut object.body {
            Object::Dictionary(dict) => Ok(dict),
            other => Err(not_a(id, "dictionary", other)),
        }
    }

    /// Sets `key` on the dictionary body of `id`.
    pub fn set_item(
        &mut self,
        id: ObjectId,
        key: impl Into<String>,
        value: impl Into<Object>,
    ) -> Result<()> {
        self.dictionary_mut(id)?.set(key, value);
        Ok(())
    }

    pub fn get_item(&self, id: ObjectId, key: &str) -> Result<&Object> {
        self.dictionary(id)?.get_item(key)
    }

    /// Appends to the array stored under `key`; returns the new length.
    pub fn append_to_array(
        &mut self,
        id: ObjectId,
        key: &str,
        value: impl Into<Object>,
    ) -> Result<usize> {
        let entry = self.dictionary_mut(id)?.get_item_mut(key)?;
        match entry {
            Object::Array(items) => {
                items.push(value.into());
                Ok(items.len())
            }
            other => Err(PdfError::InvalidOperation(format!(
                "/{key} of {id} is a {}, not an array",
                other.type_name()
            ))),
        }
    }

    /// Adds one to the integer stored under `key`; returns the new value.
    pub fn increment(&mut self, id: ObjectId, key: &str) -> Result<i64> {
        let entry = self.dictionary_mut(id)?.get_item_mut(key)?;
        match entry {
            Object::Integer(n) => {
                *n += 1;
                Ok(*n)
            }
            other => Err(PdfError::InvalidOperation(format!(
                "/{key} of {id} is a {}, not an integer",
                other.type_name()
            ))),
        }
    }

    /// Attaches an encoded stream and records its `/Filter` and `/Length`.
    ///
    /// The body of `id` must already be a dictionary.
    pub fn set_stream(&mut self, id: ObjectId, stream: Stream) -> Result<()> {
        let object = self.get_mut(id)?;
        match &mut object.body {
            Object::Dictionary(dict) => stream.apply_to(dict),
            other => return Err(not_a(id, "stream dictionary", other)),
        }
        tracing::trace!(
            object = id.number(),
            length = stream.len(),
            filter = stream.filter(),
            "attached stream"
        );
        object.stream = Some(stream);
        Ok(())
    }

    /// Ends the build phase.
    pub fn seal(self) -> SealedRegistry {
        tracing::debug!(objects = self.objects.len(), "sealed object registry");
        SealedRegistry {
            objects: self.objects,
        }
    }
}

fn not_a(id: ObjectId, expected: &str, found: &Object) -> PdfError {
    PdfError::InvalidOperation(format!(
        "{id} is a {}, expected a {expected}",
        found.type_name()
    ))
}

/// Write-phase registry: read-only, iterated in creation order.
#[derive(Debug)]
pub struct SealedRegistry {
    objects: Vec<IndirectObject>,
}

impl SealedRegistry {
    pub fn iter(&self) -> impl Iterator<Item = &IndirectObject> {
        self.objects.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&IndirectObject> {
        index_of(&self.objects, id).map(|i| &self.objects[i])
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        index_of(&self.objects, id).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Highest assigned object number (0 when empty).
    pub fn max_object_number(&self) -> u32 {
        self.objects.last().map_or(0, |o| o.id.number())
    }
}

impl ResolveReference for SealedRegistry {
    fn resolves(&self, id: ObjectId) -> bool {
        self.contains(id)
    }
}
