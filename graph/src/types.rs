//! I define [`TypeRegistry`], which decides the [`ResourceClass`] of a resource from its `rdf:type`s.
use crate::ResourceClass;
use indexmap::IndexMap;

/// A mapping from `rdf:type` IRIs to [`ResourceClass`]es.
///
/// Every [`Graph`](crate::Graph) owns one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeRegistry {
    map: IndexMap<Box<str>, ResourceClass>,
}

impl TypeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the type `type_iri` to `class`, returning the class it was previously mapped to.
    pub fn set(&mut self, type_iri: &str, class: ResourceClass) -> Option<ResourceClass> {
        log::trace!("type <{type_iri}> mapped to {class}");
        self.map.insert(type_iri.into(), class)
    }

    /// The class `type_iri` is mapped to, if any.
    pub fn get(&self, type_iri: &str) -> Option<&ResourceClass> {
        self.map.get(type_iri)
    }

    /// Forget the mapping of `type_iri`.
    pub fn delete(&mut self, type_iri: &str) -> Option<ResourceClass> {
        self.map.shift_remove(type_iri)
    }

    /// Iterate over `(type IRI, class)` pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceClass)> {
        self.map.iter().map(|(t, c)| (&t[..], c))
    }

    /// The number of mapped types.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no type is mapped.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The class of a resource with the given types:
    /// that of the first type (in the given order) with a mapping,
    /// or [`ResourceClass::GENERIC`].
    pub fn classify<'a, I>(&self, types: I) -> ResourceClass
    where
        I: IntoIterator<Item = &'a str>,
    {
        types
            .into_iter()
            .find_map(|t| self.map.get(t))
            .cloned()
            .unwrap_or(ResourceClass::GENERIC)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    const DOC: &str = "http://xmlns.com/foaf/0.1/Document";

    #[test]
    fn classify() {
        let mut reg = TypeRegistry::new();
        reg.set(PERSON, ResourceClass::new("Person"));
        reg.set(DOC, ResourceClass::new("Document"));
        assert_eq!(reg.classify([]), ResourceClass::GENERIC);
        assert_eq!(reg.classify(["tag:unknown"]), ResourceClass::GENERIC);
        assert_eq!(reg.classify(["tag:unknown", DOC]).name(), "Document");
        assert_eq!(reg.classify([DOC, PERSON]).name(), "Document");
        assert_eq!(reg.classify([PERSON, DOC]).name(), "Person");
    }

    #[test]
    fn set_and_delete() {
        let mut reg = TypeRegistry::new();
        assert_eq!(reg.set(PERSON, ResourceClass::new("A")), None);
        assert_eq!(reg.set(PERSON, ResourceClass::new("B")), Some(ResourceClass::new("A")));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(PERSON).map(ResourceClass::name), Some("B"));
        assert_eq!(reg.delete(PERSON), Some(ResourceClass::new("B")));
        assert!(reg.is_empty());
        assert_eq!(reg.iter().count(), 0);
    }
}
