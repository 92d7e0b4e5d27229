//! I define [`Resource`], the handle a [`Graph`](crate::Graph) gives out for its IRIs and blank nodes,
//! and [`Node`], the value of a property.
use std::borrow::Cow;
use std::fmt;
use trove_term::{Literal, NamespaceRegistry, Term, TermKind};

/// The class a [`Resource`] was materialised with.
///
/// Classes are plain names;
/// the [`TypeRegistry`](crate::TypeRegistry) of a graph maps `rdf:type` IRIs to them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceClass(Cow<'static, str>);

impl ResourceClass {
    /// The class of resources with no registered type.
    pub const GENERIC: ResourceClass = ResourceClass(Cow::Borrowed("Resource"));

    /// A class with the given name.
    pub fn new<T: Into<Cow<'static, str>>>(name: T) -> Self {
        ResourceClass(name.into())
    }

    /// The name of this class.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this is [`ResourceClass::GENERIC`].
    pub fn is_generic(&self) -> bool {
        self == &Self::GENERIC
    }
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A lightweight handle on an IRI or blank node of a [`Graph`](crate::Graph).
///
/// A resource owns no data:
/// reading and writing its properties is done through the graph,
/// which accepts a `&Resource` wherever it expects a subject.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resource {
    id: Term,
    class: ResourceClass,
}

impl Resource {
    pub(crate) fn new(id: Term, class: ResourceClass) -> Self {
        debug_assert!(id.is_resource());
        Resource { id, class }
    }

    /// The IRI of this resource, or its `_:`-prefixed blank node identifier.
    pub fn id(&self) -> &str {
        self.id.value()
    }

    /// This resource as a [`Term`].
    pub fn term(&self) -> &Term {
        &self.id
    }

    /// The class this resource was materialised with.
    pub fn class(&self) -> &ResourceClass {
        &self.class
    }

    /// Whether this resource is a blank node.
    pub fn is_blank_node(&self) -> bool {
        self.id.is_blank_node()
    }

    /// The IRI of this resource shortened through `ns`, if possible.
    pub fn shorten(&self, ns: &NamespaceRegistry) -> Option<String> {
        if self.is_blank_node() {
            None
        } else {
            ns.shorten(self.id())
        }
    }

    /// Convert this resource into a [`TypedResource`],
    /// provided it was materialised with the matching class.
    ///
    /// Otherwise, the resource is given back.
    pub fn typed<T: TypedResource>(self) -> Result<T, Resource> {
        if self.class == T::class() {
            Ok(T::from_resource(self))
        } else {
            Err(self)
        }
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<Resource> for Term {
    fn from(other: Resource) -> Term {
        other.id
    }
}

impl From<&Resource> for Term {
    fn from(other: &Resource) -> Term {
        other.id.clone()
    }
}

/// A type wrapping [`Resource`]s of a given [`ResourceClass`].
///
/// ```
/// use trove_graph::{Graph, Resource, ResourceClass, TypedResource};
///
/// struct Person(Resource);
///
/// impl TypedResource for Person {
///     fn class() -> ResourceClass {
///         ResourceClass::new("Person")
///     }
///     fn from_resource(resource: Resource) -> Self {
///         Person(resource)
///     }
/// }
///
/// let mut g = Graph::new();
/// g.type_registry_mut().set(trove_term::vocab::foaf::Person, Person::class());
/// let alice = g.resource("http://example.org/alice", &["foaf:Person"])?;
/// assert!(alice.typed::<Person>().is_ok());
/// # Ok::<(), trove_graph::GraphError>(())
/// ```
pub trait TypedResource: Sized {
    /// The class a resource must have to be converted into this type.
    fn class() -> ResourceClass;
    /// Wrap `resource`, whose class is [`Self::class()`].
    fn from_resource(resource: Resource) -> Self;
}

/// The value of a property, as returned by [`Graph::get`](crate::Graph::get) and co.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// An IRI or blank node
    Resource(Resource),
    /// A literal
    Literal(Literal),
}

impl Node {
    /// The kind of term this node is.
    pub fn kind(&self) -> TermKind {
        match self {
            Node::Resource(r) => r.term().kind(),
            Node::Literal(_) => TermKind::Literal,
        }
    }

    /// This node as a resource, if it is one.
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Node::Resource(r) => Some(r),
            Node::Literal(_) => None,
        }
    }

    /// This node as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            Node::Resource(_) => None,
        }
    }

    /// Convert this node into a resource, if it is one.
    pub fn into_resource(self) -> Option<Resource> {
        match self {
            Node::Resource(r) => Some(r),
            Node::Literal(_) => None,
        }
    }

    /// Convert this node into a literal, if it is one.
    pub fn into_literal(self) -> Option<Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            Node::Resource(_) => None,
        }
    }

    /// The identifier of a resource, or the lexical value of a literal.
    pub fn display_value(&self) -> &str {
        match self {
            Node::Resource(r) => r.id(),
            Node::Literal(lit) => lit.display_value(),
        }
    }

    /// This node as a [`Term`].
    pub fn to_term(&self) -> Term {
        match self {
            Node::Resource(r) => r.term().clone(),
            Node::Literal(lit) => Term::Literal(lit.clone()),
        }
    }
}

impl From<Node> for Term {
    fn from(other: Node) -> Term {
        match other {
            Node::Resource(r) => r.into(),
            Node::Literal(lit) => Term::Literal(lit),
        }
    }
}

/// Restricts which values [`Graph::get`](crate::Graph::get) and [`Graph::all`](crate::Graph::all) return.
///
/// When `lang` is set, only literals with exactly that language tag pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// The required kind of value
    pub kind: Option<TermKind>,
    /// The required language tag
    pub lang: Option<String>,
}

impl Filter {
    /// Let every value pass.
    pub fn any() -> Self {
        Filter::default()
    }

    /// Only let values of the given kind pass.
    pub fn kind(kind: TermKind) -> Self {
        Filter {
            kind: Some(kind),
            lang: None,
        }
    }

    /// Only let literals pass, with the given language tag if any.
    pub fn literal(lang: Option<&str>) -> Self {
        Filter {
            kind: Some(TermKind::Literal),
            lang: lang.map(str::to_string),
        }
    }

    /// Whether `term` passes this filter.
    pub fn accepts(&self, term: &Term) -> bool {
        if let Some(kind) = self.kind {
            if term.kind() != kind {
                return false;
            }
        }
        match &self.lang {
            None => true,
            Some(lang) => term
                .as_literal()
                .and_then(Literal::lang)
                .is_some_and(|l| l == lang),
        }
    }
}
