use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A type reference at namespace + type-chain granularity.
///
/// `types` lists nesting from the outermost enclosing type inward and always
/// ends with the referenced type itself. Generic arguments do not appear at
/// this level: rule tables discriminate method overloads by the coarser
/// `Namespace.Type` form only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TypePath {
    /// Namespace segments, outermost first. Empty for the global namespace.
    pub namespace: Vec<String>,
    /// Type segments, outermost first; the innermost is the type itself.
    pub types: Vec<String>,
}

impl TypePath {
    pub fn new(namespace: &[&str], types: &[&str]) -> Self {
        Self {
            namespace: namespace.iter().map(|s| s.to_string()).collect(),
            types: types.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Shorthand for the common `Namespace.Type` case with no nesting.
    pub fn simple(namespace: &[&str], name: &str) -> Self {
        Self::new(namespace, &[name])
    }

    pub fn namespace_string(&self) -> String {
        self.namespace.join(".")
    }

    pub fn type_string(&self) -> String {
        self.types.join(".")
    }
}

/// How a property reference is used at its reference site.
///
/// The host determines this from syntax: a member access that is not the
/// target of an assignment reads the property, the left side of an assignment
/// writes it, and anything else (e.g. a first-class member reference) carries
/// no usage context at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyAccess {
    Getter,
    Setter,
    Plain,
}

/// The descriptor tag plus tag-specific payload.
///
/// The variant set follows the host's symbol model, which is wider than the
/// set of kinds the access dialect has rule forms for; see
/// `sandguard-domain`'s canonicalizer for which kinds are supported.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[non_exhaustive]
pub enum SymbolKind {
    Namespace,
    Type,
    Method {
        /// Parameter types in declaration order.
        parameters: Vec<TypePath>,
    },
    Property {
        access: PropertyAccess,
    },
    Field,
    /// Surfaced by host symbol models but without a rule form of its own.
    Event,
}

impl SymbolKind {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Namespace => "namespace",
            SymbolKind::Type => "type",
            SymbolKind::Method { .. } => "method",
            SymbolKind::Property { .. } => "property",
            SymbolKind::Field => "field",
            SymbolKind::Event => "event",
        }
    }
}

/// A single symbol reference as the host compiler resolved it.
///
/// Structural equality is identity: two references to the same declaration
/// (under the same property usage) compare equal, which is what the verdict
/// cache keys on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SymbolRef {
    /// Declaring assembly name, when the host can resolve one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
    /// Containing namespace segments, outermost first.
    pub namespace: Vec<String>,
    /// Enclosing type segments, outermost first. For a `Type` symbol this
    /// holds the enclosing types only; the type's own name is `name`.
    pub types: Vec<String>,
    /// Simple name of the symbol itself.
    pub name: String,
    pub kind: SymbolKind,
}

impl SymbolRef {
    fn new(namespace: &[&str], types: &[&str], name: &str, kind: SymbolKind) -> Self {
        Self {
            assembly: None,
            namespace: namespace.iter().map(|s| s.to_string()).collect(),
            types: types.iter().map(|s| s.to_string()).collect(),
            name: name.to_string(),
            kind,
        }
    }

    pub fn namespace(containing: &[&str], name: &str) -> Self {
        Self::new(containing, &[], name, SymbolKind::Namespace)
    }

    pub fn named_type(namespace: &[&str], enclosing: &[&str], name: &str) -> Self {
        Self::new(namespace, enclosing, name, SymbolKind::Type)
    }

    pub fn method(
        namespace: &[&str],
        enclosing: &[&str],
        name: &str,
        parameters: Vec<TypePath>,
    ) -> Self {
        Self::new(namespace, enclosing, name, SymbolKind::Method { parameters })
    }

    pub fn property(
        namespace: &[&str],
        enclosing: &[&str],
        name: &str,
        access: PropertyAccess,
    ) -> Self {
        Self::new(namespace, enclosing, name, SymbolKind::Property { access })
    }

    pub fn field(namespace: &[&str], enclosing: &[&str], name: &str) -> Self {
        Self::new(namespace, enclosing, name, SymbolKind::Field)
    }

    pub fn event(namespace: &[&str], enclosing: &[&str], name: &str) -> Self {
        Self::new(namespace, enclosing, name, SymbolKind::Event)
    }

    /// Attaches the declaring assembly name.
    pub fn in_assembly(mut self, assembly: &str) -> Self {
        self.assembly = Some(assembly.to_string());
        self
    }
}
