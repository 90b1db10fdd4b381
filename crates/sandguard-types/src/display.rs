//! Display rendering for type references in user-facing messages.
//!
//! Policy matching never sees generic arguments; this rendering exists so
//! diagnostic text can show `List<Int32>` instead of a bare `List`.

use crate::symbol::TypePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A type reference carrying enough generic information to render a
/// human-readable name.
///
/// `parameters` holds the open type-parameter names declared on the type
/// (empty for non-generic types); `arguments` holds the concrete arguments
/// when the reference is to a constructed type, and is empty for an unbound
/// definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeRef {
    pub path: TypePath,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(path: TypePath) -> Self {
        Self {
            path,
            parameters: Vec::new(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(path: TypePath, parameters: &[&str]) -> Self {
        Self {
            path,
            parameters: parameters.iter().map(|s| s.to_string()).collect(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Fully qualified name with concrete generic arguments when known, the
    /// open parameter names otherwise. Arguments render recursively:
    /// `System.Collections.Generic.List<System.Collections.Generic.List<System.Int32>>`.
    pub fn display_name(&self) -> String {
        self.render(true)
    }

    /// Fully qualified name of the definition, always using the open
    /// type-parameter names: `System.Collections.Generic.List<T>`.
    pub fn definition_name(&self) -> String {
        self.render(false)
    }

    fn render(&self, use_arguments: bool) -> String {
        let mut out = String::new();
        for segment in &self.path.namespace {
            out.push_str(segment);
            out.push('.');
        }
        let (enclosing, name) = match self.path.types.split_last() {
            Some((name, enclosing)) => (enclosing, name.as_str()),
            None => (&[] as &[String], ""),
        };
        for segment in enclosing {
            out.push_str(segment);
            out.push('.');
        }
        out.push_str(name);

        if use_arguments && !self.arguments.is_empty() {
            out.push('<');
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&argument.render(true));
            }
            out.push('>');
        } else if !self.parameters.is_empty() {
            out.push('<');
            out.push_str(&self.parameters.join(", "));
            out.push('>');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int32() -> TypeRef {
        TypeRef::new(TypePath::simple(&["System"], "Int32"))
    }

    #[test]
    fn plain_type_renders_qualified() {
        let t = TypeRef::new(TypePath::simple(&["Sandbox"], "Entity"));
        assert_eq!(t.display_name(), "Sandbox.Entity");
        assert_eq!(t.definition_name(), "Sandbox.Entity");
    }

    #[test]
    fn global_namespace_has_no_leading_dot() {
        let t = TypeRef::new(TypePath::new(&[], &["MyComponent"]));
        assert_eq!(t.display_name(), "MyComponent");
    }

    #[test]
    fn nested_type_keeps_enclosing_chain() {
        let t = TypeRef::new(TypePath::new(&["System"], &["Environment", "SpecialFolder"]));
        assert_eq!(t.display_name(), "System.Environment.SpecialFolder");
    }

    #[test]
    fn open_definition_uses_parameter_names() {
        let t = TypeRef::generic(
            TypePath::simple(&["System", "Collections", "Generic"], "IDictionary"),
            &["TKey", "TValue"],
        );
        assert_eq!(
            t.display_name(),
            "System.Collections.Generic.IDictionary<TKey, TValue>"
        );
    }

    #[test]
    fn constructed_type_renders_arguments_recursively() {
        let list = TypePath::simple(&["System", "Collections", "Generic"], "List");
        let inner = TypeRef::generic(list.clone(), &["T"]).with_arguments(vec![int32()]);
        let outer = TypeRef::generic(list, &["T"]).with_arguments(vec![inner]);
        assert_eq!(
            outer.display_name(),
            "System.Collections.Generic.List<System.Collections.Generic.List<System.Int32>>"
        );
        assert_eq!(
            outer.definition_name(),
            "System.Collections.Generic.List<T>"
        );
    }
}
