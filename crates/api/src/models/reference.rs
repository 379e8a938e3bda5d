//! The reference site model: what the resolver knows about a name use.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// Whether a reference reads a value or is the target of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    #[default]
    Read,
    Write,
}

/// Opaque handle of a closure block in the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ScopeId(pub u32);

/// A closure block enclosing the reference site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClosureScope {
    pub id: ScopeId,
    /// Name of the method the closure is passed to, e.g. `dependencies`
    /// for `dependencies { ... }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing_call: Option<String>,
}

impl ClosureScope {
    pub fn new(id: u32) -> Self {
        Self {
            id: ScopeId(id),
            enclosing_call: None,
        }
    }

    pub fn block(id: u32, method: impl Into<String>) -> Self {
        Self {
            id: ScopeId(id),
            enclosing_call: Some(method.into()),
        }
    }
}

/// A method-call expression, reduced to what the resolver consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct CallExpression {
    /// Text of the invoked sub-expression; `None` for a malformed call.
    pub invoked: Option<String>,
    /// Inferred argument types, `Unknown` where inference failed.
    #[serde(default)]
    pub argument_types: Vec<TypeRef>,
}

impl CallExpression {
    pub fn new(invoked: impl Into<String>, argument_types: Vec<TypeRef>) -> Self {
        Self {
            invoked: Some(invoked.into()),
            argument_types,
        }
    }

    pub fn malformed(argument_types: Vec<TypeRef>) -> Self {
        Self {
            invoked: None,
            argument_types,
        }
    }
}

/// The syntactic parent of a reference, as far as resolution cares.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntacticParent {
    MethodCall(CallExpression),
    #[default]
    Other,
}

/// A named use-site in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reference {
    pub name: String,
    #[serde(default)]
    pub usage: Usage,
    #[serde(default)]
    pub parent: SyntacticParent,
    /// Enclosing closure blocks, innermost first.
    #[serde(default)]
    pub enclosing_closures: Vec<ClosureScope>,
    /// Number of textual resolution candidates at the site.
    #[serde(default = "default_textual_candidates")]
    pub textual_candidates: usize,
}

fn default_textual_candidates() -> usize {
    1
}

impl Reference {
    pub fn read(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: Usage::Read,
            parent: SyntacticParent::Other,
            enclosing_closures: vec![],
            textual_candidates: 1,
        }
    }

    pub fn write(name: impl Into<String>) -> Self {
        Self {
            usage: Usage::Write,
            ..Self::read(name)
        }
    }

    /// A call-shaped reference `name(args...)`.
    pub fn call(name: impl Into<String>, argument_types: Vec<TypeRef>) -> Self {
        let name = name.into();
        Self {
            parent: SyntacticParent::MethodCall(CallExpression::new(name.clone(), argument_types)),
            ..Self::read(name)
        }
    }

    pub fn with_parent(mut self, parent: SyntacticParent) -> Self {
        self.parent = parent;
        self
    }

    /// Adds an enclosing closure outside of the ones already recorded.
    pub fn inside(mut self, scope: ClosureScope) -> Self {
        self.enclosing_closures.push(scope);
        self
    }

    pub fn with_textual_candidates(mut self, count: usize) -> Self {
        self.textual_candidates = count;
        self
    }

    pub fn is_write(&self) -> bool {
        self.usage == Usage::Write
    }

    pub fn nearest_closure(&self) -> Option<&ClosureScope> {
        self.enclosing_closures.first()
    }

    pub fn call_expression(&self) -> Option<&CallExpression> {
        match &self.parent {
            SyntacticParent::MethodCall(call) => Some(call),
            SyntacticParent::Other => None,
        }
    }
}
