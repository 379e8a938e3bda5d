//! Declared types and their members.
//!
//! These are pure data types; lookup and applicability live in the resolver.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// Separator used between a type and its members.
pub const MEMBER_SEPARATOR: char = '#';

/// Information about a declared type (class, interface, enum, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeInfo {
    /// Fully qualified name, e.g., "org.gradle.api.Project"
    pub fqn: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Direct superclass, `None` for `java.lang.Object` and interfaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    /// Members declared directly on this type, in declaration order
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}

impl TypeInfo {
    pub fn class(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            kind: TypeKind::Class,
            super_class: None,
            interfaces: vec![],
            members: vec![],
        }
    }

    pub fn interface(fqn: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Interface,
            ..Self::class(fqn)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Primitive,
}

/// Information about a member (field, method, constructor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemberInfo {
    /// Simple name, e.g., "getVersion"
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    /// The type that declares this member (may differ from lookup type due to inheritance).
    /// Filled in from the enclosing type when loading a universe.
    #[serde(default)]
    pub declaring_type: String,
    /// Field type or method return type
    #[serde(rename = "type", default)]
    pub type_ref: TypeRef,
    /// Method parameters (None for fields)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterInfo>>,
}

impl MemberInfo {
    pub fn method(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<ParameterInfo>,
        return_type: TypeRef,
    ) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            declaring_type: declaring_type.into(),
            type_ref: return_type,
            parameters: Some(parameters),
        }
    }

    pub fn field(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        field_type: TypeRef,
    ) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            declaring_type: declaring_type.into(),
            type_ref: field_type,
            parameters: None,
        }
    }

    /// `declaring.Type#name`
    pub fn fqn(&self) -> String {
        format!("{}{}{}", self.declaring_type, MEMBER_SEPARATOR, self.name)
    }

    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.parameters.iter().flatten().map(|p| &p.type_ref)
    }

    pub fn arity(&self) -> usize {
        self.parameters.as_ref().map_or(0, Vec::len)
    }

    /// Human readable signature, e.g. `setVersion(java.lang.Object): void`.
    pub fn signature(&self) -> String {
        match &self.parameters {
            Some(params) => {
                let params = params
                    .iter()
                    .map(|p| {
                        if p.is_varargs {
                            match &p.type_ref {
                                TypeRef::Array { element, dimensions: 1 } => {
                                    format!("{}...", element)
                                }
                                other => format!("{}...", other),
                            }
                        } else {
                            p.type_ref.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({}): {}", self.name, params, self.type_ref)
            }
            None => format!("{}: {}", self.name, self.type_ref),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    #[default]
    Method,
    Constructor,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
            MemberKind::Constructor => "constructor",
        };
        f.write_str(name)
    }
}

/// Information about a method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParameterInfo {
    /// Parameter name (may be synthetic like "arg0")
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// True when this parameter is declared with `...` varargs syntax.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_varargs: bool,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            is_varargs: false,
        }
    }

    /// A `T...` parameter; stored as `T[]`.
    pub fn varargs(name: impl Into<String>, element: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref: TypeRef::array_of(element),
            is_varargs: true,
        }
    }
}

/// Context for type name resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeResolutionContext {
    /// Current package, e.g., "com.example"
    #[serde(default)]
    pub package: Option<String>,
    /// Import statements in effect, either `a.b.C` or on-demand `a.b.*`
    #[serde(default)]
    pub imports: Vec<String>,
}

impl TypeResolutionContext {
    pub fn with_imports<I, S>(imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package: None,
            imports: imports.into_iter().map(Into::into).collect(),
        }
    }

    /// Candidate FQNs for a simple name, in lookup order:
    /// single-type imports, the current package, then on-demand imports.
    pub fn candidate_fqns(&self, simple_name: &str) -> Vec<String> {
        let mut out = Vec::new();
        for import in &self.imports {
            if !import.ends_with(".*") && import.rsplit('.').next() == Some(simple_name) {
                out.push(import.clone());
            }
        }
        if let Some(package) = &self.package {
            out.push(format!("{}.{}", package, simple_name));
        }
        for import in &self.imports {
            if let Some(package) = import.strip_suffix(".*") {
                out.push(format!("{}.{}", package, simple_name));
            }
        }
        out
    }
}
