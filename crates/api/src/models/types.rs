use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// Names the host language treats as primitive (unboxed) types.
pub const PRIMITIVE_NAMES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Type of the `null` literal as reported for call arguments.
pub const NULL_TYPE: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// Unresolved or primitive type name (e.g., "int", "void")
    Raw(String),

    /// Reference to a declared type (FQN)
    Id(String),

    /// Generic instantiation (e.g., List<String>)
    Generic {
        base: Box<TypeRef>,
        args: Vec<TypeRef>,
    },

    /// Array type (e.g., String[])
    Array {
        element: Box<TypeRef>,
        dimensions: usize,
    },

    /// Wildcard type (e.g., ? extends Number)
    Wildcard {
        bound: Option<Box<TypeRef>>,
        is_upper_bound: bool, // true: extends, false: super
    },

    #[default]
    Unknown,
}

impl TypeRef {
    /// Helper to create a Raw type
    pub fn raw(s: impl Into<String>) -> Self {
        TypeRef::Raw(s.into())
    }

    /// Helper to create an Id type
    pub fn id(s: impl Into<String>) -> Self {
        TypeRef::Id(s.into())
    }

    pub fn void() -> Self {
        TypeRef::Raw("void".to_string())
    }

    pub fn array_of(element: TypeRef) -> Self {
        match element {
            TypeRef::Array {
                element,
                dimensions,
            } => TypeRef::Array {
                element,
                dimensions: dimensions + 1,
            },
            other => TypeRef::Array {
                element: Box::new(other),
                dimensions: 1,
            },
        }
    }

    /// Build a type from a name, classifying primitives as `Raw`.
    pub fn named(name: &str) -> Self {
        if PRIMITIVE_NAMES.contains(&name) || name == NULL_TYPE {
            TypeRef::Raw(name.to_string())
        } else {
            TypeRef::Id(name.to_string())
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Raw(s) | TypeRef::Id(s) if s == "void")
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Raw(s) if PRIMITIVE_NAMES.contains(&s.as_str()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypeRef::Raw(s) if s == NULL_TYPE)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, TypeRef::Raw(s) | TypeRef::Id(s) if s == "boolean" || s == "java.lang.Boolean")
    }

    pub fn as_fqn(&self) -> Option<&str> {
        match self {
            TypeRef::Id(fqn) | TypeRef::Raw(fqn) => Some(fqn),
            TypeRef::Generic { base, .. } => base.as_fqn(),
            _ => None,
        }
    }

    /// Canonical erased name: generic arguments dropped, arrays spelled `T[]`.
    pub fn erasure(&self) -> String {
        match self {
            TypeRef::Raw(s) | TypeRef::Id(s) => s.clone(),
            TypeRef::Generic { base, .. } => base.erasure(),
            TypeRef::Array {
                element,
                dimensions,
            } => format!("{}{}", element.erasure(), "[]".repeat(*dimensions)),
            TypeRef::Wildcard { .. } | TypeRef::Unknown => "?".to_string(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Raw(s) | TypeRef::Id(s) => f.write_str(s),
            TypeRef::Generic { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeRef::Array {
                element,
                dimensions,
            } => write!(f, "{}{}", element, "[]".repeat(*dimensions)),
            TypeRef::Wildcard {
                bound: None,
                ..
            } => f.write_str("?"),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let keyword = if *is_upper_bound { "extends" } else { "super" };
                write!(f, "? {} {}", keyword, bound)
            }
            TypeRef::Unknown => f.write_str("<unknown>"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = ApiError;

    /// Parses source-like type text: `int`, `java.util.List<java.lang.String>`,
    /// `String[][]`, `? extends Number`. `<unknown>` maps back to `Unknown`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeTextParser { text, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != text.len() {
            return Err(ApiError::InvalidArgument(format!(
                "unexpected trailing input in type `{}` at offset {}",
                text, parser.pos
            )));
        }
        Ok(ty)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

impl JsonSchema for TypeRef {
    fn schema_name() -> Cow<'static, str> {
        "TypeRef".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Type text, e.g. `int`, `java.util.List<java.lang.String>`, `java.lang.String[]`",
        })
    }
}

struct TypeTextParser<'a> {
    text: &'a str,
    pos: usize,
}

impl TypeTextParser<'_> {
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.text[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn error(&self, what: &str) -> ApiError {
        ApiError::InvalidArgument(format!(
            "{} in type `{}` at offset {}",
            what, self.text, self.pos
        ))
    }

    fn parse_type(&mut self) -> Result<TypeRef, ApiError> {
        self.skip_ws();
        if self.eat("<unknown>") {
            return Ok(TypeRef::Unknown);
        }
        if self.eat("?") {
            return self.parse_wildcard();
        }

        let name = self.parse_name()?;
        let mut ty = TypeRef::named(&name);

        if self.eat("<") {
            let mut args = vec![self.parse_type()?];
            while self.eat(",") {
                args.push(self.parse_type()?);
            }
            if !self.eat(">") {
                return Err(self.error("expected `>`"));
            }
            ty = TypeRef::Generic {
                base: Box::new(ty),
                args,
            };
        }

        while self.eat("[") {
            if !self.eat("]") {
                return Err(self.error("expected `]`"));
            }
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    fn parse_wildcard(&mut self) -> Result<TypeRef, ApiError> {
        let is_upper_bound = if self.eat("extends") {
            true
        } else if self.eat("super") {
            false
        } else {
            return Ok(TypeRef::Wildcard {
                bound: None,
                is_upper_bound: true,
            });
        };
        let bound = self.parse_type()?;
        Ok(TypeRef::Wildcard {
            bound: Some(Box::new(bound)),
            is_upper_bound,
        })
    }

    fn parse_name(&mut self) -> Result<String, ApiError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let name = &self.text[start..self.pos];
        if name.is_empty() || name.starts_with('.') || name.ends_with('.') {
            return Err(self.error("expected a type name"));
        }
        Ok(name.to_string())
    }
}
