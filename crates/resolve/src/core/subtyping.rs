//! Subtyping and assignability rules.
//!
//! Supports:
//! - Identity
//! - Primitives (widening)
//! - Classes (extends) and interfaces (implements)
//! - Arrays (covariant)
//! - Boxing and unboxing conversions
//! - The `null` literal and unknown types

use dslscope_api::models::TypeRef;

use super::type_system::InheritanceProvider;

const OBJECT: &str = "java.lang.Object";

const BOXES: &[(&str, &str)] = &[
    ("boolean", "java.lang.Boolean"),
    ("byte", "java.lang.Byte"),
    ("char", "java.lang.Character"),
    ("short", "java.lang.Short"),
    ("int", "java.lang.Integer"),
    ("long", "java.lang.Long"),
    ("float", "java.lang.Float"),
    ("double", "java.lang.Double"),
    ("void", "java.lang.Void"),
];

/// Wrapper class for a primitive name, e.g. `int` -> `java.lang.Integer`.
pub fn boxed_name(primitive: &str) -> Option<&'static str> {
    BOXES
        .iter()
        .find(|(p, _)| *p == primitive)
        .map(|(_, boxed)| *boxed)
}

/// Primitive name for a wrapper class, e.g. `java.lang.Long` -> `long`.
pub fn unboxed_name(wrapper: &str) -> Option<&'static str> {
    BOXES
        .iter()
        .find(|(_, boxed)| *boxed == wrapper)
        .map(|(p, _)| *p)
}

/// Box a type given by name; non-primitive names come back as-is.
pub fn box_type_name(name: &str) -> &str {
    boxed_name(name).unwrap_or(name)
}

/// Check if `sub` is a subtype of `super_type`.
pub fn is_subtype<T: InheritanceProvider + ?Sized>(
    sub: &TypeRef,
    super_type: &TypeRef,
    ts: &T,
) -> bool {
    // 1. Reflexivity
    if sub == super_type {
        return true;
    }

    // 2. java.lang.Object is supertype of all reference types
    if super_type.as_fqn() == Some(OBJECT) && !matches!(super_type, TypeRef::Raw(_)) {
        return !sub.is_primitive();
    }

    match (sub, super_type) {
        // Primitive widening
        (TypeRef::Raw(s1), TypeRef::Raw(s2)) => is_primitive_subtype(s1, s2),

        // Class/Interface hierarchy
        (TypeRef::Id(sub_id), TypeRef::Id(super_id)) => is_class_subtype(sub_id, super_id, ts),

        // Generic types compare by their erasure
        (TypeRef::Generic { base, .. }, _) => is_subtype(base, super_type, ts),
        (_, TypeRef::Generic { base, .. }) => is_subtype(sub, base, ts),

        // Arrays (covariant for references)
        (
            TypeRef::Array {
                element: e1,
                dimensions: d1,
            },
            TypeRef::Array {
                element: e2,
                dimensions: d2,
            },
        ) => d1 == d2 && (e1 == e2 || (!e1.is_primitive() && is_subtype(e1, e2, ts))),

        _ => false,
    }
}

/// Check if an argument of type `arg` may be passed to a parameter of type `param`.
///
/// On top of subtyping this allows boxing, unboxing, `null` for references
/// and unknown types on either side.
pub fn is_assignable<T: InheritanceProvider + ?Sized>(arg: &TypeRef, param: &TypeRef, ts: &T) -> bool {
    if matches!(arg, TypeRef::Unknown) || matches!(param, TypeRef::Unknown) {
        return true;
    }
    if matches!(param, TypeRef::Wildcard { .. }) {
        return true;
    }
    if arg.is_null() {
        return !param.is_primitive();
    }
    if is_subtype(arg, param, ts) {
        return true;
    }

    match (arg, param) {
        // Boxing, then widening reference conversion
        (TypeRef::Raw(p), _) if !param.is_primitive() => match boxed_name(p) {
            Some(boxed) => is_subtype(&TypeRef::id(boxed), param, ts),
            None => false,
        },
        // Unboxing, then widening primitive conversion
        (TypeRef::Id(wrapper), TypeRef::Raw(p)) => match unboxed_name(wrapper) {
            Some(unboxed) => unboxed == p || is_primitive_subtype(unboxed, p),
            None => false,
        },
        _ => false,
    }
}

fn is_primitive_subtype(sub: &str, sup: &str) -> bool {
    match sub {
        "byte" => matches!(sup, "short" | "int" | "long" | "float" | "double"),
        "short" => matches!(sup, "int" | "long" | "float" | "double"),
        "char" => matches!(sup, "int" | "long" | "float" | "double"),
        "int" => matches!(sup, "long" | "float" | "double"),
        "long" => matches!(sup, "float" | "double"),
        "float" => matches!(sup, "double"),
        _ => false,
    }
}

fn is_class_subtype<T: InheritanceProvider + ?Sized>(sub_fqn: &str, super_fqn: &str, ts: &T) -> bool {
    if sub_fqn == super_fqn {
        return true;
    }

    ts.walk_ancestors(sub_fqn).any(|ancestor| ancestor == super_fqn)
}
