//! Canonical identity of a member's parameter list.

use std::fmt;

use dslscope_api::models::MemberInfo;

/// Ordered erased parameter-type names of a member.
///
/// Two members with equal keys are duplicates for reporting purposes,
/// whatever name or lookup path surfaced them. Fields have the empty key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SignatureKey(Vec<String>);

impl SignatureKey {
    pub fn of(member: &MemberInfo) -> Self {
        Self(member.parameter_types().map(|t| t.erasure()).collect())
    }

    pub fn params(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for SignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dslscope_api::models::{ParameterInfo, TypeRef};

    fn method(owner: &str, name: &str, params: Vec<ParameterInfo>) -> MemberInfo {
        MemberInfo::method(owner, name, params, TypeRef::void())
    }

    #[test]
    fn keys_ignore_name_and_owner() {
        let a = method("A", "setFoo", vec![ParameterInfo::new("v", TypeRef::id("java.lang.String"))]);
        let b = method("B", "foo", vec![ParameterInfo::new("x", TypeRef::id("java.lang.String"))]);
        assert_eq!(SignatureKey::of(&a), SignatureKey::of(&b));
    }

    #[test]
    fn keys_use_erasure() {
        let list = |arg: &str| TypeRef::Generic {
            base: Box::new(TypeRef::id("java.util.List")),
            args: vec![TypeRef::id(arg)],
        };
        let a = method("A", "m", vec![ParameterInfo::new("l", list("java.lang.String"))]);
        let b = method("A", "m", vec![ParameterInfo::new("l", list("java.lang.Integer"))]);
        assert_eq!(SignatureKey::of(&a), SignatureKey::of(&b));
        assert_eq!(SignatureKey::of(&a).to_string(), "(java.util.List)");
    }

    #[test]
    fn varargs_and_array_parameters_collide() {
        let a = method("A", "m", vec![ParameterInfo::varargs("xs", TypeRef::id("java.lang.Object"))]);
        let b = method(
            "A",
            "m",
            vec![ParameterInfo::new("xs", TypeRef::array_of(TypeRef::id("java.lang.Object")))],
        );
        assert_eq!(SignatureKey::of(&a), SignatureKey::of(&b));
    }

    #[test]
    fn order_and_arity_matter() {
        let int = || ParameterInfo::new("i", TypeRef::raw("int"));
        let string = || ParameterInfo::new("s", TypeRef::id("java.lang.String"));
        let a = method("A", "m", vec![int(), string()]);
        let b = method("A", "m", vec![string(), int()]);
        let c = method("A", "m", vec![int()]);
        assert_ne!(SignatureKey::of(&a), SignatureKey::of(&b));
        assert_ne!(SignatureKey::of(&a), SignatureKey::of(&c));
        assert!(SignatureKey::of(&method("A", "m", vec![])).params().is_empty());
    }
}
