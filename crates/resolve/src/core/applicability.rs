//! Structural applicability of a member to a call.
//!
//! Only arity and assignability are checked here. Choosing the most
//! specific overload is left to callers.

use dslscope_api::models::{MemberInfo, ParameterInfo, TypeRef};

use super::type_system::ScriptTypeSystem;

/// Whether `member` can be invoked with arguments of `arg_types`.
///
/// Fields and members without a parameter list are never applicable.
pub fn is_applicable<T: ScriptTypeSystem + ?Sized>(
    member: &MemberInfo,
    arg_types: &[TypeRef],
    ts: &T,
) -> bool {
    let Some(params) = member.parameters.as_deref() else {
        return false;
    };
    let assignable = |arg: &TypeRef, expected: &TypeRef| ts.is_assignable(arg, expected);

    matches_fixed_arity(params, arg_types, assignable)
        || matches_varargs_arity(params, arg_types, assignable)
}

/// Whether `member` can serve as a property read: a method with no
/// parameters and a value-returning type.
///
/// `isX` getters must also return a boolean.
pub fn is_applicable_getter(member: &MemberInfo) -> bool {
    if !member.is_method() || member.arity() != 0 || member.type_ref.is_void() {
        return false;
    }
    if crate::accessor::is_boolean_getter_name(&member.name) {
        return member.type_ref.is_boolean();
    }
    true
}

/// Whether `member` can serve as a property write of the call's single
/// argument: a one-parameter method accepting that argument.
pub fn is_applicable_setter<T: ScriptTypeSystem + ?Sized>(
    member: &MemberInfo,
    arg_types: &[TypeRef],
    ts: &T,
) -> bool {
    if !member.is_method() {
        return false;
    }
    match (member.parameters.as_deref(), arg_types) {
        (Some([param]), [value]) => ts.is_assignable(value, &param.type_ref),
        _ => false,
    }
}

fn matches_fixed_arity<F>(params: &[ParameterInfo], arg_types: &[TypeRef], mut matches: F) -> bool
where
    F: FnMut(&TypeRef, &TypeRef) -> bool,
{
    if params.len() != arg_types.len() {
        return false;
    }

    params
        .iter()
        .zip(arg_types.iter())
        .all(|(p, a)| matches(a, &p.type_ref))
}

fn matches_varargs_arity<F>(params: &[ParameterInfo], arg_types: &[TypeRef], mut matches: F) -> bool
where
    F: FnMut(&TypeRef, &TypeRef) -> bool,
{
    let Some(last_param) = params.last() else {
        return false;
    };

    if !last_param.is_varargs {
        return false;
    }

    let TypeRef::Array {
        element,
        dimensions,
    } = &last_param.type_ref
    else {
        return false;
    };

    let fixed_count = params.len() - 1;
    if arg_types.len() < fixed_count {
        return false;
    }

    // Prefix arguments (before varargs tail)
    if !params[..fixed_count]
        .iter()
        .zip(arg_types[..fixed_count].iter())
        .all(|(p, a)| matches(a, &p.type_ref))
    {
        return false;
    }

    // No varargs arguments provided
    if arg_types.len() == fixed_count {
        return true;
    }

    // Direct array pass-through: foo(String[]) called with one String[] argument.
    if arg_types.len() == params.len() && matches(&arg_types[fixed_count], &last_param.type_ref) {
        return true;
    }

    // Expanded varargs: foo(String...) called with N String arguments.
    let element = if *dimensions > 1 {
        TypeRef::Array {
            element: element.clone(),
            dimensions: dimensions - 1,
        }
    } else {
        element.as_ref().clone()
    };
    arg_types[fixed_count..].iter().all(|a| matches(a, &element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::noop::NoOpTypeSystem;

    fn string() -> TypeRef {
        TypeRef::id("java.lang.String")
    }

    fn method(params: Vec<ParameterInfo>) -> MemberInfo {
        MemberInfo::method("A", "m", params, TypeRef::void())
    }

    #[test]
    fn fixed_arity_requires_matching_count() {
        let m = method(vec![ParameterInfo::new("s", string())]);
        assert!(is_applicable(&m, &[string()], &NoOpTypeSystem));
        assert!(!is_applicable(&m, &[], &NoOpTypeSystem));
        assert!(!is_applicable(&m, &[string(), string()], &NoOpTypeSystem));
        assert!(!is_applicable(&m, &[TypeRef::raw("int")], &NoOpTypeSystem));
    }

    #[test]
    fn varargs_accept_empty_expanded_and_array_tails() {
        let m = method(vec![
            ParameterInfo::new("first", TypeRef::raw("int")),
            ParameterInfo::varargs("rest", string()),
        ]);
        let ts = NoOpTypeSystem;
        assert!(is_applicable(&m, &[TypeRef::raw("int")], &ts));
        assert!(is_applicable(&m, &[TypeRef::raw("int"), string(), string()], &ts));
        assert!(is_applicable(&m, &[TypeRef::raw("int"), TypeRef::array_of(string())], &ts));
        assert!(!is_applicable(&m, &[string()], &ts));
    }

    #[test]
    fn fields_are_never_applicable() {
        let f = MemberInfo::field("A", "m", string());
        assert!(!is_applicable(&f, &[], &NoOpTypeSystem));
    }

    #[test]
    fn getters_need_zero_params_and_a_value() {
        let getter = MemberInfo::method("A", "getName", vec![], string());
        let void_getter = MemberInfo::method("A", "getName", vec![], TypeRef::void());
        let is_getter = MemberInfo::method("A", "isEnabled", vec![], TypeRef::raw("boolean"));
        let bad_is_getter = MemberInfo::method("A", "isEnabled", vec![], string());
        assert!(is_applicable_getter(&getter));
        assert!(!is_applicable_getter(&void_getter));
        assert!(is_applicable_getter(&is_getter));
        assert!(!is_applicable_getter(&bad_is_getter));
    }

    #[test]
    fn setters_take_exactly_the_assigned_value() {
        let setter = MemberInfo::method(
            "A",
            "setName",
            vec![ParameterInfo::new("v", string())],
            TypeRef::void(),
        );
        let ts = NoOpTypeSystem;
        assert!(is_applicable_setter(&setter, &[string()], &ts));
        assert!(is_applicable_setter(&setter, &[TypeRef::Unknown], &ts));
        assert!(!is_applicable_setter(&setter, &[], &ts));
        assert!(!is_applicable_setter(&setter, &[string(), string()], &ts));
        assert!(!is_applicable_setter(&setter, &[TypeRef::raw("int")], &ts));
    }
}
