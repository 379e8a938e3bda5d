//! Mock implementation of ScriptTypeSystem for testing.

#![allow(dead_code)]

use std::collections::HashMap;

use dslscope_api::models::{
    MemberInfo, ParameterInfo, TypeInfo, TypeRef, TypeResolutionContext,
};
use dslscope_resolve::{InheritanceProvider, MemberProvider, TypeProvider};

/// A mock type system for testing.
///
/// Can be built using a fluent API. Member order is insertion order.
#[derive(Default)]
pub struct MockTypeSystem {
    types: HashMap<String, TypeInfo>,
}

impl MockTypeSystem {
    /// Create a new empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class to the mock.
    pub fn add_class(mut self, fqn: &str, super_class: Option<&str>) -> Self {
        self.types.insert(
            fqn.to_string(),
            TypeInfo {
                super_class: super_class.map(|s| s.to_string()),
                ..TypeInfo::class(fqn)
            },
        );
        self
    }

    /// Add an interface to the mock.
    pub fn add_interface(mut self, fqn: &str) -> Self {
        self.types
            .insert(fqn.to_string(), TypeInfo::interface(fqn));
        self
    }

    /// Add interface implementation to a class.
    pub fn implements(mut self, class_fqn: &str, interface_fqn: &str) -> Self {
        if !self.types.contains_key(interface_fqn) {
            self = self.add_interface(interface_fqn);
        }
        self.type_mut(class_fqn)
            .interfaces
            .push(interface_fqn.to_string());
        self
    }

    /// Add a method. Parameter and return types are type texts, e.g. `int`
    /// or `java.lang.String`.
    pub fn add_method(mut self, class_fqn: &str, name: &str, params: &[&str], return_type: &str) -> Self {
        let params = params
            .iter()
            .enumerate()
            .map(|(i, p)| ParameterInfo::new(format!("arg{}", i), ty(p)))
            .collect();
        let member = MemberInfo::method(class_fqn, name, params, ty(return_type));
        self.type_mut(class_fqn).members.push(member);
        self
    }

    /// Add a `T...` method.
    pub fn add_varargs_method(mut self, class_fqn: &str, name: &str, element: &str) -> Self {
        let member = MemberInfo::method(
            class_fqn,
            name,
            vec![ParameterInfo::varargs("args", ty(element))],
            TypeRef::void(),
        );
        self.type_mut(class_fqn).members.push(member);
        self
    }

    /// Add a field to a class.
    pub fn add_field(mut self, class_fqn: &str, name: &str, field_type: &str) -> Self {
        let member = MemberInfo::field(class_fqn, name, ty(field_type));
        self.type_mut(class_fqn).members.push(member);
        self
    }

    fn type_mut(&mut self, fqn: &str) -> &mut TypeInfo {
        self.types
            .get_mut(fqn)
            .unwrap_or_else(|| panic!("type {} not added to mock", fqn))
    }
}

pub fn ty(text: &str) -> TypeRef {
    text.parse()
        .unwrap_or_else(|e| panic!("bad type text {}: {}", text, e))
}

impl TypeProvider for MockTypeSystem {
    fn get_type_info(&self, fqn: &str) -> Option<TypeInfo> {
        self.types.get(fqn).cloned()
    }

    fn resolve_type_name(
        &self,
        simple_name: &str,
        context: &TypeResolutionContext,
    ) -> Option<String> {
        context
            .candidate_fqns(simple_name)
            .into_iter()
            .find(|fqn| self.types.contains_key(fqn))
    }
}

impl InheritanceProvider for MockTypeSystem {
    fn get_superclass(&self, fqn: &str) -> Option<String> {
        self.types.get(fqn)?.super_class.clone()
    }

    fn get_interfaces(&self, fqn: &str) -> Vec<String> {
        self.types
            .get(fqn)
            .map(|t| t.interfaces.clone())
            .unwrap_or_default()
    }
}

impl MemberProvider for MockTypeSystem {
    fn get_members(&self, type_fqn: &str, member_name: &str) -> Vec<MemberInfo> {
        self.types
            .get(type_fqn)
            .map(|t| {
                t.members
                    .iter()
                    .filter(|m| m.name == member_name)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_all_members(&self, type_fqn: &str) -> Vec<MemberInfo> {
        self.types
            .get(type_fqn)
            .map(|t| t.members.clone())
            .unwrap_or_default()
    }
}
