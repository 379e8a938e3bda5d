//! Core trait definitions for the type system abstraction.
//!
//! These traits abstract away the data source, allowing the resolver
//! to work with a loaded universe, a build-tool API index, or mock implementations.

use std::collections::{HashSet, VecDeque};

use dslscope_api::models::{MemberInfo, TypeInfo, TypeRef, TypeResolutionContext};
use tracing::trace;

use super::applicability;
use super::signature::SignatureKey;

/// Provides type information by FQN.
///
/// This is the primary way to look up type metadata.
pub trait TypeProvider: Send + Sync {
    /// Get type info for a fully qualified name.
    ///
    /// Returns `None` if the type is not found.
    fn get_type_info(&self, fqn: &str) -> Option<TypeInfo>;

    /// Resolve a simple type name to its FQN.
    ///
    /// Uses the provided context (imports, package) to resolve the name.
    fn resolve_type_name(&self, simple_name: &str, context: &TypeResolutionContext)
    -> Option<String>;
}

/// Provides inheritance relationship information.
pub trait InheritanceProvider: Send + Sync {
    /// Get the direct superclass of a type.
    ///
    /// Returns `None` for `java.lang.Object` or interfaces.
    fn get_superclass(&self, fqn: &str) -> Option<String>;

    /// Get the interfaces directly implemented by a type.
    fn get_interfaces(&self, fqn: &str) -> Vec<String>;

    /// Walk all ancestor types (superclasses and interfaces) in BFS order.
    ///
    /// The superclass of a type is visited before its interfaces.
    fn walk_ancestors(&self, fqn: &str) -> Box<dyn Iterator<Item = String> + '_> {
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut out = Vec::new();

        visited.insert(fqn.to_string());
        queue.extend(self.direct_supertypes(fqn));

        while let Some(curr) = queue.pop_front() {
            if !visited.insert(curr.clone()) {
                continue;
            }
            queue.extend(self.direct_supertypes(&curr));
            out.push(curr);
        }

        Box::new(out.into_iter())
    }

    fn direct_supertypes(&self, fqn: &str) -> Vec<String> {
        let mut parents: Vec<String> = self.get_superclass(fqn).into_iter().collect();
        parents.extend(self.get_interfaces(fqn));
        parents
    }
}

/// Provides member (field/method) lookup.
///
/// This is used to find members within a single type (not walking inheritance).
pub trait MemberProvider: Send + Sync {
    /// Find all members directly declared in the given type with the matching name.
    ///
    /// Does NOT search the inheritance hierarchy.
    fn get_members(&self, type_fqn: &str, member_name: &str) -> Vec<MemberInfo>;

    /// Get all members directly declared in the given type.
    fn get_all_members(&self, type_fqn: &str) -> Vec<MemberInfo>;
}

/// The combined type system interface used by the resolver.
pub trait ScriptTypeSystem: TypeProvider + InheritanceProvider + MemberProvider {
    /// Look a type up by qualified name, falling back to simple-name resolution.
    fn find_type(&self, name: &str, context: &TypeResolutionContext) -> Option<TypeInfo> {
        if let Some(info) = self.get_type_info(name) {
            return Some(info);
        }
        let fqn = self.resolve_type_name(name, context)?;
        self.get_type_info(&fqn)
    }

    /// Methods named `name`: declared ones first, then each ancestor in BFS order.
    ///
    /// Overrides are NOT collapsed; a method redeclared down the hierarchy
    /// shows up once per declaring type.
    fn find_methods(&self, type_fqn: &str, name: &str, include_inherited: bool) -> Vec<MemberInfo> {
        let mut methods: Vec<MemberInfo> = self
            .get_members(type_fqn, name)
            .into_iter()
            .filter(MemberInfo::is_method)
            .collect();

        if include_inherited {
            for ancestor in self.walk_ancestors(type_fqn) {
                methods.extend(
                    self.get_members(&ancestor, name)
                        .into_iter()
                        .filter(MemberInfo::is_method),
                );
            }
        }

        methods
    }

    /// Every member visible on `type_fqn`, most-derived first.
    ///
    /// A member whose name, kind and signature key match an earlier one is
    /// an override and is dropped.
    fn find_all_members(&self, type_fqn: &str) -> Vec<MemberInfo> {
        let mut seen = HashSet::new();
        let mut members = Vec::new();

        let own = std::iter::once(type_fqn.to_string());
        for owner in own.chain(self.walk_ancestors(type_fqn)) {
            for member in self.get_all_members(&owner) {
                let key = (member.name.clone(), member.kind, SignatureKey::of(&member));
                if seen.insert(key) {
                    members.push(member);
                } else {
                    trace!(member = %member.fqn(), "dropping overridden member");
                }
            }
        }

        members
    }

    /// Methods named `name` on `type_fqn` (inherited included) that accept `arg_types`.
    fn applicable_methods(&self, type_fqn: &str, name: &str, arg_types: &[TypeRef]) -> Vec<MemberInfo> {
        self.find_methods(type_fqn, name, true)
            .into_iter()
            .filter(|m| applicability::is_applicable(m, arg_types, self))
            .collect()
    }

    /// Check if a value of type `arg` can be passed where `param` is expected.
    fn is_assignable(&self, arg: &TypeRef, param: &TypeRef) -> bool {
        super::subtyping::is_assignable(arg, param, self)
    }
}

// Blanket implementation: any type implementing all three traits gets ScriptTypeSystem
impl<T: TypeProvider + InheritanceProvider + MemberProvider> ScriptTypeSystem for T {}
