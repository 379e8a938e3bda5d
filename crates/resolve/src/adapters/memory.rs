//! A type system held entirely in memory, loadable from a JSON universe file.
//!
//! ```json
//! {
//!   "imports": ["org.gradle.api.*"],
//!   "types": [
//!     {
//!       "fqn": "org.gradle.api.Project",
//!       "kind": "interface",
//!       "members": [
//!         { "name": "getVersion", "type": "java.lang.Object", "parameters": [] },
//!         { "name": "setVersion", "type": "void",
//!           "parameters": [{ "name": "version", "type": "java.lang.Object" }] }
//!       ]
//!     }
//!   ],
//!   "closures": [{ "scope": 1, "type": "org.gradle.api.artifacts.dsl.DependencyHandler" }]
//! }
//! ```

use std::path::Path;

use dslscope_api::error::{ApiError, ApiResult};
use dslscope_api::models::{
    DelegateTarget, MemberInfo, MemberKind, ScopeId, TypeInfo, TypeResolutionContext,
};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::type_system::{InheritanceProvider, MemberProvider, TypeProvider};
use crate::delegation::ExplicitDelegation;

/// Serialized description of the types visible to a script.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TypeUniverse {
    /// Imports used to resolve simple delegate type names
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeInfo>,
    /// Closure delegates keyed by closure scope id
    #[serde(default)]
    pub closures: Vec<ClosureDelegate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClosureDelegate {
    pub scope: ScopeId,
    #[serde(flatten)]
    pub target: DelegateTarget,
}

impl TypeUniverse {
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ApiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let universe = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            types = universe.types.len(),
            closures = universe.closures.len(),
            "loaded type universe"
        );
        Ok(universe)
    }

    pub fn type_system(&self) -> ApiResult<InMemoryTypeSystem> {
        let mut ts = InMemoryTypeSystem::new();
        for info in &self.types {
            ts.insert(info.clone())?;
        }
        Ok(ts)
    }

    pub fn delegation(&self) -> ExplicitDelegation {
        self.closures
            .iter()
            .map(|c| (c.scope, c.target.clone()))
            .collect()
    }

    pub fn context(&self) -> TypeResolutionContext {
        TypeResolutionContext::with_imports(self.imports.iter().cloned())
    }
}

/// Types keyed by FQN, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeSystem {
    types: IndexMap<String, TypeInfo>,
}

impl InMemoryTypeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type. Members get `declaring_type` filled in when blank,
    /// and methods or constructors without a parameter list take none.
    pub fn insert(&mut self, mut info: TypeInfo) -> ApiResult<()> {
        if info.fqn.is_empty() {
            return Err(ApiError::InvalidArgument("type with empty fqn".to_string()));
        }
        if self.types.contains_key(&info.fqn) {
            return Err(ApiError::InvalidArgument(format!(
                "duplicate type `{}`",
                info.fqn
            )));
        }
        for member in &mut info.members {
            if member.name.is_empty() {
                return Err(ApiError::InvalidArgument(format!(
                    "member with empty name in `{}`",
                    info.fqn
                )));
            }
            if member.kind != MemberKind::Field && member.parameters.is_none() {
                member.parameters = Some(vec![]);
            }
            if member.declaring_type.is_empty() {
                member.declaring_type = info.fqn.clone();
            } else if member.declaring_type != info.fqn {
                return Err(ApiError::InvalidArgument(format!(
                    "member `{}` listed under `{}`",
                    member.fqn(),
                    info.fqn
                )));
            }
        }
        self.types.insert(info.fqn.clone(), info);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeProvider for InMemoryTypeSystem {
    fn get_type_info(&self, fqn: &str) -> Option<TypeInfo> {
        self.types.get(fqn).cloned()
    }

    fn resolve_type_name(&self, simple_name: &str, context: &TypeResolutionContext) -> Option<String> {
        context
            .candidate_fqns(simple_name)
            .into_iter()
            .find(|fqn| self.types.contains_key(fqn))
    }
}

impl InheritanceProvider for InMemoryTypeSystem {
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

impl MemberProvider for InMemoryTypeSystem {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::type_system::ScriptTypeSystem;
    use crate::delegation::DelegationProvider;
    use crate::prober::DelegateMethodProber;
    use dslscope_api::models::{CallExpression, ClosureScope, DelegationInfo};

    const UNIVERSE: &str = r#"{
        "imports": ["org.gradle.api.*"],
        "types": [
            {
                "fqn": "org.gradle.api.Project",
                "kind": "interface",
                "members": [
                    { "name": "getVersion", "type": "java.lang.Object", "parameters": [] },
                    { "name": "setVersion", "type": "void",
                      "parameters": [{ "name": "version", "type": "java.lang.Object" }] }
                ]
            },
            {
                "fqn": "com.acme.BuildScript",
                "super_class": "com.acme.ScriptBase",
                "interfaces": ["org.gradle.api.Project"]
            },
            { "fqn": "com.acme.ScriptBase" }
        ],
        "closures": [{ "scope": 7, "type": "Project", "strategy": "owner_first" }]
    }"#;

    #[test]
    fn loads_types_members_and_closures() {
        let universe = TypeUniverse::from_json(UNIVERSE).unwrap();
        let ts = universe.type_system().unwrap();
        assert_eq!(ts.len(), 3);

        let setters = ts.get_members("org.gradle.api.Project", "setVersion");
        assert_eq!(setters.len(), 1);
        assert_eq!(setters[0].declaring_type, "org.gradle.api.Project");
        assert_eq!(setters[0].arity(), 1);

        let ancestors: Vec<_> = ts.walk_ancestors("com.acme.BuildScript").collect();
        assert_eq!(ancestors, vec!["com.acme.ScriptBase", "org.gradle.api.Project"]);

        let info = universe.delegation().compute_delegation(&ClosureScope::new(7));
        let DelegationInfo::DelegateTo(target) = info else {
            panic!("expected a delegate");
        };
        assert_eq!(target.fqn, "Project");
        assert_eq!(
            ts.find_type(&target.fqn, &universe.context()).map(|t| t.fqn),
            Some("org.gradle.api.Project".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_types() {
        let universe = TypeUniverse::from_json(
            r#"{ "types": [{ "fqn": "a.A" }, { "fqn": "a.A" }] }"#,
        )
        .unwrap();
        assert!(matches!(
            universe.type_system(),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_members_filed_under_another_type() {
        let universe = TypeUniverse::from_json(
            r#"{ "types": [{ "fqn": "a.A", "members": [
                { "name": "m", "declaring_type": "a.B", "type": "void", "parameters": [] }
            ] }] }"#,
        )
        .unwrap();
        assert!(universe.type_system().is_err());
    }

    #[test]
    fn methods_without_parameter_list_take_none() {
        let universe = TypeUniverse::from_json(
            r#"{ "types": [{ "fqn": "a.Repos", "members": [
                { "name": "mavenCentral", "type": "void" },
                { "name": "url", "kind": "field", "type": "java.lang.Object" }
            ] }] }"#,
        )
        .unwrap();
        let ts = universe.type_system().unwrap();

        let method = &ts.get_members("a.Repos", "mavenCentral")[0];
        assert_eq!(method.parameters, Some(vec![]));
        assert_eq!(ts.get_members("a.Repos", "url")[0].parameters, None);

        let call = CallExpression::new("mavenCentral", vec![]);
        assert!(DelegateMethodProber::new(&ts).can_be_method_of("mavenCentral", &call, "a.Repos"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            TypeUniverse::from_json("{ \"types\": [ }"),
            Err(ApiError::Json(_))
        ));
        assert!(matches!(
            TypeUniverse::from_json(r#"{ "types": [{ "fqn": "a.A", "members": [
                { "name": "m", "type": "List<" } ] }] }"#),
            Err(ApiError::Json(_))
        ));
    }
}
