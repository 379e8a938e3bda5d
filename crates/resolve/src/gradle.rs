//! Delegation for Gradle build scripts.
//!
//! Gradle configures well-known script blocks (`dependencies { }`,
//! `repositories { }`, ...) by running the closure with a handler object as
//! its delegate, resolving delegate-first.

use std::collections::HashMap;

use dslscope_api::models::{
    ClosureScope, DelegateTarget, DelegationInfo, DelegationStrategy, TypeResolutionContext,
};
use once_cell::sync::Lazy;

use crate::delegation::{DelegationProvider, ExplicitDelegation};

/// Script block method name -> handler type the block's closure delegates to.
static KNOWN_BLOCKS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("dependencies", "org.gradle.api.artifacts.dsl.DependencyHandler"),
        ("repositories", "org.gradle.api.artifacts.dsl.RepositoryHandler"),
        ("buildscript", "org.gradle.api.initialization.dsl.ScriptHandler"),
        ("allprojects", "org.gradle.api.Project"),
        ("subprojects", "org.gradle.api.Project"),
        ("configurations", "org.gradle.api.artifacts.ConfigurationContainer"),
        ("artifacts", "org.gradle.api.artifacts.dsl.ArtifactHandler"),
        ("plugins", "org.gradle.plugin.use.PluginDependenciesSpec"),
        ("sourceSets", "org.gradle.api.tasks.SourceSetContainer"),
        ("tasks", "org.gradle.api.tasks.TaskContainer"),
        ("java", "org.gradle.api.plugins.JavaPluginExtension"),
        ("publishing", "org.gradle.api.publish.PublishingExtension"),
        ("pluginManagement", "org.gradle.plugin.management.PluginManagementSpec"),
        (
            "dependencyResolutionManagement",
            "org.gradle.api.initialization.resolve.DependencyResolutionManagement",
        ),
    ])
});

/// Packages every Gradle script imports implicitly.
pub const DEFAULT_IMPORTS: &[&str] = &[
    "org.gradle.api.*",
    "org.gradle.api.artifacts.*",
    "org.gradle.api.artifacts.dsl.*",
    "org.gradle.api.initialization.*",
    "org.gradle.api.plugins.*",
    "org.gradle.api.tasks.*",
    "java.lang.*",
    "java.util.*",
    "groovy.lang.*",
];

/// Type resolution context of a Gradle build script.
pub fn script_context() -> TypeResolutionContext {
    TypeResolutionContext::with_imports(DEFAULT_IMPORTS.iter().copied())
}

/// Handler type for a script block name, if Gradle knows it.
pub fn block_delegate(method: &str) -> Option<&'static str> {
    KNOWN_BLOCKS.get(method).copied()
}

/// Computes closure delegates for Gradle script blocks.
///
/// Explicitly registered scopes win over the built-in block table.
#[derive(Debug, Clone, Default)]
pub struct GradleDslDelegation {
    overrides: ExplicitDelegation,
}

impl GradleDslDelegation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: ExplicitDelegation) -> Self {
        Self { overrides }
    }
}

impl DelegationProvider for GradleDslDelegation {
    fn compute_delegation(&self, scope: &ClosureScope) -> DelegationInfo {
        let explicit = self.overrides.compute_delegation(scope);
        if explicit.target().is_some() {
            return explicit;
        }

        scope
            .enclosing_call
            .as_deref()
            .and_then(block_delegate)
            .map(|fqn| DelegateTarget::new(fqn).with_strategy(DelegationStrategy::DelegateFirst))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dslscope_api::models::ScopeId;

    #[test]
    fn known_blocks_delegate_to_their_handlers() {
        let provider = GradleDslDelegation::new();
        let info = provider.compute_delegation(&ClosureScope::block(1, "dependencies"));
        assert_eq!(
            info.target().map(|t| t.fqn.as_str()),
            Some("org.gradle.api.artifacts.dsl.DependencyHandler")
        );
        assert_eq!(
            info.target().map(|t| t.strategy),
            Some(DelegationStrategy::DelegateFirst)
        );
    }

    #[test]
    fn unknown_blocks_and_bare_closures_do_not_delegate() {
        let provider = GradleDslDelegation::new();
        assert_eq!(
            provider.compute_delegation(&ClosureScope::block(1, "myCustomBlock")),
            DelegationInfo::NoDelegate
        );
        assert_eq!(
            provider.compute_delegation(&ClosureScope::new(2)),
            DelegationInfo::NoDelegate
        );
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = ExplicitDelegation::new().with(ScopeId(1), DelegateTarget::new("com.acme.Ext"));
        let provider = GradleDslDelegation::with_overrides(overrides);
        assert_eq!(
            provider.compute_delegation(&ClosureScope::block(1, "dependencies")),
            DelegationInfo::to("com.acme.Ext")
        );
    }

    #[test]
    fn script_context_resolves_gradle_api_names() {
        let candidates = script_context().candidate_fqns("Project");
        assert!(candidates.contains(&"org.gradle.api.Project".to_string()));
    }
}
