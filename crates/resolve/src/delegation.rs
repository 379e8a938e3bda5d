//! Closure delegation collaborators.

use std::collections::HashMap;

use dslscope_api::models::{ClosureScope, DelegateTarget, DelegationInfo, ScopeId};

/// Computes the effective receiver of a closure block.
///
/// Implementations must be side-effect free.
pub trait DelegationProvider: Send + Sync {
    fn compute_delegation(&self, scope: &ClosureScope) -> DelegationInfo;
}

/// No closure ever delegates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelegation;

impl DelegationProvider for NoDelegation {
    fn compute_delegation(&self, _scope: &ClosureScope) -> DelegationInfo {
        DelegationInfo::NoDelegate
    }
}

/// Delegates recorded per closure id.
#[derive(Debug, Clone, Default)]
pub struct ExplicitDelegation {
    targets: HashMap<ScopeId, DelegateTarget>,
}

impl ExplicitDelegation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, scope: ScopeId, target: DelegateTarget) -> Self {
        self.targets.insert(scope, target);
        self
    }

}

impl FromIterator<(ScopeId, DelegateTarget)> for ExplicitDelegation {
    fn from_iter<I: IntoIterator<Item = (ScopeId, DelegateTarget)>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

impl DelegationProvider for ExplicitDelegation {
    fn compute_delegation(&self, scope: &ClosureScope) -> DelegationInfo {
        self.targets.get(&scope.id).cloned().into()
    }
}
