use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a closure consults its owner and its delegate.
///
/// Declaration resolution only distinguishes `OwnerOnly`: with any other
/// strategy a delegate that can serve a call claims it ahead of the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DelegationStrategy {
    OwnerFirst,
    #[default]
    DelegateFirst,
    OwnerOnly,
    DelegateOnly,
}

impl DelegationStrategy {
    /// Whether a call inside the closure may be claimed by its delegate.
    pub fn consults_delegate(self) -> bool {
        !matches!(self, DelegationStrategy::OwnerOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DelegateTarget {
    /// Qualified (or simple) name of the delegate type
    #[serde(rename = "type")]
    pub fqn: String,
    #[serde(default)]
    pub strategy: DelegationStrategy,
}

impl DelegateTarget {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            strategy: DelegationStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: DelegationStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Effective receiver of a closure: either none, or a fully specified target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DelegationInfo {
    #[default]
    NoDelegate,
    DelegateTo(DelegateTarget),
}

impl DelegationInfo {
    pub fn to(fqn: impl Into<String>) -> Self {
        DelegationInfo::DelegateTo(DelegateTarget::new(fqn))
    }

    pub fn target(&self) -> Option<&DelegateTarget> {
        match self {
            DelegationInfo::DelegateTo(target) => Some(target),
            DelegationInfo::NoDelegate => None,
        }
    }
}

impl From<Option<DelegateTarget>> for DelegationInfo {
    fn from(value: Option<DelegateTarget>) -> Self {
        value.map_or(DelegationInfo::NoDelegate, DelegationInfo::DelegateTo)
    }
}
