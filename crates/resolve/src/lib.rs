//! Declaration resolution for closure-delegating build scripts.
//!
//! # Architecture
//!
//! ```text
//! DeclarationResolver        →  read/write classification, candidate order, dedup
//!       │        │
//!       │        ▼
//!       │  DelegateMethodProber  →  can the closure delegate serve this call?
//!       ▼
//! ScriptTypeSystem (trait)   →  type/member lookup, applicability
//! DelegationProvider (trait) →  closure scope → delegate type
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use dslscope_resolve::{CollectingProcessor, DeclarationResolver, NoDelegation};
//!
//! let resolver = DeclarationResolver::new(&type_system, &NoDelegation);
//! let mut found = CollectingProcessor::new();
//! let outcome = resolver.resolve("com.acme.Script", &reference, &mut (), &mut found);
//! ```

pub mod accessor;
pub mod adapters;
pub mod core;
pub mod delegation;
pub mod gradle;
pub mod processor;
pub mod prober;
pub mod resolver;

// Re-export public API
pub use crate::core::signature::SignatureKey;
pub use crate::core::type_system::{InheritanceProvider, MemberProvider, ScriptTypeSystem, TypeProvider};

pub use adapters::{InMemoryTypeSystem, NoOpTypeSystem, TypeUniverse};
pub use delegation::{DelegationProvider, ExplicitDelegation, NoDelegation};
pub use gradle::GradleDslDelegation;
pub use processor::{CollectingProcessor, DeclarationProcessor, Flow};
pub use prober::{DelegateMethodProber, ProbeHit};
pub use resolver::{DeclarationResolver, ResolveOutcome};
