//! Decides whether a call-shaped name could be served by a delegate type.

use dslscope_api::models::{CallExpression, TypeRef};
use tracing::trace;

use crate::accessor;
use crate::core::applicability::{is_applicable_getter, is_applicable_setter};
use crate::core::subtyping::box_type_name;
use crate::core::type_system::ScriptTypeSystem;

/// Which convention made a name resolvable on the delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeHit {
    Method,
    Getter,
    Setter,
}

/// Checks whether `name`, invoked as `call`, can resolve to a method, a
/// getter or a setter of `receiver`.
pub struct DelegateMethodProber<'a, T: ScriptTypeSystem + ?Sized> {
    ts: &'a T,
}

impl<'a, T: ScriptTypeSystem + ?Sized> DelegateMethodProber<'a, T> {
    pub fn new(ts: &'a T) -> Self {
        Self { ts }
    }

    pub fn can_be_method_of(&self, name: &str, call: &CallExpression, receiver: &str) -> bool {
        self.probe(name, call, receiver).is_some()
    }

    /// Like [`can_be_method_of`](Self::can_be_method_of), reporting which
    /// convention matched. A call without an invoked expression never matches.
    pub fn probe(&self, name: &str, call: &CallExpression, receiver: &str) -> Option<ProbeHit> {
        if call.invoked.is_none() {
            trace!(name, "call has no invoked expression");
            return None;
        }
        let args: &[TypeRef] = &call.argument_types;
        let receiver = box_type_name(receiver);

        if !self.ts.applicable_methods(receiver, name, args).is_empty() {
            return Some(ProbeHit::Method);
        }

        let has_getter = accessor::suggest_getter_names(name).iter().any(|getter| {
            self.ts
                .find_methods(receiver, getter, true)
                .iter()
                .any(is_applicable_getter)
        });
        if has_getter {
            return Some(ProbeHit::Getter);
        }

        let has_setter = accessor::suggest_setter_names(name).iter().any(|setter| {
            self.ts
                .find_methods(receiver, setter, true)
                .iter()
                .any(|m| is_applicable_setter(m, args, self.ts))
        });
        has_setter.then_some(ProbeHit::Setter)
    }
}
