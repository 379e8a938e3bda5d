//! Declaration resolution for script references.
//!
//! Maps a reference site to the members of a declaring class it may denote,
//! honouring property sugar (`foo` for `getFoo()`/`setFoo(..)`) and closure
//! delegation.
//!
//! # Order of candidates
//!
//! For a read of `n` that is not `set`-shaped:
//! 1. methods named `base(n)` (`n` without a `get` prefix, decapitalised)
//! 2. `void` methods named `set<Base>`
//! 3. only if `n` is a plain name: methods named `get<N>`
//! 4. methods named `n`
//!
//! A `set`-shaped read only runs step 4. A write reports methods named `n`,
//! then one-parameter `set<N>` setters. Across all steps a candidate whose
//! [`SignatureKey`] was already reported is dropped.

use std::collections::HashSet;
use std::ops::ControlFlow;

use dslscope_api::models::{DelegationInfo, MemberInfo, Reference, TypeResolutionContext};
use tracing::{debug, trace};

use crate::accessor;
use crate::core::signature::SignatureKey;
use crate::core::subtyping::box_type_name;
use crate::core::type_system::ScriptTypeSystem;
use crate::delegation::DelegationProvider;
use crate::processor::DeclarationProcessor;
use crate::prober::DelegateMethodProber;

/// Result of one resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// `true`: keep searching elsewhere. `false`: a processor asked to stop.
    pub should_continue: bool,
    /// At least one candidate was reported for the reference.
    pub resolved: bool,
}

impl ResolveOutcome {
    fn finish(flow: ControlFlow<()>, resolved: bool) -> Self {
        Self {
            should_continue: flow.is_continue(),
            resolved,
        }
    }
}

pub struct DeclarationResolver<'a, T: ScriptTypeSystem + ?Sized, D: DelegationProvider + ?Sized> {
    ts: &'a T,
    delegation: &'a D,
    context: TypeResolutionContext,
}

impl<'a, T, D> DeclarationResolver<'a, T, D>
where
    T: ScriptTypeSystem + ?Sized,
    D: DelegationProvider + ?Sized,
{
    pub fn new(ts: &'a T, delegation: &'a D) -> Self {
        Self {
            ts,
            delegation,
            context: TypeResolutionContext::default(),
        }
    }

    /// Context used to resolve simple delegate type names.
    pub fn with_context(mut self, context: TypeResolutionContext) -> Self {
        self.context = context;
        self
    }

    /// Resolves `reference` by its own name against `class_fqn`.
    pub fn resolve<S, P>(
        &self,
        class_fqn: &str,
        reference: &Reference,
        state: &mut S,
        processor: &mut P,
    ) -> ResolveOutcome
    where
        P: DeclarationProcessor<S> + ?Sized,
    {
        self.process_declarations(class_fqn, reference, Some(&reference.name), state, processor)
    }

    /// Reports the members of `class_fqn` that `reference` may denote.
    ///
    /// Without a name hint every member of the class is reported.
    pub fn process_declarations<S, P>(
        &self,
        class_fqn: &str,
        reference: &Reference,
        name_hint: Option<&str>,
        state: &mut S,
        processor: &mut P,
    ) -> ResolveOutcome
    where
        P: DeclarationProcessor<S> + ?Sized,
    {
        let mut reporter = Reporter {
            processor,
            state,
            seen: HashSet::new(),
            resolved: false,
        };

        let flow = match name_hint {
            None => self.process_all(class_fqn, &mut reporter),
            Some(name) => {
                if self.delegate_claims(class_fqn, reference, name) {
                    debug!(name, class = class_fqn, "deferring call to closure delegate");
                    return ResolveOutcome::finish(ControlFlow::Continue(()), false);
                }
                if reference.is_write() {
                    self.process_write(class_fqn, name, &mut reporter)
                } else {
                    self.process_read(class_fqn, name, &mut reporter)
                }
            }
        };

        ResolveOutcome::finish(flow, reporter.resolved)
    }

    fn process_all<S, P>(&self, class_fqn: &str, reporter: &mut Reporter<'_, S, P>) -> ControlFlow<()>
    where
        P: DeclarationProcessor<S> + ?Sized,
    {
        for member in self.ts.find_all_members(class_fqn) {
            reporter.emit(&member)?;
        }
        ControlFlow::Continue(())
    }

    fn process_write<S, P>(
        &self,
        class_fqn: &str,
        name: &str,
        reporter: &mut Reporter<'_, S, P>,
    ) -> ControlFlow<()>
    where
        P: DeclarationProcessor<S> + ?Sized,
    {
        reporter.report(self.ts.find_methods(class_fqn, name, true), |_| true)?;

        if !name.is_empty() && !accessor::is_setter_name(name) {
            let setter = accessor::to_setter_name(name);
            reporter.report(self.ts.find_methods(class_fqn, &setter, true), |m| {
                m.arity() == 1
            })?;
        }
        ControlFlow::Continue(())
    }

    fn process_read<S, P>(
        &self,
        class_fqn: &str,
        name: &str,
        reporter: &mut Reporter<'_, S, P>,
    ) -> ControlFlow<()>
    where
        P: DeclarationProcessor<S> + ?Sized,
    {
        if name.is_empty() {
            return ControlFlow::Continue(());
        }

        if !accessor::is_setter_name(name) {
            let base = accessor::to_base_name(name);
            reporter.report(self.ts.find_methods(class_fqn, &base, true), |_| true)?;

            let setter = accessor::to_setter_name(&base);
            reporter.report(self.ts.find_methods(class_fqn, &setter, true), |m| {
                m.type_ref.is_void()
            })?;

            if !accessor::is_getter_name(name) {
                let getter = accessor::to_getter_name(name);
                reporter.report(self.ts.find_methods(class_fqn, &getter, true), |_| true)?;
            }
        }

        reporter.report(self.ts.find_methods(class_fqn, name, true), |_| true)
    }

    /// Whether the nearest delegating closure delegates to a type other than
    /// `class_fqn` that can serve this call by itself.
    fn delegate_claims(&self, class_fqn: &str, reference: &Reference, name: &str) -> bool {
        if reference.textual_candidates != 1 {
            return false;
        }
        // Closures without a delegate resolve through their owner, so the
        // nearest closure that delegates decides.
        let delegated = reference
            .enclosing_closures
            .iter()
            .find_map(|scope| match self.delegation.compute_delegation(scope) {
                DelegationInfo::NoDelegate => None,
                DelegationInfo::DelegateTo(target) => Some(target),
            });
        let Some(target) = delegated else {
            return false;
        };
        if !target.strategy.consults_delegate() {
            return false;
        }

        let Some(delegate) = self.ts.find_type(box_type_name(&target.fqn), &self.context) else {
            debug!(delegate = %target.fqn, "delegate type not found, ignoring delegation");
            return false;
        };
        if delegate.fqn == class_fqn {
            return false;
        }

        let Some(call) = reference.call_expression() else {
            return false;
        };
        DelegateMethodProber::new(self.ts).can_be_method_of(name, call, &delegate.fqn)
    }
}

/// Reports candidates to the processor, dropping repeated signature keys.
struct Reporter<'p, S, P: ?Sized> {
    processor: &'p mut P,
    state: &'p mut S,
    seen: HashSet<SignatureKey>,
    resolved: bool,
}

impl<S, P> Reporter<'_, S, P>
where
    P: DeclarationProcessor<S> + ?Sized,
{
    fn report<F>(&mut self, members: Vec<MemberInfo>, accept: F) -> ControlFlow<()>
    where
        F: Fn(&MemberInfo) -> bool,
    {
        for member in members.iter().filter(|m| accept(m)) {
            if !self.seen.insert(SignatureKey::of(member)) {
                trace!(member = %member.fqn(), "dropping duplicate signature");
                continue;
            }
            self.emit(member)?;
        }
        ControlFlow::Continue(())
    }

    fn emit(&mut self, member: &MemberInfo) -> ControlFlow<()> {
        self.resolved = true;
        trace!(member = %member.fqn(), "reporting candidate");
        if self.processor.execute(member, self.state).is_stop() {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}
