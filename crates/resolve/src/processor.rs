//! Callback protocol for reporting candidates.

use dslscope_api::models::MemberInfo;

/// Answer of a processor after seeing one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn is_stop(self) -> bool {
        self == Flow::Stop
    }
}

/// Receives every surviving candidate together with the caller's state `S`.
///
/// Returning [`Flow::Stop`] ends the resolution immediately.
pub trait DeclarationProcessor<S> {
    fn execute(&mut self, member: &MemberInfo, state: &mut S) -> Flow;
}

impl<S, F> DeclarationProcessor<S> for F
where
    F: FnMut(&MemberInfo, &mut S) -> Flow,
{
    fn execute(&mut self, member: &MemberInfo, state: &mut S) -> Flow {
        self(member, state)
    }
}

/// Collects candidates in report order, optionally stopping after `limit`.
#[derive(Debug, Default)]
pub struct CollectingProcessor {
    pub candidates: Vec<MemberInfo>,
    limit: Option<usize>,
}

impl CollectingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            candidates: vec![],
            limit: Some(limit),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.candidates.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn into_candidates(self) -> Vec<MemberInfo> {
        self.candidates
    }
}

impl<S> DeclarationProcessor<S> for CollectingProcessor {
    fn execute(&mut self, member: &MemberInfo, _state: &mut S) -> Flow {
        self.candidates.push(member.clone());
        match self.limit {
            Some(limit) if self.candidates.len() >= limit => Flow::Stop,
            _ => Flow::Continue,
        }
    }
}
