use dslscope_api::models::MemberInfo;
use dslscope_resolve::ResolveOutcome;
use serde::Serialize;
use tabled::Tabled;

/// A table row for one reported member
#[derive(Tabled)]
pub struct CandidateView {
    #[tabled(rename = "#")]
    pub index: usize,
    pub kind: String,
    pub signature: String,
    #[tabled(rename = "declared in")]
    pub declared_in: String,
}

impl CandidateView {
    pub fn from_member(index: usize, member: &MemberInfo) -> Self {
        Self {
            index,
            kind: member.kind.to_string(),
            signature: member.signature(),
            declared_in: member.declaring_type.clone(),
        }
    }
}

pub fn candidate_rows(members: &[MemberInfo]) -> Vec<CandidateView> {
    members
        .iter()
        .enumerate()
        .map(|(i, m)| CandidateView::from_member(i + 1, m))
        .collect()
}

/// JSON shape of a `resolve` run
#[derive(Serialize)]
pub struct ResolveReport<'a> {
    pub class: &'a str,
    pub should_continue: bool,
    pub resolved: bool,
    pub candidates: &'a [MemberInfo],
}

impl<'a> ResolveReport<'a> {
    pub fn new(class: &'a str, outcome: ResolveOutcome, candidates: &'a [MemberInfo]) -> Self {
        Self {
            class,
            should_continue: outcome.should_continue,
            resolved: outcome.resolved,
            candidates,
        }
    }
}
