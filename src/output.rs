//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::filter::{Decision, Filter};

/// A candidate name paired with the chain's decision about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a> {
    pub name: &'a str,
    pub decision: Decision,
}

impl<'a> Verdict<'a> {
    /// Evaluate every name against `filter`
    pub fn collect<S>(filter: &Filter, names: &'a [S]) -> Vec<Verdict<'a>>
    where
        S: AsRef<str> + Sync,
    {
        filter
            .decide_all(names)
            .into_iter()
            .zip(names)
            .map(|(decision, name)| Verdict {
                name: name.as_ref(),
                decision,
            })
            .collect()
    }
}

/// Count of (accepted, rejected) verdicts
pub fn tally(verdicts: &[Verdict<'_>]) -> (usize, usize) {
    let accepted = verdicts.iter().filter(|v| v.decision.accepted).count();
    (accepted, verdicts.len() - accepted)
}
