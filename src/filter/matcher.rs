#![forbid(unsafe_code)]

//! Frozen, thread-safe side of a filter chain

use crate::rules::Rule;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Outcome of evaluating one candidate against a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Whether the candidate passes the chain
    pub accepted: bool,

    /// Index of the last rule that was evaluated
    ///
    /// `None` means no rule was consulted and the chain's default stance
    /// decided (only possible for an empty chain).
    pub rule: Option<usize>,
}

/// An immutable rule chain answering "does this name pass?"
///
/// Evaluation walks the rules in order, with a running accept flag seeded
/// from the first rule: a leading exclude rule makes the chain admit by
/// default, anything else makes it reject by default. While the flag is
/// true include rules are skipped, while it is false exclude rules are
/// skipped; any other rule overwrites the flag with its verdict. A matching
/// exclude rule ends the walk immediately.
///
/// Cloning is cheap and all queries take `&self`, so one filter can serve
/// any number of threads.
#[derive(Clone)]
pub struct Filter {
    rules: Arc<[Rule]>,
}

impl Filter {
    /// A filter without rules; it accepts everything
    pub fn empty() -> Self {
        Self::from_rules(Vec::new())
    }

    pub(crate) fn from_rules(rules: Vec<Rule>) -> Self {
        Filter {
            rules: Arc::from(rules),
        }
    }

    /// Does `candidate` pass the chain?
    pub fn accepts(&self, candidate: &str) -> bool {
        self.decide(candidate).accepted
    }

    /// Evaluate `candidate`, reporting which rule settled the outcome
    pub fn decide(&self, candidate: &str) -> Decision {
        let Some(first) = self.rules.first() else {
            return Decision {
                accepted: true,
                rule: None,
            };
        };

        let mut accept = first.is_exclude();
        let mut deciding = None;

        for (idx, rule) in self.rules.iter().enumerate() {
            if (accept && rule.is_include()) || (!accept && rule.is_exclude()) {
                continue;
            }

            accept = rule.verdict(candidate);
            deciding = Some(idx);

            if !accept && rule.is_exclude() {
                break;
            }
        }

        Decision {
            accepted: accept,
            rule: deciding,
        }
    }

    /// Accepted names, in input order, evaluated in parallel
    pub fn filter_names<'a, S>(&self, names: &'a [S]) -> Vec<&'a str>
    where
        S: AsRef<str> + Sync,
    {
        names
            .par_iter()
            .map(|name| name.as_ref())
            .filter(|name| self.accepts(name))
            .collect()
    }

    /// Split names into `(accepted, rejected)`, each in input order
    pub fn partition<'a, S>(&self, names: &'a [S]) -> (Vec<&'a str>, Vec<&'a str>)
    where
        S: AsRef<str> + Sync,
    {
        names
            .par_iter()
            .map(|name| name.as_ref())
            .partition(|name| self.accepts(name))
    }

    /// One decision per name, in input order, evaluated in parallel
    pub fn decide_all<S>(&self, names: &[S]) -> Vec<Decision>
    where
        S: AsRef<str> + Sync,
    {
        names
            .par_iter()
            .map(|name| self.decide(name.as_ref()))
            .collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, idx: usize) -> Option<&Rule> {
        self.rules.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<crate::filter::FilterBuilder> for Filter {
    fn from(builder: crate::filter::FilterBuilder) -> Self {
        builder.build()
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("rules", &self.rules).finish()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_rules(f, &self.rules)
    }
}
