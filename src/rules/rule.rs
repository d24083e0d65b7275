#![forbid(unsafe_code)]

//! The Rule type: one polarity-tagged matcher in a chain

use crate::error::PatternError;
use crate::rules::Pattern;
use crate::types::Polarity;
use std::fmt;
use std::sync::Arc;

/// Predicate type wrapped by [`CustomRule`]
pub type NamePredicate = dyn Fn(&str) -> bool + Send + Sync;

/// A caller-supplied predicate with a label for rendering
///
/// Custom rules carry no polarity. A chain always consults them and never
/// stops early because of them.
#[derive(Clone)]
pub struct CustomRule {
    label: String,
    predicate: Arc<NamePredicate>,
}

impl CustomRule {
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        CustomRule {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn test(&self, candidate: &str) -> bool {
        (self.predicate)(candidate)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("label", &self.label)
            .field("predicate", &"<fn>")
            .finish()
    }
}

/// A single rule in a filter chain
///
/// The verdict of a rule is what the chain stores as its running accept
/// flag when the rule is consulted: an include rule votes "accept" on a
/// match, an exclude rule votes "reject" on a match.
#[derive(Debug, Clone)]
pub enum Rule {
    Include(Pattern),
    Exclude(Pattern),
    Custom(CustomRule),
}

impl Rule {
    /// Compile `pattern` into a rule of the given polarity
    ///
    /// # Errors
    ///
    /// Returns `PatternError` if the pattern does not compile.
    pub fn new(polarity: Polarity, pattern: &str) -> Result<Self, PatternError> {
        let pattern = Pattern::new(pattern)?;
        Ok(Self::from_pattern(polarity, pattern))
    }

    pub fn include(pattern: &str) -> Result<Self, PatternError> {
        Self::new(Polarity::Include, pattern)
    }

    pub fn exclude(pattern: &str) -> Result<Self, PatternError> {
        Self::new(Polarity::Exclude, pattern)
    }

    pub fn from_pattern(polarity: Polarity, pattern: Pattern) -> Self {
        match polarity {
            Polarity::Include => Rule::Include(pattern),
            Polarity::Exclude => Rule::Exclude(pattern),
        }
    }

    pub fn custom<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Rule::Custom(CustomRule::new(label, predicate))
    }

    /// Polarity of pattern rules, `None` for custom rules
    pub fn polarity(&self) -> Option<Polarity> {
        match self {
            Rule::Include(_) => Some(Polarity::Include),
            Rule::Exclude(_) => Some(Polarity::Exclude),
            Rule::Custom(_) => None,
        }
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Rule::Include(p) | Rule::Exclude(p) => Some(p),
            Rule::Custom(_) => None,
        }
    }

    pub fn is_include(&self) -> bool {
        matches!(self, Rule::Include(_))
    }

    pub fn is_exclude(&self) -> bool {
        matches!(self, Rule::Exclude(_))
    }

    /// Evaluate the rule against `candidate`
    pub fn verdict(&self, candidate: &str) -> bool {
        match self {
            Rule::Include(p) => p.is_match(candidate),
            Rule::Exclude(p) => !p.is_match(candidate),
            Rule::Custom(c) => c.test(candidate),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Include(p) => write!(f, "+{}", p),
            Rule::Exclude(p) => write!(f, "-{}", p),
            Rule::Custom(c) => write!(f, "?{}", c.label()),
        }
    }
}
