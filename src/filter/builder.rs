#![forbid(unsafe_code)]

//! Mutable construction side of a filter chain

use crate::error::PatternError;
use crate::filter::Filter;
use crate::rules::{Pattern, Rule, namespace_of};
use crate::types::Polarity;
use std::fmt;

/// Collects rules in evaluation order until [`FilterBuilder::build`] freezes them
///
/// Append operations return `&mut Self` so they can be chained; the
/// pattern-compiling ones wrap it in a `Result` and leave the builder
/// untouched on error.
///
/// ```
/// use namefilter::FilterBuilder;
///
/// let mut builder = FilterBuilder::new();
/// builder.include("com\\.example\\..*")?.exclude(".*Test")?;
/// let filter = builder.build();
///
/// assert!(filter.accepts("com.example.Widget"));
/// assert!(!filter.accepts("com.example.WidgetTest"));
/// # Ok::<(), namefilter::PatternError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    rules: Vec<Rule>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        FilterBuilder { rules: Vec::new() }
    }

    /// Append an include rule compiled from `pattern`
    pub fn include(&mut self, pattern: &str) -> Result<&mut Self, PatternError> {
        self.push_compiled(Polarity::Include, Pattern::new(pattern))
    }

    /// Append an exclude rule compiled from `pattern`
    pub fn exclude(&mut self, pattern: &str) -> Result<&mut Self, PatternError> {
        self.push_compiled(Polarity::Exclude, Pattern::new(pattern))
    }

    /// Append a pre-built rule
    pub fn add(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Append a custom predicate rule
    pub fn add_fn<F>(&mut self, label: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.add(Rule::custom(label, predicate))
    }

    /// Include everything starting with the literal `prefix`
    pub fn include_package(&mut self, prefix: &str) -> Result<&mut Self, PatternError> {
        self.push_compiled(Polarity::Include, Pattern::literal_prefix(prefix))
    }

    /// Exclude everything starting with the literal `prefix`
    pub fn exclude_package(&mut self, prefix: &str) -> Result<&mut Self, PatternError> {
        self.push_compiled(Polarity::Exclude, Pattern::literal_prefix(prefix))
    }

    /// Include every name living in the same namespace as `qualified_name`
    pub fn include_namespace_of(
        &mut self,
        qualified_name: &str,
    ) -> Result<&mut Self, PatternError> {
        self.include_package(&namespace_of(qualified_name))
    }

    /// Exclude every name living in the same namespace as `qualified_name`
    pub fn exclude_namespace_of(
        &mut self,
        qualified_name: &str,
    ) -> Result<&mut Self, PatternError> {
        self.exclude_package(&namespace_of(qualified_name))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Freeze the chain; the result can be shared across threads
    pub fn build(self) -> Filter {
        Filter::from_rules(self.rules)
    }

    fn push_compiled(
        &mut self,
        polarity: Polarity,
        pattern: Result<Pattern, PatternError>,
    ) -> Result<&mut Self, PatternError> {
        let pattern = pattern?;
        self.rules.push(Rule::from_pattern(polarity, pattern));
        Ok(self)
    }
}

impl From<Vec<Rule>> for FilterBuilder {
    fn from(rules: Vec<Rule>) -> Self {
        FilterBuilder { rules }
    }
}

impl FromIterator<Rule> for FilterBuilder {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        FilterBuilder {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for FilterBuilder {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl fmt::Display for FilterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_rules(f, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_chaining() {
        let mut builder = FilterBuilder::new();
        builder
            .include("a.*")
            .unwrap()
            .exclude("a\\.secret.*")
            .unwrap()
            .add_fn("never", |_| false);

        assert_eq!(builder.len(), 3);
        assert!(builder.rules()[0].is_include());
        assert!(builder.rules()[1].is_exclude());
        assert_eq!(builder.rules()[2].polarity(), None);
    }

    #[test]
    fn test_invalid_pattern_leaves_builder_unchanged() {
        let mut builder = FilterBuilder::new();
        builder.include("ok").unwrap();

        let err = builder.exclude("[unclosed").unwrap_err();
        assert_eq!(err.pattern, "[unclosed");
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.to_string(), "+ok");
    }

    #[test]
    fn test_package_helpers_escape_prefix() {
        let mut builder = FilterBuilder::new();
        builder.include_package("com.example.").unwrap();
        builder.exclude_package("com.example.internal.").unwrap();

        assert_eq!(
            builder.to_string(),
            "+com\\.example\\..*, -com\\.example\\.internal\\..*"
        );
    }

    #[test]
    fn test_namespace_helpers() {
        let mut builder = FilterBuilder::new();
        builder.include_namespace_of("org.acme.Widget").unwrap();
        let filter = builder.build();

        assert!(filter.accepts("org.acme.Gadget"));
        assert!(filter.accepts("org.acme.sub.Thing"));
        assert!(!filter.accepts("org.acmex.Gadget"));
        assert!(!filter.accepts("org.Other"));
    }

    #[test]
    fn test_exclude_namespace_of() {
        let mut builder = FilterBuilder::new();
        builder.exclude_namespace_of("org.acme.internal.Impl").unwrap();
        let filter = builder.build();

        assert!(!filter.accepts("org.acme.internal.Other"));
        assert!(filter.accepts("org.acme.Public"));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut builder: FilterBuilder = vec![Rule::include("x").unwrap()].into_iter().collect();
        builder.extend([Rule::exclude("y").unwrap()]);
        assert_eq!(builder.to_string(), "+x, -y");
    }
}
