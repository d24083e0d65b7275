#![forbid(unsafe_code)]

//! Full-match regular expressions
//!
//! A [`Pattern`] keeps the caller's raw source for rendering and a second,
//! anchored compilation for matching, so `is_match` only succeeds when the
//! whole candidate matches.

use crate::error::PatternError;
use regex::Regex;
use regex_syntax::ast::{Ast, Flag, parse::Parser};
use std::fmt;

/// Separator between the segments of a qualified name
pub const SEPARATOR: char = '.';

/// A compiled regular expression matched against entire candidate strings
#[derive(Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns `PatternError` if `text` is not a valid regular expression.
    pub fn new(text: impl Into<String>) -> Result<Self, PatternError> {
        let text = text.into();

        // Validate the text on its own first: unbalanced groups could
        // otherwise escape the anchoring wrapper below.
        if let Err(source) = Regex::new(&text) {
            return Err(PatternError { pattern: text, source });
        }

        // A trailing `#` comment in verbose mode would swallow the closing
        // group, so end the text on a newline first.
        let tail = if ends_in_verbose_mode(&text) { "\n" } else { "" };

        match Regex::new(&format!(r"\A(?:{}{})\z", text, tail)) {
            Ok(anchored) => Ok(Pattern {
                source: text,
                anchored,
            }),
            Err(source) => Err(PatternError { pattern: text, source }),
        }
    }

    /// Pattern matching `prefix` literally followed by anything
    pub fn literal_prefix(prefix: &str) -> Result<Self, PatternError> {
        Self::new(prefix_regex(prefix))
    }

    /// True if the whole of `candidate` matches
    pub fn is_match(&self, candidate: &str) -> bool {
        self.anchored.is_match(candidate)
    }

    /// The raw pattern text
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// True if ignore-whitespace mode is still on after the last character
///
/// Flags set at the top level persist across alternation branches; flags
/// set inside a group end with it.
fn ends_in_verbose_mode(text: &str) -> bool {
    let Ok(ast) = Parser::new().parse(text) else {
        return false;
    };

    top_level_items(&ast)
        .into_iter()
        .filter_map(|item| match item {
            Ast::Flags(set) => set.flags.flag_state(Flag::IgnoreWhitespace),
            _ => None,
        })
        .last()
        .unwrap_or(false)
}

fn top_level_items(ast: &Ast) -> Vec<&Ast> {
    match ast {
        Ast::Alternation(alt) => alt.asts.iter().flat_map(top_level_items).collect(),
        Ast::Concat(concat) => concat.asts.iter().collect(),
        other => vec![other],
    }
}

/// Regex source matching `prefix` literally followed by any suffix
pub fn prefix_regex(prefix: &str) -> String {
    format!("{}.*", regex::escape(prefix))
}

/// Enclosing namespace of a qualified name, with its trailing separator
///
/// `com.example.Foo` yields `com.example.`; a name without any separator
/// lives in the unnamed namespace, rendered as a lone `.`.
pub fn namespace_of(qualified_name: &str) -> String {
    match qualified_name.rfind(SEPARATOR) {
        Some(idx) => qualified_name[..=idx].to_string(),
        None => SEPARATOR.to_string(),
    }
}

/// Append a trailing separator unless one is already present
pub fn with_trailing_separator(name: &str) -> String {
    if name.ends_with(SEPARATOR) {
        name.to_string()
    } else {
        format!("{}{}", name, SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_only() {
        let pattern = Pattern::new("a\\.b").unwrap();
        assert!(pattern.is_match("a.b"));
        assert!(!pattern.is_match("a.bc"));
        assert!(!pattern.is_match("xa.b"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let pattern = Pattern::new("a|ab").unwrap();
        assert!(pattern.is_match("ab"));
        assert!(pattern.is_match("a"));
        assert!(!pattern.is_match("abc"));
    }

    #[test]
    fn test_unbalanced_group_rejected() {
        let err = Pattern::new("a)|(b").unwrap_err();
        assert_eq!(err.pattern, "a)|(b");
    }

    #[test]
    fn test_verbose_pattern_with_trailing_comment() {
        let pattern = Pattern::new("(?x)a # trailing comment").unwrap();
        assert!(pattern.is_match("a"));
        assert!(!pattern.is_match("ab"));
        assert_eq!(pattern.as_str(), "(?x)a # trailing comment");
    }

    #[test]
    fn test_verbose_mode_across_alternation() {
        let pattern = Pattern::new("(?x)a | b # either").unwrap();
        assert!(pattern.is_match("a"));
        assert!(pattern.is_match("b"));
        assert!(!pattern.is_match("ab"));
    }

    #[test]
    fn test_verbose_mode_ended_before_comment_marker() {
        // Verbose mode is scoped to the group, so the rest is literal
        let pattern = Pattern::new("(?x:a b) #c").unwrap();
        assert!(pattern.is_match("ab #c"));
        assert!(!pattern.is_match("ab"));

        let pattern = Pattern::new("(?x)a(?-x) #c").unwrap();
        assert!(pattern.is_match("a #c"));
    }

    #[test]
    fn test_ends_in_verbose_mode() {
        assert!(ends_in_verbose_mode("(?x)a # c"));
        assert!(ends_in_verbose_mode("(?x)a|b"));
        assert!(!ends_in_verbose_mode("a # c"));
        assert!(!ends_in_verbose_mode("(?x:a) # c"));
        assert!(!ends_in_verbose_mode("(?x)a(?-x)b"));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(Pattern::new("[unclosed").is_err());
        assert!(Pattern::new("*bad").is_err());
    }

    #[test]
    fn test_source_is_preserved() {
        let pattern = Pattern::new("foo\\..*").unwrap();
        assert_eq!(pattern.as_str(), "foo\\..*");
        assert_eq!(pattern.to_string(), "foo\\..*");
    }

    #[test]
    fn test_prefix_regex_escapes_metacharacters() {
        assert_eq!(prefix_regex("com.example."), "com\\.example\\..*");
        assert_eq!(prefix_regex("a+b"), "a\\+b.*");

        let pattern = Pattern::literal_prefix("a+b").unwrap();
        assert!(pattern.is_match("a+bc"));
        assert!(!pattern.is_match("aabc"));
    }

    #[test]
    fn test_namespace_of() {
        assert_eq!(namespace_of("com.example.Foo"), "com.example.");
        assert_eq!(namespace_of("Foo"), ".");
        assert_eq!(namespace_of("a.B"), "a.");
    }

    #[test]
    fn test_with_trailing_separator() {
        assert_eq!(with_trailing_separator("com.example"), "com.example.");
        assert_eq!(with_trailing_separator("com.example."), "com.example.");
    }
}
