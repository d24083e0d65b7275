#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Verdict output is one `decision` record per name, in input order,
//! followed by one `summary` record. Chain output is one `rule` record per
//! rule, in evaluation order.

use super::{Verdict, tally};
use crate::filter::Filter;
use crate::types::Polarity;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format verdicts as JSONL
    pub fn format_verdicts(&self, filter: &Filter, verdicts: &[Verdict<'_>]) -> String {
        let mut output = String::new();

        for verdict in verdicts {
            let record = DecisionRecord {
                record_type: "decision",
                name: verdict.name,
                accepted: verdict.decision.accepted,
                rule: verdict.decision.rule,
                matched: verdict
                    .decision
                    .rule
                    .and_then(|idx| filter.rule(idx))
                    .map(|rule| rule.to_string()),
            };
            push_line(&mut output, &record);
        }

        let (accepted, rejected) = tally(verdicts);
        push_line(
            &mut output,
            &SummaryRecord {
                record_type: "summary",
                accepted,
                rejected,
            },
        );

        output
    }

    /// Format the chain as JSONL
    pub fn format_chain(&self, filter: &Filter) -> String {
        let mut output = String::new();

        for (index, rule) in filter.rules().iter().enumerate() {
            let record = RuleRecord {
                record_type: "rule",
                index,
                polarity: rule.polarity(),
                pattern: rule.pattern().map(|p| p.as_str()),
                rendered: rule.to_string(),
            };
            push_line(&mut output, &record);
        }

        output
    }

    pub fn print_verdicts(&self, filter: &Filter, verdicts: &[Verdict<'_>]) {
        print!("{}", self.format_verdicts(filter, verdicts));
    }

    pub fn print_chain(&self, filter: &Filter) {
        print!("{}", self.format_chain(filter));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Decision record for JSONL output
#[derive(Debug, Serialize)]
struct DecisionRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    accepted: bool,
    rule: Option<usize>,
    matched: Option<String>,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    accepted: usize,
    rejected: usize,
}

/// Rule record for JSONL output
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    polarity: Option<Polarity>,
    pattern: Option<&'a str>,
    rendered: String,
}
