#![forbid(unsafe_code)]

//! Human-readable output with optional color

use super::{Verdict, tally};
use crate::filter::Filter;
use std::io;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human formatter for verdicts and chain listings
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    pub fn new(color: ColorChoice) -> Self {
        HumanFormatter { color }
    }

    /// Write one line per verdict followed by a summary line
    pub fn write_verdicts<W: WriteColor>(
        &self,
        out: &mut W,
        filter: &Filter,
        verdicts: &[Verdict<'_>],
    ) -> io::Result<()> {
        for verdict in verdicts {
            let (icon, color) = if verdict.decision.accepted {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };

            out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            write!(out, "{}", icon)?;
            out.reset()?;

            match verdict.decision.rule.and_then(|idx| Some((idx, filter.rule(idx)?))) {
                Some((idx, rule)) => {
                    writeln!(out, " {}  (rule {}: {})", verdict.name, idx + 1, rule)?
                }
                None => writeln!(out, " {}  (no rules)", verdict.name)?,
            }
        }

        let (accepted, rejected) = tally(verdicts);
        writeln!(out)?;
        writeln!(out, "{} accepted, {} rejected", accepted, rejected)
    }

    /// Write the chain as a numbered rule list
    pub fn write_chain<W: WriteColor>(&self, out: &mut W, filter: &Filter) -> io::Result<()> {
        if filter.is_empty() {
            return writeln!(out, "No rules: every name is accepted.");
        }

        let stance = if filter.rules()[0].is_exclude() {
            "accept"
        } else {
            "reject"
        };
        writeln!(out, "Rules ({}, default: {}):", filter.len(), stance)?;

        for (idx, rule) in filter.rules().iter().enumerate() {
            write!(out, "  {:>2}. ", idx + 1)?;
            out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(out, "{}", rule)?;
            out.reset()?;
        }

        Ok(())
    }

    /// Format verdicts as a plain string (no color)
    pub fn format_verdicts(&self, filter: &Filter, verdicts: &[Verdict<'_>]) -> String {
        let mut buffer = Buffer::no_color();
        // Writes to an in-memory buffer cannot fail
        let _ = self.write_verdicts(&mut buffer, filter, verdicts);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Format the chain listing as a plain string (no color)
    pub fn format_chain(&self, filter: &Filter) -> String {
        let mut buffer = Buffer::no_color();
        let _ = self.write_chain(&mut buffer, filter);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    pub fn print_verdicts(&self, filter: &Filter, verdicts: &[Verdict<'_>]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color);
        self.write_verdicts(&mut stdout, filter, verdicts)
    }

    pub fn print_chain(&self, filter: &Filter) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color);
        self.write_chain(&mut stdout, filter)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}
