//! Per-definition reports emitted while a session evaluates a whole system

use crate::content::Definition;
use crate::types::ResultVerdict;
use serde::Serialize;
use std::ops::ControlFlow;

/// Check system that produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFamily {
    Oval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionReport {
    pub family: ReportFamily,
    pub code: u32,
    pub definition_id: String,
    pub title: String,
    pub description: String,
    pub verdict: ResultVerdict,
}

impl DefinitionReport {
    pub fn new(definition: &Definition, verdict: ResultVerdict) -> Self {
        Self {
            family: ReportFamily::Oval,
            code: 0,
            definition_id: definition.id.clone(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            verdict,
        }
    }
}

/// Receives one report per evaluated definition.
///
/// Returning `ControlFlow::Break` stops the evaluation run after the current definition.
pub trait ReportSink {
    fn report(&mut self, report: &DefinitionReport) -> ControlFlow<()>;
}

impl<F> ReportSink for F
where
    F: FnMut(&DefinitionReport) -> ControlFlow<()>,
{
    fn report(&mut self, report: &DefinitionReport) -> ControlFlow<()> {
        self(report)
    }
}

/// Counts failing (false or unknown) verdicts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCounter {
    failing: usize,
    seen: usize,
}

impl VerdictCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(&self) -> usize {
        self.failing
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl ReportSink for VerdictCounter {
    fn report(&mut self, report: &DefinitionReport) -> ControlFlow<()> {
        self.seen += 1;
        if report.verdict.is_failing() {
            self.failing += 1;
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(verdict: ResultVerdict) -> DefinitionReport {
        DefinitionReport::new(&Definition::new("oval:x:def:1", "title"), verdict)
    }

    #[test]
    fn test_report_fields() {
        let r = report(ResultVerdict::True);
        assert_eq!(r.family, ReportFamily::Oval);
        assert_eq!(r.code, 0);
        assert_eq!(r.definition_id, "oval:x:def:1");
        assert_eq!(r.title, "title");
    }

    #[test]
    fn test_counter_counts_false_and_unknown() {
        let mut counter = VerdictCounter::new();
        for verdict in ResultVerdict::ALL {
            assert_eq!(counter.report(&report(verdict)), ControlFlow::Continue(()));
        }
        assert_eq!(counter.seen(), ResultVerdict::ALL.len());
        assert_eq!(counter.failing(), 2);
    }

    #[test]
    fn test_closure_sink() {
        let mut ids = Vec::new();
        let mut sink = |r: &DefinitionReport| {
            ids.push(r.definition_id.clone());
            ControlFlow::Break(())
        };
        assert!(sink.report(&report(ResultVerdict::False)).is_break());
        assert_eq!(ids, vec!["oval:x:def:1".to_string()]);
    }
}
