//! Renderable simulation artifacts
//!
//! The pipeline's outbound interface: plain markdown-renderable strings
//! tagged by role name, ready for whatever presentation layer embeds the
//! crate. Two orderings are exposed because the reference UI renders the
//! stakeholder sections first and then a tabbed detail view that leads with
//! the analyst.

use crate::simulation::participants;
use serde::Serialize;

/// One stakeholder's report, tagged with its role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeholderReport {
    pub role_name: String,
    pub body: String,
}

/// Everything a presentation layer needs to render one finished run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// Phase 1: the crisis analysis report
    pub crisis_report: String,
    /// Phase 2: stakeholder reports in registration order
    pub stakeholder_reports: Vec<StakeholderReport>,
    /// Phase 3: the consolidated summary
    pub summary: String,
}

impl SimulationOutcome {
    /// Report sequence for the per-participant detail view: the analyst's
    /// report first, then every stakeholder report in registration order
    pub fn detail_reports(&self) -> Vec<(&str, &str)> {
        let mut reports = Vec::with_capacity(1 + self.stakeholder_reports.len());
        reports.push((
            participants::analyst().role_name,
            self.crisis_report.as_str(),
        ));
        for report in &self.stakeholder_reports {
            reports.push((report.role_name.as_str(), report.body.as_str()));
        }
        reports
    }
}
