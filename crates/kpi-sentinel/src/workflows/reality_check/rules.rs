use super::categorizer::{kpis_match_category, matches_category, Category};
use super::domain::{Finding, KpiInput};
use super::pool::CONTRADICTION_POOL;

pub const RETENTION_NOT_TRACKED: Finding =
    Finding::direct("Retention is a stated objective, but retention/churn is not among your KPIs.");
pub const RELIABILITY_NOT_TRACKED: Finding =
    Finding::direct("Reliability is a stated objective, but uptime/latency/incidents are not tracked.");

/// Objective/KPI category combination that yields a high-confidence finding.
#[derive(Debug, Clone, Copy)]
pub struct DirectRule {
    pub objective: Category,
    /// KPI category that must be tracked for the rule to fire.
    pub tracked: Option<Category>,
    /// KPI category that must be absent for the rule to fire.
    pub untracked: Option<Category>,
    pub finding: Finding,
}

impl DirectRule {
    pub fn fires(&self, objective: &str, kpis: &[KpiInput]) -> bool {
        matches_category(objective, self.objective)
            && self
                .tracked
                .map_or(true, |category| kpis_match_category(kpis, category))
            && self
                .untracked
                .map_or(true, |category| !kpis_match_category(kpis, category))
    }
}

/// Contradiction rules in evaluation order.
pub const CONTRADICTION_RULES: [DirectRule; 4] = [
    DirectRule {
        objective: Category::Growth,
        tracked: Some(Category::Efficiency),
        untracked: None,
        finding: CONTRADICTION_POOL[0],
    },
    DirectRule {
        objective: Category::Profitability,
        tracked: Some(Category::Growth),
        untracked: Some(Category::Profitability),
        finding: CONTRADICTION_POOL[1],
    },
    DirectRule {
        objective: Category::Efficiency,
        tracked: Some(Category::Growth),
        untracked: Some(Category::Efficiency),
        finding: CONTRADICTION_POOL[2],
    },
    DirectRule {
        objective: Category::Activation,
        tracked: Some(Category::Retention),
        untracked: Some(Category::Activation),
        finding: CONTRADICTION_POOL[3],
    },
];

/// Missing-signal rules in evaluation order.
pub const MISSING_SIGNAL_RULES: [DirectRule; 2] = [
    DirectRule {
        objective: Category::Retention,
        tracked: None,
        untracked: Some(Category::Retention),
        finding: RETENTION_NOT_TRACKED,
    },
    DirectRule {
        objective: Category::Reliability,
        tracked: None,
        untracked: Some(Category::Reliability),
        finding: RELIABILITY_NOT_TRACKED,
    },
];

/// Findings produced by the direct rules before any pool filling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectFindings {
    pub contradictions: Vec<Finding>,
    pub missing_signals: Vec<Finding>,
    pub direct_matches: usize,
}

pub fn evaluate_direct_rules(objective: &str, kpis: &[KpiInput]) -> DirectFindings {
    let mut findings = DirectFindings::default();

    for rule in &CONTRADICTION_RULES {
        if rule.fires(objective, kpis) {
            findings.contradictions.push(rule.finding);
            findings.direct_matches += 1;
        }
    }

    for rule in &MISSING_SIGNAL_RULES {
        if rule.fires(objective, kpis) {
            findings.missing_signals.push(rule.finding);
            findings.direct_matches += 1;
        }
    }

    findings
}
