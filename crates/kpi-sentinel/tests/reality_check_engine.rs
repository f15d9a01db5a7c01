use kpi_sentinel::workflows::reality_check::narrative::{ACTION_POOL, BOARD_TEMPLATES};
use kpi_sentinel::workflows::reality_check::pool::{CONTRADICTION_POOL, MISSING_SIGNAL_POOL};
use kpi_sentinel::workflows::reality_check::rules::RETENTION_NOT_TRACKED;
use kpi_sentinel::workflows::reality_check::{
    run_reality_check, Confidence, KpiInput, RealityCheckConfig, RealityCheckEngine,
    RealityCheckInput, RiskLevel, ScoringPolicy,
};
use std::collections::HashSet;

fn kpis(names: &[&str]) -> Vec<KpiInput> {
    names.iter().map(|name| KpiInput::new(*name)).collect()
}

fn profitability_input(run_index: u32) -> RealityCheckInput {
    RealityCheckInput::new(
        "Improve profitability without slowing growth.",
        kpis(&["Monthly Revenue Growth", "CAC Payback Period", "Logo Churn Rate"]),
    )
    .industry("SaaS")
    .run_index(run_index)
}

fn direct_only_engine() -> RealityCheckEngine {
    RealityCheckEngine::new(RealityCheckConfig {
        scoring_policy: ScoringPolicy::DirectFindingsOnly,
    })
}

fn texts(findings: &[kpi_sentinel::workflows::reality_check::Finding]) -> Vec<String> {
    findings.iter().map(|finding| finding.text.to_string()).collect()
}

#[test]
fn profitability_objective_against_growth_kpis() {
    let result = run_reality_check(&profitability_input(0));

    assert_eq!(
        result.contradictions,
        texts(&[
            CONTRADICTION_POOL[0],
            CONTRADICTION_POOL[1],
            CONTRADICTION_POOL[4]
        ])
    );
    assert_eq!(
        result.missing_signals,
        texts(&[MISSING_SIGNAL_POOL[5], MISSING_SIGNAL_POOL[0]])
    );
    assert_eq!(result.score, 20);
    assert_eq!(result.risk_level, RiskLevel::Red);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(
        result.actions_24h,
        vec![ACTION_POOL[4], ACTION_POOL[5], ACTION_POOL[0]]
    );
    assert_eq!(result.board_summary, BOARD_TEMPLATES[4]);
    assert_eq!(
        result.executive_summary,
        "Your objective \"Improve profitability without slowing growth.\" carries critical risk (score 20/100). \
Growth is being celebrated while efficiency signals (CAC/Payback) suggest you may be buying revenue. \
Additionally, no customer satisfaction proxy (nps, csat, support volume) is included."
    );
}

#[test]
fn direct_only_policy_ignores_advisory_filler() {
    let result = direct_only_engine().evaluate(&profitability_input(0));

    assert_eq!(result.contradictions.len(), 3);
    assert_eq!(result.missing_signals.len(), 2);
    assert_eq!(result.score, 55);
    assert_eq!(result.risk_level, RiskLevel::Yellow);
    assert!(result.executive_summary.contains("moderate risk (score 55/100)"));
}

#[test]
fn empty_objective_falls_back_to_advisory_pools() {
    let input = RealityCheckInput::new("", kpis(&["A", "B", "C"]));
    let result = run_reality_check(&input);

    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(
        result.contradictions,
        texts(&[
            CONTRADICTION_POOL[6],
            CONTRADICTION_POOL[7],
            CONTRADICTION_POOL[8]
        ])
    );
    assert_eq!(
        result.missing_signals,
        texts(&[MISSING_SIGNAL_POOL[0], MISSING_SIGNAL_POOL[1]])
    );
    assert_eq!(
        result.actions_24h,
        vec![ACTION_POOL[0], ACTION_POOL[1], ACTION_POOL[2]]
    );
    assert!(result
        .executive_summary
        .starts_with("Your objective \"\" carries critical risk (score 20/100)."));

    let direct_only = direct_only_engine().evaluate(&input);
    assert_eq!(direct_only.score, 85);
    assert_eq!(direct_only.risk_level, RiskLevel::Green);
}

#[test]
fn run_index_varies_filler_but_not_direct_findings_or_score() {
    let first = run_reality_check(&profitability_input(0));
    let second = run_reality_check(&profitability_input(1));

    assert_eq!(first.contradictions[..2], second.contradictions[..2]);
    assert_eq!(second.contradictions[2], CONTRADICTION_POOL[9].text);
    assert_ne!(first.contradictions[2], second.contradictions[2]);
    assert_eq!(second.board_summary, BOARD_TEMPLATES[3]);
    assert_ne!(first.board_summary, second.board_summary);
    assert_eq!(first.score, second.score);
    assert_eq!(first.confidence, second.confidence);
}

#[test]
fn untracked_retention_objective_leads_missing_signals() {
    let input = RealityCheckInput::new(
        "Improve retention across enterprise accounts",
        kpis(&["Net New ARR", "Pipeline Coverage", "Win Rate"]),
    )
    .industry("SaaS");
    let result = run_reality_check(&input);

    assert_eq!(
        result.missing_signals,
        vec![
            "Retention is a stated objective, but retention/churn is not among your KPIs."
                .to_string(),
            MISSING_SIGNAL_POOL[1].text.to_string(),
        ]
    );
    assert_eq!(result.missing_signals[0], RETENTION_NOT_TRACKED.text);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(
        result.contradictions,
        texts(&[
            CONTRADICTION_POOL[8],
            CONTRADICTION_POOL[9],
            CONTRADICTION_POOL[4]
        ])
    );
}

#[test]
fn identical_inputs_produce_identical_results() {
    let inputs = [
        profitability_input(0),
        profitability_input(7),
        RealityCheckInput::new("Scale uptime SLAs", kpis(&["Latency", "Incidents", "NPS"])),
        RealityCheckInput::new("", Vec::new()),
    ];

    for input in &inputs {
        let first = run_reality_check(input);
        let second = run_reality_check(&input.clone());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
    }
}

#[test]
fn results_respect_bounds_and_never_repeat_findings() {
    let objectives = [
        "",
        "Grow revenue while protecting margin",
        "Efficiency first: cut CAC and spend",
        "Fix activation and onboarding",
        "Retention and uptime are the priority",
        "Expand into enterprise with 99.99% availability and lower churn",
    ];
    let kpi_sets = [
        kpis(&["A", "B", "C"]),
        kpis(&["Revenue growth", "Logo churn", "Gross margin"]),
        kpis(&["CAC", "Payback", "ROAS"]),
        vec![KpiInput::with_description("North star", "weekly signup conversion")],
    ];

    for objective in objectives {
        for kpi_set in &kpi_sets {
            for run_index in 0..25 {
                let input = RealityCheckInput::new(objective, kpi_set.clone()).run_index(run_index);
                for engine in [RealityCheckEngine::default(), direct_only_engine()] {
                    let result = engine.evaluate(&input);

                    assert!(result.score <= 100);
                    assert!(result.contradictions.len() <= 3);
                    assert!(result.missing_signals.len() <= 2);
                    assert_eq!(result.actions_24h.len(), 3);

                    let unique: HashSet<_> = result.contradictions.iter().collect();
                    assert_eq!(unique.len(), result.contradictions.len());
                    let unique: HashSet<_> = result.missing_signals.iter().collect();
                    assert_eq!(unique.len(), result.missing_signals.len());
                    let unique: HashSet<_> = result.actions_24h.iter().collect();
                    assert_eq!(unique.len(), 3);

                    assert_eq!(result.risk_level, RiskLevel::from_score(result.score));
                    match result.risk_level {
                        RiskLevel::Green => assert!(result.score >= 75),
                        RiskLevel::Yellow => assert!((50..75).contains(&result.score)),
                        RiskLevel::Red => assert!(result.score < 50),
                    }
                }
            }
        }
    }
}

#[test]
fn more_fired_rules_never_raise_the_score() {
    let engine = direct_only_engine();
    let untracked = kpis(&["Bookings", "Pipeline", "Win rate"]);

    let none = engine.evaluate(&RealityCheckInput::new("Ship the roadmap", untracked.clone()));
    let one = engine.evaluate(&RealityCheckInput::new("Protect retention", untracked.clone()));
    let two = engine.evaluate(&RealityCheckInput::new(
        "Protect retention and uptime",
        untracked.clone(),
    ));
    let three = engine.evaluate(&RealityCheckInput::new(
        "Grow revenue, protect retention and uptime",
        kpis(&["Bookings", "CAC payback", "Win rate"]),
    ));

    assert_eq!(none.score, 85);
    assert_eq!(one.score, 75);
    assert_eq!(two.score, 65);
    assert_eq!(three.score, 50);
    assert!(none.score >= one.score && one.score >= two.score && two.score >= three.score);
    assert_eq!(two.confidence, Confidence::High);
}

#[test]
fn long_multibyte_objectives_are_truncated_by_character() {
    let objective = "成長".repeat(60);
    let result = run_reality_check(&RealityCheckInput::new(
        objective.clone(),
        kpis(&["A", "B", "C"]),
    ));

    let excerpt: String = objective.chars().take(80).collect();
    assert!(result
        .executive_summary
        .starts_with(&format!("Your objective \"{excerpt}\" carries")));
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let value = serde_json::to_value(run_reality_check(&profitability_input(0)))
        .expect("result serializes");

    assert_eq!(value["riskLevel"], serde_json::json!("RED"));
    assert_eq!(value["confidence"], serde_json::json!("High"));
    assert!(value["actions24h"].is_array());
    assert!(value["missingSignals"].is_array());
    assert!(value["executiveSummary"].is_string());
    assert!(value["boardSummary"].is_string());
}
