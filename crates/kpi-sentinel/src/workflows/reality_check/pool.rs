use super::domain::{Finding, RealityCheckInput};

pub const CONTRADICTION_TARGET: usize = 3;
pub const MISSING_SIGNAL_TARGET: usize = 2;

/// The first four entries back the contradiction rules; the rest are advisory filler.
pub const CONTRADICTION_POOL: [Finding; 10] = [
    Finding::direct("Growth is being celebrated while efficiency signals (CAC/Payback) suggest you may be buying revenue."),
    Finding::direct("You claim profitability, but you're not tracking margin-quality signals that prove it."),
    Finding::direct("Efficiency is your stated goal, but your KPIs are optimized for growth — not cost discipline."),
    Finding::direct("You mention activation, but your KPIs track retention without measuring funnel conversion."),
    Finding::advisory("Your objective is directional, but your KPIs don't prove causality — only movement."),
    Finding::advisory("KPI ownership is unclear: the same number can be 'up' for the wrong reason."),
    Finding::advisory("The KPI set lacks counter-metrics that prevent narrative gaming."),
    Finding::advisory("Strategy language implies urgency, but no KPI has a time-bound target or threshold."),
    Finding::advisory("Multiple KPIs overlap in what they measure, creating redundancy without coverage breadth."),
    Finding::advisory("The objective frames success qualitatively, but all KPIs are lagging indicators."),
];

pub const MISSING_SIGNAL_POOL: [Finding; 6] = [
    Finding::advisory("No KPI validates customer retention (churn/NRR)."),
    Finding::advisory("No KPI validates acquisition efficiency (CAC/payback)."),
    Finding::advisory("No KPI validates margin quality (gross/contribution margin)."),
    Finding::advisory("No leading indicator is present — all KPIs are backward-looking."),
    Finding::advisory("No operational health metric (e.g., cycle time, defect rate) is tracked."),
    Finding::advisory("No customer satisfaction proxy (NPS, CSAT, support volume) is included."),
];

/// Polynomial rolling hash (`h * 31 + unit`) over UTF-16 code units, wrapped to `i32`.
///
/// The absolute value of `i32::MIN` is returned as `2^31`, which is why the result is `u32`.
pub fn stable_hash(text: &str) -> u32 {
    let hash = text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Concatenation of every input field that selection variety depends on.
pub fn selection_key(input: &RealityCheckInput) -> String {
    let kpis = input
        .kpis
        .iter()
        .map(|kpi| format!("{}{}", kpi.name, kpi.description))
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "{}{}{}{}",
        input.objective,
        kpis,
        input.industry.as_deref().unwrap_or_default(),
        input.run_index
    )
}

pub fn selection_hash(input: &RealityCheckInput) -> u32 {
    stable_hash(&selection_key(input))
}

/// Pad `existing` with pool entries until it holds `target` findings.
///
/// Only advisory entries whose text is not yet present are candidates. The walk starts at
/// `seed % candidates` and visits each candidate at most once, so an undersized pool leaves
/// the list short rather than repeating entries. Existing findings are never evicted.
pub fn fill_to_size(existing: &mut Vec<Finding>, pool: &[Finding], target: usize, seed: u32) {
    let candidates: Vec<Finding> = pool
        .iter()
        .filter(|finding| finding.advisory && !contains_text(existing, finding.text))
        .copied()
        .collect();

    if !candidates.is_empty() {
        let start = seed as usize % candidates.len();
        for finding in candidates.iter().cycle().skip(start).take(candidates.len()) {
            if existing.len() >= target {
                break;
            }
            if !contains_text(existing, finding.text) {
                existing.push(*finding);
            }
        }
    }

    existing.truncate(target);
}

fn contains_text(findings: &[Finding], text: &str) -> bool {
    findings.iter().any(|finding| finding.text == text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::reality_check::domain::KpiInput;

    #[test]
    fn stable_hash_matches_reference_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("ab"), 97 * 31 + 98);
        assert_eq!(stable_hash("A|B|C0"), 1_977_498_914);
    }

    #[test]
    fn stable_hash_folds_utf16_units() {
        // U+1F4C8 encodes as the surrogate pair D83D DCC8.
        let expected = (0xD83Di32).wrapping_mul(31).wrapping_add(0xDCC8);
        assert_eq!(stable_hash("\u{1F4C8}"), expected.unsigned_abs());
    }

    #[test]
    fn selection_key_joins_kpis_with_pipes() {
        let input = RealityCheckInput::new(
            "Grow",
            vec![
                KpiInput::with_description("ARR", "annual"),
                KpiInput::new("NRR"),
            ],
        )
        .industry("SaaS")
        .run_index(4);

        assert_eq!(selection_key(&input), "GrowARRannual|NRRSaaS4");
    }

    #[test]
    fn selection_key_leaves_missing_industry_empty() {
        let input = RealityCheckInput::new("", vec![KpiInput::new("A"), KpiInput::new("B")]);
        assert_eq!(selection_key(&input), "A|B0");
    }

    #[test]
    fn fill_walks_advisory_entries_from_seed() {
        let mut findings = Vec::new();
        fill_to_size(&mut findings, &CONTRADICTION_POOL, CONTRADICTION_TARGET, 5);

        assert_eq!(
            findings,
            vec![
                CONTRADICTION_POOL[9],
                CONTRADICTION_POOL[4],
                CONTRADICTION_POOL[5]
            ]
        );
    }

    #[test]
    fn fill_keeps_direct_findings_first() {
        let mut findings = vec![CONTRADICTION_POOL[0], CONTRADICTION_POOL[2]];
        fill_to_size(&mut findings, &CONTRADICTION_POOL, CONTRADICTION_TARGET, 0);

        assert_eq!(
            findings,
            vec![
                CONTRADICTION_POOL[0],
                CONTRADICTION_POOL[2],
                CONTRADICTION_POOL[4]
            ]
        );
    }

    #[test]
    fn fill_is_a_no_op_when_target_is_met() {
        let mut findings = CONTRADICTION_POOL[..4].to_vec();
        fill_to_size(&mut findings, &CONTRADICTION_POOL, CONTRADICTION_TARGET, 3);

        assert_eq!(findings, CONTRADICTION_POOL[..3].to_vec());
    }

    #[test]
    fn fill_skips_texts_already_present() {
        let mut findings = vec![MISSING_SIGNAL_POOL[1]];
        fill_to_size(&mut findings, &MISSING_SIGNAL_POOL, 3, 0);

        assert_eq!(
            findings,
            vec![
                MISSING_SIGNAL_POOL[1],
                MISSING_SIGNAL_POOL[0],
                MISSING_SIGNAL_POOL[2]
            ]
        );
    }

    #[test]
    fn exhausted_pool_leaves_the_list_short() {
        let pool = [
            Finding::advisory("Only one filler exists."),
            Finding::direct("Direct findings are never used as filler."),
        ];
        let mut findings = Vec::new();
        fill_to_size(&mut findings, &pool, 3, 42);

        assert_eq!(findings, vec![pool[0]]);
    }
}
