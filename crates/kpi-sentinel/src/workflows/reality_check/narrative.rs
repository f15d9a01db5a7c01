use super::domain::RiskLevel;

const BASE_SCORE: i32 = 85;
const CONTRADICTION_PENALTY: i32 = 15;
const MISSING_SIGNAL_PENALTY: i32 = 10;
const OBJECTIVE_EXCERPT_CHARS: usize = 80;

pub const ACTION_POOL: [&str; 6] = [
    "Assign an owner per KPI and document the definition + source of truth today.",
    "Add one counter-metric per objective (e.g., growth ↔ CAC/payback; profit ↔ margin quality).",
    "Run a 30-minute 'metric contradiction review' with Finance + Product to align narrative vs reality.",
    "Define explicit red/yellow/green thresholds for each KPI before next board review.",
    "Schedule a cross-functional alignment session to validate KPI-to-strategy traceability.",
    "Identify and document one leading indicator per lagging KPI within this sprint.",
];

pub const BOARD_TEMPLATES: [&str; 5] = [
    "Sentinel finds structural misalignment between stated strategy and KPI momentum, indicating elevated execution risk under current conditions.",
    "Analysis reveals partial coherence between strategic intent and measurement framework. Key blind spots remain in counter-metric coverage.",
    "The current KPI configuration demonstrates directional alignment but lacks the diagnostic depth required for board-level confidence.",
    "Sentinel identifies material gaps between the executive narrative and the underlying metric architecture. Remediation is recommended before the next review cycle.",
    "Strategic objectives are partially supported by the measurement set, but critical counter-signals are absent — increasing the risk of narrative bias.",
];

/// `85 - 15 per contradiction - 10 per missing signal`, clamped to `0..=100`.
pub fn score(contradictions: usize, missing_signals: usize) -> u8 {
    let contradictions = i32::try_from(contradictions).unwrap_or(i32::MAX);
    let missing_signals = i32::try_from(missing_signals).unwrap_or(i32::MAX);
    let raw = BASE_SCORE
        .saturating_sub(contradictions.saturating_mul(CONTRADICTION_PENALTY))
        .saturating_sub(missing_signals.saturating_mul(MISSING_SIGNAL_PENALTY));
    raw.clamp(0, 100) as u8
}

/// Three consecutive actions starting at `(hash >> 2) % 6`, wrapping around the pool.
pub fn choose_actions(hash: u32) -> [&'static str; 3] {
    let start = (hash >> 2) as usize % ACTION_POOL.len();
    std::array::from_fn(|offset| ACTION_POOL[(start + offset) % ACTION_POOL.len()])
}

pub fn board_summary(hash: u32) -> &'static str {
    BOARD_TEMPLATES[hash as usize % BOARD_TEMPLATES.len()]
}

/// Narrates the verdict around the leading contradiction and missing signal.
///
/// A clause whose finding list came back empty is dropped instead of rendered blank.
pub fn executive_summary(
    objective: &str,
    risk: RiskLevel,
    score: u8,
    first_contradiction: Option<&str>,
    first_missing_signal: Option<&str>,
) -> String {
    let excerpt: String = objective.chars().take(OBJECTIVE_EXCERPT_CHARS).collect();
    let mut summary = format!(
        "Your objective \"{excerpt}\" carries {} risk (score {score}/100).",
        risk.risk_word()
    );

    if let Some(contradiction) = first_contradiction {
        summary.push(' ');
        summary.push_str(contradiction);
    }

    if let Some(missing) = first_missing_signal {
        summary.push_str(" Additionally, ");
        summary.push_str(&missing.to_lowercase());
    }

    summary
}
