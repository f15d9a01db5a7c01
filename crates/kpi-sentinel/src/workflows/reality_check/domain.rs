use serde::{Deserialize, Serialize};

pub const DEFAULT_INDUSTRY: &str = "Other";

/// Key performance indicator as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl KpiInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Everything the engine needs for one evaluation.
///
/// `run_index` only perturbs the selection hash so that repeated identical submissions from
/// the same owner can surface different advisory findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealityCheckInput {
    pub objective: String,
    pub kpis: Vec<KpiInput>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub run_index: u32,
}

impl RealityCheckInput {
    pub fn new(objective: impl Into<String>, kpis: Vec<KpiInput>) -> Self {
        Self {
            objective: objective.into(),
            kpis,
            industry: None,
            run_index: 0,
        }
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn run_index(mut self, run_index: u32) -> Self {
        self.run_index = run_index;
        self
    }

    pub fn industry_label(&self) -> &str {
        self.industry.as_deref().unwrap_or(DEFAULT_INDUSTRY)
    }
}

/// A contradiction or missing-signal statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub text: &'static str,
    /// Generic filler rather than a finding backed by a matched rule.
    pub advisory: bool,
}

impl Finding {
    pub const fn direct(text: &'static str) -> Self {
        Self {
            text,
            advisory: false,
        }
    }

    pub const fn advisory(text: &'static str) -> Self {
        Self {
            text,
            advisory: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            Self::Green
        } else if score >= 50 {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }

    /// Adjective used when narrating the tier.
    pub fn risk_word(self) -> &'static str {
        match self {
            Self::Green => "acceptable",
            Self::Yellow => "moderate",
            Self::Red => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    pub fn from_direct_matches(direct_matches: usize) -> Self {
        if direct_matches >= 2 {
            Self::High
        } else {
            Self::Medium
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}
