use super::domain::KpiInput;
use serde::{Deserialize, Serialize};

/// Semantic buckets an objective or KPI can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Growth,
    Efficiency,
    Profitability,
    Retention,
    Activation,
    Reliability,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Growth,
        Category::Efficiency,
        Category::Profitability,
        Category::Retention,
        Category::Activation,
        Category::Reliability,
    ];

    /// Lower-case keyword fragments owned by the category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Growth => &[
                "grow",
                "growth",
                "revenue",
                "top-line",
                "acquisition",
                "scale",
                "expand",
                "expansion",
            ],
            Category::Efficiency => &[
                "cac",
                "payback",
                "roi",
                "roas",
                "efficiency",
                "unit economics",
                "cost",
                "spend",
            ],
            Category::Profitability => &[
                "profit",
                "margin",
                "ebitda",
                "contribution",
                "gross margin",
                "bottom-line",
            ],
            Category::Retention => &["retention", "churn", "repeat", "nrr", "grr", "loyalty"],
            Category::Activation => &["activation", "conversion", "funnel", "signup", "onboarding"],
            Category::Reliability => &["uptime", "latency", "incidents", "sla", "availability"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Growth => "growth",
            Category::Efficiency => "efficiency",
            Category::Profitability => "profitability",
            Category::Retention => "retention",
            Category::Activation => "activation",
            Category::Reliability => "reliability",
        }
    }
}

/// Plain substring containment, no tokenization, so "outgrowth" counts as growth.
pub fn matches_category(text: &str, category: Category) -> bool {
    let lower = text.to_lowercase();
    category
        .keywords()
        .iter()
        .any(|keyword| lower.contains(keyword))
}

pub fn kpis_match_category(kpis: &[KpiInput], category: Category) -> bool {
    kpis.iter().any(|kpi| {
        matches_category(&kpi.name, category) || matches_category(&kpi.description, category)
    })
}

/// Categories the text falls into, in declaration order.
pub fn categories_of(text: &str) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| matches_category(text, *category))
        .collect()
}
