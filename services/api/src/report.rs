use crate::infra::{parse_kpi, InMemoryRunRepository};
use clap::Args;
use kpi_sentinel::config::{AppConfig, EngineConfig};
use kpi_sentinel::error::AppError;
use kpi_sentinel::workflows::kpi_import::KpiCsvImporter;
use kpi_sentinel::workflows::reality_check::{
    categories_of, KpiInput, RealityCheckConfig, RealityCheckEngine, RealityCheckInput,
    RealityCheckResult, ScoringPolicy,
};
use kpi_sentinel::workflows::runs::{
    OwnerId, RealityCheckService, RunServiceError, RunSubmission, SubmissionGuard,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Strategic objective to evaluate
    #[arg(long)]
    pub(crate) objective: String,
    /// KPI as NAME or NAME:DESCRIPTION (repeatable)
    #[arg(long = "kpi", value_parser = parse_kpi)]
    pub(crate) kpis: Vec<KpiInput>,
    /// CSV export with Name and optional Description columns
    #[arg(long)]
    pub(crate) kpis_csv: Option<PathBuf>,
    /// Industry label (defaults to Other)
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Prior run count used to vary advisory picks
    #[arg(long, default_value_t = 0)]
    pub(crate) run_index: u32,
    /// Which findings count against the score: total or direct (defaults to APP_SCORING_POLICY)
    #[arg(long)]
    pub(crate) scoring_policy: Option<ScoringPolicy>,
    /// Print the raw result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Owner the sample runs are recorded under
    #[arg(long, default_value = "demo-team")]
    pub(crate) owner: String,
    /// How many times to resubmit the first sample to show run-index variation
    #[arg(long, default_value_t = 2)]
    pub(crate) repeat: usize,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        objective,
        mut kpis,
        kpis_csv,
        industry,
        run_index,
        scoring_policy,
        json,
    } = args;

    if let Some(path) = kpis_csv {
        kpis.extend(KpiCsvImporter::from_path(path)?);
    }

    let validated = SubmissionGuard::default()
        .validate(RunSubmission {
            objective,
            kpis,
            industry,
        })
        .map_err(RunServiceError::from)?;

    let scoring_policy = resolve_scoring_policy(scoring_policy)?;
    let input = validated.to_input(run_index);
    let engine = RealityCheckEngine::new(RealityCheckConfig { scoring_policy });
    let result = engine.evaluate(&input);

    if json {
        let rendered = serde_json::to_string_pretty(&result)?;
        println!("{rendered}");
    } else {
        render_check(&input, &result);
    }

    Ok(())
}

/// An explicit flag wins; otherwise the configured engine policy applies.
fn resolve_scoring_policy(flag: Option<ScoringPolicy>) -> Result<ScoringPolicy, AppError> {
    match flag {
        Some(policy) => Ok(policy),
        None => Ok(AppConfig::load()?.engine.scoring_policy),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { owner, repeat } = args;
    let owner = OwnerId(owner);

    let repository = Arc::new(InMemoryRunRepository::default());
    let config = EngineConfig {
        history_limit: repeat + sample_submissions().len(),
        ..EngineConfig::default()
    };
    let service = RealityCheckService::new(repository, config);

    println!("KPI Sentinel demo (owner: {})", owner.0);

    let samples = sample_submissions();
    let mut submissions = Vec::new();
    if let Some(first) = samples.first() {
        submissions.extend(std::iter::repeat(first.clone()).take(repeat));
    }
    submissions.extend(samples);

    for submission in submissions {
        let record = service.submit(&owner, submission)?;
        println!(
            "\nRun {} (index {}) recorded {}",
            record.id.0,
            record.run_index,
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let input = RealityCheckInput::new(record.objective.clone(), record.kpis.clone())
            .industry(record.industry.clone())
            .run_index(record.run_index);
        render_check(&input, &record.result);
    }

    let history = service.history(&owner)?;
    println!("\nHistory (newest first)");
    for record in history {
        println!(
            "- {} | index {} | {} | score {}/100 | {}",
            record.id.0,
            record.run_index,
            record.result.risk_level.label(),
            record.result.score,
            record.objective
        );
    }

    Ok(())
}

fn render_check(input: &RealityCheckInput, result: &RealityCheckResult) {
    println!("Objective: {}", input.objective);
    println!("Industry: {}", input.industry_label());
    let categories: Vec<&str> = categories_of(&input.objective)
        .into_iter()
        .map(|category| category.label())
        .collect();
    if categories.is_empty() {
        println!("Objective categories: none detected");
    } else {
        println!("Objective categories: {}", categories.join(", "));
    }
    println!("KPIs:");
    for kpi in &input.kpis {
        if kpi.description.is_empty() {
            println!("  - {}", kpi.name);
        } else {
            println!("  - {} ({})", kpi.name, kpi.description);
        }
    }

    println!(
        "\nReality score: {}/100 [{}] confidence {}",
        result.score,
        result.risk_level.label(),
        result.confidence.label()
    );

    println!("\nContradictions");
    if result.contradictions.is_empty() {
        println!("  none");
    }
    for contradiction in &result.contradictions {
        println!("  - {contradiction}");
    }

    println!("\nMissing signals");
    if result.missing_signals.is_empty() {
        println!("  none");
    }
    for signal in &result.missing_signals {
        println!("  - {signal}");
    }

    println!("\nNext 24 hours");
    for (index, action) in result.actions_24h.iter().enumerate() {
        println!("  {}. {action}", index + 1);
    }

    println!("\nExecutive summary\n  {}", result.executive_summary);
    println!("\nBoard summary\n  {}", result.board_summary);
}

fn sample_submissions() -> Vec<RunSubmission> {
    vec![
        RunSubmission {
            objective: "Improve profitability without slowing growth.".to_string(),
            kpis: vec![
                KpiInput::new("Monthly Revenue Growth"),
                KpiInput::new("CAC Payback Period"),
                KpiInput::new("Logo Churn Rate"),
            ],
            industry: Some("SaaS".to_string()),
        },
        RunSubmission {
            objective: "Protect retention while we scale the platform".to_string(),
            kpis: vec![
                KpiInput::new("Net New ARR"),
                KpiInput::with_description("Pipeline Coverage", "qualified pipeline / quota"),
                KpiInput::new("Win Rate"),
            ],
            industry: None,
        },
        RunSubmission {
            objective: "Fix activation in the self-serve funnel".to_string(),
            kpis: vec![
                KpiInput::new("Logo churn"),
                KpiInput::new("NRR"),
                KpiInput::with_description("Uptime", "monthly availability"),
            ],
            industry: Some("Marketplace".to_string()),
        },
    ]
}
