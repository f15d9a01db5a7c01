use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryRunRepository};
use crate::routes::with_run_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use kpi_sentinel::config::AppConfig;
use kpi_sentinel::error::AppError;
use kpi_sentinel::telemetry;
use kpi_sentinel::workflows::runs::RealityCheckService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryRunRepository::default());
    let service = Arc::new(RealityCheckService::new(
        repository,
        config.engine.clone(),
    ));

    let app = with_run_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        scoring_policy = ?config.engine.scoring_policy,
        history_limit = config.engine.history_limit,
        "kpi sentinel ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
