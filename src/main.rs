use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use storeline::audit::AuditLog;
use storeline::config::AppConfig;
use storeline::handlers;
use storeline::services::alerts::twilio::TwilioWhatsAppProvider;
use storeline::services::dialer::twilio::TwilioDialer;
use storeline::services::dialogue::DialogueEngine;
use storeline::services::sheets::http::HttpSheetSource;
use storeline::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let sheets = HttpSheetSource::new(&config);
    let alerts = TwilioWhatsAppProvider::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_number.clone(),
        config.owner_whatsapp.clone(),
    );
    let dialer = TwilioDialer::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_number.clone(),
    );

    let state = Arc::new(AppState {
        audit: AuditLog::new(config.audit_log_path.clone()),
        dialogue: DialogueEngine::new(config.business_name.clone()),
        sheets: Box::new(sheets),
        alerts: Box::new(alerts),
        dialer: Box::new(dialer),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/", get(handlers::dashboard::dashboard_page))
        .route("/health", get(handlers::health::health))
        .route(
            "/voice/inbound",
            get(handlers::voice::voice_inbound).post(handlers::voice::voice_inbound),
        )
        .route("/voice/process", post(handlers::voice::voice_process))
        .route("/voice/order_check", post(handlers::voice::voice_order_check))
        .route(
            "/voice/outbound_script",
            get(handlers::voice::outbound_script).post(handlers::voice::outbound_script),
        )
        .route("/voice/outbound", post(handlers::api::outbound_call))
        .route("/api/trigger_campaign", post(handlers::api::trigger_campaign))
        .route("/api/logs", get(handlers::api::get_logs))
        .route("/api/stats", get(handlers::api::get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
