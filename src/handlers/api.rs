use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::DEFAULT_CAMPAIGN;
use crate::errors::AppError;
use crate::models::call::markers;
use crate::models::{CallDirection, CallRecord, Intent};
use crate::services::campaign;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    if expected_token.is_empty() {
        return Ok(());
    }

    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/logs
pub async fn get_logs(State(state): State<Arc<AppState>>) -> Json<Vec<CallRecord>> {
    let mut logs = state.audit.read_all();
    logs.reverse();
    Json(logs)
}

#[derive(Serialize)]
pub struct StatsResponse {
    total_calls: usize,
    bot_resolved: usize,
    high_intent_leads: usize,
    resolution_rate: f64,
    intent_breakdown: BTreeMap<String, usize>,
}

// GET /api/stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let logs = state.audit.read_all();

    let total_calls = logs.len();
    let bot_resolved = logs
        .iter()
        .filter(|l| {
            l.intent != Intent::HumanNeeded.as_str() && l.intent != markers::LOW_CONFIDENCE
        })
        .count();
    let high_intent_leads = logs
        .iter()
        .filter(|l| l.intent == Intent::BulkOrder.as_str())
        .count();

    let mut intent_breakdown = BTreeMap::new();
    for log in &logs {
        *intent_breakdown.entry(log.intent.clone()).or_insert(0usize) += 1;
    }

    let resolution_rate = if total_calls == 0 {
        0.0
    } else {
        (bot_resolved as f64 * 1000.0 / total_calls as f64).round() / 10.0
    };

    Json(StatsResponse {
        total_calls,
        bot_resolved,
        high_intent_leads,
        resolution_rate,
        intent_breakdown,
    })
}

#[derive(Deserialize)]
pub struct OutboundRequest {
    pub to: Option<String>,
    pub campaign: Option<String>,
}

// POST /voice/outbound
pub async fn outbound_call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<OutboundRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let to = req
        .to
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'to' number".to_string()))?;
    let campaign = req.campaign.as_deref().unwrap_or(DEFAULT_CAMPAIGN);

    let url = script_url(&state.config.public_base_url, campaign)?;
    let sid = state
        .dialer
        .place_call(to, url.as_str())
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    tracing::info!(to = %to, sid = %sid, "outbound call placed");

    state.audit.append(&CallRecord::new(
        to,
        &sid,
        CallDirection::Outbound,
        markers::INITIATED,
        campaign,
    ));

    Ok(Json(json!({ "status": "call_initiated", "sid": sid })))
}

#[derive(Deserialize)]
pub struct CampaignRequest {
    #[serde(default)]
    pub message: String,
}

// POST /api/trigger_campaign
pub async fn trigger_campaign(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CampaignRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let customers = state.sheets.fetch_customers().await.map_err(|e| {
        tracing::error!(error = %e, "failed to load customer list");
        AppError::Upstream("failed to load customer list".to_string())
    })?;

    tracing::info!(customers = customers.len(), message = %req.message, "starting campaign");

    let url = script_url(&state.config.public_base_url, &req.message)?;
    let gap = Duration::from_secs(state.config.campaign_call_gap_secs);
    let total = campaign::run(state.dialer.as_ref(), &customers, url.as_str(), gap).await;

    Ok(Json(json!({ "status": "success", "total": total })))
}

/// Build the outbound-script URL with the campaign text percent-encoded.
fn script_url(base: &str, campaign: &str) -> Result<reqwest::Url, AppError> {
    let base = base.trim_end_matches('/');
    reqwest::Url::parse_with_params(
        &format!("{base}/voice/outbound_script"),
        &[("campaign", campaign)],
    )
    .map_err(|e| AppError::Config(format!("invalid public base URL: {e}")))
}
