use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;

use super::DEFAULT_CAMPAIGN;
use crate::models::{CallDirection, CallRecord, Catalog, TurnInput, TurnOutcome, TurnState};
use crate::state::AppState;
use crate::twiml;

/// Fields Twilio posts on voice webhooks. Everything is optional on the
/// wire; `From` falls back to "Unknown" so the audit log never carries an
/// empty caller column.
#[derive(Deserialize)]
pub struct VoiceForm {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "CallSid", default)]
    pub call_sid: String,
    #[serde(rename = "SpeechResult", default)]
    pub speech_result: String,
    #[serde(rename = "Confidence", default)]
    pub confidence: Option<String>,
}

impl VoiceForm {
    fn caller(&self) -> &str {
        if self.from.is_empty() {
            "Unknown"
        } else {
            &self.from
        }
    }

    fn confidence_score(&self) -> f32 {
        self.confidence
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0)
    }
}

fn validate_twilio_signature(
    auth_token: &str,
    signature: &str,
    url: &str,
    params: &[(&str, &str)],
) -> bool {
    // Build the data to sign: URL + sorted params concatenated
    let mut data = url.to_string();
    let mut sorted_params = params.to_vec();
    sorted_params.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in &sorted_params {
        data.push_str(key);
        data.push_str(value);
    }

    let mut mac = match Hmac::<Sha1>::new_from_slice(auth_token.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(data.as_bytes());
    let result = mac.finalize().into_bytes();
    let expected = base64::engine::general_purpose::STANDARD.encode(result);

    expected == signature
}

/// Reject requests that do not carry a valid `X-Twilio-Signature`. Skipped
/// entirely when no auth token is configured (dev mode).
fn check_signature(
    state: &AppState,
    headers: &HeaderMap,
    path: &str,
    params: &[(&str, &str)],
) -> Result<(), Response> {
    if state.config.twilio_auth_token.is_empty() {
        return Ok(());
    }

    let signature = headers
        .get("x-twilio-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if signature.is_empty() {
        tracing::warn!("missing X-Twilio-Signature header");
        return Err((StatusCode::FORBIDDEN, "Missing signature").into_response());
    }

    // Reconstruct the webhook URL, honoring X-Forwarded-Proto/Host behind a proxy
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("https");
    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get("host"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let url = format!("{proto}://{host}{path}");

    if !validate_twilio_signature(&state.config.twilio_auth_token, signature, &url, params) {
        tracing::warn!("invalid Twilio signature");
        return Err((StatusCode::FORBIDDEN, "Invalid signature").into_response());
    }

    Ok(())
}

// GET|POST /voice/inbound
pub async fn voice_inbound(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<VoiceForm>,
) -> Response {
    let params = [("CallSid", form.call_sid.as_str()), ("From", form.from.as_str())];
    if let Err(resp) = check_signature(&state, &headers, "/voice/inbound", &params) {
        return resp;
    }

    tracing::info!(caller = %form.caller(), call_sid = %form.call_sid, "inbound call");

    let outcome = state.dialogue.classify_and_respond(
        TurnState::Greeting,
        &TurnInput::default(),
        &Catalog::default(),
        &[],
    );

    state.audit.append(&CallRecord::new(
        form.caller(),
        &form.call_sid,
        CallDirection::Inbound,
        &outcome.intent_label,
        "",
    ));

    render_turn(&outcome)
}

// POST /voice/process
pub async fn voice_process(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<VoiceForm>,
) -> Response {
    let confidence_raw = form.confidence.clone().unwrap_or_default();
    let params = [
        ("CallSid", form.call_sid.as_str()),
        ("Confidence", confidence_raw.as_str()),
        ("From", form.from.as_str()),
        ("SpeechResult", form.speech_result.as_str()),
    ];
    if let Err(resp) = check_signature(&state, &headers, "/voice/process", &params) {
        return resp;
    }

    let speech = form.speech_result.trim().to_string();
    let input = TurnInput::new(speech.clone(), form.confidence_score());

    // Fresh snapshot every turn; the sheet is the single source of truth.
    let catalog = state.sheets.fetch_catalog().await;
    let outcome = state
        .dialogue
        .classify_and_respond(TurnState::Listening, &input, &catalog, &[]);

    tracing::info!(
        caller = %form.caller(),
        intent = %outcome.intent_label,
        confidence = form.confidence_score(),
        "processed utterance"
    );

    if !outcome.intent_label.is_empty() {
        state.audit.append(&CallRecord::new(
            form.caller(),
            &form.call_sid,
            CallDirection::Inbound,
            &outcome.intent_label,
            &speech,
        ));
    }

    if outcome.escalate {
        spawn_alert(
            &state,
            form.caller().to_string(),
            speech,
            outcome.intent_label.clone(),
        );
    }

    render_turn(&outcome)
}

// POST /voice/order_check
pub async fn voice_order_check(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<VoiceForm>,
) -> Response {
    let confidence_raw = form.confidence.clone().unwrap_or_default();
    let params = [
        ("CallSid", form.call_sid.as_str()),
        ("Confidence", confidence_raw.as_str()),
        ("From", form.from.as_str()),
        ("SpeechResult", form.speech_result.as_str()),
    ];
    if let Err(resp) = check_signature(&state, &headers, "/voice/order_check", &params) {
        return resp;
    }

    let speech = form.speech_result.trim().to_string();
    let input = TurnInput::new(speech.clone(), form.confidence_score());

    let orders = state.sheets.fetch_orders().await;
    let outcome = state.dialogue.classify_and_respond(
        TurnState::AwaitingOrderRef,
        &input,
        &Catalog::default(),
        &orders,
    );

    tracing::info!(caller = %form.caller(), call_sid = %form.call_sid, "order lookup");

    if !outcome.intent_label.is_empty() {
        state.audit.append(&CallRecord::new(
            form.caller(),
            &form.call_sid,
            CallDirection::Inbound,
            &outcome.intent_label,
            &speech,
        ));
    }

    render_turn(&outcome)
}

#[derive(Deserialize)]
pub struct ScriptQuery {
    pub campaign: Option<String>,
}

// GET|POST /voice/outbound_script
pub async fn outbound_script(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScriptQuery>,
) -> Response {
    let campaign = query.campaign.as_deref().unwrap_or(DEFAULT_CAMPAIGN);
    let greeting = format!(
        "Hello! This is a message from {}. {campaign}. You can ask me about pricing, sizes, \
         availability, or any questions. Please speak after the tone.",
        state.config.business_name
    );

    xml(twiml::gather(&greeting, "/voice/process", twiml::FAQ_HINTS))
}

/// Owner alerts ride a spawned task: a slow or failing Twilio message must
/// never delay the TwiML response the caller is waiting on.
fn spawn_alert(state: &Arc<AppState>, caller: String, query: String, intent: String) {
    let state = Arc::clone(state);
    tokio::spawn(async move {
        if let Err(e) = state.alerts.send_alert(&caller, &query, &intent).await {
            tracing::error!(error = %e, "failed to send owner alert");
        }
    });
}

fn render_turn(outcome: &TurnOutcome) -> Response {
    let body = match outcome.next_state {
        TurnState::AwaitingOrderRef => {
            twiml::gather(&outcome.reply, "/voice/order_check", twiml::ORDER_HINTS)
        }
        s if s.is_terminal() => twiml::say(&outcome.reply),
        _ => twiml::gather(&outcome.reply, "/voice/process", twiml::FAQ_HINTS),
    };
    xml(body)
}

fn xml(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}
