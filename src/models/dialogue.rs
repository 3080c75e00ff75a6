use serde::{Deserialize, Serialize};

/// One state per webhook turn. The telephony layer keeps no session: the
/// endpoint Twilio is told to post to next is the entire machine state, so
/// every variant maps to a route in `handlers::voice`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    Greeting,
    Listening,
    AwaitingOrderRef,
    Answering,
    LowConfidence,
}

impl TurnState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnState::Greeting => "greeting",
            TurnState::Listening => "listening",
            TurnState::AwaitingOrderRef => "awaiting_order_ref",
            TurnState::Answering => "answering",
            TurnState::LowConfidence => "low_confidence",
        }
    }

    /// Terminal states render a bare `<Say>`; the call leg ends instead of
    /// re-prompting.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::LowConfidence)
    }
}

/// What speech-to-text handed us for this turn. Confidence is in [0, 1];
/// Twilio omits it on some turns, which callers treat as 0.0.
#[derive(Debug, Clone, Default)]
pub struct TurnInput {
    pub transcript: String,
    pub confidence: f32,
}

impl TurnInput {
    pub fn new(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
        }
    }
}

/// Result of one turn of the dialogue machine: the reply to speak, where
/// the next utterance should be posted, whether the owner gets pinged, and
/// the label the audit log records for this turn. An empty label means the
/// turn leaves no audit row (silent re-prompts).
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub next_state: TurnState,
    pub reply: String,
    pub escalate: bool,
    pub intent_label: String,
}
