use crate::models::call::markers;
use crate::models::{find_order, Catalog, Intent, OrderRow, TurnInput, TurnOutcome, TurnState};
use crate::services::{classifier, composer};

/// Turns below this confidence get the apology instead of the classifier.
const MIN_CONFIDENCE: f32 = 0.4;

const LOW_CONFIDENCE_REPLY: &str =
    "I am sorry, I could not understand you clearly. Our owner will call you back.";
const ORDER_PROMPT: &str =
    "Sure, wait a minute, let me check. Please tell me your order ID or your name.";
const SILENCE_REPLY: &str = "Sorry, I did not catch that. Please call again.";
const ORDER_NOT_FOUND: &str =
    "Sorry, I could not find your order. Please contact our customer service for assistance.";
const PRODUCT_LOOKUP_PREFIX: &str = "Sure, wait a minute, let me check.";

/// The turn machine. It owns no session and does no IO: callers fetch
/// whatever sheet snapshot the turn needs and pass it in, and the state
/// argument comes from which webhook route Twilio posted to.
pub struct DialogueEngine {
    business_name: String,
}

impl DialogueEngine {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
        }
    }

    pub fn classify_and_respond(
        &self,
        state: TurnState,
        input: &TurnInput,
        catalog: &Catalog,
        orders: &[OrderRow],
    ) -> TurnOutcome {
        match state {
            TurnState::Greeting => self.greet(),
            TurnState::Listening | TurnState::Answering => self.answer(input, catalog),
            TurnState::AwaitingOrderRef => self.check_order(input, orders),
            TurnState::LowConfidence => low_confidence(),
        }
    }

    fn greet(&self) -> TurnOutcome {
        TurnOutcome {
            next_state: TurnState::Listening,
            reply: format!(
                "Welcome to {}! I am your AI assistant. You can ask me about product details, \
                 pricing, sizes, or check your order status. Please speak your question after the tone.",
                self.business_name
            ),
            escalate: false,
            intent_label: markers::GREETED.to_string(),
        }
    }

    fn answer(&self, input: &TurnInput, catalog: &Catalog) -> TurnOutcome {
        let transcript = input.transcript.trim();
        if transcript.is_empty() || input.confidence < MIN_CONFIDENCE {
            return low_confidence();
        }

        // Order tracking branches to its own gather before any product
        // lookup happens.
        if classifier::classify(transcript) == Intent::OrderStatus {
            return TurnOutcome {
                next_state: TurnState::AwaitingOrderRef,
                reply: ORDER_PROMPT.to_string(),
                escalate: false,
                intent_label: Intent::OrderStatus.as_str().to_string(),
            };
        }

        let (intent, answer) = composer::compose(transcript, catalog);
        tracing::debug!(
            intent = intent.as_str(),
            confidence = input.confidence,
            "classified utterance"
        );

        let answer = if intent.is_product_query() {
            format!("{PRODUCT_LOOKUP_PREFIX} {answer}")
        } else {
            answer
        };

        let (reply, escalate) = match intent {
            Intent::BulkOrder => (format!("{answer} Thank you for your interest!"), true),
            Intent::HumanNeeded => (format!("{answer} Thank you for calling!"), true),
            _ => (format!("{answer} Do you have any other questions?"), false),
        };

        TurnOutcome {
            next_state: TurnState::Listening,
            reply,
            escalate,
            intent_label: intent.as_str().to_string(),
        }
    }

    fn check_order(&self, input: &TurnInput, orders: &[OrderRow]) -> TurnOutcome {
        let transcript = input.transcript.trim();
        if transcript.is_empty() {
            // Silent turn: speak the retry line, leave no audit row.
            return TurnOutcome {
                next_state: TurnState::LowConfidence,
                reply: SILENCE_REPLY.to_string(),
                escalate: false,
                intent_label: String::new(),
            };
        }

        let status_line = match find_order(transcript, orders) {
            Some(row) => format!(
                "Your order {} for {} is {}. Expected delivery: {}.",
                row.order_id, row.product, row.dispatch_status, row.expected_delivery
            ),
            None => ORDER_NOT_FOUND.to_string(),
        };

        TurnOutcome {
            next_state: TurnState::Listening,
            reply: format!("{status_line} Do you have any other questions?"),
            escalate: false,
            intent_label: markers::ORDER_CHECKED.to_string(),
        }
    }
}

fn low_confidence() -> TurnOutcome {
    TurnOutcome {
        next_state: TurnState::LowConfidence,
        reply: LOW_CONFIDENCE_REPLY.to_string(),
        escalate: false,
        intent_label: markers::LOW_CONFIDENCE.to_string(),
    }
}
