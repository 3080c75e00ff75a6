//! TwiML rendering for Twilio voice webhooks.
//!
//! Twilio speaks whatever `<Say>` contains and, inside a `<Gather>`, posts
//! the caller's transcribed speech to the `action` URL. Everything
//! interpolated here came from a spreadsheet or a caller, so it is always
//! escaped.

const VOICE: &str = "Polly.Aditi";
const LANGUAGE: &str = "en-IN";
const SPEECH_TIMEOUT: &str = "5";

/// Recognition hints for FAQ turns.
pub const FAQ_HINTS: &str = "price size availability color delivery bulk order track status";
/// Recognition hints while waiting for an order id or customer name.
pub const ORDER_HINTS: &str = "order number name";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// A say-only response. The call leg ends when Twilio finishes speaking.
pub fn say(message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
    <Say voice="{VOICE}" language="{LANGUAGE}">{msg}</Say>
</Response>"#,
        msg = escape(message)
    )
}

/// Speak `message`, then gather the caller's next utterance and post it to
/// `action`. The trailing say only plays when the caller stays silent.
pub fn gather(message: &str, action: &str, hints: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
    <Gather input="speech" action="{action}" method="POST" speechTimeout="{SPEECH_TIMEOUT}" language="{LANGUAGE}" hints="{hints}">
        <Say voice="{VOICE}" language="{LANGUAGE}">{msg}</Say>
    </Gather>
    <Say voice="{VOICE}" language="{LANGUAGE}">Sorry, I did not catch that. Please call again.</Say>
</Response>"#,
        action = escape(action),
        hints = escape(hints),
        msg = escape(message)
    )
}
