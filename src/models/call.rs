use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

impl CallDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallDirection::Inbound => "inbound",
            CallDirection::Outbound => "outbound",
        }
    }
}

/// Append-only audit entry, one CSV row per webhook turn or outbound
/// dispatch. The intent column holds either a classified tag or a
/// lifecycle marker ("greeted", "low_confidence", "order_checked",
/// "initiated"); field order here is the column order in the log file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallRecord {
    pub timestamp: String,
    pub caller: String,
    pub call_sid: String,
    pub direction: CallDirection,
    pub intent: String,
    pub query: String,
}

impl CallRecord {
    pub fn new(
        caller: &str,
        call_sid: &str,
        direction: CallDirection,
        intent: &str,
        query: &str,
    ) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            caller: caller.to_string(),
            call_sid: call_sid.to_string(),
            direction,
            intent: intent.to_string(),
            query: query.to_string(),
        }
    }
}

/// Lifecycle markers logged alongside classified intent tags.
pub mod markers {
    pub const GREETED: &str = "greeted";
    pub const LOW_CONFIDENCE: &str = "low_confidence";
    pub const ORDER_CHECKED: &str = "order_checked";
    pub const INITIATED: &str = "initiated";
}
