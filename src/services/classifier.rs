use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Intent;

// Keyword sets are checked in classify()'s rule order. The sets overlap on
// purpose ("delivery status" is a tracking phrase, "delivery" alone is a
// shipping-time question); first-match-wins precedence is the sole
// disambiguator. Do not reorder.
const ORDER_TRACKING_KEYWORDS: &[&str] = &[
    "order",
    "track",
    "status",
    "dispatch",
    "delivery status",
    "where is my order",
    "order id",
];

const BULK_KEYWORDS: &[&str] = &["bulk", "wholesale", "resell", "dealer"];

const PRICE_KEYWORDS: &[&str] = &["price", "cost", "how much", "rate", "rupees", "rs"];

const SIZE_KEYWORDS: &[&str] = &["size", "fitting", "small", "medium", "large", "xl", "xxl"];

const AVAILABILITY_KEYWORDS: &[&str] = &["available", "in stock", "do you have", "stock"];

const COLOR_KEYWORDS: &[&str] = &["color", "colour", "shade", "red", "blue", "green", "white", "black"];

const DELIVERY_KEYWORDS: &[&str] = &["delivery", "shipping", "how long", "days", "when will i get"];

const MATERIAL_KEYWORDS: &[&str] = &["material", "fabric", "cotton", "silk", "rayon", "georgette"];

/// Resale-scale quantities start at 5 pieces; anything smaller is a retail
/// purchase and falls through to the other rules.
const BULK_MIN_QTY: u32 = 5;

static BULK_QTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(pieces|pcs|units|quantity)").unwrap());

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Pull a bulk quantity out of phrases like "10 pieces" or "25 pcs".
/// Only the first quantity in the transcript is considered.
pub fn detect_bulk_quantity(transcript: &str) -> Option<u32> {
    let text = transcript.to_lowercase();
    let caps = BULK_QTY_RE.captures(&text)?;
    let qty: u32 = caps[1].parse().ok()?;
    (qty >= BULK_MIN_QTY).then_some(qty)
}

/// Classify a transcript into exactly one intent. Total and pure: any text
/// (including empty) yields a tag, and the same text always yields the same
/// tag. Rules run strictly in order; the first hit wins.
pub fn classify(transcript: &str) -> Intent {
    let text = transcript.to_lowercase();

    if contains_any(&text, ORDER_TRACKING_KEYWORDS) {
        return Intent::OrderStatus;
    }
    if detect_bulk_quantity(&text).is_some() || contains_any(&text, BULK_KEYWORDS) {
        return Intent::BulkOrder;
    }
    if contains_any(&text, PRICE_KEYWORDS) {
        return Intent::Price;
    }
    if contains_any(&text, SIZE_KEYWORDS) {
        return Intent::Size;
    }
    if contains_any(&text, AVAILABILITY_KEYWORDS) {
        return Intent::Availability;
    }
    if contains_any(&text, COLOR_KEYWORDS) {
        return Intent::Color;
    }
    if contains_any(&text, DELIVERY_KEYWORDS) {
        return Intent::Delivery;
    }
    if contains_any(&text, MATERIAL_KEYWORDS) {
        return Intent::Material;
    }

    Intent::HumanNeeded
}
