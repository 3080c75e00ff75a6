use serde::{Deserialize, Serialize};

/// Closed set of caller intents. Classification is total: every transcript
/// maps to exactly one tag, with `HumanNeeded` as the catch-all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    OrderStatus,
    BulkOrder,
    Price,
    Size,
    Availability,
    Color,
    Delivery,
    Material,
    HumanNeeded,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::OrderStatus => "order_status",
            Intent::BulkOrder => "bulk_order",
            Intent::Price => "price",
            Intent::Size => "size",
            Intent::Availability => "availability",
            Intent::Color => "color",
            Intent::Delivery => "delivery",
            Intent::Material => "material",
            Intent::HumanNeeded => "human_needed",
        }
    }

    /// Intents answered from a product attribute. These get the
    /// "wait a minute" preamble on the phone.
    pub fn is_product_query(&self) -> bool {
        matches!(
            self,
            Intent::Price
                | Intent::Size
                | Intent::Availability
                | Intent::Color
                | Intent::Delivery
                | Intent::Material
        )
    }
}
