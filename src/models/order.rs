/// One row of the order sheet. All cells are opaque display strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRow {
    pub order_id: String,
    pub customer_name: String,
    pub product: String,
    pub dispatch_status: String,
    pub expected_delivery: String,
}

impl OrderRow {
    /// True when the caller's utterance contains this row's order id or
    /// customer name (case-insensitive). Empty keys never match: a blank
    /// sheet row must not claim every query.
    pub fn matches(&self, spoken: &str) -> bool {
        let spoken = spoken.to_lowercase();
        let id = self.order_id.trim().to_lowercase();
        let name = self.customer_name.trim().to_lowercase();

        (!id.is_empty() && spoken.contains(&id)) || (!name.is_empty() && spoken.contains(&name))
    }
}

/// First matching row wins; order ids are not required to be unique.
pub fn find_order<'a>(spoken: &str, orders: &'a [OrderRow]) -> Option<&'a OrderRow> {
    orders.iter().find(|row| row.matches(spoken))
}
