use std::time::Duration;

use crate::models::Customer;
use crate::services::dialer::CallDialer;

/// Dial every customer on the list, one call at a time. Twilio rate-limits
/// call creation per number, so dispatches are spaced by `gap`; a failed
/// dial is logged and the run moves on to the next customer.
///
/// Returns the number of customers dialed (attempts, not connections).
pub async fn run(
    dialer: &dyn CallDialer,
    customers: &[Customer],
    script_url: &str,
    gap: Duration,
) -> usize {
    for customer in customers {
        match dialer.place_call(&customer.phone, script_url).await {
            Ok(sid) => {
                tracing::info!(phone = %customer.phone, sid = %sid, "campaign call placed");
            }
            Err(e) => {
                tracing::warn!(phone = %customer.phone, error = %e, "campaign call failed");
            }
        }
        tokio::time::sleep(gap).await;
    }

    customers.len()
}
