use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub business_name: String,
    /// Externally reachable base URL, used when telling Twilio where to
    /// fetch outbound-call TwiML.
    pub public_base_url: String,
    /// Empty disables bearer auth on the operator endpoints.
    pub admin_token: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_number: String,
    pub owner_whatsapp: String,
    pub catalog_csv_url: String,
    pub orders_csv_url: String,
    pub customers_csv_url: String,
    pub audit_log_path: String,
    pub sheet_timeout_secs: u64,
    pub campaign_call_gap_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "Meera Boutique".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_default(),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_default(),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_number: env::var("TWILIO_NUMBER").unwrap_or_default(),
            owner_whatsapp: env::var("OWNER_WHATSAPP").unwrap_or_default(),
            catalog_csv_url: env::var("CATALOG_CSV_URL").unwrap_or_default(),
            orders_csv_url: env::var("ORDERS_CSV_URL").unwrap_or_default(),
            customers_csv_url: env::var("CUSTOMERS_CSV_URL").unwrap_or_default(),
            audit_log_path: env::var("AUDIT_LOG_PATH")
                .unwrap_or_else(|_| "call_logs.csv".to_string()),
            sheet_timeout_secs: env::var("SHEET_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            campaign_call_gap_secs: env::var("CAMPAIGN_CALL_GAP_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
        }
    }
}
