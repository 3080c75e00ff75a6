use anyhow::Context;
use async_trait::async_trait;

use super::AlertProvider;

pub struct TwilioWhatsAppProvider {
    account_sid: String,
    auth_token: String,
    from_number: String,
    owner_number: String,
    client: reqwest::Client,
}

impl TwilioWhatsAppProvider {
    pub fn new(
        account_sid: String,
        auth_token: String,
        from_number: String,
        owner_number: String,
    ) -> Self {
        Self {
            account_sid,
            auth_token,
            from_number,
            owner_number,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AlertProvider for TwilioWhatsAppProvider {
    async fn send_alert(&self, caller: &str, query: &str, intent: &str) -> anyhow::Result<()> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );
        let body = format!("🔔 HIGH INTENT LEAD\nCaller: {caller}\nIntent: {intent}\nQuery: {query}");

        self.client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", format!("whatsapp:{}", self.owner_number)),
                ("From", format!("whatsapp:{}", self.from_number)),
                ("Body", body),
            ])
            .send()
            .await
            .context("failed to send WhatsApp alert")?
            .error_for_status()
            .context("Twilio API returned error")?;

        Ok(())
    }
}
