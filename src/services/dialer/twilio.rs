use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::CallDialer;

#[derive(Deserialize)]
struct CallResource {
    sid: String,
}

pub struct TwilioDialer {
    account_sid: String,
    auth_token: String,
    from_number: String,
    client: reqwest::Client,
}

impl TwilioDialer {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            account_sid,
            auth_token,
            from_number,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CallDialer for TwilioDialer {
    async fn place_call(&self, to: &str, twiml_url: &str) -> anyhow::Result<String> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Calls.json",
            self.account_sid
        );

        let resource: CallResource = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", &self.from_number), ("Url", twiml_url)])
            .send()
            .await
            .context("failed to place Twilio call")?
            .error_for_status()
            .context("Twilio API returned error")?
            .json()
            .await
            .context("failed to parse Twilio call response")?;

        Ok(resource.sid)
    }
}
