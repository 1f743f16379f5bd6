use async_trait::async_trait;
use serde::Serialize;

#[async_trait]
pub trait MailClient: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}

pub struct HttpMailClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl HttpMailClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

#[async_trait]
impl MailClient for HttpMailClient {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let request = SendEmailRequest { to, subject, body };
        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Error sending email: {:?}", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format!("Mail request failed with status {}: {}", status, text));
        }
        Ok(())
    }
}
