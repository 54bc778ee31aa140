//! Email/SMS Notification Service
//!
//! Thin client over an HTTP notification provider. Sends are best-effort:
//! a failed delivery is logged and reported as `false`, it never fails the
//! surrounding request.

use serde::Serialize;

/// 通知服务配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | NOTIFY_EMAIL_URL | https://api.brevo.com/v3/smtp/email | 邮件发送接口 |
/// | NOTIFY_SMS_URL | https://api.brevo.com/v3/transactionalSMS/sms | 短信发送接口 |
/// | NOTIFY_API_KEY | (空, 即禁用) | 提供商 API Key |
/// | NOTIFY_SENDER_EMAIL | no-reply@refugio.local | 发件人邮箱 |
/// | NOTIFY_SENDER_NAME | Refugio | 发件人名称 |
#[derive(Debug, Clone)]
pub struct NotificacionConfig {
    pub email_url: String,
    pub sms_url: String,
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: String,
}

impl NotificacionConfig {
    pub fn from_env() -> Self {
        Self {
            email_url: std::env::var("NOTIFY_EMAIL_URL")
                .unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".into()),
            sms_url: std::env::var("NOTIFY_SMS_URL")
                .unwrap_or_else(|_| "https://api.brevo.com/v3/transactionalSMS/sms".into()),
            api_key: std::env::var("NOTIFY_API_KEY").unwrap_or_default(),
            sender_email: std::env::var("NOTIFY_SENDER_EMAIL")
                .unwrap_or_else(|_| "no-reply@refugio.local".into()),
            sender_name: std::env::var("NOTIFY_SENDER_NAME").unwrap_or_else(|_| "Refugio".into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    html_content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendSmsBody {
    sender: String,
    recipient: String,
    content: String,
}

/// 邮件/短信通知服务
#[derive(Clone, Debug)]
pub struct NotificacionService {
    client: reqwest::Client,
    config: NotificacionConfig,
}

impl NotificacionService {
    pub fn new(config: NotificacionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Whether a provider API key is configured
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    /// Send an email, best-effort. Returns whether delivery was accepted.
    pub async fn send_email(&self, destino: &str, asunto: &str, cuerpo_html: &str) -> bool {
        if !self.is_configured() {
            tracing::warn!(destino = %destino, "Notification provider not configured, email skipped");
            return false;
        }

        let body = SendEmailBody {
            sender: EmailAddress {
                email: self.config.sender_email.clone(),
                name: Some(self.config.sender_name.clone()),
            },
            to: vec![EmailAddress {
                email: destino.to_string(),
                name: None,
            }],
            subject: asunto.to_string(),
            html_content: cuerpo_html.to_string(),
        };

        let resp = match self
            .client
            .post(&self.config.email_url)
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(destino = %destino, error = %e, "Failed to reach email provider");
                return false;
            }
        };

        if !resp.status().is_success() {
            tracing::warn!(
                destino = %destino,
                status = %resp.status(),
                "Email provider returned non-success status"
            );
            return false;
        }

        tracing::info!(destino = %destino, "Email notification sent");
        true
    }

    /// Send an SMS, best-effort. Returns whether delivery was accepted.
    pub async fn send_sms(&self, destino: &str, contenido: &str) -> bool {
        if !self.is_configured() {
            tracing::warn!(destino = %destino, "Notification provider not configured, SMS skipped");
            return false;
        }

        let body = SendSmsBody {
            sender: self.config.sender_name.clone(),
            recipient: destino.to_string(),
            content: contenido.to_string(),
        };

        let resp = match self
            .client
            .post(&self.config.sms_url)
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(destino = %destino, error = %e, "Failed to reach SMS provider");
                return false;
            }
        };

        if !resp.status().is_success() {
            tracing::warn!(
                destino = %destino,
                status = %resp.status(),
                "SMS provider returned non-success status"
            );
            return false;
        }

        tracing::info!(destino = %destino, "SMS notification sent");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_provider_degrades_to_false() {
        let config = NotificacionConfig {
            email_url: "http://localhost:9".into(),
            sms_url: "http://localhost:9".into(),
            api_key: String::new(),
            sender_email: "no-reply@refugio.local".into(),
            sender_name: "Refugio".into(),
        };
        let svc = NotificacionService::new(config);

        assert!(!svc.is_configured());
        assert!(!svc.send_email("maria@example.com", "Hola", "<b>Hola</b>").await);
        assert!(!svc.send_sms("600111222", "Hola").await);
    }
}
