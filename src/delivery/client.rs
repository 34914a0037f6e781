//! HTTP client for the media host and the email dispatch API
//!
//! Uploads go to a Cloudinary-style unsigned upload endpoint as multipart
//! bodies; the submission email goes to an EmailJS-style dispatch endpoint
//! as JSON. Endpoints default to the production identifiers and can be
//! overridden through the config file.

use crate::config::IntakeConfig;
use crate::state::Submission;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use thiserror::Error;

use super::traits::DeliveryClientTrait;

/// Default media host upload endpoint
const DEFAULT_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/dvq8z9idm/image/upload";
/// Default unsigned upload preset
const DEFAULT_UPLOAD_PRESET: &str = "PhoneTel";
/// Default email dispatch endpoint
const DEFAULT_EMAIL_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
/// Default email dispatch identifiers
const DEFAULT_SERVICE_ID: &str = "service_3yun0as";
const DEFAULT_TEMPLATE_ID: &str = "template_ba5bgwx";
const DEFAULT_USER_ID: &str = "umObW8a2WmDNWRv9d";

/// Failure kinds for the delivery client
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("upload rejected with status {0}")]
    UploadRejected(reqwest::StatusCode),
    #[error("upload response missing secure_url")]
    MissingSecureUrl,
    #[error("email dispatch rejected with status {0}")]
    EmailRejected(reqwest::StatusCode),
}

/// Client for the media host and the email dispatch API
pub struct DeliveryClient {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    email_url: String,
    service_id: String,
    template_id: String,
    user_id: String,
}

/// The slice of the upload response we care about
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

impl DeliveryClient {
    /// Create a new delivery client, resolving endpoints from config with
    /// hardcoded fallbacks
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: config
                .upload_url
                .clone()
                .unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string()),
            upload_preset: config
                .upload_preset
                .clone()
                .unwrap_or_else(|| DEFAULT_UPLOAD_PRESET.to_string()),
            email_url: config
                .email_url
                .clone()
                .unwrap_or_else(|| DEFAULT_EMAIL_URL.to_string()),
            service_id: config
                .email_service_id
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE_ID.to_string()),
            template_id: config
                .email_template_id
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string()),
            user_id: config
                .email_user_id
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        }
    }
}

#[async_trait]
impl DeliveryClientTrait for DeliveryClient {
    async fn upload_image(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        tracing::debug!(file = %path.display(), size = bytes.len(), "uploading image");

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name))
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .context("Failed to reach the upload endpoint")?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::UploadRejected(status).into());
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .context("Failed to decode upload response")?;

        parsed
            .secure_url
            .ok_or_else(|| DeliveryError::MissingSecureUrl.into())
    }

    async fn send_email(&self, submission: &Submission) -> Result<()> {
        let payload = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.user_id,
            "template_params": submission,
        });

        let response = self
            .http
            .post(&self.email_url)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach the email dispatch endpoint")?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(DeliveryError::EmailRejected(status).into());
        }

        Ok(())
    }
}
