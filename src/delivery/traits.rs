//! Trait abstraction for the delivery client to enable mocking in tests

use crate::state::Submission;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for delivery operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryClientTrait: Send + Sync {
    /// Exchange a local image file for a hosted URL on the media host
    async fn upload_image(&self, path: &Path) -> Result<String>;

    /// Dispatch the submission email through the email API
    async fn send_email(&self, submission: &Submission) -> Result<()>;
}
