//! Trait abstraction for the backend client to enable mocking in tests

use crate::backend::client::SubmitError;
use crate::state::Submission;
use async_trait::async_trait;

/// Trait for submitting an intake form to the collaborator endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClientTrait: Send + Sync {
    /// Perform exactly one outbound call carrying the submission as its body
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}
