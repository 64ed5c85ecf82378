use std::future::Future;

use portfolio_models::contact::{Submission, SubmissionField};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates a contact form submission and persists it as a new record.
    ///
    /// Returns the stored submission. Nothing is persisted if validation
    /// fails.
    fn submit(
        &self,
        request: ContactSubmitRequest,
    ) -> impl Future<Output = Result<Submission, ContactSubmitError>> + Send;
}

/// The raw contact form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmitRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Name, email, and message are required.")]
    MissingFields,
    #[error("Please provide a valid email address.")]
    InvalidEmail,
    #[error("{0} is too long.")]
    TooLong(SubmissionField),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        request: ContactSubmitRequest,
        result: Result<Submission, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
