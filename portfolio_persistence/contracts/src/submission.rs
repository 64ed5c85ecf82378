use std::future::Future;

use portfolio_models::contact::Submission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionRepository<Conn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Persists a new submission as a single record.
    fn create(
        &self,
        conn: &mut Conn,
        submission: &Submission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Conn: Send + Sync + 'static> MockSubmissionRepository<Conn> {
    pub fn with_create(mut self, submission: Submission) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_create_error(mut self, submission: Submission, err: anyhow::Error) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Err(err))));
        self
    }
}
