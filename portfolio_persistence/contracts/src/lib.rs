use std::future::Future;

pub mod submission;

#[cfg_attr(feature = "mock", mockall::automock(type Connection = MockConnection;))]
pub trait Database: Send + Sync + 'static {
    type Connection: Send + Sync + 'static;

    /// Returns a handle which can be used to interact with the database.
    ///
    /// The underlying connection is established on first use and shared by
    /// all subsequent calls.
    fn connect(&self) -> impl Future<Output = anyhow::Result<Self::Connection>> + Send;

    /// Verify the connection to the database.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockConnection;

#[cfg(feature = "mock")]
impl MockDatabase {
    pub fn with_connect(mut self) -> Self {
        self.expect_connect()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(MockConnection))));
        self
    }

    pub fn with_connect_error(mut self, err: anyhow::Error) -> Self {
        self.expect_connect()
            .once()
            .return_once(|| Box::pin(std::future::ready(Err(err))));
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("database unreachable"))
            }))
        });
        self
    }
}
