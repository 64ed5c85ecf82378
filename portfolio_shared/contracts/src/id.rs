use uuid::Uuid;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Generates a new unique ID.
    fn generate<I: From<Uuid> + 'static>(&self) -> I;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_generate<I: From<Uuid> + Send + 'static>(self, id: I) -> Self {
        self.with_generate_many(vec![id])
    }

    /// Expect exactly `ids.len()` calls, returning the given ids in order.
    pub fn with_generate_many<I: From<Uuid> + Send + 'static>(mut self, ids: Vec<I>) -> Self {
        let times = ids.len();
        let mut ids = ids.into_iter();
        self.expect_generate()
            .times(times)
            .returning(move || ids.next().expect("more ids than expected"));
        self
    }
}
