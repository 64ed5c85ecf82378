use chrono::{DateTime, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    pub fn with_now(self, time: DateTime<Utc>) -> Self {
        self.with_now_times(time, 1)
    }

    pub fn with_now_times(mut self, time: DateTime<Utc>, times: usize) -> Self {
        self.expect_now().times(times).return_const(time);
        self
    }
}
