use std::sync::Arc;

use portfolio_models::content::PortfolioDocument;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContentFeatureService: Send + Sync + 'static {
    /// Returns the content document describing the site owner.
    fn get_document(&self) -> Arc<PortfolioDocument>;
}

#[cfg(feature = "mock")]
impl MockContentFeatureService {
    pub fn with_get_document(mut self, document: Arc<PortfolioDocument>) -> Self {
        self.expect_get_document().once().return_const(document);
        self
    }
}
