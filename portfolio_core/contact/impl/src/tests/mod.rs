use portfolio_persistence_contracts::{
    submission::MockSubmissionRepository, MockConnection, MockDatabase,
};
use portfolio_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::ContactFeatureServiceImpl;


type Sut = ContactFeatureServiceImpl<
    MockIdService,
    MockTimeService,
    MockDatabase,
    MockSubmissionRepository<MockConnection>,
>;
