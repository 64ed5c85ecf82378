use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_content_impl::ContentFeatureServiceImpl;
use portfolio_core_health_impl::HealthFeatureServiceImpl;
use portfolio_persistence_mongodb::{submission::MongoSubmissionRepository, MongoDatabase};
use portfolio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = portfolio_api_rest::RestServer<HealthFeature, ContentFeature, ContactFeature>;

// Persistence
pub type Database = MongoDatabase;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type SubmissionRepo = MongoSubmissionRepository;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database>;

pub type ContentFeature = ContentFeatureServiceImpl;

pub type ContactFeature = ContactFeatureServiceImpl<Id, Time, Database, SubmissionRepo>;
