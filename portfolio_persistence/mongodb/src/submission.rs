use anyhow::Context;
use mongodb::bson;
use portfolio_di::Build;
use portfolio_models::contact::Submission;
use portfolio_persistence_contracts::submission::SubmissionRepository;
use portfolio_utils::trace_instrument;
use serde::{Deserialize, Serialize};

use crate::MongoConnection;

/// Name of the collection storing contact form submissions.
pub const SUBMISSIONS_COLLECTION: &str = "contacts";

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MongoSubmissionRepository;

impl SubmissionRepository<MongoConnection> for MongoSubmissionRepository {
    #[trace_instrument(skip(self, conn))]
    async fn create(
        &self,
        conn: &mut MongoConnection,
        submission: &Submission,
    ) -> anyhow::Result<()> {
        conn.db
            .collection::<SubmissionDocument>(SUBMISSIONS_COLLECTION)
            .insert_one(SubmissionDocument::from(submission))
            .await
            .context("Failed to insert submission")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    email: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    submitted_at: bson::DateTime,
}

impl From<&Submission> for SubmissionDocument {
    fn from(value: &Submission) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.as_str().into(),
            email: value.email.as_str().into(),
            message: value.message.as_str().into(),
            phone_number: value.phone_number.as_ref().map(|p| p.as_str().into()),
            submitted_at: bson::DateTime::from_millis(value.submitted_at.timestamp_millis()),
        }
    }
}
