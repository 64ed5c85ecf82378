use portfolio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitRequest,
};
use portfolio_di::Build;
use portfolio_models::contact::{
    Submission, SubmissionField, SubmissionMessage, SubmitterEmail, SubmitterName,
    SubmitterPhoneNumber, EMAIL_REGEX,
};
use portfolio_persistence_contracts::{submission::SubmissionRepository, Database};
use portfolio_shared_contracts::{id::IdService, time::TimeService};
use portfolio_utils::trace_instrument;
use tracing::debug;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct ContactFeatureServiceImpl<Id, Time, Db, SubmissionRepo> {
    id: Id,
    time: Time,
    db: Db,
    submission_repo: SubmissionRepo,
}

impl<Id, Time, Db, SubmissionRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Id, Time, Db, SubmissionRepo>
where
    Id: IdService,
    Time: TimeService,
    Db: Database,
    SubmissionRepo: SubmissionRepository<Db::Connection>,
{
    #[trace_instrument(skip(self))]
    async fn submit(&self, request: ContactSubmitRequest) -> Result<Submission, ContactSubmitError> {
        let fields = ValidatedFields::try_from(request)
            .inspect_err(|err| debug!("Rejected contact form submission: {err}"))?;

        let submission = Submission {
            id: self.id.generate(),
            name: fields.name,
            email: fields.email,
            message: fields.message,
            phone_number: fields.phone_number,
            submitted_at: self.time.now(),
        };

        let mut conn = self.db.connect().await?;
        self.submission_repo.create(&mut conn, &submission).await?;

        Ok(submission)
    }
}

struct ValidatedFields {
    name: SubmitterName,
    email: SubmitterEmail,
    message: SubmissionMessage,
    phone_number: Option<SubmitterPhoneNumber>,
}

impl TryFrom<ContactSubmitRequest> for ValidatedFields {
    type Error = ContactSubmitError;

    fn try_from(request: ContactSubmitRequest) -> Result<Self, Self::Error> {
        let ContactSubmitRequest {
            name,
            email,
            message,
            phone_number,
        } = request;

        if [&name, &email, &message].iter().any(|x| x.trim().is_empty()) {
            return Err(ContactSubmitError::MissingFields);
        }

        if !EMAIL_REGEX.is_match(email.trim()) {
            return Err(ContactSubmitError::InvalidEmail);
        }

        Ok(Self {
            name: SubmitterName::try_new(name).map_err(too_long(SubmissionField::Name))?,
            email: SubmitterEmail::try_new(email).map_err(too_long(SubmissionField::Email))?,
            message: SubmissionMessage::try_new(message)
                .map_err(too_long(SubmissionField::Message))?,
            phone_number: phone_number
                .filter(|x| !x.trim().is_empty())
                .map(SubmitterPhoneNumber::try_new)
                .transpose()
                .map_err(too_long(SubmissionField::PhoneNumber))?,
        })
    }
}

fn too_long<E>(field: SubmissionField) -> impl FnOnce(E) -> ContactSubmitError {
    move |_| ContactSubmitError::TooLong(field)
}
