use std::sync::LazyLock;

use portfolio_models::contact::Submission;

use crate::{TIMESTAMP, UUID1, UUID2};

/// Submission of the payload
/// `{"name": "Alice", "email": "Alice@Example.COM", "message": "Hi", "phoneNumber": " 555 "}`.
pub static ALICE: LazyLock<Submission> = LazyLock::new(|| Submission {
    id: UUID1.into(),
    name: "Alice".to_owned().try_into().unwrap(),
    email: "alice@example.com".to_owned().try_into().unwrap(),
    message: "Hi".to_owned().try_into().unwrap(),
    phone_number: Some("555".to_owned().try_into().unwrap()),
    submitted_at: *TIMESTAMP,
});

/// Submission without a phone number.
pub static BOB: LazyLock<Submission> = LazyLock::new(|| Submission {
    id: UUID2.into(),
    name: "Bob Builder".to_owned().try_into().unwrap(),
    email: "bob@example.org".to_owned().try_into().unwrap(),
    message: "Can we fix it?\nYes we can!".to_owned().try_into().unwrap(),
    phone_number: None,
    submitted_at: *TIMESTAMP,
});
