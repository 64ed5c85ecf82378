use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;

use crate::macros::id;

id!(SubmissionId);

/// A contact form entry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub message: SubmissionMessage,
    pub phone_number: Option<SubmitterPhoneNumber>,
    pub submitted_at: DateTime<Utc>,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmitterName(String);

#[nutype(
    sanitize(trim, lowercase),
    validate(len_char_max = 254, regex = EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmitterEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmitterPhoneNumber(String);

/// Matches `local@domain.tld`: printable ASCII without whitespace, a single
/// `@` and at least one `.` after it.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x21-\x3F\x41-\x7E]+@[\x21-\x3F\x41-\x7E]+\.[\x21-\x3F\x41-\x7E]+$").unwrap()
});

/// The user-facing fields of a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionField {
    Name,
    Email,
    Message,
    PhoneNumber,
}

impl SubmissionField {
    /// Key of the field in the contact form payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::PhoneNumber)
    }
}

impl std::fmt::Display for SubmissionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
            Self::PhoneNumber => "Phone number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        for (input, expected) in [
            ("alice@example.com", true),
            ("a.b+c@sub.example.co.uk", true),
            ("x@y.z", true),
            ("foo", false),
            ("foo@bar", false),
            ("foo@bar@baz.com", false),
            ("@example.com", false),
            ("alice@.com", false),
            ("alice@example.", false),
            ("al ice@example.com", false),
            ("alice@exa\tmple.com", false),
            ("jörg@example.com", false),
            ("", false),
        ] {
            assert_eq!(EMAIL_REGEX.is_match(input), expected, "{input:?}");
        }
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = SubmitterEmail::try_new("  Alice@Example.COM ".to_owned()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn email_rejects_malformed() {
        SubmitterEmail::try_new("foo@bar".to_owned()).unwrap_err();
        SubmitterEmail::try_new(format!("{}@example.com", "a".repeat(250))).unwrap_err();
    }

    #[test]
    fn name_is_trimmed() {
        let name = SubmitterName::try_new("  Alice \n".to_owned()).unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn whitespace_only_is_rejected() {
        SubmitterName::try_new(" \t ".to_owned()).unwrap_err();
        SubmissionMessage::try_new("\n".to_owned()).unwrap_err();
        SubmitterPhoneNumber::try_new("   ".to_owned()).unwrap_err();
    }

    #[test]
    fn length_limits() {
        SubmitterName::try_new("a".repeat(256)).unwrap();
        SubmitterName::try_new("a".repeat(257)).unwrap_err();
        SubmissionMessage::try_new("a".repeat(4096)).unwrap();
        SubmissionMessage::try_new("a".repeat(4097)).unwrap_err();
        SubmitterPhoneNumber::try_new("5".repeat(65)).unwrap_err();
    }

    #[test]
    fn field_keys() {
        assert_eq!(SubmissionField::PhoneNumber.key(), "phoneNumber");
        assert!(SubmissionField::Email.is_required());
        assert!(!SubmissionField::PhoneNumber.is_required());
        assert_eq!(SubmissionField::PhoneNumber.to_string(), "Phone number");
    }
}
