//! The content document served to the frontend.
//!
//! Field names follow the JSON the frontend consumes, which is why some keys
//! are snake case (`image_url`, `data_viz`) and others camel case
//! (`contactForm`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioDocument {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub certifications: Vec<String>,
    pub education: Vec<Education>,
    #[serde(rename = "contactForm")]
    pub contact_form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub contact: ProfileContact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileContact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub databases: Vec<String>,
    pub data_viz: Vec<String>,
    pub tools: Vec<String>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub dates: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactForm {
    pub subtitle: String,
    pub form: Vec<FormField>,
}

/// Describes one input of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormField {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FormFieldKind,
    pub name: String,
    pub required: bool,
    pub placeholder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFieldKind {
    Text,
    Email,
    Tel,
    Textarea,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_omits_missing_optionals() {
        let education = Education {
            institution: "School".into(),
            degree: "Class X".into(),
            dates: "2020".into(),
            details: None,
            percentage: Some(80.4),
        };

        let json = serde_json::to_value(&education).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "institution": "School",
                "degree": "Class X",
                "dates": "2020",
                "percentage": 80.4,
            })
        );
    }

    #[test]
    fn form_field_kind_uses_html_input_types() {
        let field: FormField = serde_json::from_value(serde_json::json!({
            "label": "Phone Number",
            "type": "tel",
            "name": "phoneNumber",
            "required": false,
            "placeholder": "(+91) 987-654-3210",
        }))
        .unwrap();

        assert_eq!(field.kind, FormFieldKind::Tel);
        assert_eq!(serde_json::to_value(field).unwrap()["type"], "tel");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<ProfileContact>(serde_json::json!({
            "email": "a@b.c",
            "phone": "1",
            "linkedin": "l",
            "github": "g",
            "twitter": "t",
        }));

        assert!(result.is_err());
    }
}
