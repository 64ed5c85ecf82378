use std::{collections::HashSet, path::Path, sync::Arc};

use anyhow::{ensure, Context};
use portfolio_core_content_contracts::ContentFeatureService;
use portfolio_di::Build;
use portfolio_models::{
    contact::SubmissionField,
    content::{FormFieldKind, PortfolioDocument},
};
use tracing::info;

#[derive(Debug, Clone, Build)]
pub struct ContentFeatureServiceImpl {
    config: ContentFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContentFeatureConfig {
    pub document: Arc<PortfolioDocument>,
}

impl ContentFeatureConfig {
    /// Load the document bundled with the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::parse(portfolio_assets::PORTFOLIO_JSON).context("Invalid embedded content document")
    }

    /// Load the document from a JSON file, replacing the bundled one.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content document at {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid content document at {}", path.display()))?;
        info!(path = %path.display(), "loaded content document");
        Ok(config)
    }

    fn parse(json: &str) -> anyhow::Result<Self> {
        let document = serde_json::from_str::<PortfolioDocument>(json)?;
        check_consistency(&document)?;
        Ok(Self {
            document: document.into(),
        })
    }
}

impl ContentFeatureService for ContentFeatureServiceImpl {
    fn get_document(&self) -> Arc<PortfolioDocument> {
        Arc::clone(&self.config.document)
    }
}

fn check_consistency(document: &PortfolioDocument) -> anyhow::Result<()> {
    let mut ids = HashSet::new();
    for project in &document.projects {
        ensure!(ids.insert(project.id), "Duplicate project id {}", project.id);
    }

    let fields = [
        SubmissionField::Name,
        SubmissionField::Email,
        SubmissionField::PhoneNumber,
        SubmissionField::Message,
    ];
    ensure!(
        document.contact_form.form.len() == fields.len(),
        "Contact form must describe exactly the fields {:?}",
        fields.map(SubmissionField::key)
    );
    for field in fields {
        let descriptor = document
            .contact_form
            .form
            .iter()
            .find(|x| x.name == field.key())
            .with_context(|| format!("Contact form is missing the field {:?}", field.key()))?;
        ensure!(
            descriptor.required == field.is_required(),
            "Contact form field {:?} must have required = {}",
            field.key(),
            field.is_required()
        );
        if field == SubmissionField::Email {
            ensure!(
                descriptor.kind == FormFieldKind::Email,
                "Contact form field \"email\" must have type email"
            );
        }
    }

    Ok(())
}
