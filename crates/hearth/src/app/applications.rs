//! Application submission and review workflows.

use anyhow::Result;

use crate::domain::errors::DomainError;
use crate::domain::model::{
    ApplicationStatus, AuthSession, NewApplication, Property, PropertyApplication,
};
use crate::infra::backend::Backend;

/// Contact form input for applying to a listing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ApplicationDraft {
    /// Start a draft with the signed-in user's email prefilled.
    pub fn for_session(session: &AuthSession) -> Self {
        Self {
            email: session.email.clone(),
            ..Self::default()
        }
    }

    /// Validate and convert into a submission payload. Owners cannot apply
    /// to their own listing.
    pub fn build(
        &self,
        property: &Property,
        session: &AuthSession,
    ) -> Result<NewApplication, DomainError> {
        if session.user_id == property.owner_id {
            return Err(DomainError::OwnListing);
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::invalid("email", "must be a valid address"));
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(DomainError::invalid("phone", "is required"));
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(DomainError::invalid("message", "is required"));
        }

        Ok(NewApplication {
            property_id: property.id.clone(),
            applicant_id: session.user_id.clone(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Applications for the signed-in user: received against their listings and
/// sent by them, both newest first.
#[derive(Debug, Default, Clone)]
pub struct ApplicationsBoard {
    pub received: Vec<PropertyApplication>,
    pub sent: Vec<PropertyApplication>,
}

impl ApplicationsBoard {
    pub fn load(backend: &Backend, session: &AuthSession) -> Result<Self> {
        Ok(Self {
            received: backend.received_applications(session)?,
            sent: backend.sent_applications(session)?,
        })
    }

    /// Owner decision on a received application: persist it, then mirror the
    /// new status locally so the page reflects it without a refetch.
    pub fn decide(
        &mut self,
        backend: &Backend,
        session: &AuthSession,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<()> {
        backend.update_application_status(application_id, status, session)?;
        self.apply_decision(application_id, status);
        Ok(())
    }

    fn apply_decision(&mut self, application_id: &str, status: ApplicationStatus) {
        if let Some(application) = self
            .received
            .iter_mut()
            .find(|application| application.id == application_id)
        {
            application.status = status;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.received.is_empty() && self.sent.is_empty()
    }
}
