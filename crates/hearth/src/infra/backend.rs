//! HTTP client for the hosted marketplace backend.
//!
//! The backend exposes a PostgREST-style REST surface over the relational
//! store plus a token-based auth endpoint. All relational integrity and
//! authorization live server-side; this client only shapes requests and
//! decodes rows.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::model::{
    ApplicationStatus, AuthSession, NewApplication, NewProperty, Property, PropertyApplication,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Blocking client for the hosted data backend. Cheap to clone; clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct Backend {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl Backend {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            agent,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// All listings, newest first.
    pub fn list_properties(&self) -> Result<Vec<Property>> {
        self.fetch_rows(&self.rest_url("properties?select=*&order=created_at.desc"), None)
    }

    /// A single listing by id.
    pub fn fetch_property(&self, id: &str) -> Result<Property> {
        let url = self.rest_url(&format!("properties?select=*&id=eq.{id}"));
        let mut rows: Vec<Property> = self.fetch_rows(&url, None)?;
        if rows.is_empty() {
            bail!("listing {id} not found");
        }
        Ok(rows.swap_remove(0))
    }

    /// Insert a new listing on behalf of the signed-in user.
    pub fn create_property(&self, listing: &NewProperty, session: &AuthSession) -> Result<()> {
        let url = self.rest_url("properties");
        self.request("POST", &url, Some(session))
            .send_json([listing])
            .context("failed to create listing")?;
        Ok(())
    }

    /// Applications the user has submitted, newest first.
    pub fn sent_applications(&self, session: &AuthSession) -> Result<Vec<PropertyApplication>> {
        self.fetch_rows(&self.sent_applications_url(&session.user_id), Some(session))
    }

    /// Applications received against the user's listings, newest first.
    pub fn received_applications(&self, session: &AuthSession) -> Result<Vec<PropertyApplication>> {
        self.fetch_rows(&self.received_applications_url(&session.user_id), Some(session))
    }

    /// Submit an application for a listing.
    pub fn submit_application(
        &self,
        application: &NewApplication,
        session: &AuthSession,
    ) -> Result<()> {
        let url = self.rest_url("property_applications");
        self.request("POST", &url, Some(session))
            .send_json([application])
            .context("failed to submit application")?;
        Ok(())
    }

    /// Move an application to a new status (owner decision).
    pub fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
        session: &AuthSession,
    ) -> Result<()> {
        let url = self.rest_url(&format!("property_applications?id=eq.{application_id}"));
        self.request("PATCH", &url, Some(session))
            .send_json(serde_json::json!({ "status": status }))
            .with_context(|| format!("failed to update application {application_id}"))?;
        Ok(())
    }

    /// Exchange credentials for a session token.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let response = match self
            .request("POST", &url, None)
            .send_json(serde_json::json!({ "email": email, "password": password }))
        {
            Ok(response) => response,
            Err(ureq::Error::Status(400 | 401, _)) => bail!("email or password incorrect"),
            Err(err) => return Err(err).context("sign-in request failed"),
        };
        let token: TokenResponse = response
            .into_json()
            .context("sign-in response was not valid JSON")?;
        token.into_session(email)
    }

    /// Register a new account. Depending on backend policy this may return a
    /// usable session immediately or require email confirmation first.
    pub fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let token: TokenResponse = self
            .request("POST", &url, None)
            .send_json(serde_json::json!({ "email": email, "password": password }))
            .context("sign-up request failed")?
            .into_json()
            .context("sign-up response was not valid JSON")?;
        token.into_session(email)
    }

    /// Invalidate the session server-side. A rejection here is not an error
    /// worth surfacing: the local session is discarded either way.
    pub fn sign_out(&self, session: &AuthSession) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        match self.request("POST", &url, Some(session)).call() {
            Ok(_) | Err(ureq::Error::Status(..)) => Ok(()),
            Err(err) => Err(err).context("sign-out request failed"),
        }
    }

    fn rest_url(&self, path_and_query: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path_and_query)
    }

    fn sent_applications_url(&self, user_id: &str) -> String {
        self.rest_url(&format!(
            "property_applications?select=*,property:properties(title,address)\
             &applicant_id=eq.{user_id}&order=created_at.desc"
        ))
    }

    fn received_applications_url(&self, user_id: &str) -> String {
        self.rest_url(&format!(
            "property_applications?select=*,property:properties!inner(title,address)\
             &property.owner_id=eq.{user_id}&order=created_at.desc"
        ))
    }

    fn request(&self, method: &str, url: &str, session: Option<&AuthSession>) -> ureq::Request {
        let mut request = self
            .agent
            .request(method, url)
            .set("apikey", &self.api_key);
        if let Some(session) = session {
            request = request.set("Authorization", &format!("Bearer {}", session.access_token));
        }
        request
    }

    fn fetch_rows<T: DeserializeOwned>(
        &self,
        url: &str,
        session: Option<&AuthSession>,
    ) -> Result<Vec<T>> {
        self.request("GET", url, session)
            .call()
            .with_context(|| format!("GET {url} failed"))?
            .into_json()
            .context("backend response was not valid JSON")
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    email: Option<String>,
}

impl TokenResponse {
    fn into_session(self, fallback_email: &str) -> Result<AuthSession> {
        let (Some(access_token), Some(user)) = (self.access_token, self.user) else {
            bail!("account created; confirm your email address before signing in");
        };
        Ok(AuthSession {
            access_token,
            user_id: user.id,
            email: user.email.unwrap_or_else(|| fallback_email.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> Backend {
        Backend::new("https://demo.example.org/", "anon-key")
    }

    #[test]
    fn rest_urls_are_rooted_under_rest_v1() {
        assert_eq!(
            backend().rest_url("properties?select=*&order=created_at.desc"),
            "https://demo.example.org/rest/v1/properties?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn application_urls_filter_by_user() {
        let sent = backend().sent_applications_url("u-42");
        assert!(sent.contains("applicant_id=eq.u-42"));
        assert!(sent.contains("property:properties(title,address)"));

        let received = backend().received_applications_url("u-42");
        assert!(received.contains("property.owner_id=eq.u-42"));
        assert!(received.contains("properties!inner"));
    }

    #[test]
    fn token_response_becomes_a_session() {
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "jwt",
            "user": {"id": "u-1", "email": "me@example.org"}
        }))
        .unwrap();
        let session = token.into_session("fallback@example.org").unwrap();
        assert_eq!(session.user_id, "u-1");
        assert_eq!(session.email, "me@example.org");
    }

    #[test]
    fn confirmation_pending_signup_is_rejected() {
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "user": {"id": "u-1", "email": "me@example.org"}
        }))
        .unwrap();
        assert!(token.into_session("me@example.org").is_err());
    }

    #[test]
    fn property_rows_decode() {
        let rows: Vec<Property> = serde_json::from_value(serde_json::json!([{
            "id": "p-1",
            "title": "Sunny loft",
            "description": "Top floor",
            "price": 289000.0,
            "address": "12 Hill Rd",
            "bedrooms": 2,
            "bathrooms": 1,
            "square_feet": 980.0,
            "images": ["https://img.example.org/a.jpg"],
            "owner_id": "u-1",
            "created_at": "2026-05-01T10:00:00Z"
        }]))
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Sunny loft");
        assert_eq!(rows[0].cover_image(), Some("https://img.example.org/a.jpg"));
    }

    #[test]
    fn application_rows_decode_with_embedded_property() {
        let rows: Vec<PropertyApplication> = serde_json::from_value(serde_json::json!([{
            "id": "a-1",
            "property_id": "p-1",
            "applicant_id": "u-2",
            "email": "tenant@example.org",
            "phone": "555-0100",
            "message": "Very interested",
            "status": "pending",
            "created_at": "2026-05-02T09:30:00Z",
            "property": {"title": "Sunny loft", "address": "12 Hill Rd"}
        }]))
        .unwrap();
        assert_eq!(rows[0].status, ApplicationStatus::Pending);
        assert_eq!(rows[0].property.as_ref().unwrap().title, "Sunny loft");
        assert!(rows[0].created_date().is_some());
    }
}
