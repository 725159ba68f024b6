//! Session gate in front of the dashboard.
//!
//! [`SessionContext`] is passed to the views explicitly. It starts
//! unauthenticated; logging out clears the identity and drops the active
//! review together with its corrections.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::events::DocumentViewer;
use crate::{Dashboard, DocumentSource, ReviewError, ReviewSession};

pub const ADMIN_EMAIL: &str = "admin@contract.ai";
const ADMIN_PASSWORD: &str = "password123";
const ADMIN_NAME: &str = "Admin User";

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

/// Credential check behind [`SessionContext::login`].
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Option<Identity>;
}

/// Accepts exactly one built-in credential pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAuthenticator;

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        (email == ADMIN_EMAIL && password == ADMIN_PASSWORD).then(|| Identity {
            email: email.to_string(),
            name: ADMIN_NAME.to_string(),
        })
    }
}

/// Where the caller should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Login,
}

pub struct SessionContext<A = StaticAuthenticator> {
    authenticator: A,
    identity: Option<Identity>,
    review: Option<ReviewSession>,
}

impl Default for SessionContext<StaticAuthenticator> {
    fn default() -> Self {
        Self::new(StaticAuthenticator)
    }
}

impl<A: Authenticator> SessionContext<A> {
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            identity: None,
            review: None,
        }
    }

    /// Returns whether the credentials were accepted. A rejected attempt
    /// leaves the session as it was.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        match self.authenticator.authenticate(email, password) {
            Some(identity) => {
                info!(email = %identity.email, "login succeeded");
                self.identity = Some(identity);
                true
            }
            None => {
                warn!(email, "login rejected");
                false
            }
        }
    }

    pub fn logout(&mut self) -> Navigation {
        if let Some(identity) = self.identity.take() {
            info!(email = %identity.email, "logged out");
        }
        self.review = None;
        Navigation::Login
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Document list over `source`, for a signed-in reviewer only.
    pub fn dashboard<'a>(
        &self,
        source: &'a dyn DocumentSource,
    ) -> Result<Dashboard<'a>, ReviewError> {
        if !self.is_authenticated() {
            return Err(ReviewError::Unauthenticated);
        }
        Ok(Dashboard::new(source.documents()))
    }

    /// Open the review screen for `document_id`, replacing any open review.
    pub fn open_review(
        &mut self,
        source: &dyn DocumentSource,
        document_id: &str,
        viewer: &mut dyn DocumentViewer,
    ) -> Result<&mut ReviewSession, ReviewError> {
        if !self.is_authenticated() {
            return Err(ReviewError::Unauthenticated);
        }
        let document = source
            .document(document_id)
            .ok_or_else(|| ReviewError::DocumentNotFound(document_id.to_string()))?
            .clone();
        let attributes = source.attributes(document_id).to_vec();
        Ok(self
            .review
            .insert(ReviewSession::open(document, attributes, viewer)))
    }

    pub fn review(&self) -> Option<&ReviewSession> {
        self.review.as_ref()
    }

    pub fn review_mut(&mut self) -> Option<&mut ReviewSession> {
        self.review.as_mut()
    }

    /// Leave the review screen. Corrections are discarded.
    pub fn close_review(&mut self) -> Option<ReviewSession> {
        self.review.take()
    }
}
