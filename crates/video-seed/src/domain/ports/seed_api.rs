//! Driven port for the seeded video service.
//!
//! The domain owns the request and response shapes so the seeding
//! orchestration stays independent of the HTTP transport.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{
    AttachedVideo, LoginCredentials, LoginSession, SessionToken, UserId, UserRecord, Video,
};

define_port_error! {
    /// Errors surfaced while calling the seeded service.
    pub enum SeedApiError {
        /// The service answered with a status other than the expected one.
        UnexpectedStatus {
            /// HTTP status code received.
            status: u16,
            /// Preview of the response body.
            message: String,
        } => "unexpected status {status}: {message}",
        /// The request exceeded the configured timeout.
        Timeout {
            /// Transport error description.
            message: String,
        } => "request timed out: {message}",
        /// Network transport failed before a response arrived.
        Transport {
            /// Transport error description.
            message: String,
        } => "transport failed: {message}",
        /// A success response could not be decoded.
        Decode {
            /// Decoder error description.
            message: String,
        } => "response decode failed: {message}",
        /// The request could not be built.
        InvalidRequest {
            /// Why the request was rejected.
            message: String,
        } => "request invalid: {message}",
    }
}

impl SeedApiError {
    /// HTTP status carried by the error, if the service responded at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for the three endpoints a seeding run calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedApi: Send + Sync {
    /// Create a user account, returning the service-assigned identifier.
    ///
    /// Only a `201 Created` response counts as success.
    async fn create_user(&self, user: &UserRecord) -> Result<UserId, SeedApiError>;

    /// Log a user in, returning the bearer token.
    ///
    /// Only a `200 OK` response counts as success.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, SeedApiError>;

    /// Attach one video to a user's account on behalf of that user.
    ///
    /// Only a `201 Created` response counts as success.
    async fn attach_video(
        &self,
        user_id: &UserId,
        token: &SessionToken,
        video: &Video,
    ) -> Result<AttachedVideo, SeedApiError>;
}
